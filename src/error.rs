//! Error types for catalog configuration and collaborator access.

use std::fmt;
use std::path::PathBuf;

/// What: Fatal configuration error raised while building a `LocaleCatalog`.
///
/// Inputs: Generated by `LocaleCatalog::new` and the loader routines.
///
/// Output: Implements `Display`/`Error` for propagation to the host at startup.
///
/// Details:
/// - Never produced at request time; resolution itself is total.
/// - A catalog that fails validation must not be used.
#[derive(Debug)]
pub enum CatalogError {
    /// The catalog declares no locales at all.
    Empty,
    /// A declared tag is not of the form `language[-region]`.
    InvalidTag(String),
    /// Two declared tags are equal ignoring case and separator.
    DuplicateTag(String),
    /// No entry has the `en` language subtag.
    MissingEnglish,
    /// More than one entry has the `en` language subtag.
    MultipleEnglish(Vec<String>),
    /// A locale or config file could not be read.
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// A locale file did not contain a usable dictionary.
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
    /// The i18n config file is structurally wrong.
    Config(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "locale catalog is empty"),
            Self::InvalidTag(tag) => write!(
                f,
                "invalid locale tag '{tag}'. Expected format: language[-region] (e.g., 'en-US', 'zh-CN')"
            ),
            Self::DuplicateTag(tag) => write!(f, "locale tag '{tag}' is declared more than once"),
            Self::MissingEnglish => write!(
                f,
                "locale catalog has no English (en*) entry to use as fallback"
            ),
            Self::MultipleEnglish(tags) => write!(
                f,
                "locale catalog has more than one English entry: {}",
                tags.join(", ")
            ),
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Parse { path, message } => {
                write!(f, "failed to parse {}: {message}", path.display())
            }
            Self::Config(message) => write!(f, "invalid i18n config: {message}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// What: Failure reported by a collaborator (query reader, preference store, platform provider).
///
/// Inputs: Returned by `ports` trait implementations.
///
/// Output: Implements `Display`/`Error`; the sync controller logs it and moves on.
#[derive(Debug)]
pub enum PortError {
    /// I/O error while reading or writing backing storage.
    Io(std::io::Error),
    /// The collaborator is not usable in the current runtime.
    Unavailable(String),
    /// A value was refused because it is not a plain single-line string.
    InvalidValue(String),
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Unavailable(what) => write!(f, "{what} is unavailable"),
            Self::InvalidValue(value) => write!(f, "refusing to store value {value:?}"),
        }
    }
}

impl std::error::Error for PortError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Unavailable(_) | Self::InvalidValue(_) => None,
        }
    }
}

impl From<std::io::Error> for PortError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
