//! System locale detection utilities.

use std::env;

use crate::error::PortError;
use crate::ports::PlatformLocale;

/// Environment variables consulted by default, highest priority first.
pub const DEFAULT_LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// What: Platform locale provider backed by environment variables.
///
/// Details:
/// - Checks variables in order and reports the first one that parses
/// - Unset, empty, `C` and `POSIX` values are skipped
#[derive(Debug, Clone)]
pub struct EnvLocale {
    vars: Vec<String>,
}

impl Default for EnvLocale {
    fn default() -> Self {
        Self::with_vars(DEFAULT_LOCALE_VARS)
    }
}

impl EnvLocale {
    /// What: Provider consulting `vars` in order instead of the defaults.
    #[must_use]
    pub fn with_vars<I, S>(vars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vars: vars.into_iter().map(Into::into).collect(),
        }
    }

    /// What: Detect the locale from the configured environment variables.
    ///
    /// Output:
    /// - `Some("de-DE")`-style tag, or `None` when nothing usable is set
    #[must_use]
    pub fn detect(&self) -> Option<String> {
        self.vars.iter().find_map(|name| {
            env::var(name)
                .ok()
                .and_then(|value| parse_locale_string(&value))
        })
    }
}

impl PlatformLocale for EnvLocale {
    fn default_locale(&self) -> Result<Option<String>, PortError> {
        Ok(self.detect())
    }
}

/// What: Parse a locale string from environment variables into a standardized format.
///
/// Inputs:
/// - `locale_str`: Locale string like "de_DE.UTF-8", "de-DE", "en_US.utf8"
///
/// Output:
/// - `Option<String>` with standardized format (e.g., "de-DE") or None if unusable
///
/// Details:
/// - Removes encoding suffix and `@modifier`
/// - Converts underscores to hyphens; language lowercase, region uppercase
/// - `C` and `POSIX` carry no language and yield None
fn parse_locale_string(locale_str: &str) -> Option<String> {
    let locale_part = locale_str.trim().split(['.', '@']).next()?;
    if locale_part.is_empty()
        || locale_part.eq_ignore_ascii_case("C")
        || locale_part.eq_ignore_ascii_case("POSIX")
    {
        return None;
    }

    let mut parts = locale_part.split(['_', '-']);
    let language = parts.next()?.to_lowercase();
    if language.is_empty() {
        return None;
    }
    match parts.next() {
        Some(region) if !region.is_empty() => {
            Some(format!("{language}-{}", region.to_uppercase()))
        }
        _ => Some(language),
    }
}
