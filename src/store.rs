//! File-backed preference store using a `key = value` settings file.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::PortError;
use crate::ports::PreferenceStore;

/// Key the locale preference is stored under unless configured otherwise.
pub const DEFAULT_PREFERENCE_KEY: &str = "lang";

/// What: Preference store persisting one key in a settings file.
///
/// Details:
/// - Other lines, including comments, are preserved on save
/// - Keys compare case-insensitively with `.`, `-` and spaces treated as `_`
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    key: String,
}

impl FilePreferenceStore {
    /// What: Store reading and writing `key` in the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, key: &str) -> Self {
        Self {
            path: path.into(),
            key: normalize_key(key),
        }
    }

    /// What: Store at `$XDG_CONFIG_HOME/{app}/settings.conf` (or `$HOME/.config/...`).
    ///
    /// Output:
    /// - `None` when neither `XDG_CONFIG_HOME` nor `HOME` is set
    #[must_use]
    pub fn in_config_dir(app: &str, key: &str) -> Option<Self> {
        settings_path(app).map(|path| Self::new(path, key))
    }

    /// Path of the backing settings file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<Option<String>, PortError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(content.lines().find_map(|line| {
            parse_line(line)
                .filter(|(key, _)| *key == self.key)
                .map(|(_, value)| value.to_string())
                .filter(|value| !value.is_empty())
        }))
    }

    fn save(&self, value: &str) -> Result<(), PortError> {
        // One `key = value` line; a control character would split or corrupt it
        if value.chars().any(char::is_control) {
            return Err(PortError::InvalidValue(value.to_string()));
        }
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let existing = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let mut replaced = false;
        let mut lines: Vec<String> = existing
            .lines()
            .map(|line| match parse_line(line) {
                Some((key, _)) if key == self.key => {
                    replaced = true;
                    format!("{} = {value}", self.key)
                }
                _ => line.to_string(),
            })
            .collect();
        if !replaced {
            lines.push(format!("{} = {value}", self.key));
        }

        let mut new_content = lines.join("\n");
        new_content.push('\n');
        fs::write(&self.path, new_content)?;
        tracing::debug!(path = %self.path.display(), key = %self.key, value, "saved preference");
        Ok(())
    }
}

/// Lowercase a key and fold `.`, `-` and spaces to `_`.
fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// What: Split a settings line into normalized key and trimmed value.
///
/// Output:
/// - `None` for blank lines, comments (`#`, `//`) and lines without `=`
fn parse_line(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (key, value) = trimmed.split_once('=')?;
    Some((normalize_key(key), value.trim()))
}

/// Resolve `{config}/{app}/settings.conf` from `XDG_CONFIG_HOME` or `HOME`.
fn settings_path(app: &str) -> Option<PathBuf> {
    env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            env::var("HOME")
                .ok()
                .map(|h| Path::new(&h).join(".config"))
        })
        .map(|base| base.join(app).join("settings.conf"))
}
