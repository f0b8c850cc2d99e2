//! Collaborator interfaces consumed by the sync controller.
//!
//! Each read returns `Ok(None)` when the collaborator simply has no value and
//! `Err` when it failed; the controller treats both as "try the next source".

use std::cell::RefCell;

use crate::error::PortError;

/// Reads an explicit override from the host's query parameters.
pub trait QuerySource {
    /// What: Value of the query parameter `name`, if present.
    ///
    /// # Errors
    /// - Implementation-specific; the controller treats any error as absent
    fn param(&self, name: &str) -> Result<Option<String>, PortError>;
}

/// Persists the user's last effective locale tag under a single key.
pub trait PreferenceStore {
    /// What: Previously persisted locale tag, if any.
    ///
    /// # Errors
    /// - Implementation-specific; the controller treats any error as absent
    fn load(&self) -> Result<Option<String>, PortError>;

    /// What: Overwrite the persisted locale tag.
    ///
    /// # Errors
    /// - Implementation-specific; the controller logs the error and continues
    fn save(&self, value: &str) -> Result<(), PortError>;
}

/// Reports the platform's default language.
pub trait PlatformLocale {
    /// What: Platform default locale tag, if one can be detected.
    ///
    /// # Errors
    /// - Implementation-specific; the controller treats any error as absent
    fn default_locale(&self) -> Result<Option<String>, PortError>;
}

/// Query source for hosts without query parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoQuery;

impl QuerySource for NoQuery {
    fn param(&self, _name: &str) -> Result<Option<String>, PortError> {
        Ok(None)
    }
}

/// In-memory preference store, for tests and hosts that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: RefCell<Option<String>>,
}

impl MemoryPreferenceStore {
    /// What: Create a store pre-populated with `value`.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(Some(value.into())),
        }
    }

    /// Current stored value.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Option<String>, PortError> {
        Ok(self.get())
    }

    fn save(&self, value: &str) -> Result<(), PortError> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

/// Platform provider that always reports the same locale.
#[derive(Debug, Clone, Default)]
pub struct FixedLocale(pub Option<String>);

impl FixedLocale {
    /// What: Provider reporting `tag`.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Some(tag.into()))
    }
}

impl PlatformLocale for FixedLocale {
    fn default_locale(&self) -> Result<Option<String>, PortError> {
        Ok(self.0.clone())
    }
}
