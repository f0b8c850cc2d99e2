//! Synchronization of the host's active language with overrides, preferences and the platform.
//!
//! One `sync` call walks `Idle -> DetectingPreference -> Resolving -> {Unchanged, Updated}`
//! and keeps no state between calls beyond what the preference store persists.

use crate::catalog::LocaleCatalog;
use crate::config::{DEFAULT_QUERY_PARAM, I18nConfig};
use crate::dictionary::Dictionary;
use crate::error::PortError;
use crate::ports::{PlatformLocale, PreferenceStore, QuerySource};

/// What: Terminal state reached by one [`SyncController::sync`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The capability check failed; nothing was read, written or called.
    Skipped,
    /// `set_lang` fired but the resolved dictionary equalled the current one.
    Unchanged {
        /// Effective language passed to `set_lang`.
        lang: String,
    },
    /// Both `set_lang` and `set_locale_state` fired.
    Updated {
        /// Effective language passed to `set_lang`.
        lang: String,
    },
}

impl SyncOutcome {
    /// Effective language, unless the call was skipped.
    #[must_use]
    pub fn lang(&self) -> Option<&str> {
        match self {
            Self::Skipped => None,
            Self::Unchanged { lang } | Self::Updated { lang } => Some(lang),
        }
    }
}

/// What: Orchestrates locale detection, resolution, persistence and host notification.
///
/// Details:
/// - Collaborators are borrowed, so hosts keep ownership of their stores
/// - Designed for one invocation per lifecycle event; overlapping calls are last-write-wins
pub struct SyncController<'a> {
    catalog: &'a LocaleCatalog,
    query: &'a dyn QuerySource,
    store: &'a dyn PreferenceStore,
    platform: &'a dyn PlatformLocale,
    capability: Box<dyn Fn() -> bool + 'a>,
    query_param: String,
}

impl<'a> SyncController<'a> {
    /// What: Controller over `catalog` using the given collaborators.
    ///
    /// Details:
    /// - The capability check defaults to "always available"
    /// - The query parameter defaults to `lang`
    #[must_use]
    pub fn new(
        catalog: &'a LocaleCatalog,
        query: &'a dyn QuerySource,
        store: &'a dyn PreferenceStore,
        platform: &'a dyn PlatformLocale,
    ) -> Self {
        Self {
            catalog,
            query,
            store,
            platform,
            capability: Box::new(|| true),
            query_param: DEFAULT_QUERY_PARAM.to_string(),
        }
    }

    /// What: Gate every `sync` call on `check`; when it returns `false` the call is a no-op.
    #[must_use]
    pub fn with_capability(mut self, check: impl Fn() -> bool + 'a) -> Self {
        self.capability = Box::new(check);
        self
    }

    /// What: Read overrides from query parameter `name` instead of `lang`.
    #[must_use]
    pub fn with_query_param(mut self, name: impl Into<String>) -> Self {
        self.query_param = name.into();
        self
    }

    /// What: Apply settings from a loaded `I18nConfig`.
    #[must_use]
    pub fn with_config(self, config: &I18nConfig) -> Self {
        self.with_query_param(config.query_param.clone())
    }

    /// The catalog this controller resolves against.
    #[must_use]
    pub const fn catalog(&self) -> &'a LocaleCatalog {
        self.catalog
    }

    /// What: Determine the desired language from the collaborators.
    ///
    /// Output:
    /// - First non-blank value from query parameter, persisted preference, platform default
    ///
    /// Details:
    /// - A failing collaborator is logged and skipped, never propagated
    /// - Whitespace-only values count as absent, so `" "` falls through to the next source
    ///   where a plain truthiness check would have accepted it
    /// - Values containing control characters (e.g. an encoded newline in `?lang=`) count as absent
    #[must_use]
    pub fn detect_desired_lang(&self) -> Option<String> {
        read_source("query parameter", self.query.param(&self.query_param))
            .or_else(|| read_source("persisted preference", self.store.load()))
            .or_else(|| read_source("platform locale", self.platform.default_locale()))
    }

    /// What: Synchronize the host's language and dictionary.
    ///
    /// Inputs:
    /// - `current_lang`: Language the host currently has active
    /// - `current_state`: Dictionary the host currently has active
    /// - `set_lang`: Host callback; always invoked with the effective language
    /// - `set_locale_state`: Host callback; invoked only when the resolved dictionary differs
    ///
    /// Output:
    /// - Which terminal state was reached
    ///
    /// Details:
    /// - The effective language is always written back to the preference store
    /// - A failed write is logged and does not stop the callbacks
    pub fn sync<L, S>(
        &self,
        current_lang: &str,
        current_state: &Dictionary,
        mut set_lang: L,
        mut set_locale_state: S,
    ) -> SyncOutcome
    where
        L: FnMut(&str),
        S: FnMut(Dictionary),
    {
        if !(self.capability)() {
            tracing::debug!("Locale sync skipped: host capabilities unavailable");
            return SyncOutcome::Skipped;
        }

        let effective = match self.detect_desired_lang() {
            Some(desired) if desired != current_lang => {
                tracing::info!(from = current_lang, to = %desired, "switching locale");
                desired
            }
            _ => current_lang.to_string(),
        };

        if let Err(e) = self.store.save(&effective) {
            tracing::warn!(error = %e, lang = %effective, "failed to persist locale preference");
        }
        set_lang(&effective);

        let resolved = self.catalog.resolve_dictionary(&effective);
        if resolved == *current_state {
            tracing::debug!("Locale '{}' dictionary unchanged", effective);
            SyncOutcome::Unchanged { lang: effective }
        } else {
            set_locale_state(resolved);
            SyncOutcome::Updated { lang: effective }
        }
    }
}

/// What: Turn one collaborator read into a usable value.
///
/// Details:
/// - Blank values count as absent
/// - Values with control characters are logged and count as absent
/// - Errors are logged and count as absent
fn read_source(label: &str, read: Result<Option<String>, PortError>) -> Option<String> {
    match read {
        Ok(Some(value)) if value.trim().chars().any(char::is_control) => {
            tracing::warn!(value = ?value, "ignoring {label} with control characters");
            None
        }
        Ok(Some(value)) if !value.trim().is_empty() => {
            tracing::debug!("Desired locale '{}' from {}", value.trim(), label);
            Some(value.trim().to_string())
        }
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read {label}; trying next source");
            None
        }
    }
}
