//! Locale preference and host environment collaborators.
//!
//! The resolver only reads from these; persisting a preference is the
//! store owner's job.

use super::locales::{self, DEFAULT_LOCALE};

/// Read access to the user's explicit locale choice.
pub trait PreferenceStore: Send + Sync {
    /// The saved locale, if the user picked one.
    fn saved_locale(&self) -> Option<String>;
}

/// The host's locale settings.
pub trait HostEnvironment: Send + Sync {
    /// Native UI locale of the host.
    fn ui_locale(&self) -> String;

    /// Configured default locale, used for the fallback bundle.
    fn default_locale(&self) -> String;
}

/// A preference fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct FixedPreference(Option<String>);

impl FixedPreference {
    /// A saved preference for `locale`.
    pub fn new(locale: impl Into<String>) -> Self {
        Self(Some(locale.into()))
    }

    /// No saved preference.
    pub fn none() -> Self {
        Self(None)
    }

    /// Build from an optional value; blank strings count as unset.
    pub fn from_option(locale: Option<String>) -> Self {
        Self(locale.filter(|l| !l.trim().is_empty()))
    }
}

impl PreferenceStore for FixedPreference {
    fn saved_locale(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Host environment read from the process environment.
///
/// The UI locale is detected from `WALLET_LOCALE_UI`, `LC_ALL` and `LANG`;
/// the default locale comes from configuration.
#[derive(Debug, Clone)]
pub struct SystemEnvironment {
    default_locale: String,
}

impl SystemEnvironment {
    /// Create with the configured default locale.
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self { default_locale: default_locale.into() }
    }
}

impl Default for SystemEnvironment {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl HostEnvironment for SystemEnvironment {
    fn ui_locale(&self) -> String {
        locales::detect_locale().unwrap_or_else(|| self.default_locale.clone())
    }

    fn default_locale(&self) -> String {
        self.default_locale.clone()
    }
}

/// Host environment with fixed values.
#[derive(Debug, Clone)]
pub struct StaticEnvironment {
    ui_locale: String,
    default_locale: String,
}

impl StaticEnvironment {
    /// Create with explicit UI and default locales.
    pub fn new(ui_locale: impl Into<String>, default_locale: impl Into<String>) -> Self {
        Self { ui_locale: ui_locale.into(), default_locale: default_locale.into() }
    }
}

impl HostEnvironment for StaticEnvironment {
    fn ui_locale(&self) -> String {
        self.ui_locale.clone()
    }

    fn default_locale(&self) -> String {
        self.default_locale.clone()
    }
}
