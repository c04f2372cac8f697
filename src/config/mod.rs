//! Configuration system for wallet-locale.
//!
//! The configuration follows XDG Base Directory Specification and supports:
//! - User config: `~/.config/wallet-locale/config.yaml`
//! - Project config: `.wallet-locale.yaml` in current directory
//! - Environment variables: `WALLET_LOCALE*`
//! - Command-line flags (highest precedence)

mod source;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
pub use source::SourceConfig;

use crate::{
    error::{Error, Result},
    i18n::{DEFAULT_LOCALE, LocaleTable, UnresolvedPlaceholder},
};

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = ".wallet-locale.yaml";

/// Effective configuration after all layers are applied.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Config {
    /// Saved locale preference; overrides the host UI locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Default locale, served as the fallback bundle.
    pub default_locale: String,

    /// Bundle source.
    pub source: SourceConfig,

    /// What to emit for placeholders without an argument.
    pub unresolved_placeholder: UnresolvedPlaceholder,

    /// JSON file replacing the built-in formatting table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatting_table: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        ConfigFile::default().into_config()
    }
}

/// One configuration layer as written in a YAML file.
///
/// Every field is optional; an unset field leaves lower layers untouched.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ConfigFile {
    /// Saved locale preference.
    pub locale: Option<String>,

    /// Default locale.
    pub default_locale: Option<String>,

    /// Bundle source.
    #[serde(default)]
    pub source: SourceConfig,

    /// Placeholder policy.
    pub unresolved_placeholder: Option<UnresolvedPlaceholder>,

    /// Formatting table path.
    pub formatting_table: Option<PathBuf>,
}

impl ConfigFile {
    /// Read a layer from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            Error::config(format!("Failed to parse config file {}: {}", path.display(), e))
        })
    }

    /// Overlay `other` on top of this layer (other takes precedence).
    pub fn merge(&mut self, other: Self) {
        if other.locale.is_some() {
            self.locale = other.locale;
        }

        if other.default_locale.is_some() {
            self.default_locale = other.default_locale;
        }

        self.source.merge(other.source);

        if other.unresolved_placeholder.is_some() {
            self.unresolved_placeholder = other.unresolved_placeholder;
        }

        if other.formatting_table.is_some() {
            self.formatting_table = other.formatting_table;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        let env = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        self.merge(Self {
            locale: env("WALLET_LOCALE"),
            default_locale: env("WALLET_LOCALE_DEFAULT"),
            source: SourceConfig {
                dir: env("WALLET_LOCALE_SOURCE_DIR").map(PathBuf::from),
                url: env("WALLET_LOCALE_SOURCE_URL"),
                timeout_secs: None,
            },
            ..Self::default()
        });
    }

    /// Fill unset fields with defaults.
    pub fn into_config(self) -> Config {
        Config {
            locale: self.locale,
            default_locale: self.default_locale.unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            source: self.source,
            unresolved_placeholder: self.unresolved_placeholder.unwrap_or_default(),
            formatting_table: self.formatting_table,
        }
    }
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// Resolution order (highest to lowest):
    /// 1. CLI flags (handled separately)
    /// 2. Environment variables
    /// 3. Project config (`.wallet-locale.yaml`)
    /// 4. User config (`~/.config/wallet-locale/config.yaml`)
    /// 5. Defaults
    pub fn load() -> Result<Self> {
        let mut layers = ConfigFile::default();

        // Load user config first (lowest precedence)
        if let Some(path) = Self::user_config_path()
            && path.exists()
        {
            layers.merge(ConfigFile::load(&path)?);
        }

        // Load project config (higher precedence)
        let project_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if project_path.exists() {
            layers.merge(ConfigFile::load(&project_path)?);
        }

        layers.apply_env_overrides();

        Ok(layers.into_config())
    }

    /// Load configuration from a single YAML file, defaults for the rest.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        ConfigFile::load(path).map(ConfigFile::into_config)
    }

    /// Build the formatting table: the configured file, else the built-in one.
    pub fn locale_table(&self) -> Result<LocaleTable> {
        match &self.formatting_table {
            Some(path) => LocaleTable::load_from_file(path),
            None => Ok(LocaleTable::builtin()),
        }
    }

    /// Get the path to the user config file.
    ///
    /// Follows XDG Base Directory Specification:
    /// - Uses `XDG_CONFIG_HOME/wallet-locale/config.yaml` if set
    /// - Falls back to `~/.config/wallet-locale/config.yaml`
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.yaml"))
    }

    /// Get the path to the user config directory.
    ///
    /// Cross-platform behavior:
    /// - If `XDG_CONFIG_HOME` is set, uses `$XDG_CONFIG_HOME/wallet-locale`
    /// - Linux/macOS: Falls back to `~/.config/wallet-locale` (XDG default)
    /// - Windows: Falls back to `%APPDATA%\wallet-locale`
    #[must_use]
    pub fn config_dir() -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
            && !xdg_config.is_empty()
        {
            return Some(PathBuf::from(xdg_config).join("wallet-locale"));
        }

        #[cfg(windows)]
        {
            dirs::config_dir().map(|p| p.join("wallet-locale"))
        }

        #[cfg(not(windows))]
        {
            dirs::home_dir().map(|p| p.join(".config").join("wallet-locale"))
        }
    }
}
