//! Execution context for CLI commands.

use std::{path::PathBuf, sync::Arc};

use crate::{
    config::Config,
    error::Result,
    i18n::{FixedPreference, LocaleResolver, SystemEnvironment, UnresolvedPlaceholder},
    output::Output,
};

/// Command-line values that override the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Saved locale preference.
    pub locale: Option<String>,
    /// Default (fallback) locale.
    pub default_locale: Option<String>,
    /// Bundle directory.
    pub source_dir: Option<PathBuf>,
    /// Bundle base URL.
    pub source_url: Option<String>,
    /// Placeholder policy name.
    pub placeholders: Option<String>,
}

/// Context for CLI command execution.
///
/// Contains everything needed to execute CLI commands:
/// - Configuration with command-line overrides applied
/// - Output writer
pub struct Context {
    /// Effective configuration.
    pub config: Config,

    /// Output configuration.
    pub output: Output,
}

impl Context {
    /// Create a new context from CLI options.
    pub fn new(overrides: Overrides, output_format: &str, color: &str, quiet: bool) -> Result<Self> {
        let mut config = Config::load()?;
        apply_overrides(&mut config, overrides)?;

        let output = Output::from_cli(output_format, color, quiet)?;

        Ok(Self { config, output })
    }

    /// Build a resolver from the effective configuration. Nothing is loaded yet.
    pub fn resolver(&self) -> Result<LocaleResolver> {
        let source = self.config.source.build()?;
        let table = self.config.locale_table()?;

        Ok(LocaleResolver::builder()
            .source(source)
            .preferences(Arc::new(FixedPreference::from_option(self.config.locale.clone())))
            .environment(Arc::new(SystemEnvironment::new(self.config.default_locale.clone())))
            .table(table)
            .policy(self.config.unresolved_placeholder)
            .build())
    }
}

fn apply_overrides(config: &mut Config, overrides: Overrides) -> Result<()> {
    if let Some(locale) = overrides.locale {
        config.locale = Some(locale);
    }

    if let Some(default_locale) = overrides.default_locale {
        config.default_locale = default_locale;
    }

    if let Some(dir) = overrides.source_dir {
        config.source.dir = Some(dir);
        config.source.url = None;
    } else if let Some(url) = overrides.source_url {
        config.source.url = Some(url);
        config.source.dir = None;
    }

    if let Some(policy) = overrides.placeholders {
        config.unresolved_placeholder = UnresolvedPlaceholder::parse(&policy)?;
    }

    Ok(())
}
