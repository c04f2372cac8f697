//! wallet-locale
//!
//! Localization layer of the wallet extension: loads `_locales` message
//! bundles for a target and a fallback locale, resolves message keys with
//! positional placeholder substitution, and exposes per-locale date and
//! number formatting metadata.
//!
//! The [`i18n`] module is the library core. The remaining modules make up the
//! `wallet-locale` command-line tool built on it.
//!
//! ## Usage
//!
//! ```bash
//! wallet-locale --source-dir ./app resolve appName
//! wallet-locale --source-dir ./app --locale de resolve greet Ann
//! wallet-locale --source-dir ./app --locale ja verify --strict
//! wallet-locale --locale de symbols -o json
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod i18n;
pub mod output;

pub use cli::Cli;
pub use error::{Error, Result};
pub use i18n::LocaleResolver;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the CLI with the given arguments.
///
/// This is the main entry point for the CLI, parsing arguments and
/// dispatching to the appropriate command handler.
pub async fn run(args: Vec<String>) -> Result<()> {
    use clap::Parser;

    let cli_args = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            // Print clap error (includes help/version)
            e.print().ok();
            use clap::error::ErrorKind;
            match e.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => return Ok(()),
                _ => return Err(Error::invalid_arg("")),
            }
        },
    };

    if cli_args.debug {
        init_logging();
    }

    let overrides = context::Overrides {
        locale: cli_args.locale,
        default_locale: cli_args.default_locale,
        source_dir: cli_args.source_dir,
        source_url: cli_args.source_url,
        placeholders: cli_args.placeholders,
    };

    let ctx = context::Context::new(overrides, &cli_args.output, &cli_args.color, cli_args.quiet)?;

    commands::execute(&ctx, &cli_args.command).await
}

/// Initialize tracing/logging for debug mode.
fn init_logging() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wallet_locale=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
