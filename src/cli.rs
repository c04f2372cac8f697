//! Command-line argument parsing and command definitions.
//!
//! Uses clap with derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// wallet-locale - resolve and verify wallet extension message bundles
#[derive(Parser, Debug)]
#[command(name = "wallet-locale")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Saved locale preference (overrides the host UI locale)
    #[arg(long, global = true, env = "WALLET_LOCALE")]
    pub locale: Option<String>,

    /// Default locale used for the fallback bundle
    #[arg(long, global = true, env = "WALLET_LOCALE_DEFAULT")]
    pub default_locale: Option<String>,

    /// Extension root directory containing `_locales`
    #[arg(long, global = true, conflicts_with = "source_url")]
    pub source_dir: Option<PathBuf>,

    /// Base URL serving `_locales/<locale>/messages.json`
    #[arg(long, global = true)]
    pub source_url: Option<String>,

    /// Placeholder policy for missing arguments
    #[arg(long, global = true, value_parser = ["keep", "empty"])]
    pub placeholders: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "table", value_parser = ["table", "json", "yaml", "jsonl"])]
    pub output: String,

    /// Color output mode
    #[arg(long, global = true, default_value = "auto", value_parser = ["auto", "always", "never"])]
    pub color: String,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a message key
    Resolve {
        /// Message key
        key: String,

        /// Positional substitution arguments
        args: Vec<String>,
    },

    /// Show formatting metadata for the active locale
    Symbols,

    /// Compare the target bundle against the fallback bundle
    Verify {
        /// Exit with an error when messages are missing
        #[arg(long)]
        strict: bool,
    },

    /// Show the effective configuration
    Config,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Shell types for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// PowerShell.
    PowerShell,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve_with_args() {
        let args = ["wallet-locale", "--locale", "de", "resolve", "greet", "Ann"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.locale.as_deref(), Some("de"));
        match cli.command {
            Commands::Resolve { key, args } => {
                assert_eq!(key, "greet");
                assert_eq!(args, vec!["Ann"]);
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_source_flags_conflict() {
        let result = Cli::try_parse_from([
            "wallet-locale",
            "--source-dir",
            "/ext",
            "--source-url",
            "https://example.com",
            "symbols",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
