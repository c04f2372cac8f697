//! Command implementations for the wallet-locale CLI.
//!
//! Each submodule implements one command.

mod resolve;
mod symbols;
mod verify;

pub use resolve::resolve;
pub use symbols::symbols;
pub use verify::verify;

use crate::{
    cli::{Commands, Shell},
    context::Context,
    error::Result,
    i18n::LoadSummary,
};

/// Execute a CLI command.
pub async fn execute(ctx: &Context, command: &Commands) -> Result<()> {
    match command {
        Commands::Resolve { key, args } => resolve(ctx, key, args).await,
        Commands::Symbols => symbols(ctx).await,
        Commands::Verify { strict } => verify(ctx, *strict).await,
        Commands::Config => ctx.output.value(&ctx.config),
        Commands::Completion { shell } => completion(*shell),
    }
}

/// Warn about bundles that failed to load.
pub(crate) fn report_load(ctx: &Context, summary: &LoadSummary) {
    if summary.target_messages.is_none() {
        ctx.output.warn(&format!(
            "Bundle for '{}' unavailable; falling back to '{}'",
            summary.target_locale, summary.fallback_locale
        ));
    }
    if summary.fallback_messages.is_none() {
        ctx.output.warn(&format!("Fallback bundle for '{}' unavailable", summary.fallback_locale));
    }
}

fn completion(shell: Shell) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{Generator, generate};

    let mut cmd = crate::cli::Cli::command();

    fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
        generate(generator, cmd, cmd.get_name().to_string(), &mut std::io::stdout());
    }

    match shell {
        Shell::Bash => print_completions(clap_complete::shells::Bash, &mut cmd),
        Shell::Zsh => print_completions(clap_complete::shells::Zsh, &mut cmd),
        Shell::Fish => print_completions(clap_complete::shells::Fish, &mut cmd),
        Shell::PowerShell => print_completions(clap_complete::shells::PowerShell, &mut cmd),
    }

    Ok(())
}
