//! wallet-locale CLI
//!
//! Resolve, inspect and verify wallet extension locale bundles.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    match wallet_locale::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // clap has already printed usage errors
            if !matches!(&e, wallet_locale::Error::InvalidArgument(m) if m.is_empty()) {
                eprintln!("Error: {e}");
            }

            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        },
    }
}
