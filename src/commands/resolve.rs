//! Resolve a single message key.

use serde::Serialize;

use super::report_load;
use crate::{
    context::Context,
    error::{Error, Result},
    output::OutputFormat,
};

#[derive(Serialize)]
struct ResolveOutput<'a> {
    key: &'a str,
    locale: String,
    found: bool,
    text: String,
}

/// Load bundles and print the resolved message.
pub async fn resolve(ctx: &Context, key: &str, args: &[String]) -> Result<()> {
    let resolver = ctx.resolver()?;
    let summary = resolver.load().await;
    report_load(ctx, &summary);

    let resolution = resolver.try_resolve(key, args);
    let found = resolution.is_found();
    let text = resolution.into_string();

    if ctx.output.format() == OutputFormat::Table {
        if found {
            ctx.output.line(&text);
        }
    } else {
        ctx.output.value(&ResolveOutput { key, locale: resolver.active_locale(), found, text })?;
    }

    if found { Ok(()) } else { Err(Error::MessageNotFound(key.to_string())) }
}
