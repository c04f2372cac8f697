//! Show formatting metadata for the active locale.

use serde::Serialize;

use super::report_load;
use crate::{
    context::Context,
    error::Result,
    i18n::{Direction, FormattingMetadata},
    output::{Displayable, OutputFormat},
};

#[derive(Debug, Clone, Serialize)]
struct Field {
    field: &'static str,
    value: String,
}

impl Displayable for Field {
    fn table_row(&self) -> Vec<String> {
        vec![self.field.to_string(), self.value.clone()]
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["FIELD", "VALUE"]
    }
}

fn fields(metadata: &FormattingMetadata) -> Vec<Field> {
    let field = |field, value: &str| Field { field, value: value.to_string() };
    let direction = match metadata.direction {
        Direction::Ltr => "ltr",
        Direction::Rtl => "rtl",
    };

    vec![
        field("locale", &metadata.locale),
        field("direction", direction),
        field("decimal", &metadata.numbers.decimal),
        field("group", &metadata.numbers.group),
        field("percentSign", &metadata.numbers.percent_sign),
        field("plusSign", &metadata.numbers.plus_sign),
        field("minusSign", &metadata.numbers.minus_sign),
        field("exponential", &metadata.numbers.exponential),
        field("perMille", &metadata.numbers.per_mille),
        field("infinity", &metadata.numbers.infinity),
        field("nan", &metadata.numbers.nan),
        field("timeSeparator", &metadata.numbers.time_separator),
        field("shortDate", &metadata.date.short_date),
        field("mediumDate", &metadata.date.medium_date),
        field("longDate", &metadata.date.long_date),
        field("shortTime", &metadata.date.short_time),
        field("weekStartsOn", &metadata.date.week_starts_on.to_string()),
        field("hour12", &metadata.date.hour12.to_string()),
    ]
}

/// Print number symbols and date patterns for the active locale.
pub async fn symbols(ctx: &Context) -> Result<()> {
    let resolver = ctx.resolver()?;
    let summary = resolver.load().await;
    report_load(ctx, &summary);

    let active = resolver.active_locale();
    let metadata = resolver.formatting_metadata();

    if resolver.table().lookup(&active).is_none() {
        ctx.output.info(&format!(
            "No formatting data for '{active}'; showing baseline '{}'",
            resolver.table().baseline()
        ));
    }

    if ctx.output.format() == OutputFormat::Table {
        ctx.output.table(&fields(&metadata))
    } else {
        ctx.output.value(metadata.as_ref())
    }
}
