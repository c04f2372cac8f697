//! Compare the target bundle against the fallback bundle.

use serde::Serialize;

use super::report_load;
use crate::{
    context::Context,
    error::{Error, Result},
    i18n::{CoverageReport, compare},
    output::{Displayable, OutputFormat},
};

#[derive(Debug, Clone, Serialize)]
struct Issue {
    kind: &'static str,
    key: String,
    detail: String,
}

impl Displayable for Issue {
    fn table_row(&self) -> Vec<String> {
        vec![self.kind.to_string(), self.key.clone(), self.detail.clone()]
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["KIND", "KEY", "DETAIL"]
    }
}

fn issues(report: &CoverageReport) -> Vec<Issue> {
    let mut issues = Vec::new();

    for key in &report.missing {
        issues.push(Issue { kind: "missing", key: key.clone(), detail: String::new() });
    }
    for mismatch in &report.placeholder_mismatches {
        issues.push(Issue {
            kind: "placeholders",
            key: mismatch.key.clone(),
            detail: format!(
                "expected [{}], found [{}]",
                mismatch.expected.join(", "),
                mismatch.found.join(", ")
            ),
        });
    }
    for key in &report.malformed {
        issues.push(Issue { kind: "malformed", key: key.clone(), detail: String::new() });
    }
    for key in &report.extra {
        issues.push(Issue { kind: "extra", key: key.clone(), detail: String::new() });
    }

    issues
}

/// Load both bundles and report coverage of the target against the fallback.
pub async fn verify(ctx: &Context, strict: bool) -> Result<()> {
    let resolver = ctx.resolver()?;
    let summary = resolver.load().await;
    report_load(ctx, &summary);

    let snapshot = resolver.snapshot();
    let target = snapshot
        .messages
        .target
        .as_ref()
        .ok_or_else(|| Error::fetch(&summary.target_locale, "bundle unavailable"))?;
    let fallback = snapshot
        .messages
        .fallback
        .as_ref()
        .ok_or_else(|| Error::fetch(&summary.fallback_locale, "bundle unavailable"))?;

    if summary.target_locale == summary.fallback_locale {
        ctx.output.info(&format!(
            "Target and fallback are both '{}'; nothing to compare",
            summary.target_locale
        ));
    }

    let report = compare(target, fallback);

    if ctx.output.format() == OutputFormat::Table {
        let issues = issues(&report);
        if !issues.is_empty() {
            ctx.output.table(&issues)?;
        }
        let message = format!(
            "{}: {}/{} messages translated ({:.1}%)",
            summary.target_locale,
            report.translated,
            report.total,
            report.coverage_percent()
        );
        if report.is_clean() {
            ctx.output.success(&message);
        } else {
            ctx.output.warn(&message);
        }
    } else {
        ctx.output.value(&report)?;
    }

    if strict && !report.is_clean() {
        return Err(Error::VerificationFailed {
            missing: report.missing.len(),
            mismatched: report.placeholder_mismatches.len(),
            malformed: report.malformed.len(),
        });
    }

    Ok(())
}
