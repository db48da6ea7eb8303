//! Report metadata: generation date, coverage counts and page title.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use crate::document::ReportMetadata;
use crate::normalize::non_empty;

/// Shown wherever a date cannot be resolved.
pub const DATE_PLACEHOLDER: &str = "N/A";

const SHORT_DATE: &str = "%b %-d, %Y";
const LONG_DATE: &str = "%A, %B %-d, %Y at %I:%M %p";
const TITLE_SUFFIX: &str = "Sovereign Intel";

/// Parse a generation timestamp.
///
/// Accepts RFC 3339, a naive ISO date-time, or a bare date. Naive values
/// are taken as UTC.
pub fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = non_empty(raw)?.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `Jan 3, 2025`, or the placeholder.
pub fn short_date(generated_at: Option<&str>) -> String {
    parse_timestamp(generated_at)
        .map(|dt| dt.format(SHORT_DATE).to_string())
        .unwrap_or_else(|| DATE_PLACEHOLDER.to_string())
}

/// `Friday, January 3, 2025 at 09:30 AM`, or the placeholder.
pub fn header_date(generated_at: Option<&str>) -> String {
    parse_timestamp(generated_at)
        .map(|dt| dt.format(LONG_DATE).to_string())
        .unwrap_or_else(|| DATE_PLACEHOLDER.to_string())
}

/// Page title for a report generated at `generated_at`.
pub fn report_title(generated_at: Option<&str>) -> String {
    format!(
        "Intelligence Report - {} - {}",
        short_date(generated_at),
        TITLE_SUFFIX
    )
}

/// Resolved metadata block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataView {
    /// Display items in fixed order; absent or zero values are left out.
    pub items: Vec<String>,
    pub header_date: String,
    pub title: String,
}

pub struct MetadataTransformer;

impl MetadataTransformer {
    pub fn new() -> Self {
        Self
    }

    pub fn transform(
        &self,
        generated_at: Option<&str>,
        metadata: Option<&ReportMetadata>,
    ) -> MetadataView {
        let mut items = Vec::new();

        if parse_timestamp(generated_at).is_some() {
            items.push(format!("Generated: {}", short_date(generated_at)));
        }
        if let Some(meta) = metadata {
            if let Some(count) = meta.article_count.filter(|n| *n > 0) {
                items.push(format!("{count} articles analyzed"));
            }
            if let Some(count) = meta.source_count.filter(|n| *n > 0) {
                items.push(format!("{count} sources"));
            }
            if let Some(model) = non_empty(meta.model.as_deref()) {
                items.push(format!("Model: {model}"));
            }
        }

        MetadataView {
            items,
            header_date: header_date(generated_at),
            title: report_title(generated_at),
        }
    }
}

impl Default for MetadataTransformer {
    fn default() -> Self {
        Self::new()
    }
}
