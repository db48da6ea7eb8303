//! Document sources: where report payloads come from.
//!
//! A source resolves a report identifier to the raw JSON text of its
//! `data.json`. Parsing and rendering happen elsewhere.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

mod file;
#[cfg(feature = "http")]
mod http;

pub use file::FileSource;
#[cfg(feature = "http")]
pub use http::HttpSource;

/// Default location of a report payload relative to the source root.
pub const DEFAULT_PATH_TEMPLATE: &str = "reports/{id}/data.json";

/// Placeholder substituted with the report identifier.
pub const ID_PLACEHOLDER: &str = "{id}";

/// Errors from document sources.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Report not found")]
    NotFound,

    #[error("Source responded with status {0}")]
    Status(u16),

    #[error("Source unavailable: {0}")]
    Unavailable(String),
}

/// Opaque report identifier. Always non-empty and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReportId(String);

impl ReportId {
    /// Parse a raw identifier; blank or missing input yields `None`.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        raw.map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier can be placed in a path or URL without
    /// escaping its directory or changing the query.
    pub fn is_path_safe(&self) -> bool {
        !self.0.contains(['/', '\\', '?', '#', '%']) && !self.0.contains("..")
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Substitute `id` into a path template.
pub fn expand_template(template: &str, id: &ReportId) -> String {
    template.replace(ID_PLACEHOLDER, id.as_str())
}

/// Source abstraction allows swapping report stores.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the raw payload for `id`.
    async fn fetch(&self, id: &ReportId) -> Result<String, SourceError>;

    /// Source name for logs.
    fn name(&self) -> &str;
}
