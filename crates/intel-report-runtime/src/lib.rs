//! # intel-report-runtime
//!
//! Async request lifecycle for intelligence report rendering.
//!
//! `intel-report-core` turns a parsed document into a view model and never
//! performs I/O. This crate supplies the rest: document sources (local
//! files, or a remote store behind the `http` feature), YAML configuration,
//! and the [`ReportViewer`] that fetches, parses and assembles a report
//! while discarding results from superseded requests.
//!
//! ## Example
//!
//! ```rust,ignore
//! use intel_report_runtime::{RenderOutcome, ReportViewer, RuntimeConfig};
//!
//! let config = RuntimeConfig::from_yaml_file("intel-report.yaml")?;
//! let viewer = ReportViewer::from_config(&config)?;
//!
//! match viewer.render(Some("2025-01-03-daily")).await {
//!     RenderOutcome::Rendered(report) => println!("{}", report.title),
//!     RenderOutcome::Errored(err) => eprintln!("{}", err),
//!     RenderOutcome::Superseded => {}
//! }
//! ```

use thiserror::Error;

pub mod config;
pub mod source;
pub mod viewer;

pub use config::{ConfigError, RuntimeConfig, SourceConfig};
pub use source::{DocumentSource, FileSource, ReportId, SourceError};
#[cfg(feature = "http")]
pub use source::HttpSource;
pub use viewer::{LoadError, RenderOutcome, ReportViewer, ViewState};

/// Errors from the runtime.
#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Source not available: {0}")]
    SourceUnavailable(String),
}
