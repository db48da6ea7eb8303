//! Report viewer: the request lifecycle around the assembler.
//!
//! ```text
//! Idle ──render──▶ Loading ──▶ Rendered
//!                     │
//!                     └──────▶ Errored
//! ```
//!
//! Every call to [`ReportViewer::render`] starts a fresh request. A request
//! that is overtaken by a newer one has its fetch aborted and its result
//! discarded; only the newest request ever writes the visible state.

use futures::future::{AbortHandle, AbortRegistration, Abortable};
use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use intel_report_core::{RenderedReport, ReportAssembler, ReportDocument};

use crate::config::RuntimeConfig;
use crate::source::{DocumentSource, ReportId, SourceError};
use crate::RuntimeError;

/// Why a request failed, phrased for the reader.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("No report ID provided. Please check your link.")]
    MissingId,

    #[error("Report not found. The report may have expired or the ID is incorrect.")]
    NotFound,

    #[error("Failed to load report (Error {0})")]
    Status(u16),

    #[error("Failed to load the report. Please try again later.")]
    Generic,
}

impl From<SourceError> for LoadError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::NotFound => LoadError::NotFound,
            SourceError::Status(status) => LoadError::Status(status),
            SourceError::Unavailable(_) => LoadError::Generic,
        }
    }
}

/// Observable viewer state.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading { id: ReportId },
    Rendered(Arc<RenderedReport>),
    Errored(LoadError),
}

/// How one request ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    Rendered(Arc<RenderedReport>),
    Errored(LoadError),
    /// A newer request started first; this result was discarded
    Superseded,
}

/// Drives fetch, parse and assembly for one display surface.
pub struct ReportViewer {
    source: Arc<dyn DocumentSource>,
    assembler: ReportAssembler,
    generation: AtomicU64,
    in_flight: Mutex<Option<AbortHandle>>,
    state: RwLock<ViewState>,
}

impl ReportViewer {
    /// Create a viewer over `source`.
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self {
            source,
            assembler: ReportAssembler::new(),
            generation: AtomicU64::new(0),
            in_flight: Mutex::new(None),
            state: RwLock::new(ViewState::Idle),
        }
    }

    /// Create a viewer over the source named in `config`.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self, RuntimeError> {
        Ok(Self::new(config.build_source()?))
    }

    /// Create a viewer from a YAML configuration file.
    pub fn from_config_file(path: impl AsRef<std::path::Path>) -> Result<Self, RuntimeError> {
        let config = RuntimeConfig::from_yaml_file(path)?;
        Self::from_config(&config)
    }

    /// Current state snapshot.
    pub fn state(&self) -> ViewState {
        self.state.read().clone()
    }

    /// Load and render the report named by `raw_id`.
    ///
    /// Any request still in flight is superseded.
    pub async fn render(&self, raw_id: Option<&str>) -> RenderOutcome {
        let (generation, registration) = self.begin();

        let Some(id) = ReportId::parse(raw_id) else {
            warn!(generation, "Render requested without a report id");
            return self.finish(generation, Err(LoadError::MissingId));
        };

        if !self.publish(generation, ViewState::Loading { id: id.clone() }) {
            return RenderOutcome::Superseded;
        }
        info!(report_id = %id, source = self.source.name(), generation, "Loading report");

        let fetched = match Abortable::new(self.source.fetch(&id), registration).await {
            Ok(fetched) => fetched,
            Err(_aborted) => {
                warn!(report_id = %id, generation, "Request superseded during fetch");
                return RenderOutcome::Superseded;
            }
        };

        let result = fetched
            .map_err(|e| {
                warn!(report_id = %id, error = %e, "Report fetch failed");
                LoadError::from(e)
            })
            .and_then(|body| {
                ReportDocument::from_json(&body).map_err(|e| {
                    warn!(report_id = %id, error = %e, "Report payload malformed");
                    LoadError::Generic
                })
            })
            .map(|document| Arc::new(self.assembler.assemble(&document)));

        if result.is_ok() {
            info!(report_id = %id, generation, "Report rendered");
        }
        self.finish(generation, result)
    }

    /// Claim the next generation and abort whatever was in flight.
    ///
    /// The generation and the abort handle change under one lock, so the
    /// request holding the newest generation always owns the live handle.
    fn begin(&self) -> (u64, AbortRegistration) {
        let mut in_flight = self.in_flight.lock();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let (abort_handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = in_flight.replace(abort_handle) {
            previous.abort();
        }
        (generation, registration)
    }

    /// Write `state` if `generation` is still current.
    fn publish(&self, generation: u64, state: ViewState) -> bool {
        let mut current = self.state.write();
        if self.generation.load(Ordering::SeqCst) != generation {
            return false;
        }
        *current = state;
        true
    }

    fn finish(
        &self,
        generation: u64,
        result: Result<Arc<RenderedReport>, LoadError>,
    ) -> RenderOutcome {
        let (state, outcome) = match result {
            Ok(report) => (
                ViewState::Rendered(report.clone()),
                RenderOutcome::Rendered(report),
            ),
            Err(err) => (ViewState::Errored(err.clone()), RenderOutcome::Errored(err)),
        };

        if self.publish(generation, state) {
            outcome
        } else {
            warn!(generation, "Discarding superseded result");
            RenderOutcome::Superseded
        }
    }
}
