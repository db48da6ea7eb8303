//! Remote report store over HTTP.
//!
//! Transient failures (connection errors and 5xx responses) are retried
//! with exponential backoff. A 404 or any other status is returned at once.

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};

use super::{expand_template, DocumentSource, ReportId, SourceError, DEFAULT_PATH_TEMPLATE};

pub const DEFAULT_MAX_RETRIES: usize = 2;
const RETRY_MIN_DELAY: Duration = Duration::from_millis(200);

/// Fetches report payloads from `base_url/<path template>`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
    path_template: String,
    max_retries: usize,
}

impl HttpSource {
    /// Create a source with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            path_template: DEFAULT_PATH_TEMPLATE.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Set a custom path template.
    pub fn with_path_template(mut self, template: impl Into<String>) -> Self {
        self.path_template = template.into();
        self
    }

    /// Set the number of retries after the first attempt.
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Full URL of the payload for `id`.
    pub fn url_for(&self, id: &ReportId) -> Option<String> {
        id.is_path_safe().then(|| {
            format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                expand_template(&self.path_template, id).trim_start_matches('/')
            )
        })
    }

    async fn fetch_once(&self, url: &str) -> Result<String, SourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound);
        }
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))
    }
}

/// Worth another attempt.
fn is_transient(err: &SourceError) -> bool {
    match err {
        SourceError::Unavailable(_) => true,
        SourceError::Status(status) => *status >= 500,
        SourceError::NotFound => false,
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self, id: &ReportId) -> Result<String, SourceError> {
        let Some(url) = self.url_for(id) else {
            debug!(report_id = %id, "Refusing unsafe report id");
            return Err(SourceError::NotFound);
        };
        let backoff = ExponentialBuilder::default()
            .with_min_delay(RETRY_MIN_DELAY)
            .with_max_times(self.max_retries);

        (|| self.fetch_once(&url))
            .retry(backoff)
            .sleep(tokio::time::sleep)
            .when(is_transient)
            .notify(|err: &SourceError, delay: Duration| {
                warn!(url = %url, error = %err, delay = ?delay, "Retrying report fetch");
            })
            .await
    }

    fn name(&self) -> &str {
        "http"
    }
}
