//! Local filesystem source.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{expand_template, DocumentSource, ReportId, SourceError, DEFAULT_PATH_TEMPLATE};

/// Reads report payloads from a directory tree.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
    path_template: String,
}

impl FileSource {
    /// Create a source rooted at `root` using the default path layout.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            path_template: DEFAULT_PATH_TEMPLATE.to_string(),
        }
    }

    /// Set a custom path template.
    pub fn with_path_template(mut self, template: impl Into<String>) -> Self {
        self.path_template = template.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the payload path for `id`, refusing identifiers that would
    /// leave the root.
    pub fn path_for(&self, id: &ReportId) -> Option<PathBuf> {
        id.is_path_safe()
            .then(|| self.root.join(expand_template(&self.path_template, id)))
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    async fn fetch(&self, id: &ReportId) -> Result<String, SourceError> {
        let Some(path) = self.path_for(id) else {
            debug!(report_id = %id, "Refusing unsafe report id");
            return Err(SourceError::NotFound);
        };

        tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                SourceError::NotFound
            } else {
                SourceError::Unavailable(format!("{}: {}", path.display(), e))
            }
        })
    }

    fn name(&self) -> &str {
        "file"
    }
}
