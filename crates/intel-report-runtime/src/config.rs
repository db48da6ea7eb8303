//! Runtime configuration.
//!
//! ```yaml
//! source:
//!   kind: http
//!   base_url: https://intel.example.com
//!   path_template: "reports/{id}/data.json"
//!   timeout: 10s
//!   max_retries: 2
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::source::{DocumentSource, FileSource, DEFAULT_PATH_TEMPLATE, ID_PLACEHOLDER};
use crate::RuntimeError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_MAX_RETRIES: usize = 2;

/// Errors loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Where report payloads are read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    File {
        root: PathBuf,

        #[serde(default = "default_path_template")]
        path_template: String,
    },

    Http {
        base_url: String,

        #[serde(default = "default_path_template")]
        path_template: String,

        /// Per-request timeout, e.g. `10s` or `1m 30s`
        #[serde(default = "default_timeout", with = "duration_humantime")]
        timeout: Duration,

        #[serde(default = "default_max_retries")]
        max_retries: usize,
    },
}

fn default_path_template() -> String {
    DEFAULT_PATH_TEMPLATE.to_string()
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

fn default_max_retries() -> usize {
    DEFAULT_MAX_RETRIES
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::File {
            root: PathBuf::from("."),
            path_template: default_path_template(),
        }
    }
}

mod duration_humantime {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&humantime::format_duration(*duration).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        humantime::parse_duration(&raw).map_err(serde::de::Error::custom)
    }
}

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub source: SourceConfig,
}

impl RuntimeConfig {
    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Check values serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let template = match &self.source {
            SourceConfig::File { path_template, .. } => path_template,
            SourceConfig::Http {
                base_url,
                path_template,
                ..
            } => {
                if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                    return Err(ConfigError::Invalid(
                        "base_url must start with http:// or https://".to_string(),
                    ));
                }
                path_template
            }
        };

        if !template.contains(ID_PLACEHOLDER) {
            return Err(ConfigError::Invalid(format!(
                "path_template must contain {}",
                ID_PLACEHOLDER
            )));
        }
        Ok(())
    }

    /// Read from a local directory, keeping any configured path template.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        let path_template = self.path_template().to_string();
        self.source = SourceConfig::File {
            root: root.into(),
            path_template,
        };
        self
    }

    /// Read from a remote store, keeping any configured HTTP settings.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.source = match self.source {
            SourceConfig::Http {
                path_template,
                timeout,
                max_retries,
                ..
            } => SourceConfig::Http {
                base_url,
                path_template,
                timeout,
                max_retries,
            },
            SourceConfig::File { path_template, .. } => SourceConfig::Http {
                base_url,
                path_template,
                timeout: DEFAULT_TIMEOUT,
                max_retries: DEFAULT_MAX_RETRIES,
            },
        };
        self
    }

    pub fn path_template(&self) -> &str {
        match &self.source {
            SourceConfig::File { path_template, .. } | SourceConfig::Http { path_template, .. } => {
                path_template
            }
        }
    }

    /// Build the configured document source.
    pub fn build_source(&self) -> Result<Arc<dyn DocumentSource>, RuntimeError> {
        match &self.source {
            SourceConfig::File {
                root,
                path_template,
            } => Ok(Arc::new(
                FileSource::new(root.clone()).with_path_template(path_template.clone()),
            )),
            SourceConfig::Http { .. } => self.build_http_source(),
        }
    }

    #[cfg(feature = "http")]
    fn build_http_source(&self) -> Result<Arc<dyn DocumentSource>, RuntimeError> {
        let SourceConfig::Http {
            base_url,
            path_template,
            timeout,
            max_retries,
        } = &self.source
        else {
            return Err(RuntimeError::SourceUnavailable("http".to_string()));
        };

        let source = crate::source::HttpSource::new(base_url.clone(), *timeout)?
            .with_path_template(path_template.clone())
            .with_max_retries(*max_retries);
        Ok(Arc::new(source))
    }

    #[cfg(not(feature = "http"))]
    fn build_http_source(&self) -> Result<Arc<dyn DocumentSource>, RuntimeError> {
        Err(RuntimeError::SourceUnavailable(
            "HTTP source requires the 'http' feature".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_local() {
        let config = RuntimeConfig::from_yaml("{}").unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.path_template(), "reports/{id}/data.json");
    }

    #[test]
    fn test_http_section() {
        let config = RuntimeConfig::from_yaml(
            r#"
source:
  kind: http
  base_url: https://intel.example.com
  timeout: 1m 30s
"#,
        )
        .unwrap();

        match config.source {
            SourceConfig::Http {
                base_url,
                timeout,
                max_retries,
                path_template,
            } => {
                assert_eq!(base_url, "https://intel.example.com");
                assert_eq!(timeout, Duration::from_secs(90));
                assert_eq!(max_retries, 2);
                assert_eq!(path_template, "reports/{id}/data.json");
            }
            other => panic!("expected http source, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_duration_rejected() {
        let result = RuntimeConfig::from_yaml(
            r#"
source:
  kind: http
  base_url: https://intel.example.com
  timeout: soon
"#,
        );
        assert!(matches!(result, Err(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_validation() {
        let bad_url = "source:\n  kind: http\n  base_url: ftp://x\n";
        assert!(matches!(
            RuntimeConfig::from_yaml(bad_url),
            Err(ConfigError::Invalid(_))
        ));

        let bad_template = "source:\n  kind: file\n  root: /tmp\n  path_template: data.json\n";
        assert!(matches!(
            RuntimeConfig::from_yaml(bad_template),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_overrides_keep_template() {
        let config = RuntimeConfig::from_yaml(
            "source:\n  kind: file\n  root: /srv\n  path_template: \"{id}.json\"\n",
        )
        .unwrap()
        .with_base_url("https://intel.example.com");

        assert_eq!(config.path_template(), "{id}.json");
        assert!(matches!(config.source, SourceConfig::Http { timeout, .. } if timeout == DEFAULT_TIMEOUT));

        let config = config.with_root("/data");
        assert_eq!(
            config.source,
            SourceConfig::File {
                root: PathBuf::from("/data"),
                path_template: "{id}.json".to_string(),
            }
        );
    }

    #[test]
    fn test_build_file_source() {
        let source = RuntimeConfig::default().build_source().unwrap();
        assert_eq!(source.name(), "file");
    }

    #[cfg(not(feature = "http"))]
    #[test]
    fn test_http_needs_feature() {
        let config = RuntimeConfig::default().with_base_url("https://intel.example.com");
        assert!(matches!(
            config.build_source(),
            Err(RuntimeError::SourceUnavailable(_))
        ));
    }
}
