//! Client configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default endpoint of the analysis service, matching its dev server.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/analyze";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Where and how to reach the analysis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load from a TOML file. A missing file yields the defaults; a file
    /// that exists but does not parse is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::Io { path: path.display().to_string(), source: e })
            }
        };
        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse { path: path.display().to_string(), source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = ClientConfig::load(Path::new("/nonexistent/valulens.toml")).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = std::env::temp_dir().join("valulens_config_partial");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("valulens.toml");
        std::fs::write(&path, "endpoint = \"http://10.0.0.5:8000/api/analyze\"\n").unwrap();

        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config.endpoint, "http://10.0.0.5:8000/api/analyze");
        assert_eq!(config.timeout_secs, 30);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = std::env::temp_dir().join("valulens_config_malformed");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("valulens.toml");
        std::fs::write(&path, "endpoint = [not toml").unwrap();

        assert!(matches!(
            ClientConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
