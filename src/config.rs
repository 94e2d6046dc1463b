use log::warn;
use serde::Deserialize;
use thiserror::Error;

/// What [`HeaderStore::parse_lines`](crate::http::headers::HeaderStore::parse_lines)
/// does when a line has no colon separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLinePolicy {
    /// Drop the line and keep going.
    #[default]
    Skip,
    /// Reject the whole batch, leaving the store untouched.
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub malformed_lines: MalformedLinePolicy,
    /// Longest accepted header line in bytes, unlimited when unset.
    pub max_line_len: Option<usize>,

    // matching rules for the request accessors
    pub json_match_case: bool,
    pub bearer_match_case: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            malformed_lines: MalformedLinePolicy::Skip,
            max_line_len: None,

            json_match_case: false,
            bearer_match_case: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to deserialize config: {0}")]
    Toml(#[from] toml::de::Error),
}

impl StoreConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str::<StoreConfig>(content)?)
    }

    pub fn try_from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;

        Self::from_toml(&content)
    }

    /// Loads `path`, falling back to the default config on any error.
    pub fn from_file(path: &str) -> Self {
        match Self::try_from_file(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("{err}");
                warn!("Fall back to default config");
                StoreConfig::default()
            }
        }
    }
}
