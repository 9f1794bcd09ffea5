use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides the agent identity
pub const USER_AGENT_ENV: &str = "USER_AGENT";

/// Configuration for a single scrape run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Agent identity sent as the User-Agent header and matched against robots.txt groups
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Directory the JSON records are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Timeout applied to each HTTP request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of links kept in a record
    #[serde(default = "default_max_links")]
    pub max_links: usize,

    /// Number of paragraphs joined into the content snippet
    #[serde(default = "default_snippet_paragraphs")]
    pub snippet_paragraphs: usize,

    /// Upper bound on the snippet length, in characters
    #[serde(default = "default_snippet_max_chars")]
    pub snippet_max_chars: usize,
}

fn default_user_agent() -> String {
    "GlobalWebScraper/1.0".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("scrapped-data")
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_links() -> usize {
    20
}

fn default_snippet_paragraphs() -> usize {
    3
}

fn default_snippet_max_chars() -> usize {
    500
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            output_dir: default_output_dir(),
            timeout_secs: default_timeout_secs(),
            max_links: default_max_links(),
            snippet_paragraphs: default_snippet_paragraphs(),
            snippet_max_chars: default_snippet_max_chars(),
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a JSON file; missing keys take their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply the `USER_AGENT` environment variable, if set and non-empty
    pub fn with_env_overrides(self) -> Self {
        self.with_user_agent_override(std::env::var(USER_AGENT_ENV).ok())
    }

    /// Replace the agent identity when a non-blank value is given
    pub fn with_user_agent_override(mut self, user_agent: Option<String>) -> Self {
        if let Some(agent) = user_agent {
            let agent = agent.trim();
            if !agent.is_empty() {
                self.user_agent = agent.to_string();
            }
        }
        self
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
