use serde::Deserialize;

use crate::models::Mode;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Recommendation endpoint URL
    #[serde(default = "default_recommend_url")]
    pub recommend_url: String,

    /// Execution mode sent with every request
    #[serde(default)]
    pub mode: Mode,

    /// Optional log file path; when unset, tracing output is discarded
    /// (the TUI owns stdout, so logs cannot go there)
    #[serde(default)]
    pub log_file: Option<String>,
}

fn default_recommend_url() -> String {
    "http://localhost:8080/recommend".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::prefixed("ANITERM_")
            .from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recommend_url: default_recommend_url(),
            mode: Mode::default(),
            log_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.recommend_url, "http://localhost:8080/recommend");
        assert_eq!(config.mode, Mode::Agent);
        assert!(config.log_file.is_none());
    }
}
