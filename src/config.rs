use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_CONFIG_FILE_NAME: &str = "githubclient.yaml";
const GITHUB_API_URL: &str = "https://api.github.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Static client configuration. The token is attached as-is to every
/// request; acquiring or refreshing it is the caller's problem.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub token: String,
    #[serde(default = "Config::default_api_url")]
    pub api_url: String,
    #[serde(default = "Config::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Config {
    pub async fn load() -> Result<Config> {
        let config_string = tokio::fs::read_to_string(DEFAULT_CONFIG_FILE_NAME).await?;

        let mut config = serde_yaml::from_str::<Config>(&config_string)?;

        if config.token.is_empty() {
            config.token = env::var("GITHUB_TOKEN").context(
                "set `token` in the config file or export the GITHUB_TOKEN variable",
            )?;
        }

        Ok(config)
    }

    fn default_api_url() -> String {
        GITHUB_API_URL.to_owned()
    }

    fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }
}
