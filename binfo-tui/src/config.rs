//! Environment-driven configuration for the terminal front end.

use std::env;
use std::path::PathBuf;

/// Default dataset location relative to the working directory.
const DEFAULT_DATA_PATH: &str = "data/schedules.json";
/// Default model when an endpoint is configured without one.
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Reviser settings, present only when an endpoint is configured.
#[derive(Debug, Clone)]
pub(crate) struct ReviserConfig {
    /// Full chat completions URL.
    pub endpoint: String,
    /// Model name passed in the request body.
    pub model: String,
    /// API key from `LLM_API_KEY`. `None` for keyless local backends.
    pub api_key: Option<String>,
}

/// Fully-resolved front end configuration.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    /// Path to the schedules dataset (`BINFO_DATA_PATH`).
    pub data_path: PathBuf,
    /// Reviser settings; `None` disables revision entirely.
    pub reviser: Option<ReviserConfig>,
}

impl Config {
    /// Read configuration from the environment, after dotenv loading.
    ///
    /// Revision is opt-in: it is only enabled when `BINFO_LLM_URL` is set
    /// to a non-empty value.
    pub(crate) fn from_env() -> Self {
        let data_path = env::var("BINFO_DATA_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from);

        let reviser = env::var("BINFO_LLM_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(|endpoint| ReviserConfig {
                endpoint,
                model: env::var("BINFO_LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_owned()),
                api_key: env::var("LLM_API_KEY").ok().filter(|key| !key.trim().is_empty()),
            });

        Self { data_path, reviser }
    }
}
