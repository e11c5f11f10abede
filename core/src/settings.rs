//! Client settings loaded from layered sources.
//!
//! Precedence, lowest first: `config/application.toml`, then `FAKEREST_*`
//! environment variables. A `.env` file is read into the environment first
//! when present.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

const CONFIG_DIR_ENV: &str = "FAKEREST_CONFIG_DIR";
const ENV_PREFIX: &str = "FAKEREST";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

pub const BOOKS_PATH: &str = "/api/v1/Books";
pub const AUTHORS_PATH: &str = "/api/v1/Authors";

/// Root URL of the service under test plus transport settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    #[serde(default = "Settings::default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Settings {
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }

    /// Load settings from `application.toml` and the environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        let _ = dotenvy::dotenv();

        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config"));

        let builder = config::Config::builder()
            .add_source(config::File::from(config_dir.join("application.toml")).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        Self::from_config(builder.build()?)
    }

    fn from_config(cfg: config::Config) -> Result<Self, config::ConfigError> {
        let mut settings: Settings = cfg.try_deserialize()?;
        if settings.api_url.trim().is_empty() {
            return Err(config::ConfigError::Message("api_url must not be empty".to_string()));
        }
        settings.api_url = settings.api_url.trim_end_matches('/').to_string();
        Ok(settings)
    }

    fn default_connect_timeout_secs() -> u64 {
        DEFAULT_CONNECT_TIMEOUT_SECS
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn books_url(&self) -> String {
        format!("{}{BOOKS_PATH}", self.api_url)
    }

    pub fn authors_url(&self) -> String {
        format!("{}{AUTHORS_PATH}", self.api_url)
    }
}
