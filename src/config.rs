use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub data_dir: Option<PathBuf>,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let api_base_url = env::var("PORTFOLIO_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000/api".to_string());
        let api_base_url = api_base_url.trim_end_matches('/').to_string();

        url::Url::parse(&api_base_url)
            .map_err(|e| Error::Config(format!("Invalid PORTFOLIO_API_URL: {}", e)))?;

        let data_dir = env::var("PORTFOLIO_DATA_DIR").ok().map(PathBuf::from);

        let http_timeout_secs = match env::var("PORTFOLIO_HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|e| {
                Error::Config(format!("Invalid value for PORTFOLIO_HTTP_TIMEOUT_SECS: {}", e))
            })?,
            Err(_) => 10,
        };

        Ok(Self {
            api_base_url,
            data_dir,
            http_timeout_secs,
        })
    }
}
