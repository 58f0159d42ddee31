use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

use crate::constants::{DEFAULT_LOG_FILE, NWS_API_BASE, USER_AGENT};

/// Runtime configuration, read from the command line with environment fallbacks
#[derive(Parser, Debug, Clone)]
#[command(version, about = "MCP server exposing NWS weather alerts and forecasts", long_about = None)]
pub struct Config {
    /// Base URL of the weather provider
    #[arg(long, env = "NWS_API_BASE", default_value = NWS_API_BASE)]
    pub api_base: String,

    /// User-Agent sent with every upstream request
    #[arg(long, env = "WEATHER_USER_AGENT", default_value = USER_AGENT)]
    pub user_agent: String,

    /// File the diagnostic log is appended to
    #[arg(long, env = "WEATHER_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Disable the diagnostic file log
    #[arg(long, env = "WEATHER_NO_LOG_FILE")]
    pub no_log_file: bool,

    /// Per-request timeout in seconds; requests wait indefinitely when unset
    #[arg(long, env = "WEATHER_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: NWS_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            no_log_file: false,
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Base URL with any trailing slash removed
    pub fn api_base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }

    pub fn log_path(&self) -> Option<&Path> {
        if self.no_log_file {
            None
        } else {
            Some(&self.log_file)
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
