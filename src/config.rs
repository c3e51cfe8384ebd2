// src/config.rs

use std::{env, path::PathBuf, time::Duration};
use tracing::debug;
use url::Url;

use crate::error::{Result, ScrapeError};
use crate::output::naming::DEFAULT_EXTENSION;

/// Page holding the constituents table.
pub const SOURCE_URL: &str = "https://en.wikipedia.org/wiki/List_of_S%26P_500_companies";
pub const TABLE_TAG: &str = "table";
pub const TABLE_ID: &str = "constituents";
pub const BASE_NAME: &str = "sp500list";

const USER_AGENT: &str = concat!("sp500scraper/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything a single run needs to know.
#[derive(Debug, Clone)]
pub struct Config {
    pub source_url: Url,
    /// Element type of the target, normally `table`.
    pub table_tag: String,
    /// Value of the target's `id` attribute.
    pub table_id: String,
    pub base_name: String,
    /// Append `_YYYYMMDD` to the file name.
    pub timestamp: bool,
    pub extension: String,
    /// Prepend a zero-based row number column.
    pub include_index: bool,
    pub output_dir: PathBuf,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: Url::parse(SOURCE_URL).expect("SOURCE_URL is a valid URL"),
            table_tag: TABLE_TAG.to_string(),
            table_id: TABLE_ID.to_string(),
            base_name: BASE_NAME.to_string(),
            timestamp: false,
            extension: DEFAULT_EXTENSION.to_string(),
            include_index: false,
            output_dir: PathBuf::from("."),
            request_timeout: REQUEST_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Defaults, overridden by `SP500_URL`, `SP500_OUTPUT_DIR`,
    /// `SP500_TIMESTAMP` and `SP500_INDEX` when they are set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = lookup("SP500_URL") {
            cfg.source_url = Url::parse(&raw).map_err(|e| ScrapeError::Config {
                key: "SP500_URL".into(),
                message: e.to_string(),
            })?;
        }
        if let Some(dir) = lookup("SP500_OUTPUT_DIR") {
            cfg.output_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup("SP500_TIMESTAMP") {
            cfg.timestamp = parse_flag("SP500_TIMESTAMP", &raw)?;
        }
        if let Some(raw) = lookup("SP500_INDEX") {
            cfg.include_index = parse_flag("SP500_INDEX", &raw)?;
        }

        debug!(?cfg, "resolved config");
        Ok(cfg)
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        other => Err(ScrapeError::Config {
            key: key.to_string(),
            message: format!("expected true/false, got {other:?}"),
        }),
    }
}
