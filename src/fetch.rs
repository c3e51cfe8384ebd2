// src/fetch.rs

use reqwest::blocking::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::config::Config;
use crate::error::{Result, ScrapeError};

/// Anything that can hand back the raw HTML for a URL.
pub trait PageSource {
    fn fetch(&self, url: &Url) -> Result<String>;
}

impl<F> PageSource for F
where
    F: Fn(&Url) -> Result<String>,
{
    fn fetch(&self, url: &Url) -> Result<String> {
        self(url)
    }
}

/// Blocking HTTP GET. No retries; the first failure is returned.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(cfg: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(cfg.request_timeout)
            .user_agent(cfg.user_agent.clone())
            .build()
            .map_err(|source| ScrapeError::Network {
                url: cfg.source_url.to_string(),
                source,
            })?;
        Ok(Self { client })
    }
}

impl PageSource for HttpFetcher {
    #[instrument(level = "info", skip(self, url), fields(url = %url))]
    fn fetch(&self, url: &Url) -> Result<String> {
        let network = |source| ScrapeError::Network {
            url: url.to_string(),
            source,
        };

        let body = self
            .client
            .get(url.clone())
            .send()
            .map_err(network)?
            .error_for_status()
            .map_err(network)?
            .text()
            .map_err(network)?;

        debug!(bytes = body.len(), "fetched page");
        Ok(body)
    }
}
