// fetcher.rs
use crate::config::AppConfig;
use crate::donations::FetchError;
use reqwest::blocking::Client;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tracing::{info, warn};
use url::Url;

/// Where campaign page HTML comes from.
pub trait DonationSource: Send + Sync {
    fn fetch_html(&self) -> Result<String, FetchError>;
}

pub struct CampaignFetcher {
    client: Client,
    url: Url,
}

impl CampaignFetcher {
    pub fn new(url: Url, user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client, url })
    }

    pub fn from_config(cfg: &AppConfig) -> Result<Self, FetchError> {
        Self::new(cfg.source_url.clone(), &cfg.user_agent, cfg.timeout)
    }

    /// Campaign URL with a `_t=<unix millis>` parameter so no cache in between
    /// serves a stale page.
    pub fn cache_busted_url(&self) -> Url {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        with_cache_buster(&self.url, millis)
    }
}

pub fn with_cache_buster(base: &Url, millis: u128) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().append_pair("_t", &millis.to_string());
    url
}

impl DonationSource for CampaignFetcher {
    fn fetch_html(&self) -> Result<String, FetchError> {
        let url = self.cache_busted_url();
        let start = Instant::now();

        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();

        // Body is handed to the extractor whatever the status; a changed or
        // error page just degrades to fallback values.
        let text = resp.text().map_err(|e| FetchError::Body(e.to_string()))?;

        if !status.is_success() {
            warn!(%url, %status, "campaign page answered with non-success status");
        }

        info!(
            %url,
            %status,
            bytes = text.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "fetched campaign page"
        );

        Ok(text)
    }
}
