// service.rs
use crate::config::AppConfig;
use crate::donations::cache::SnapshotCache;
use crate::donations::extractor::extract_snapshot;
use crate::donations::models::{CampaignFields, DonationSnapshot};
use crate::donations::{CampaignFetcher, DonationSource, FetchError};
use std::time::Duration;

/// One fetch-then-extract cycle per call, optionally behind a cache.
pub struct DonationService {
    source: Box<dyn DonationSource>,
    fields: CampaignFields,
    cache: SnapshotCache,
}

impl DonationService {
    pub fn new(source: Box<dyn DonationSource>, fields: CampaignFields, cache_ttl: Duration) -> Self {
        Self {
            source,
            fields,
            cache: SnapshotCache::new(cache_ttl),
        }
    }

    pub fn from_config(cfg: &AppConfig) -> Result<Self, FetchError> {
        let fetcher = CampaignFetcher::from_config(cfg)?;
        Ok(Self::new(
            Box::new(fetcher),
            CampaignFields::new(cfg.min_goal_fallback, cfg.opt_goal_fallback),
            cfg.cache_ttl,
        ))
    }

    pub fn snapshot(&self) -> Result<DonationSnapshot, FetchError> {
        self.cache.get_or_refresh(|| {
            let html = self.source.fetch_html()?;
            Ok::<_, FetchError>(extract_snapshot(&html, &self.fields))
        })
    }
}
