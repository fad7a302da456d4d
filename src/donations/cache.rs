// cache.rs
use crate::donations::models::DonationSnapshot;
use crate::donations::FetchError;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Default)]
struct Slot {
    snapshot: Option<(Instant, DonationSnapshot)>,
    last_failure: Option<(Instant, FetchError)>,
}

/// Short-lived snapshot cache.
///
/// With a zero TTL every call runs the loader. Otherwise the lock is held
/// across the load, so callers arriving during a refresh wait for it and
/// reuse its outcome instead of hitting the campaign page themselves. A
/// failed load is handed to the callers that were already waiting on it;
/// later callers try again.
pub struct SnapshotCache {
    ttl: Duration,
    slot: Mutex<Slot>,
}

impl SnapshotCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(Slot::default()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    pub fn get_or_refresh<F>(&self, load: F) -> Result<DonationSnapshot, FetchError>
    where
        F: FnOnce() -> Result<DonationSnapshot, FetchError>,
    {
        if !self.is_enabled() {
            return load();
        }

        let arrived = Instant::now();

        // A poisoned lock only means a loader panicked; the slot is still usable.
        let mut slot = self.slot.lock().unwrap_or_else(|p| p.into_inner());

        if let Some((stored_at, snapshot)) = slot.snapshot.as_ref() {
            if stored_at.elapsed() < self.ttl {
                debug!(age_ms = stored_at.elapsed().as_millis() as u64, "snapshot cache hit");
                return Ok(snapshot.clone());
            }
        }

        if let Some((failed_at, err)) = slot.last_failure.as_ref() {
            if *failed_at >= arrived {
                debug!("sharing failed refresh with waiting caller");
                return Err(err.clone());
            }
        }

        match load() {
            Ok(fresh) => {
                slot.snapshot = Some((Instant::now(), fresh.clone()));
                slot.last_failure = None;
                Ok(fresh)
            }
            Err(e) => {
                slot.last_failure = Some((Instant::now(), e.clone()));
                Err(e)
            }
        }
    }
}
