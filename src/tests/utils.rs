use crate::donations::models::CampaignFields;
use crate::donations::{DonationService, DonationSource, FetchError};
use astra::{Body, Request, Response};
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Campaign page markup shaped like the real one.
pub const SAMPLE_PAGE: &str = r#"<html><body>
<div class="amount-block">
  <span class="amount-label">Montant collecté</span>
  <span class="amount-number">1 500,00 €</span>
</div>
<div class="amount-block">
  <span class="amount-label">Objectif Minimum</span>
  <span class="amount-number">550 €</span>
</div>
<div class="amount-block">
  <span class="amount-label">Objectif Optimum</span>
  <span class="amount-number">1625 €</span>
</div>
<p class="remaining">Plus que 25 jours</p>
<p class="donors">Donateurs 10</p>
</body></html>"#;

/// Canned `DonationSource` that counts its calls.
pub struct StubSource {
    html: Option<String>,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl StubSource {
    pub fn ok(html: &str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let stub = Self {
            html: Some(html.to_string()),
            delay: Duration::ZERO,
            calls: calls.clone(),
        };
        (stub, calls)
    }

    pub fn failing() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let stub = Self {
            html: None,
            delay: Duration::ZERO,
            calls: calls.clone(),
        };
        (stub, calls)
    }

    /// Makes every fetch take `delay`, like a slow upstream.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl DonationSource for StubSource {
    fn fetch_html(&self) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        self.html
            .clone()
            .ok_or_else(|| FetchError::Network("connection refused".into()))
    }
}

pub fn service_with(source: StubSource, cache_ttl: Duration) -> DonationService {
    DonationService::new(Box::new(source), CampaignFields::default(), cache_ttl)
}

pub fn get(path: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}
