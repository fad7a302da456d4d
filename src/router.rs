use crate::donations::DonationService;
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, json_response};
use crate::templates;
use astra::Request;
use serde_json::json;
use tracing::error;

pub fn handle(req: Request, donations: &DonationService) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => home(donations),
        ("GET", "/api/donation-progress") => donation_progress(donations),
        ("GET", "/health") => json_response(&json!({ "status": "ok" })),
        _ => Err(ServerError::NotFound),
    }
}

fn donation_progress(donations: &DonationService) -> ResultResp {
    let snapshot = donations.snapshot().map_err(|e| {
        error!(error = %e, "error fetching donation data");
        ServerError::Upstream(e.to_string())
    })?;

    json_response(&snapshot)
}

fn home(donations: &DonationService) -> ResultResp {
    // The page renders placeholders instead of failing.
    let snapshot = match donations.snapshot() {
        Ok(s) => Some(s),
        Err(e) => {
            error!(error = %e, "error fetching donation data for home page");
            None
        }
    };

    html_response(templates::pages::home_page(snapshot.as_ref()))
}
