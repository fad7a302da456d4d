pub mod cache;
pub mod extractor;
mod fetch_error;
pub mod fetcher;
pub mod models;
mod service;

pub use fetch_error::FetchError;
pub use fetcher::{CampaignFetcher, DonationSource};
pub use models::DonationSnapshot;
pub use service::DonationService;
