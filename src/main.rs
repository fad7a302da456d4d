use crate::config::AppConfig;
use crate::donations::DonationService;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod donations;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).finish().try_init();

    // 2️⃣ Config from the environment
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // 3️⃣ Fetcher + extractor behind one service
    let donations = match DonationService::from_config(&cfg) {
        Ok(svc) => svc,
        Err(e) => {
            error!(error = %e, "failed to build campaign fetcher");
            std::process::exit(1);
        }
    };

    // 4️⃣ Start the server
    info!(
        addr = %cfg.bind,
        workers = cfg.workers,
        source = %cfg.source_url,
        cache_secs = cfg.cache_ttl.as_secs(),
        "starting server"
    );

    let server = Server::bind(&cfg.bind).max_workers(cfg.workers);

    let result = server.serve(move |req, _info| match handle(req, &donations) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
