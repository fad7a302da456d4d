// config.rs
use crate::errors::ServerError;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

pub const DEFAULT_SOURCE_URL: &str =
    "https://trousseaprojets.fr/projet/20429-les-2ndes-si-cit-de-figeac-champollion-tirent-leurs-fusees";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const DEFAULT_MIN_GOAL: f64 = 550.0;
pub const DEFAULT_OPT_GOAL: f64 = 1625.0;

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: SocketAddr,
    pub workers: usize,
    pub source_url: Url,
    pub user_agent: String,
    pub timeout: Duration,
    pub cache_ttl: Duration,
    pub min_goal_fallback: f64,
    pub opt_goal_fallback: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            workers: 8,
            source_url: Url::parse(DEFAULT_SOURCE_URL).expect("default source url is valid"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            cache_ttl: Duration::ZERO,
            min_goal_fallback: DEFAULT_MIN_GOAL,
            opt_goal_fallback: DEFAULT_OPT_GOAL,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("DONATIONS_BIND") {
            cfg.bind = parse_var("DONATIONS_BIND", &v)?;
        }
        if let Some(v) = lookup("DONATIONS_WORKERS") {
            cfg.workers = parse_var("DONATIONS_WORKERS", &v)?;
            if cfg.workers == 0 {
                return Err(ServerError::Config(
                    "DONATIONS_WORKERS must be at least 1".into(),
                ));
            }
        }
        if let Some(v) = lookup("DONATIONS_SOURCE_URL") {
            cfg.source_url = Url::parse(v.trim()).map_err(|e| {
                ServerError::Config(format!("DONATIONS_SOURCE_URL is not a valid URL: {e}"))
            })?;
        }
        if let Some(v) = lookup("DONATIONS_USER_AGENT") {
            cfg.user_agent = v;
        }
        if let Some(v) = lookup("DONATIONS_TIMEOUT_SECS") {
            cfg.timeout = Duration::from_secs(parse_var("DONATIONS_TIMEOUT_SECS", &v)?);
            if cfg.timeout.is_zero() {
                return Err(ServerError::Config(
                    "DONATIONS_TIMEOUT_SECS must be at least 1".into(),
                ));
            }
        }
        if let Some(v) = lookup("DONATIONS_CACHE_SECS") {
            cfg.cache_ttl = Duration::from_secs(parse_var("DONATIONS_CACHE_SECS", &v)?);
        }
        if let Some(v) = lookup("DONATIONS_MIN_GOAL_FALLBACK") {
            cfg.min_goal_fallback = parse_var("DONATIONS_MIN_GOAL_FALLBACK", &v)?;
        }
        if let Some(v) = lookup("DONATIONS_OPT_GOAL_FALLBACK") {
            cfg.opt_goal_fallback = parse_var("DONATIONS_OPT_GOAL_FALLBACK", &v)?;
        }

        Ok(cfg)
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T, ServerError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| ServerError::Config(format!("{key}={raw:?}: {e}")))
}
