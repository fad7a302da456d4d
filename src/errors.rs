use astra::Response;
// errors.rs
use std::fmt;

/// Errors originating from either the server logic
/// (routing, startup config) or downstream layers (the campaign page fetch).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    Upstream(String),
    Config(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::Upstream(_) | ServerError::Config(_) | ServerError::InternalError => 500,
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::Upstream(msg) => write!(f, "Upstream Error: {msg}"),
            ServerError::Config(msg) => write!(f, "Config Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
