use std::error::Error;
use std::fmt;

#[derive(Debug, Clone)]
pub enum FetchError {
    Client(String),
    Network(String),
    Body(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Client(msg) => write!(f, "HTTP client error: {msg}"),
            FetchError::Network(msg) => write!(f, "Network error: {msg}"),
            FetchError::Body(msg) => write!(f, "Response body error: {msg}"),
        }
    }
}

impl Error for FetchError {}
