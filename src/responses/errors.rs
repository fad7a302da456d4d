use crate::errors::ServerError;
use crate::responses::json_error_response;
use astra::Response;

/// Convert a ServerError into a JSON error response.
///
/// Upstream and config details stay in the logs; callers only get a short message.
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    match err {
        ServerError::NotFound => json_error_response(status, "Not Found"),
        ServerError::Upstream(_) => json_error_response(status, "Failed to fetch donation data"),
        ServerError::Config(_) | ServerError::InternalError => {
            json_error_response(status, "Internal Server Error")
        }
    }
}
