// responses/json.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, Response, ResponseBuilder};
use serde::Serialize;
use serde_json::json;

/// Serialize `value` as a 200 JSON response.
pub fn json_response<T: Serialize>(value: &T) -> ResultResp {
    let body = serde_json::to_string(value).map_err(|_| ServerError::InternalError)?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .header("Cache-Control", "no-store")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

/// `{"error": message}` with the given status.
pub fn json_error_response(status: u16, message: &str) -> Response {
    let body = json!({ "error": message }).to_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
