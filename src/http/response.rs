//! HTTP response building module
//!
//! Provides the plain-text and JSON response builders used by the handlers.

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Build a 200 plain-text response.
pub fn text_response(body: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from_static(body.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error("text", &e);
            Response::new(Full::new(Bytes::from_static(body.as_bytes())))
        })
}

/// Build a JSON response. Bodies are serialized compactly; a serialization
/// failure degrades to a 500 with a static JSON error payload.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .body(Full::new(Bytes::from(
                    r#"{"error":"Internal server error"}"#,
                )))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))));
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error("JSON", &e);
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// Log response build error
fn log_build_error(kind: &str, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {kind} response: {error}"));
}
