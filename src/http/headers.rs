//! Response decoration module
//!
//! Applies the headers this server adds to every outgoing response: the
//! permissive CORS set and the Content-Type override for script,
//! stylesheet, and markup targets.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::Response;

use crate::http::mime;
use crate::logger;

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type";

/// Decorate a response in place: CORS headers always, Content-Type override
/// when the raw request target has a matching suffix.
///
/// Only headers change; the body is never touched.
pub fn decorate_response(response: &mut Response<Full<Bytes>>, raw_target: &str) {
    let headers = response.headers_mut();

    headers.insert(
        "Access-Control-Allow-Origin",
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static(ALLOW_HEADERS),
    );

    if let Some(content_type) = mime::override_for_target(raw_target) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    }
}

/// Set the `Server` header from configuration.
pub fn set_server_name(response: &mut Response<Full<Bytes>>, server_name: &str) {
    match HeaderValue::from_str(server_name) {
        Ok(value) => {
            response.headers_mut().insert("Server", value);
        }
        Err(e) => {
            logger::log_warning(&format!("Invalid server name '{server_name}': {e}"));
        }
    }
}
