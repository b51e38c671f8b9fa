//! Request handling module
//!
//! Entry point for HTTP request processing: method validation, static file
//! dispatch, response decoration, access logging, and the per-file
//! diagnostic side effects.

pub mod static_files;

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::http::request::Parts;
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Config;
use crate::diagnostics;
use crate::http;
use crate::logger::{self, AccessLogEntry};

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<Config>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, _body) = req.into_parts();
    Ok(respond(&parts, &config, peer_addr).await)
}

/// Compute the response for a request and emit the logging side effects.
pub async fn respond(parts: &Parts, config: &Config, peer_addr: SocketAddr) -> Response<Full<Bytes>> {
    let raw_target = parts
        .uri
        .path_and_query()
        .map_or_else(|| parts.uri.path(), |pq| pq.as_str());
    let is_head = parts.method == Method::HEAD;

    let mut response = match check_http_method(&parts.method) {
        Some(early) => early,
        None => static_files::serve(&config.root_dir(), parts.uri.path(), is_head).await,
    };

    // Every response gets the CORS set and the suffix override, the error
    // statuses included.
    http::decorate_response(&mut response, raw_target);
    http::set_server_name(&mut response, &config.http.server_name);

    if config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            parts.method.to_string(),
            parts.uri.path().to_string(),
        );
        entry.query = parts.uri.query().map(ToString::to_string);
        entry.http_version = http_version_str(parts.version).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = usize::try_from(
            response.body().size_hint().exact().unwrap_or(0),
        )
        .unwrap_or(usize::MAX);
        logger::log_access(&entry, &config.logging.format);
    }

    // Diagnostic report: purely informational, never alters the response
    if config.logging.diagnostics && diagnostics::is_diagnostic_target(raw_target) {
        diagnostics::report_request_file(raw_target).await;
    }

    response
}

/// Check HTTP method and return an early response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

fn http_version_str(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(root: &std::path::Path) -> Config {
        let mut config = Config::load_from("no-such-config-file").unwrap();
        config.server.root = root.to_str().unwrap().to_string();
        config.logging.access_log = false;
        config.logging.diagnostics = false;
        config
    }

    fn request_parts(method: Method, target: &str) -> Parts {
        let req = Request::builder()
            .method(method)
            .uri(target)
            .body(())
            .unwrap();
        req.into_parts().0
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:40000".parse().unwrap()
    }

    #[tokio::test]
    async fn test_get_serves_file_with_override() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("script.js"), "var x = 1;").unwrap();
        let config = test_config(dir.path());

        let parts = request_parts(Method::GET, "/script.js");
        let resp = respond(&parts, &config, peer()).await;

        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers()["Content-Type"],
            "application/javascript; charset=utf-8"
        );
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
    }

    #[tokio::test]
    async fn test_html_override_regardless_of_content() {
        let dir = tempfile::tempdir().unwrap();
        // Content is JSON, but the .html suffix wins
        std::fs::write(dir.path().join("page.html"), "{\"a\":1}").unwrap();
        let config = test_config(dir.path());

        let parts = request_parts(Method::GET, "/page.html");
        let resp = respond(&parts, &config, peer()).await;

        assert_eq!(resp.headers()["Content-Type"], "text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn test_missing_file_is_404_with_cors() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        let parts = request_parts(Method::GET, "/missing.css");
        let resp = respond(&parts, &config, peer()).await;

        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
        assert_eq!(
            resp.headers()["Access-Control-Allow-Methods"],
            "GET, POST, OPTIONS"
        );
        assert_eq!(
            resp.headers()["Access-Control-Allow-Headers"],
            "Content-Type"
        );
    }

    #[tokio::test]
    async fn test_post_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        let parts = request_parts(Method::POST, "/index.html");
        let resp = respond(&parts, &config, peer()).await;

        assert_eq!(resp.status(), 405);
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
    }

    #[tokio::test]
    async fn test_options_gets_204() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        let parts = request_parts(Method::OPTIONS, "/script.js");
        let resp = respond(&parts, &config, peer()).await;

        assert_eq!(resp.status(), 204);
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
    }

    #[tokio::test]
    async fn test_query_string_suppresses_override() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("script.js"), "var x = 1;").unwrap();
        let config = test_config(dir.path());

        let parts = request_parts(Method::GET, "/script.js?v=2");
        let resp = respond(&parts, &config, peer()).await;

        // The file still serves (query is not part of the filesystem path),
        // with its table MIME type and no raw-target override.
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers()["Content-Type"],
            "application/javascript; charset=utf-8"
        );
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
    }

    #[tokio::test]
    async fn test_head_has_empty_body_and_same_headers() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        let config = test_config(dir.path());

        let parts = request_parts(Method::HEAD, "/index.html");
        let resp = respond(&parts, &config, peer()).await;

        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "13");
        assert_eq!(resp.body().size_hint().exact(), Some(0));
    }
}
