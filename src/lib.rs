//! devserve - a local development HTTP static file server
//!
//! Serves a directory over HTTP/1 with permissive CORS headers, explicit
//! Content-Type overrides for `.js`/`.css`/`.html` targets, and per-request
//! file diagnostics (size, byte-order-mark detection) on stdout.

pub mod config;
pub mod diagnostics;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
