// Connection handling module
// Serves a single accepted TCP connection on a spawned local task.

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Config;
use crate::handler;
use crate::logger;

/// Handle a single connection in a spawned task.
///
/// Wraps the TCP stream in `TokioIo`, builds an HTTP/1.1 connection with
/// keep-alive, and serves it with the request handler. Connection errors
/// are logged; they never take the server down.
pub fn handle_connection(stream: tokio::net::TcpStream, peer_addr: SocketAddr, config: Arc<Config>) {
    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(true);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let config = Arc::clone(&config);
                async move { handler::handle_request(req, config, peer_addr).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
