// Server loop module
// Accept loop with graceful shutdown on signal.

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::handle_connection;
use crate::config::Config;
use crate::logger;

/// Run the accept loop until the shutdown signal fires.
///
/// Each accepted connection is served on its own local task; accept errors
/// are logged and the loop keeps going.
pub async fn run_server(
    listener: TcpListener,
    config: Arc<Config>,
    shutdown: Arc<Notify>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        handle_connection(stream, peer_addr, Arc::clone(&config));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                logger::log_shutdown();
                return Ok(());
            }
        }
    }
}
