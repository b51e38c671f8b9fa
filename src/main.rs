use std::sync::Arc;

use devserve::config::Config;
use devserve::{diagnostics, logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let root = cfg.root_dir();

    // Informational check for the conventional project files, then the
    // banner, both before binding the socket.
    diagnostics::startup_file_check(&root).await;

    let display_root = root.canonicalize().unwrap_or_else(|_| root.clone());
    logger::log_startup_banner(addr.port(), &display_root);

    let listener = server::create_reusable_listener(addr)?;

    let signal_handler = Arc::new(server::SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signal_handler));

    let config = Arc::new(cfg);
    let shutdown = Arc::clone(&signal_handler.shutdown);

    // LocalSet for spawn_local support
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::run_server(listener, config, shutdown))
        .await
}
