use std::sync::Arc;

use hola_server::config::Config;
use hola_server::server::signal::{self, SignalHandler};
use hola_server::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_listener(addr)?;

    let signals = Arc::new(SignalHandler::new());
    signal::start_signal_handler(Arc::clone(&signals));

    logger::log_server_start(cfg.port);

    let shutdown = Arc::clone(&signals.shutdown);
    server::run(listener, Arc::new(cfg), shutdown).await;
    Ok(())
}
