// Server loop module
// Accepts connections until the shutdown signal fires

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::Config;
use crate::logger;

/// Run the accept loop.
///
/// Returns when `shutdown` is notified so the process can exit 0.
/// In-flight connections finish in their own spawned tasks; accept errors
/// are logged and the loop continues.
pub async fn run(listener: TcpListener, config: Arc<Config>, shutdown: Arc<Notify>) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &config);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                logger::log_shutdown();
                return;
            }
        }
    }
}
