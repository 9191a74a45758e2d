// Signal handling module
//
// SIGINT (Ctrl+C) triggers graceful shutdown; no other signals are handled.

use std::sync::Arc;
use tokio::sync::Notify;

/// Signal handler state
pub struct SignalHandler {
    /// Notified once when shutdown has been requested
    pub shutdown: Arc<Notify>,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(Notify::new()),
        }
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Start the signal listener task (Unix).
#[cfg(unix)]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigint = match signal(SignalKind::interrupt()) {
            Ok(s) => s,
            Err(e) => {
                crate::logger::log_error(&format!("Failed to register SIGINT handler: {e}"));
                return;
            }
        };

        sigint.recv().await;
        // notify_one stores a permit, so the shutdown is not lost if the
        // accept loop is mid-iteration
        handler.shutdown.notify_one();
    });
}

/// Windows fallback: Ctrl+C only.
#[cfg(not(unix))]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handler.shutdown.notify_one();
        }
    });
}
