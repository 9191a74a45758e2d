// Connection handling module
// Accepts a single TCP connection and serves it with hyper

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;

use crate::config::Config;
use crate::handler;
use crate::logger;

/// Accept a connection and serve it in a spawned task.
///
/// Every request on the connection goes through `handler::handle_request`;
/// the service is infallible, so the only errors surfaced here are
/// transport-level ones from hyper.
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    config: &Arc<Config>,
) {
    if config.access_log {
        logger::log_connection_accepted(&peer_addr);
    }

    let config = Arc::clone(config);
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().keep_alive(true).serve_connection(
            io,
            service_fn(move |req| {
                let config = Arc::clone(&config);
                async move { handler::handle_request(req, config).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
