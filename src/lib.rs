//! Minimal HTTP demo server: three GET routes plus a catch-all 404.
//!
//! The binary in `main.rs` wires configuration, signal handling, and the
//! accept loop together; everything else lives in these modules.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;
