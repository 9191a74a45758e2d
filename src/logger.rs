use hyper::{Method, Uri, Version};
use std::net::SocketAddr;

pub fn log_server_start(port: u16) {
    println!("🚀 Servidor ejecutándose en http://localhost:{port}");
    println!("📡 API disponible en http://localhost:{port}/api/saludo");
}

pub fn log_shutdown() {
    println!("\n🛑 Cerrando servidor...");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[Request] {method} {uri} {version:?}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}
