// Server module entry point
// Listener creation, accept loop, connection serving, and signal handling

pub mod connection;
pub mod listener;
pub mod signal;

// Rust does not allow `loop` as a module name (keyword), so use server_loop
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used items
pub use listener::create_listener;
pub use server_loop::run;
