//! Request handler module
//!
//! Route table declaration, request dispatch, and the endpoint handlers.

pub mod endpoints;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
