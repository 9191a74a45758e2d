//! HTTP protocol layer module
//!
//! Response builders decoupled from specific endpoints.

pub mod response;

pub use response::{json_response, text_response};
