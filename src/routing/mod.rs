//! Routing module
//!
//! Declaration-order route matching over a fixed table:
//! - Path patterns with literal and `:param` placeholder segments
//! - Exact method comparison
//! - First match wins; no match means the catch-all fires

mod matcher;

pub use matcher::{match_route, Endpoint, PathParams, Route, RoutePattern};
