//! Route matching module
//!
//! Implements ordered method + path matching for the route table.

use hyper::Method;
use std::collections::HashMap;

/// Captured path parameters, keyed by placeholder name
pub type PathParams = HashMap<String, String>;

/// One segment of a route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed path pattern such as `/api/usuario/:nombre`
#[derive(Debug, Clone)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern string. Segments starting with `:` become named
    /// placeholders; everything else matches literally.
    pub fn parse(pattern: &str) -> Self {
        let segments = split_segments(pattern)
            .into_iter()
            .map(|s| {
                s.strip_prefix(':').map_or_else(
                    || Segment::Literal(s.to_string()),
                    |name| Segment::Param(name.to_string()),
                )
            })
            .collect();
        Self { segments }
    }

    /// Match a request path against this pattern.
    ///
    /// Matching is per-segment: literals compare byte-for-byte, placeholders
    /// capture the segment verbatim (no decoding, empty segments allowed).
    /// Segment counts must be equal, so `/api/usuario` and `/api/usuario/a/b`
    /// both miss `/api/usuario/:nombre`.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let parts = split_segments(path);
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = PathParams::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) => {
                    if lit != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(params)
    }
}

/// Split a path into segments. The root path has zero segments; a trailing
/// slash yields a final empty segment.
fn split_segments(path: &str) -> Vec<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

/// A (method, path pattern) pair bound to an endpoint
#[derive(Debug, Clone)]
pub struct Route {
    pub method: Method,
    pub pattern: RoutePattern,
    pub endpoint: Endpoint,
}

impl Route {
    pub fn get(pattern: &str, endpoint: Endpoint) -> Self {
        Self {
            method: Method::GET,
            pattern: RoutePattern::parse(pattern),
            endpoint,
        }
    }
}

/// Endpoints the router can dispatch to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /` plain-text greeting
    Hola,
    /// `GET /api/saludo` JSON greeting with timestamp
    Saludo,
    /// `GET /api/usuario/:nombre` parameterized JSON greeting
    Usuario,
}

/// Find the first route whose method and pattern match, in declaration order.
pub fn match_route<'a>(
    method: &Method,
    path: &str,
    routes: &'a [Route],
) -> Option<(&'a Route, PathParams)> {
    routes.iter().find_map(|route| {
        if route.method != *method {
            return None;
        }
        route.pattern.matches(path).map(|params| (route, params))
    })
}
