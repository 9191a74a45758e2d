//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: declares the route table,
//! matches incoming requests, and dispatches to the endpoint handlers.

use crate::config::Config;
use crate::handler::endpoints;
use crate::logger;
use crate::routing::{match_route, Endpoint, Route};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::{Arc, OnceLock};

/// The fixed route table, in declaration order. First match wins; anything
/// that falls through is answered by the catch-all 404.
fn routes() -> &'static [Route] {
    static ROUTES: OnceLock<Vec<Route>> = OnceLock::new();
    ROUTES.get_or_init(|| {
        vec![
            Route::get("/", Endpoint::Hola),
            Route::get("/api/saludo", Endpoint::Saludo),
            Route::get("/api/usuario/:nombre", Endpoint::Usuario),
        ]
    })
}

/// Main entry point for HTTP request handling.
///
/// No route reads the request body, so the incoming body is never polled.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    if config.access_log {
        logger::log_request(req.method(), req.uri(), req.version());
    }
    Ok(respond(req.method(), req.uri().path()))
}

/// Dispatch a (method, path) pair to its endpoint handler.
pub fn respond(method: &Method, path: &str) -> Response<Full<Bytes>> {
    match match_route(method, path, routes()) {
        Some((route, params)) => match route.endpoint {
            Endpoint::Hola => endpoints::hola(),
            Endpoint::Saludo => endpoints::saludo(),
            Endpoint::Usuario => {
                let nombre = params.get("nombre").map_or("", String::as_str);
                endpoints::usuario(nombre)
            }
        },
        None => endpoints::not_found(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.expect("body").to_bytes();
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    fn content_type(resp: &Response<Full<Bytes>>) -> String {
        resp.headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    async fn json_body(resp: Response<Full<Bytes>>) -> serde_json::Value {
        serde_json::from_str(&body_string(resp).await).expect("valid JSON body")
    }

    #[tokio::test]
    async fn test_root_returns_plain_text_greeting() {
        let resp = respond(&Method::GET, "/");
        assert_eq!(resp.status(), 200);
        assert!(content_type(&resp).starts_with("text/plain"));
        assert_eq!(body_string(resp).await, "¡Hola Mundo desde Express!");
    }

    #[tokio::test]
    async fn test_saludo_returns_json_with_recent_timestamp() {
        let resp = respond(&Method::GET, "/api/saludo");
        assert_eq!(resp.status(), 200);
        assert_eq!(content_type(&resp), "application/json");

        let body = json_body(resp).await;
        assert_eq!(body["mensaje"], "Hola desde el API");
        assert_eq!(body["status"], "success");

        let ts = body["timestamp"].as_str().expect("timestamp string");
        let parsed = chrono::DateTime::parse_from_rfc3339(ts).expect("ISO-8601 timestamp");
        let age = chrono::Utc::now().signed_duration_since(parsed);
        assert!(age.num_seconds().abs() < 5);
    }

    #[tokio::test]
    async fn test_usuario_echoes_name() {
        let resp = respond(&Method::GET, "/api/usuario/Ana");
        assert_eq!(resp.status(), 200);
        assert_eq!(content_type(&resp), "application/json");

        let body = json_body(resp).await;
        assert_eq!(body["mensaje"], "¡Hola Ana!");
        assert_eq!(body["usuario"], "Ana");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_usuario_accepts_empty_name() {
        let resp = respond(&Method::GET, "/api/usuario/");
        assert_eq!(resp.status(), 200);

        let body = json_body(resp).await;
        assert_eq!(body["mensaje"], "¡Hola !");
        assert_eq!(body["usuario"], "");
    }

    #[tokio::test]
    async fn test_usuario_echoes_special_characters_verbatim() {
        for nombre in ["José", "a.b-c_d", "Jos%C3%A9", "ñandú"] {
            let resp = respond(&Method::GET, &format!("/api/usuario/{nombre}"));
            assert_eq!(resp.status(), 200);

            let body = json_body(resp).await;
            assert_eq!(body["usuario"], *nombre);
            assert_eq!(body["mensaje"], format!("¡Hola {nombre}!"));
        }
    }

    #[tokio::test]
    async fn test_unmatched_routes_get_exact_404_payload() {
        let cases = [
            (Method::POST, "/"),
            (Method::GET, "/unknown"),
            (Method::GET, "/api"),
            (Method::GET, "/api/saludo/extra"),
            (Method::GET, "/api/usuario"),
            (Method::GET, "/api/usuario/a/b"),
            (Method::PUT, "/api/usuario/Ana"),
            (Method::DELETE, "/api/saludo"),
        ];

        for (method, path) in cases {
            let resp = respond(&method, path);
            assert_eq!(resp.status(), 404, "{method} {path}");
            assert_eq!(content_type(&resp), "application/json");
            assert_eq!(
                body_string(resp).await,
                r#"{"error":"Ruta no encontrada","mensaje":"La ruta que buscas no existe"}"#
            );
        }
    }

    #[tokio::test]
    async fn test_repeated_requests_are_identical() {
        let first = body_string(respond(&Method::GET, "/")).await;
        let second = body_string(respond(&Method::GET, "/")).await;
        assert_eq!(first, second);

        // Parameterized responses match structurally, timestamp excepted
        let a = json_body(respond(&Method::GET, "/api/usuario/Ana")).await;
        let b = json_body(respond(&Method::GET, "/api/usuario/Ana")).await;
        assert_eq!(a["mensaje"], b["mensaje"]);
        assert_eq!(a["usuario"], b["usuario"]);
    }
}
