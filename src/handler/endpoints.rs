//! Endpoint handlers
//!
//! Pure functions from request data to responses.

use crate::http::response::{json_response, text_response};
use chrono::{SecondsFormat, Utc};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SaludoBody {
    mensaje: String,
    timestamp: String,
    status: String,
}

#[derive(Debug, Serialize)]
struct UsuarioBody {
    mensaje: String,
    usuario: String,
    timestamp: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    mensaje: String,
}

/// Current time in the ISO-8601 form used by the JSON responses:
/// UTC, millisecond precision, `Z` suffix.
fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `GET /`
pub fn hola() -> Response<Full<Bytes>> {
    text_response("¡Hola Mundo desde Express!")
}

/// `GET /api/saludo`
pub fn saludo() -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &SaludoBody {
            mensaje: "Hola desde el API".to_string(),
            timestamp: iso_timestamp(),
            status: "success".to_string(),
        },
    )
}

/// `GET /api/usuario/:nombre` — echoes the captured segment verbatim.
pub fn usuario(nombre: &str) -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &UsuarioBody {
            mensaje: format!("¡Hola {nombre}!"),
            usuario: nombre.to_string(),
            timestamp: iso_timestamp(),
        },
    )
}

/// Catch-all for any method/path combination no route matched.
pub fn not_found() -> Response<Full<Bytes>> {
    json_response(
        StatusCode::NOT_FOUND,
        &ErrorBody {
            error: "Ruta no encontrada".to_string(),
            mensaje: "La ruta que buscas no existe".to_string(),
        },
    )
}
