//! Bearer-token gate for mutating routes.
//!
//! Session issuance belongs to the hosted auth provider; this layer only
//! verifies that the forwarded token matches the configured admin token. An
//! absent or malformed header and a wrong token all answer 401 with the
//! usual `{"error"}` body.

use actix_web::{HttpRequest, HttpResponse};

use crate::config::AppConfig;

pub fn require_bearer(req: &HttpRequest, config: &AppConfig) -> Result<(), HttpResponse> {
    let header = match req
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
    {
        Some(header) => header,
        None => return Err(unauthorized("Missing Authorization header")),
    };
    let token = match header.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => token.trim(),
        _ => return Err(unauthorized("Malformed Authorization header")),
    };
    match config.admin_token.as_deref() {
        Some(expected) if expected == token => Ok(()),
        _ => Err(unauthorized("Invalid token")),
    }
}

fn unauthorized(message: &str) -> HttpResponse {
    HttpResponse::Unauthorized().json(serde_json::json!({ "error": message }))
}
