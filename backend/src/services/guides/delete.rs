use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::error;
use rusqlite::params;
use serde_json::json;

use crate::auth;
use crate::config::AppConfig;
use crate::db;
use crate::services::{not_found, server_error};

pub async fn process(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    guide_id: web::Path<String>,
) -> impl Responder {
    if let Err(resp) = auth::require_bearer(&req, &config) {
        return resp;
    }
    match delete_guide(&config, &guide_id).await {
        Ok(true) => HttpResponse::Ok().json(json!({ "success": true })),
        Ok(false) => not_found("Guide not found"),
        Err(e) => {
            error!("guide delete failed: {e}");
            server_error(e)
        }
    }
}

/// Join rows first, then the guide row. The image object is left in
/// storage.
pub async fn delete_guide(config: &AppConfig, id: &str) -> Result<bool, String> {
    let conn = db::open(config)?;
    let exists: bool = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM guides WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )
        .map_err(|e| e.to_string())?;
    if !exists {
        return Ok(false);
    }
    conn.execute(
        "DELETE FROM guide_categories WHERE guide_id = ?1",
        params![id],
    )
    .map_err(|e| e.to_string())?;
    conn.execute("DELETE FROM guides WHERE id = ?1", params![id])
        .map_err(|e| e.to_string())?;
    Ok(true)
}
