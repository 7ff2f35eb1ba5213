use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::error;
use rusqlite::params;
use serde_json::json;

use crate::auth;
use crate::config::AppConfig;
use crate::services::{not_found, server_error};
use crate::{db, storage};

pub async fn process(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    category_id: web::Path<String>,
) -> impl Responder {
    if let Err(resp) = auth::require_bearer(&req, &config) {
        return resp;
    }
    match delete_category(&config, &category_id).await {
        Ok(true) => HttpResponse::Ok().json(json!({ "success": true })),
        Ok(false) => not_found("Category not found"),
        Err(e) => {
            error!("category delete failed: {e}");
            server_error(e)
        }
    }
}

/// Cascade order: the icon object first (tolerant of a file that is already
/// gone), then the join rows, then the category row.
pub async fn delete_category(config: &AppConfig, id: &str) -> Result<bool, String> {
    let conn = db::open(config)?;
    let icon_url: String = match conn.query_row(
        "SELECT icon_url FROM categories WHERE id = ?1",
        params![id],
        |row| row.get(0),
    ) {
        Ok(icon_url) => icon_url,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(false),
        Err(e) => return Err(e.to_string()),
    };

    storage::remove(&config.storage_dir, &icon_url);

    conn.execute(
        "DELETE FROM guide_categories WHERE category_id = ?1",
        params![id],
    )
    .map_err(|e| e.to_string())?;
    conn.execute("DELETE FROM categories WHERE id = ?1", params![id])
        .map_err(|e| e.to_string())?;
    Ok(true)
}
