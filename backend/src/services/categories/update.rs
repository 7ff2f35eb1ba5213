use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::error;
use rusqlite::params;
use serde_json::json;

use common::model::category::Category;
use common::requests::CategoryPayload;

use crate::auth;
use crate::config::AppConfig;
use crate::db;
use crate::services::{bad_request, is_hex_color, missing_fields_error, not_found, server_error};

use super::{link_guides, load_category};

pub async fn process(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    category_id: web::Path<String>,
    payload: web::Json<CategoryPayload>,
) -> impl Responder {
    if let Err(resp) = auth::require_bearer(&req, &config) {
        return resp;
    }
    let missing = payload.missing_fields();
    if !missing.is_empty() {
        return missing_fields_error(&missing);
    }
    if !is_hex_color(&payload.color) {
        return bad_request(format!("Invalid color: {}", payload.color));
    }
    match update_category(&config, &category_id, &payload).await {
        Ok(Some(category)) => HttpResponse::Ok().json(json!({ "category": category })),
        Ok(None) => not_found("Category not found"),
        Err(e) => {
            error!("category update failed: {e}");
            server_error(e)
        }
    }
}

/// Full replace: every column is overwritten and the guide relation is
/// dropped and recreated from the payload.
pub async fn update_category(
    config: &AppConfig,
    id: &str,
    payload: &CategoryPayload,
) -> Result<Option<Category>, String> {
    let conn = db::open(config)?;
    let affected = conn
        .execute(
            "UPDATE categories
             SET title = ?1, description = ?2, icon_url = ?3, color = ?4,
                 featured = ?5, coming_soon = ?6
             WHERE id = ?7",
            params![
                payload.title,
                payload.description,
                payload.icon_url,
                payload.color,
                payload.featured,
                payload.coming_soon,
                id
            ],
        )
        .map_err(|e| e.to_string())?;
    if affected == 0 {
        return Ok(None);
    }
    conn.execute(
        "DELETE FROM guide_categories WHERE category_id = ?1",
        params![id],
    )
    .map_err(|e| e.to_string())?;
    link_guides(&conn, id, &payload.guides)?;
    load_category(&conn, id)
}
