use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::error;
use rusqlite::params;
use serde_json::json;

use common::model::guide::{normalize_sections, Guide};
use common::requests::GuidePayload;

use crate::auth;
use crate::config::AppConfig;
use crate::services::{bad_request, is_hex_color, missing_fields_error, not_found, server_error};
use crate::{db, storage};

use super::{load_guide, rebuild_relations};

pub async fn process(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    guide_id: web::Path<String>,
    payload: web::Json<GuidePayload>,
) -> impl Responder {
    if let Err(resp) = auth::require_bearer(&req, &config) {
        return resp;
    }
    let missing = payload.missing_fields();
    if !missing.is_empty() {
        return missing_fields_error(&missing);
    }
    if !payload.color.trim().is_empty() && !is_hex_color(&payload.color) {
        return bad_request(format!("Invalid color: {}", payload.color));
    }
    match update_guide(&config, &guide_id, &payload).await {
        Ok(Some(guide)) => HttpResponse::Ok().json(json!({ "guide": guide })),
        Ok(None) => not_found("Guide not found"),
        Err(e) => {
            error!("guide update failed: {e}");
            server_error(e)
        }
    }
}

/// Full replace. The previously stored image object is deleted only when
/// the incoming image string actually differs from the stored one; the
/// category relation is dropped and recreated from the payload.
pub async fn update_guide(
    config: &AppConfig,
    id: &str,
    payload: &GuidePayload,
) -> Result<Option<Guide>, String> {
    let conn = db::open(config)?;
    let stored_image: String = match conn.query_row(
        "SELECT image FROM guides WHERE id = ?1",
        params![id],
        |row| row.get(0),
    ) {
        Ok(image) => image,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
        Err(e) => return Err(e.to_string()),
    };

    if stored_image != payload.image {
        storage::remove(&config.storage_dir, &stored_image);
    }

    let mut modules = payload.modules.clone();
    normalize_sections(&mut modules);
    let metadata_json = serde_json::to_string(&payload.metadata).map_err(|e| e.to_string())?;
    let modules_json = serde_json::to_string(&modules).map_err(|e| e.to_string())?;

    conn.execute(
        "UPDATE guides
         SET title = ?1, description = ?2, image = ?3, color = ?4,
             is_popular = ?5, metadata = ?6, modules = ?7
         WHERE id = ?8",
        params![
            payload.title,
            payload.description,
            payload.image,
            payload.color,
            payload.is_popular,
            metadata_json,
            modules_json,
            id
        ],
    )
    .map_err(|e| e.to_string())?;
    rebuild_relations(&conn, id, &payload.categories)?;
    load_guide(&conn, id)
}
