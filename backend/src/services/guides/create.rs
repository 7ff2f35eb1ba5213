use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::error;
use rusqlite::params;
use serde_json::json;
use uuid::Uuid;

use common::model::guide::{normalize_sections, Guide};
use common::requests::GuidePayload;

use crate::auth;
use crate::config::AppConfig;
use crate::db;
use crate::services::{bad_request, is_hex_color, missing_fields_error, server_error};

use super::{load_guide, rebuild_relations};

pub async fn process(
    req: HttpRequest,
    config: web::Data<AppConfig>,
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
    match create_guide(&config, &payload).await {
        Ok(guide) => HttpResponse::Ok().json(json!({ "guide": guide })),
        Err(e) => {
            error!("guide create failed: {e}");
            server_error(e)
        }
    }
}

pub async fn create_guide(config: &AppConfig, payload: &GuidePayload) -> Result<Guide, String> {
    let conn = db::open(config)?;
    let id = Uuid::new_v4().to_string();

    // Section bodies are stored in the list-of-paragraphs form.
    let mut modules = payload.modules.clone();
    normalize_sections(&mut modules);
    let metadata_json = serde_json::to_string(&payload.metadata).map_err(|e| e.to_string())?;
    let modules_json = serde_json::to_string(&modules).map_err(|e| e.to_string())?;

    conn.execute(
        "INSERT INTO guides (id, title, description, image, color, is_popular, metadata, modules)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            id,
            payload.title,
            payload.description,
            payload.image,
            payload.color,
            payload.is_popular,
            metadata_json,
            modules_json
        ],
    )
    .map_err(|e| e.to_string())?;
    rebuild_relations(&conn, &id, &payload.categories)?;
    match load_guide(&conn, &id)? {
        Some(guide) => Ok(guide),
        None => Err("Guide missing after insert".to_string()),
    }
}
