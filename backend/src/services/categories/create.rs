use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::error;
use rusqlite::params;
use serde_json::json;
use uuid::Uuid;

use common::model::category::Category;
use common::requests::CategoryPayload;

use crate::auth;
use crate::config::AppConfig;
use crate::db;
use crate::services::{bad_request, is_hex_color, missing_fields_error, server_error};

use super::{link_guides, load_category};

pub async fn process(
    req: HttpRequest,
    config: web::Data<AppConfig>,
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
    match create_category(&config, &payload).await {
        Ok(category) => HttpResponse::Ok().json(json!({ "category": category })),
        Err(e) => {
            error!("category create failed: {e}");
            server_error(e)
        }
    }
}

pub async fn create_category(
    config: &AppConfig,
    payload: &CategoryPayload,
) -> Result<Category, String> {
    let conn = db::open(config)?;
    let id = Uuid::new_v4().to_string();
    conn.execute(
        "INSERT INTO categories (id, title, description, icon_url, color, featured, coming_soon)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            id,
            payload.title,
            payload.description,
            payload.icon_url,
            payload.color,
            payload.featured,
            payload.coming_soon
        ],
    )
    .map_err(|e| e.to_string())?;
    link_guides(&conn, &id, &payload.guides)?;
    match load_category(&conn, &id)? {
        Some(category) => Ok(category),
        None => Err("Category missing after insert".to_string()),
    }
}
