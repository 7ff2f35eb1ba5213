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
    model_id: web::Path<String>,
) -> impl Responder {
    if let Err(resp) = auth::require_bearer(&req, &config) {
        return resp;
    }
    match delete_model(&config, &model_id).await {
        Ok(true) => HttpResponse::Ok().json(json!({ "success": true })),
        Ok(false) => not_found("Model not found"),
        Err(e) => {
            error!("model delete failed: {e}");
            server_error(e)
        }
    }
}

pub async fn delete_model(config: &AppConfig, id: &str) -> Result<bool, String> {
    let conn = db::open(config)?;
    let affected = conn
        .execute("DELETE FROM ai_models WHERE id = ?1", params![id])
        .map_err(|e| e.to_string())?;
    Ok(affected > 0)
}
