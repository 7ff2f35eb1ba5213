use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::error;
use rusqlite::params;
use serde_json::json;

use common::model::ai_model::AiModel;
use common::requests::AiModelPayload;

use crate::auth;
use crate::config::AppConfig;
use crate::db;
use crate::services::{missing_fields_error, not_found, server_error};

use super::load_model;

pub async fn process(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    model_id: web::Path<String>,
    payload: web::Json<AiModelPayload>,
) -> impl Responder {
    if let Err(resp) = auth::require_bearer(&req, &config) {
        return resp;
    }
    let missing = payload.missing_fields();
    if !missing.is_empty() {
        return missing_fields_error(&missing);
    }
    match update_model(&config, &model_id, &payload).await {
        Ok(Some(model)) => HttpResponse::Ok().json(json!({ "model": model })),
        Ok(None) => not_found("Model not found"),
        Err(e) => {
            error!("model update failed: {e}");
            server_error(e)
        }
    }
}

pub async fn update_model(
    config: &AppConfig,
    id: &str,
    payload: &AiModelPayload,
) -> Result<Option<AiModel>, String> {
    let conn = db::open(config)?;
    let pricing = payload.pricing.clone().unwrap_or_default();
    let affected = conn
        .execute(
            "UPDATE ai_models
             SET name = ?1, company = ?2, description = ?3, strengths = ?4,
                 limitations = ?5, use_cases = ?6, pricing = ?7, link = ?8
             WHERE id = ?9",
            params![
                payload.name,
                payload.company,
                payload.description,
                serde_json::to_string(&payload.strengths).map_err(|e| e.to_string())?,
                serde_json::to_string(&payload.limitations).map_err(|e| e.to_string())?,
                serde_json::to_string(&payload.use_cases).map_err(|e| e.to_string())?,
                serde_json::to_string(&pricing).map_err(|e| e.to_string())?,
                payload.link,
                id
            ],
        )
        .map_err(|e| e.to_string())?;
    if affected == 0 {
        return Ok(None);
    }
    load_model(&conn, id)
}
