use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::error;
use rusqlite::params;
use serde_json::json;
use uuid::Uuid;

use common::model::ai_model::AiModel;
use common::requests::AiModelPayload;

use crate::auth;
use crate::config::AppConfig;
use crate::db;
use crate::services::{missing_fields_error, server_error};

use super::load_model;

pub async fn process(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    payload: web::Json<AiModelPayload>,
) -> impl Responder {
    if let Err(resp) = auth::require_bearer(&req, &config) {
        return resp;
    }
    let missing = payload.missing_fields();
    if !missing.is_empty() {
        return missing_fields_error(&missing);
    }
    match create_model(&config, &payload).await {
        Ok(model) => HttpResponse::Ok().json(json!({ "model": model })),
        Err(e) => {
            error!("model create failed: {e}");
            server_error(e)
        }
    }
}

pub async fn create_model(config: &AppConfig, payload: &AiModelPayload) -> Result<AiModel, String> {
    let conn = db::open(config)?;
    let id = Uuid::new_v4().to_string();
    let pricing = payload.pricing.clone().unwrap_or_default();
    conn.execute(
        "INSERT INTO ai_models (id, name, company, description, strengths, limitations,
                                use_cases, pricing, link)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            id,
            payload.name,
            payload.company,
            payload.description,
            serde_json::to_string(&payload.strengths).map_err(|e| e.to_string())?,
            serde_json::to_string(&payload.limitations).map_err(|e| e.to_string())?,
            serde_json::to_string(&payload.use_cases).map_err(|e| e.to_string())?,
            serde_json::to_string(&pricing).map_err(|e| e.to_string())?,
            payload.link
        ],
    )
    .map_err(|e| e.to_string())?;
    match load_model(&conn, &id)? {
        Some(model) => Ok(model),
        None => Err("Model missing after insert".to_string()),
    }
}
