use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde_json::json;

use common::model::ai_model::AiModel;

use crate::config::AppConfig;
use crate::db;
use crate::services::{not_found, server_error};

use super::load_model;

pub async fn process(config: web::Data<AppConfig>, model_id: web::Path<String>) -> impl Responder {
    match get_model(&config, &model_id).await {
        Ok(Some(model)) => HttpResponse::Ok().json(json!({ "model": model })),
        Ok(None) => not_found("Model not found"),
        Err(e) => {
            error!("model get failed: {e}");
            server_error(e)
        }
    }
}

pub async fn get_model(config: &AppConfig, id: &str) -> Result<Option<AiModel>, String> {
    let conn = db::open(config)?;
    load_model(&conn, id)
}
