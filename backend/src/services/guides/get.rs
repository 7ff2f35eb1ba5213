use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde_json::json;

use common::model::guide::Guide;

use crate::config::AppConfig;
use crate::db;
use crate::services::{not_found, server_error};

use super::load_guide;

pub async fn process(config: web::Data<AppConfig>, guide_id: web::Path<String>) -> impl Responder {
    match get_guide(&config, &guide_id).await {
        Ok(Some(guide)) => HttpResponse::Ok().json(json!({ "guide": guide })),
        Ok(None) => not_found("Guide not found"),
        Err(e) => {
            error!("guide get failed: {e}");
            server_error(e)
        }
    }
}

pub async fn get_guide(config: &AppConfig, id: &str) -> Result<Option<Guide>, String> {
    let conn = db::open(config)?;
    load_guide(&conn, id)
}
