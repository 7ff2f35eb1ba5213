use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde_json::json;

use crate::config::AppConfig;
use crate::db;
use crate::services::{not_found, server_error};

use super::load_category;

pub async fn process(
    config: web::Data<AppConfig>,
    category_id: web::Path<String>,
) -> impl Responder {
    match get_category(&config, &category_id).await {
        Ok(Some(category)) => HttpResponse::Ok().json(json!({ "category": category })),
        Ok(None) => not_found("Category not found"),
        Err(e) => {
            error!("category get failed: {e}");
            server_error(e)
        }
    }
}

pub async fn get_category(
    config: &AppConfig,
    id: &str,
) -> Result<Option<common::model::category::Category>, String> {
    let conn = db::open(config)?;
    load_category(&conn, id)
}
