use actix_web::{web, HttpResponse, Responder};
use log::error;
use rusqlite::params;
use serde_json::json;

use common::model::ai_model::AiModel;
use common::requests::ListQuery;

use crate::config::AppConfig;
use crate::db;
use crate::services::{bad_request, list_params, server_error, ListParams};

use super::{model_from_row, MODEL_COLUMNS};

pub async fn process(
    config: web::Data<AppConfig>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let params = match list_params(&query, &["name", "created_at"], "created_at") {
        Ok(params) => params,
        Err(e) => return bad_request(e),
    };
    match list_models(&config, &params).await {
        Ok((models, total)) => HttpResponse::Ok().json(json!({
            "models": models,
            "totalCount": total,
            "page": params.page,
            "limit": params.limit,
        })),
        Err(e) => {
            error!("model list failed: {e}");
            server_error(e)
        }
    }
}

pub async fn list_models(
    config: &AppConfig,
    params: &ListParams,
) -> Result<(Vec<AiModel>, i64), String> {
    let conn = db::open(config)?;
    let total: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM ai_models
             WHERE name LIKE ?1 OR description LIKE ?1 OR company LIKE ?1",
            params![params.pattern],
            |row| row.get(0),
        )
        .map_err(|e| e.to_string())?;

    let sql = format!(
        "SELECT {MODEL_COLUMNS} FROM ai_models
         WHERE name LIKE ?1 OR description LIKE ?1 OR company LIKE ?1
         ORDER BY {} {} LIMIT ?2 OFFSET ?3",
        params.sort, params.order
    );
    let mut stmt = conn.prepare(&sql).map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map(
            params![params.pattern, params.limit, params.offset()],
            model_from_row,
        )
        .map_err(|e| e.to_string())?;
    Ok((rows.filter_map(Result::ok).collect(), total))
}
