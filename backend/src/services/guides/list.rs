use actix_web::{web, HttpResponse, Responder};
use log::error;
use rusqlite::params;
use serde_json::json;

use common::model::guide::Guide;
use common::requests::ListQuery;

use crate::config::AppConfig;
use crate::db;
use crate::services::{bad_request, list_params, server_error, ListParams};

use super::{categories_for, guide_from_row, GUIDE_COLUMNS};

pub async fn process(
    config: web::Data<AppConfig>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let params = match list_params(&query, &["title", "created_at"], "created_at") {
        Ok(params) => params,
        Err(e) => return bad_request(e),
    };
    match list_guides(&config, &params).await {
        Ok((guides, total)) => HttpResponse::Ok().json(json!({
            "guides": guides,
            "totalCount": total,
            "page": params.page,
            "limit": params.limit,
        })),
        Err(e) => {
            error!("guide list failed: {e}");
            server_error(e)
        }
    }
}

pub async fn list_guides(
    config: &AppConfig,
    params: &ListParams,
) -> Result<(Vec<Guide>, i64), String> {
    let conn = db::open(config)?;
    let total: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM guides WHERE title LIKE ?1 OR description LIKE ?1",
            params![params.pattern],
            |row| row.get(0),
        )
        .map_err(|e| e.to_string())?;

    let sql = format!(
        "SELECT {GUIDE_COLUMNS} FROM guides
         WHERE title LIKE ?1 OR description LIKE ?1
         ORDER BY {} {} LIMIT ?2 OFFSET ?3",
        params.sort, params.order
    );
    let mut stmt = conn.prepare(&sql).map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map(
            params![params.pattern, params.limit, params.offset()],
            guide_from_row,
        )
        .map_err(|e| e.to_string())?;
    let mut guides: Vec<Guide> = rows.filter_map(Result::ok).collect();
    for guide in &mut guides {
        guide.categories = categories_for(&conn, &guide.id)?;
    }
    Ok((guides, total))
}
