use actix_web::{web, HttpResponse, Responder};
use log::error;
use rusqlite::params;
use serde_json::json;

use common::model::category::Category;
use common::requests::ListQuery;

use crate::config::AppConfig;
use crate::db;
use crate::services::{bad_request, list_params, server_error, ListParams};

use super::{category_from_row, guide_ids_for, CATEGORY_COLUMNS};

pub async fn process(
    config: web::Data<AppConfig>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let params = match list_params(&query, &["title", "created_at"], "created_at") {
        Ok(params) => params,
        Err(e) => return bad_request(e),
    };
    match list_categories(&config, &params).await {
        Ok((categories, total)) => HttpResponse::Ok().json(json!({
            "categories": categories,
            "totalCount": total,
            "page": params.page,
            "limit": params.limit,
        })),
        Err(e) => {
            error!("category list failed: {e}");
            server_error(e)
        }
    }
}

pub async fn list_categories(
    config: &AppConfig,
    params: &ListParams,
) -> Result<(Vec<Category>, i64), String> {
    let conn = db::open(config)?;
    let total: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM categories WHERE title LIKE ?1 OR description LIKE ?1",
            params![params.pattern],
            |row| row.get(0),
        )
        .map_err(|e| e.to_string())?;

    let sql = format!(
        "SELECT {CATEGORY_COLUMNS} FROM categories
         WHERE title LIKE ?1 OR description LIKE ?1
         ORDER BY {} {} LIMIT ?2 OFFSET ?3",
        params.sort, params.order
    );
    let mut stmt = conn.prepare(&sql).map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map(
            params![params.pattern, params.limit, params.offset()],
            category_from_row,
        )
        .map_err(|e| e.to_string())?;
    let mut categories: Vec<Category> = rows.filter_map(Result::ok).collect();
    for category in &mut categories {
        category.guides = guide_ids_for(&conn, &category.id)?;
    }
    Ok((categories, total))
}
