//! Guide endpoints under `/api/guides`.
//!
//! Guides store their nested metadata and modules as JSON columns; the
//! category relation lives in `guide_categories` and is flattened into
//! `categories` snapshots on every read. Writes rebuild that relation
//! wholesale: delete all rows for the guide, insert the payload's set.

mod create;
mod delete;
mod get;
mod list;
mod update;

use actix_web::{web, Scope};
use rusqlite::{params, Connection};

use common::model::guide::{CategorySnapshot, Guide};

const API_PATH: &str = "/api/guides";

pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("", web::get().to(list::process))
        .route("", web::post().to(create::process))
        .route("/{guide_id}", web::get().to(get::process))
        .route("/{guide_id}", web::put().to(update::process))
        .route("/{guide_id}", web::delete().to(delete::process))
}

pub(crate) const GUIDE_COLUMNS: &str =
    "id, title, description, image, color, is_popular, metadata, modules, created_at";

pub(crate) fn guide_from_row(row: &rusqlite::Row) -> rusqlite::Result<Guide> {
    let metadata_json: String = row.get(6)?;
    let modules_json: String = row.get(7)?;
    let metadata = serde_json::from_str(&metadata_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(6, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let modules = serde_json::from_str(&modules_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(7, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Guide {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        image: row.get(3)?,
        color: row.get(4)?,
        is_popular: row.get(5)?,
        categories: Vec::new(),
        metadata,
        modules,
        created_at: row.get(8)?,
    })
}

pub(crate) fn categories_for(
    conn: &Connection,
    guide_id: &str,
) -> Result<Vec<CategorySnapshot>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT c.id, c.title, c.color
             FROM guide_categories gc
             JOIN categories c ON c.id = gc.category_id
             WHERE gc.guide_id = ?1
             ORDER BY gc.position",
        )
        .map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map(params![guide_id], |row| {
            Ok(CategorySnapshot {
                id: row.get(0)?,
                title: row.get(1)?,
                color: row.get(2)?,
            })
        })
        .map_err(|e| e.to_string())?;
    Ok(rows.filter_map(Result::ok).collect())
}

pub(crate) fn load_guide(conn: &Connection, id: &str) -> Result<Option<Guide>, String> {
    let sql = format!("SELECT {GUIDE_COLUMNS} FROM guides WHERE id = ?1");
    match conn.query_row(&sql, params![id], guide_from_row) {
        Ok(mut guide) => {
            guide.categories = categories_for(conn, id)?;
            Ok(Some(guide))
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.to_string()),
    }
}

/// Delete-all-then-insert; never an incremental patch.
pub(crate) fn rebuild_relations(
    conn: &Connection,
    guide_id: &str,
    categories: &[CategorySnapshot],
) -> Result<(), String> {
    conn.execute(
        "DELETE FROM guide_categories WHERE guide_id = ?1",
        params![guide_id],
    )
    .map_err(|e| e.to_string())?;
    for (position, category) in categories.iter().enumerate() {
        conn.execute(
            "INSERT OR REPLACE INTO guide_categories (guide_id, category_id, position)
             VALUES (?1, ?2, ?3)",
            params![guide_id, category.id, position as i64],
        )
        .map_err(|e| e.to_string())?;
    }
    Ok(())
}
