//! # Category Service Module
//!
//! Aggregates the API endpoints for catalog categories under
//! `/api/categories`, directing requests to the handler logic in the
//! sub-modules.
//!
//! ## Registered routes
//!
//! *   **`GET /`** — `list::process`: paginated listing with substring
//!     search over title and description and whitelisted sorting.
//! *   **`POST /`** — `create::process`: creates a category from a
//!     `CategoryPayload`; a `guides` array creates join rows immediately.
//! *   **`GET /{category_id}`** — `get::process`: one category, including
//!     the ids of the guides linked to it.
//! *   **`PUT /{category_id}`** — `update::process`: full replace; the
//!     guide relation is rebuilt wholesale from the payload.
//! *   **`DELETE /{category_id}`** — `delete::process`: removes the icon
//!     from storage (tolerant of an already-missing file), the join rows,
//!     and then the row itself.

mod create;
mod delete;
mod get;
mod list;
mod update;

use actix_web::{web, Scope};
use rusqlite::{params, Connection};

use common::model::category::Category;

const API_PATH: &str = "/api/categories";

pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("", web::get().to(list::process))
        .route("", web::post().to(create::process))
        .route("/{category_id}", web::get().to(get::process))
        .route("/{category_id}", web::put().to(update::process))
        .route("/{category_id}", web::delete().to(delete::process))
}

pub(crate) const CATEGORY_COLUMNS: &str =
    "id, title, description, icon_url, color, featured, coming_soon, created_at";

pub(crate) fn category_from_row(row: &rusqlite::Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        icon_url: row.get(3)?,
        color: row.get(4)?,
        featured: row.get(5)?,
        coming_soon: row.get(6)?,
        guides: Vec::new(),
        created_at: row.get(7)?,
    })
}

pub(crate) fn guide_ids_for(conn: &Connection, category_id: &str) -> Result<Vec<String>, String> {
    let mut stmt = conn
        .prepare("SELECT guide_id FROM guide_categories WHERE category_id = ?1 ORDER BY guide_id")
        .map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map(params![category_id], |row| row.get(0))
        .map_err(|e| e.to_string())?;
    Ok(rows.filter_map(Result::ok).collect())
}

pub(crate) fn load_category(conn: &Connection, id: &str) -> Result<Option<Category>, String> {
    let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = ?1");
    match conn.query_row(&sql, params![id], category_from_row) {
        Ok(mut category) => {
            category.guides = guide_ids_for(conn, id)?;
            Ok(Some(category))
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.to_string()),
    }
}

pub(crate) fn link_guides(
    conn: &Connection,
    category_id: &str,
    guide_ids: &[String],
) -> Result<(), String> {
    for (position, guide_id) in guide_ids.iter().enumerate() {
        conn.execute(
            "INSERT OR REPLACE INTO guide_categories (guide_id, category_id, position)
             VALUES (?1, ?2, ?3)",
            params![guide_id, category_id, position as i64],
        )
        .map_err(|e| e.to_string())?;
    }
    Ok(())
}
