//! AI-model catalog endpoints under `/api/ai-models`.

mod create;
mod delete;
mod get;
mod list;
mod update;

use actix_web::{web, Scope};
use rusqlite::{params, Connection};

use common::model::ai_model::AiModel;

const API_PATH: &str = "/api/ai-models";

pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("", web::get().to(list::process))
        .route("", web::post().to(create::process))
        .route("/{model_id}", web::get().to(get::process))
        .route("/{model_id}", web::put().to(update::process))
        .route("/{model_id}", web::delete().to(delete::process))
}

pub(crate) const MODEL_COLUMNS: &str =
    "id, name, company, description, strengths, limitations, use_cases, pricing, link, created_at";

fn json_column_error(column: usize, e: serde_json::Error) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
}

pub(crate) fn model_from_row(row: &rusqlite::Row) -> rusqlite::Result<AiModel> {
    let strengths_json: String = row.get(4)?;
    let limitations_json: String = row.get(5)?;
    let use_cases_json: String = row.get(6)?;
    let pricing_json: String = row.get(7)?;
    Ok(AiModel {
        id: row.get(0)?,
        name: row.get(1)?,
        company: row.get(2)?,
        description: row.get(3)?,
        strengths: serde_json::from_str(&strengths_json).map_err(|e| json_column_error(4, e))?,
        limitations: serde_json::from_str(&limitations_json)
            .map_err(|e| json_column_error(5, e))?,
        use_cases: serde_json::from_str(&use_cases_json).map_err(|e| json_column_error(6, e))?,
        pricing: serde_json::from_str(&pricing_json).map_err(|e| json_column_error(7, e))?,
        link: row.get(8)?,
        created_at: row.get(9)?,
    })
}

pub(crate) fn load_model(conn: &Connection, id: &str) -> Result<Option<AiModel>, String> {
    let sql = format!("SELECT {MODEL_COLUMNS} FROM ai_models WHERE id = ?1");
    match conn.query_row(&sql, params![id], model_from_row) {
        Ok(model) => Ok(Some(model)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.to_string()),
    }
}
