use rusqlite::Connection;

use crate::config::AppConfig;

/// Nested values (guide metadata and modules, model lists and pricing) are
/// stored as JSON text columns. `guide_categories` is the authoritative
/// guide/category relation; the arrays both entities expose are composed
/// from it at read time and rebuilt wholesale on every write.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS categories (
    id          TEXT PRIMARY KEY,
    title       TEXT NOT NULL,
    description TEXT NOT NULL,
    icon_url    TEXT NOT NULL,
    color       TEXT NOT NULL,
    featured    INTEGER NOT NULL DEFAULT 0,
    coming_soon INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE TABLE IF NOT EXISTS guides (
    id          TEXT PRIMARY KEY,
    title       TEXT NOT NULL,
    description TEXT NOT NULL,
    image       TEXT NOT NULL,
    color       TEXT NOT NULL DEFAULT '',
    is_popular  INTEGER NOT NULL DEFAULT 0,
    metadata    TEXT NOT NULL DEFAULT '{}',
    modules     TEXT NOT NULL DEFAULT '[]',
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE TABLE IF NOT EXISTS guide_categories (
    guide_id    TEXT NOT NULL,
    category_id TEXT NOT NULL,
    position    INTEGER NOT NULL DEFAULT 0,
    PRIMARY KEY (guide_id, category_id)
);
CREATE TABLE IF NOT EXISTS ai_models (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    company     TEXT NOT NULL,
    description TEXT NOT NULL,
    strengths   TEXT NOT NULL DEFAULT '[]',
    limitations TEXT NOT NULL DEFAULT '[]',
    use_cases   TEXT NOT NULL DEFAULT '[]',
    pricing     TEXT NOT NULL DEFAULT '{}',
    link        TEXT,
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);
";

pub fn open(config: &AppConfig) -> Result<Connection, String> {
    Connection::open(&config.db_path).map_err(|e| e.to_string())
}

/// Creates the schema if it does not exist yet. Called once at startup and
/// by the test harness.
pub fn init(config: &AppConfig) -> Result<(), String> {
    let conn = open(config)?;
    conn.execute_batch(SCHEMA).map_err(|e| e.to_string())
}
