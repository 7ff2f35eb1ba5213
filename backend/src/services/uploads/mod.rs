//! Object-store upload endpoint.
//!
//! `POST /api/storage/upload` accepts multipart/form-data with a `file`
//! field, streams it into the storage directory under a name namespaced by
//! upload time and the original filename, and responds with the public URL
//! the caller stores on its entity.

mod upload;

use actix_web::{web, Scope};

const API_PATH: &str = "/api/storage";

pub fn configure_routes() -> Scope {
    web::scope(API_PATH).route("/upload", web::post().to(upload::process))
}
