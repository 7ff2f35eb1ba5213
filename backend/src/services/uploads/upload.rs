use std::fs::{self, File};
use std::io::{BufWriter, Write};

use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use futures_util::StreamExt;
use log::error;
use serde_json::json;

use crate::auth;
use crate::config::AppConfig;
use crate::services::{bad_request, server_error};
use crate::storage;

pub async fn process(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    payload: Multipart,
) -> impl Responder {
    if let Err(resp) = auth::require_bearer(&req, &config) {
        return resp;
    }
    match save_upload(payload, &config).await {
        Ok(url) => HttpResponse::Ok().json(json!({ "url": url })),
        Err(UploadError::Invalid(message)) => bad_request(message),
        Err(UploadError::Io(message)) => {
            error!("upload failed: {message}");
            server_error(message)
        }
    }
}

enum UploadError {
    /// The request itself was unusable (no file part, no filename).
    Invalid(String),
    /// Writing to the store failed.
    Io(String),
}

async fn save_upload(mut payload: Multipart, config: &AppConfig) -> Result<String, UploadError> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| UploadError::Invalid(e.to_string()))?;
        let field_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        if field_name.as_deref() != Some("file") {
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_default();
        if filename.is_empty() {
            return Err(UploadError::Invalid("Missing filename".to_string()));
        }

        let object = storage::object_name(&filename);
        fs::create_dir_all(&config.storage_dir).map_err(|e| UploadError::Io(e.to_string()))?;
        let file = File::create(config.storage_dir.join(&object))
            .map_err(|e| UploadError::Io(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| UploadError::Invalid(e.to_string()))?;
            writer
                .write_all(&chunk)
                .map_err(|e| UploadError::Io(e.to_string()))?;
        }
        writer.flush().map_err(|e| UploadError::Io(e.to_string()))?;
        return Ok(storage::public_url(&object));
    }
    Err(UploadError::Invalid("Missing file".to_string()))
}
