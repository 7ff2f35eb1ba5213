use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;

use backend::config::AppConfig;
use backend::{db, services};

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded public site, falling back to `index.html` for
/// client-routed paths.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

/// Rewrites actix's JSON deserialization failures into the API's
/// `{"error"}` body shape.
fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let message = err.to_string();
    actix_web::error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(serde_json::json!({ "error": message })),
    )
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = AppConfig::from_env();
    if let Err(e) = db::init(&config) {
        return Err(std::io::Error::new(std::io::ErrorKind::Other, e));
    }
    std::fs::create_dir_all(&config.storage_dir)?;

    let host = "127.0.0.1";
    let port = 8080;
    info!("Server running at http://{}:{}", host, port);

    let storage_dir = config.storage_dir.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(
                web::JsonConfig::default()
                    .limit(10 * 1024 * 1024) // 10 MB
                    .error_handler(json_error_handler),
            )
            .app_data(web::Data::new(config.clone()))
            .service(services::categories::configure_routes())
            .service(services::guides::configure_routes())
            .service(services::ai_models::configure_routes())
            .service(services::uploads::configure_routes())
            .service(actix_files::Files::new("/storage", storage_dir.clone()))
            .default_service(web::route().to(serve_embedded))
    })
    .bind((host, port))?
    .run()
    .await
}
