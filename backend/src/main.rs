mod config;
mod services;

use crate::config::Config;
use crate::services::submissions::sheet::SubmissionSheet;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the bundled form. Paths outside the base path, and paths with no
/// matching asset, fall back to `index.html`.
async fn serve_embedded(req: HttpRequest, config: web::Data<Config>) -> HttpResponse {
    let path = req
        .path()
        .strip_prefix(config.base_path.as_str())
        .unwrap_or(req.path())
        .trim_start_matches('/');
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

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::load();
    let url = config.url();

    if config.open_browser {
        let browser_url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&browser_url);
        });
    }

    let sheet = SubmissionSheet::new(config.sheet_path.clone());
    info!(
        "Catalog: {}, sheet: {}",
        config.catalog_path.display(),
        config.sheet_path.display()
    );
    info!("Server running at {}", url);

    let bind = (config.host.clone(), config.port);
    let config = web::Data::new(config);
    let sheet = web::Data::new(sheet);

    HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .app_data(sheet.clone())
            .service(services::catalog::configure_routes(&config.base_path))
            .service(services::submissions::configure_routes(&config.base_path))
            .default_service(web::route().to(serve_embedded))
    })
    .bind(bind)?
    .run()
    .await
}
