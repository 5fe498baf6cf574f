use crate::config::Config;
use actix_web::{web, HttpResponse, Responder};
use log::warn;
use std::io::ErrorKind;

pub async fn process(config: web::Data<Config>) -> impl Responder {
    match tokio::fs::read(&config.catalog_path).await {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Catalog file {} not found", config.catalog_path.display());
            HttpResponse::NotFound().body("Catalog not found")
        }
        Err(e) => HttpResponse::InternalServerError().body(format!("Error reading catalog: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::configure_routes;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use std::path::PathBuf;

    fn config(catalog_path: PathBuf) -> Config {
        Config {
            host: "127.0.0.1".into(),
            port: 8080,
            base_path: "/store".into(),
            catalog_path,
            sheet_path: PathBuf::from("unused.csv"),
            open_browser: false,
        }
    }

    #[actix_web::test]
    async fn serves_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        std::fs::write(&path, "Item Name\nMultimeter\n").unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config(path)))
                .service(configure_routes("/store")),
        )
        .await;

        let req = test::TestRequest::get().uri("/store/api/catalog.csv").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body.as_ref(), b"Item Name\nMultimeter\n");
    }

    #[actix_web::test]
    async fn missing_catalog_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config(dir.path().join("absent.csv"))))
                .service(configure_routes("/store")),
        )
        .await;

        let req = test::TestRequest::get().uri("/store/api/catalog.csv").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
