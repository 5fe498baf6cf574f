//! Serves the local item catalog.
//!
//! - `GET {base}/api/catalog.csv`: returns the configured catalog CSV as-is,
//!   or `404` when the file does not exist. The form treats both a missing
//!   catalog and an empty one as "no items".

use actix_web::web::{get, resource};
use actix_web::Resource;

mod get;

const API_PATH: &str = "/api/catalog.csv";

/// Configures and returns the Actix resource for the catalog route.
pub fn configure_routes(base_path: &str) -> Resource {
    resource(format!("{}{}", base_path, API_PATH)).route(get().to(get::process))
}
