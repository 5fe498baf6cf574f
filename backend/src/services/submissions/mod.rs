//! Local stand-in for the spreadsheet script endpoint.
//!
//! - `POST {base}/api/submissions`: takes the form's JSON body (sent as
//!   `text/plain` by the browser, so the raw body is parsed), appends one
//!   sheet row per requested item and answers with a `SubmissionAck`.
//!   Malformed bodies get `400`.

use actix_web::web::{post, resource};
use actix_web::Resource;

mod append;
pub mod sheet;

const API_PATH: &str = "/api/submissions";

/// Configures and returns the Actix resource for the submission route.
pub fn configure_routes(base_path: &str) -> Resource {
    resource(format!("{}{}", base_path, API_PATH)).route(post().to(append::process))
}
