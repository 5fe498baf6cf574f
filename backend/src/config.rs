//! Server settings, read from the environment at start-up.
//!
//! Every setting has a default; a missing or unparsable value is logged and
//! the default is used.

use log::{info, warn};
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// URL prefix the form is served under, without a trailing slash
    /// (empty for the root).
    pub base_path: String,
    /// CSV served as the item catalog.
    pub catalog_path: PathBuf,
    /// CSV that submissions are appended to.
    pub sheet_path: PathBuf,
    pub open_browser: bool,
}

impl Config {
    pub fn load() -> Self {
        Self {
            host: try_load("ISSUE_SERVER_HOST", "127.0.0.1".to_string()),
            port: try_load("ISSUE_SERVER_PORT", 8080),
            base_path: normalize_base_path(&try_load("ISSUE_SERVER_BASE_PATH", "/".to_string())),
            catalog_path: PathBuf::from(try_load("ISSUE_SERVER_CATALOG", "catalog.csv".to_string())),
            sheet_path: PathBuf::from(try_load("ISSUE_SERVER_SHEET", "submissions.csv".to_string())),
            open_browser: try_load("ISSUE_SERVER_OPEN_BROWSER", true),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}{}/", self.host, self.port, self.base_path)
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value '{raw}': {e}; using default: {default}");
            default
        }),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}

/// Turns `issue-form/`, `/issue-form` or `/` into `/issue-form` or ``.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_base_path;

    #[test]
    fn base_path_forms() {
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path(""), "");
        assert_eq!(normalize_base_path("issue-form/"), "/issue-form");
        assert_eq!(normalize_base_path(" /lab/forms/ "), "/lab/forms");
    }
}
