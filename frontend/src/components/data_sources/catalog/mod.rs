//! Remote item catalog.
//!
//! The catalog is a spreadsheet published as CSV. It is fetched once per page
//! load; callers log failures and carry on with an empty catalog.

use common::catalog::parse_catalog;
use gloo_net::http::Request;

/// Fetches the export at `url` and returns the item names in sheet order.
pub async fn fetch_catalog(url: &str) -> Result<Vec<String>, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("catalog request failed: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "catalog request returned {} {}",
            response.status(),
            response.status_text()
        ));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("catalog body unreadable: {}", e))?;

    parse_catalog(&text).map_err(|e| e.to_string())
}
