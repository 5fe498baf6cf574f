//! Build-time settings.
//!
//! Values are baked in when the bundle is built, e.g.
//! `ISSUE_FORM_VARIANT=lab ISSUE_FORM_SUBMIT_URL=https://... trunk build`.
//! Relative URLs resolve against the page's `<base>`, which Trunk sets from
//! `public_url`.

use common::model::variant::FormVariant;

/// Endpoint receiving the submission body.
pub const SUBMIT_URL: &str = match option_env!("ISSUE_FORM_SUBMIT_URL") {
    Some(url) => url,
    None => "api/submissions",
};

/// Published CSV export listing the item catalog.
pub const CATALOG_URL: &str = match option_env!("ISSUE_FORM_CATALOG_URL") {
    Some(url) => url,
    None => "api/catalog.csv",
};

const VARIANT: Option<&str> = option_env!("ISSUE_FORM_VARIANT");

/// Which form this bundle serves. An unknown name falls back to the store
/// form with a console warning.
pub fn variant() -> FormVariant {
    match VARIANT.map(str::parse::<FormVariant>) {
        Some(Ok(variant)) => variant,
        Some(Err(err)) => {
            gloo_console::warn!(format!("{}; using the store form", err));
            FormVariant::default()
        }
        None => FormVariant::default(),
    }
}
