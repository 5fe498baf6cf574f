use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::requester::RequesterCategory;

/// Which of the two request forms is being served.
///
/// The store form takes a form-level issue/return date and offers item names
/// from a remote catalog. The lab form collects dates and a remark per item
/// and takes free-text item names and departments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    #[default]
    Store,
    Lab,
}

impl FormVariant {
    pub fn title(&self) -> &'static str {
        match self {
            FormVariant::Store => "Item Issue Request",
            FormVariant::Lab => "Lab Component Issue Request",
        }
    }

    /// Requester categories offered by this form, in display order.
    pub fn categories(&self) -> &'static [RequesterCategory] {
        match self {
            FormVariant::Store => &[RequesterCategory::Student, RequesterCategory::Faculty],
            FormVariant::Lab => &[
                RequesterCategory::Student,
                RequesterCategory::Faculty,
                RequesterCategory::Staff,
            ],
        }
    }

    pub fn uses_catalog(&self) -> bool {
        matches!(self, FormVariant::Store)
    }

    pub fn per_item_dates(&self) -> bool {
        matches!(self, FormVariant::Lab)
    }

    /// Whether the department is picked from `DEPARTMENTS` rather than typed.
    pub fn listed_departments(&self) -> bool {
        matches!(self, FormVariant::Store)
    }
}

impl fmt::Display for FormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormVariant::Store => f.write_str("store"),
            FormVariant::Lab => f.write_str("lab"),
        }
    }
}

impl FromStr for FormVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "store" | "" => Ok(FormVariant::Store),
            "lab" => Ok(FormVariant::Lab),
            other => Err(format!("unknown form variant '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_variant_names() {
        assert_eq!("lab".parse::<FormVariant>(), Ok(FormVariant::Lab));
        assert_eq!(" Store ".parse::<FormVariant>(), Ok(FormVariant::Store));
        assert_eq!("".parse::<FormVariant>(), Ok(FormVariant::Store));
        assert!("kiosk".parse::<FormVariant>().is_err());
    }

    #[test]
    fn only_lab_offers_staff() {
        assert!(!FormVariant::Store.categories().contains(&RequesterCategory::Staff));
        assert!(FormVariant::Lab.categories().contains(&RequesterCategory::Staff));
    }
}
