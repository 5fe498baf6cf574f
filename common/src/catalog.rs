//! Item catalog sourced from a published spreadsheet export.
//!
//! The export is CSV with a header row. Item names are taken from the first
//! column; everything else in the sheet is ignored.

use csv::ReaderBuilder;

use crate::error::CatalogError;

/// Select value that opens the "add new item" input instead of naming an item.
pub const ADD_NEW_ITEM: &str = "__add_new_item__";

/// Parses a CSV export into item names.
///
/// Skips the header, keeps the trimmed first cell of every row and drops
/// empty cells. Rows the reader cannot decode are skipped; only a failure to
/// read the header is an error.
pub fn parse_catalog(text: &str) -> Result<Vec<String>, CatalogError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    reader.headers()?;

    let names = reader
        .records()
        .filter_map(Result::ok)
        .filter_map(|record| record.get(0).map(|cell| cell.trim().to_string()))
        .filter(|name| !name.is_empty())
        .collect();

    Ok(names)
}

/// Selectable item names for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<String>,
}

impl Catalog {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    /// Appends a session-local name. Returns the trimmed name to assign, or
    /// `None` when it is blank. A name already listed is not added twice.
    pub fn append(&mut self, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        if !self.contains(name) {
            self.items.push(name.to_string());
        }
        Some(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_column_after_header() {
        let text = "Item,Stock\nSoldering Iron,4\n  Multimeter ,2\n,9\nBreadboard\n";
        assert_eq!(
            parse_catalog(text).unwrap(),
            vec!["Soldering Iron", "Multimeter", "Breadboard"]
        );
    }

    #[test]
    fn honours_quoted_cells() {
        let text = "Item\n\"Wire, jumper (M-M)\"\r\n\"Oscilloscope\"\r\n";
        assert_eq!(
            parse_catalog(text).unwrap(),
            vec!["Wire, jumper (M-M)", "Oscilloscope"]
        );
    }

    #[test]
    fn header_only_or_empty_is_an_empty_catalog() {
        assert!(parse_catalog("Item\n").unwrap().is_empty());
        assert!(parse_catalog("").unwrap().is_empty());
    }

    #[test]
    fn append_trims_and_skips_duplicates() {
        let mut catalog = Catalog::new(vec!["Probe".into()]);
        assert_eq!(catalog.append("  Logic Analyzer "), Some("Logic Analyzer".into()));
        assert_eq!(catalog.append("Probe"), Some("Probe".into()));
        assert_eq!(catalog.append("   "), None);
        assert_eq!(catalog.items(), ["Probe", "Logic Analyzer"]);
    }
}
