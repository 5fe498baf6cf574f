use serde::{Deserialize, Serialize};

/// Per-item dates and remark, carried only by the lab form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetails {
    pub issue_date: String,
    pub return_date: String,
    pub remark: String,
}

/// One requested item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRow {
    pub name: String,
    /// Kept as typed; the form does not constrain it beyond the input type.
    pub quantity: String,
    pub details: Option<ItemDetails>,
}

impl ItemRow {
    /// A blank row, with detail fields when `per_item_dates` is set.
    pub fn blank(per_item_dates: bool) -> Self {
        Self {
            name: String::new(),
            quantity: String::new(),
            details: per_item_dates.then(ItemDetails::default),
        }
    }
}

/// Ordered, never-empty list of requested items.
///
/// Rows are identified by position. Every constructor and mutator keeps at
/// least one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemList {
    rows: Vec<ItemRow>,
    per_item_dates: bool,
}

impl ItemList {
    pub fn new(per_item_dates: bool) -> Self {
        Self {
            rows: vec![ItemRow::blank(per_item_dates)],
            per_item_dates,
        }
    }

    /// Replaces the rows. An empty `rows` becomes a single blank row.
    pub fn replace(&mut self, rows: Vec<ItemRow>) {
        if rows.is_empty() {
            self.rows = vec![ItemRow::blank(self.per_item_dates)];
        } else {
            self.rows = rows;
        }
    }

    pub fn push_blank(&mut self) {
        self.rows.push(ItemRow::blank(self.per_item_dates));
    }

    /// Removes the row at `index`. Returns false, leaving the list untouched,
    /// when it is the last row or `index` is out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.rows.len() <= 1 || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    /// Runs `edit` on the row at `index`; out-of-range indexes are ignored.
    pub fn edit<F: FnOnce(&mut ItemRow)>(&mut self, index: usize, edit: F) {
        if let Some(row) = self.rows.get_mut(index) {
            edit(row);
        }
    }

    pub fn get(&self, index: usize) -> Option<&ItemRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemRow> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[ItemRow] {
        &self.rows
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a ItemRow;
    type IntoIter = std::slice::Iter<'a, ItemRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> ItemRow {
        ItemRow {
            name: name.to_string(),
            quantity: "1".into(),
            details: None,
        }
    }

    #[test]
    fn last_row_cannot_be_removed() {
        let mut list = ItemList::new(false);
        assert!(!list.remove(0));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn add_then_remove_restores_sequence() {
        let mut list = ItemList::new(false);
        list.replace(vec![named("Multimeter"), named("Breadboard")]);
        let before = list.clone();
        list.push_blank();
        assert_eq!(list.len(), 3);
        assert!(list.remove(2));
        assert_eq!(list, before);
    }

    #[test]
    fn removal_is_by_position_not_value() {
        let mut list = ItemList::new(false);
        list.replace(vec![named("Probe"), named("Probe"), named("Clip")]);
        assert!(list.remove(1));
        let names: Vec<_> = list.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Probe", "Clip"]);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut list = ItemList::new(false);
        list.replace(vec![named("A"), named("B")]);
        assert!(!list.remove(7));
        list.edit(9, |row| row.name = "C".into());
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|r| r.name != "C"));
    }

    #[test]
    fn replacing_with_nothing_leaves_one_blank_row() {
        let mut list = ItemList::new(true);
        list.replace(Vec::new());
        assert_eq!(list.len(), 1);
        assert!(list.get(0).and_then(|r| r.details.as_ref()).is_some());
    }
}
