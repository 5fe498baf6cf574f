//! Component state for the issue request form.

use common::form::{Action, FormState};
use common::model::variant::FormVariant;
use yew::prelude::*;

/// Holds the form state container plus the DOM handles the view needs.
pub struct IssueFormComponent {
    /// Current form state. Only ever replaced through `dispatch`.
    pub form: FormState,

    /// Overlay holding the "add new item" input.
    pub new_item_sheet_ref: NodeRef,

    /// Guard so the catalog is fetched on the first render only.
    pub loaded: bool,

    /// Bumped whenever the new item input closes. Item selects are keyed on
    /// it so they are rebuilt from state instead of keeping the add-new
    /// option shown.
    pub item_select_epoch: usize,
}

impl IssueFormComponent {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            form: FormState::new(variant),
            new_item_sheet_ref: NodeRef::default(),
            loaded: false,
            item_select_epoch: 0,
        }
    }

    /// Runs `action` through the form's transition function.
    pub fn dispatch(&mut self, action: Action) {
        let draft_was_open = self.form.new_item.is_some();
        let form = std::mem::take(&mut self.form);
        self.form = form.apply(action);
        if draft_was_open && self.form.new_item.is_none() {
            self.item_select_epoch += 1;
        }
    }
}
