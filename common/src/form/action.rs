use crate::model::item::ItemRow;
use crate::model::requester::RequesterCategory;

/// Everything that can happen to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetCategory(RequesterCategory),
    SetName(String),
    SetIdentifier(String),
    /// Value of the department select, or the typed text on the lab form
    /// where `Others` has no special meaning.
    SetDepartment(String),
    SetOtherDepartment(String),
    SetInstructor(String),
    SetEmail(String),
    SetMobile(String),
    SetIssueDate(String),
    SetReturnDate(String),

    AddItem,
    RemoveItem(usize),
    /// Value picked in a row's item select; the add-new sentinel opens the
    /// new item input for that row.
    ChooseItem { index: usize, value: String },
    SetItemName { index: usize, value: String },
    SetItemQuantity { index: usize, value: String },
    SetItemIssueDate { index: usize, value: String },
    SetItemReturnDate { index: usize, value: String },
    SetItemRemark { index: usize, value: String },
    ReplaceItems(Vec<ItemRow>),

    CatalogLoaded(Vec<String>),
    SetNewItemText(String),
    ConfirmNewItem,
    CancelNewItem,

    Submit,
    SubmitSucceeded,
    /// Transport failure; carries the underlying error text for logging.
    SubmitFailed(String),
    Close,
}
