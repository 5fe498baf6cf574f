use crate::model::department::Department;
use crate::model::item::ItemList;
use crate::model::requester::Requester;
use crate::model::variant::FormVariant;

/// Form-level issue and return dates (store form).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanPeriod {
    pub issue_date: String,
    pub return_date: String,
}

/// Everything the requester has typed into the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRequest {
    pub requester: Requester,
    pub name: String,
    /// Roll number or employee ID, depending on the requester category.
    pub identifier: String,
    pub department: Department,
    pub email: String,
    pub mobile: String,
    /// Present only for forms with form-level dates.
    pub period: Option<LoanPeriod>,
    pub items: ItemList,
}

impl IssueRequest {
    /// An empty request shaped for `variant`.
    pub fn empty(variant: FormVariant) -> Self {
        Self {
            requester: Requester::default(),
            name: String::new(),
            identifier: String::new(),
            department: Department::default(),
            email: String::new(),
            mobile: String::new(),
            period: (!variant.per_item_dates()).then(LoanPeriod::default),
            items: ItemList::new(variant.per_item_dates()),
        }
    }
}
