use crate::catalog::{ADD_NEW_ITEM, Catalog};
use crate::error::FormError;
use crate::model::department::Department;
use crate::model::item::{ItemDetails, ItemRow};
use crate::model::requester::Requester;
use crate::model::request::IssueRequest;
use crate::model::variant::FormVariant;
use crate::receipt::Receipt;
use crate::requests::SubmissionPayload;
use crate::validate::validate;

use super::action::Action;
use super::phase::Phase;

/// The "add new item" input, open for one row at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItemDraft {
    pub row: usize,
    pub text: String,
}

/// Complete state of one form page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub variant: FormVariant,
    pub request: IssueRequest,
    pub catalog: Catalog,
    pub new_item: Option<NewItemDraft>,
    pub phase: Phase,
}

impl FormState {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            variant,
            request: IssueRequest::empty(variant),
            catalog: Catalog::default(),
            new_item: None,
            phase: Phase::default(),
        }
    }

    /// Body to post while a submission is in flight.
    pub fn payload(&self) -> Option<SubmissionPayload> {
        matches!(self.phase, Phase::Submitting)
            .then(|| SubmissionPayload::from_request(self.variant, &self.request))
    }

    /// Returns the state that follows `action`.
    ///
    /// Field edits only apply while editing. Network outcomes only apply to
    /// the phase that is waiting for them; anything else is a no-op.
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::CatalogLoaded(items) => Self {
                catalog: Catalog::new(items),
                ..self
            },
            Action::Submit => self.submit(),
            Action::SubmitSucceeded => match self.phase {
                Phase::Submitting => {
                    let receipt = Receipt::new(self.variant, self.request.clone());
                    Self {
                        phase: Phase::Submitted(receipt),
                        ..self
                    }
                }
                _ => self,
            },
            Action::SubmitFailed(detail) => match self.phase {
                Phase::Submitting => Self {
                    phase: Phase::Editing {
                        error: Some(FormError::Submission { detail }),
                    },
                    ..self
                },
                _ => self,
            },
            Action::Close => match self.phase {
                Phase::Submitted(_) => Self {
                    catalog: self.catalog,
                    ..Self::new(self.variant)
                },
                _ => self,
            },
            edit if self.phase.is_editing() => self.edit(edit),
            _ => self,
        }
    }

    fn submit(self) -> Self {
        if !self.phase.is_editing() {
            return self;
        }
        let phase = match validate(&self.request) {
            Ok(()) => Phase::Submitting,
            Err(error) => Phase::Editing { error: Some(error) },
        };
        Self {
            phase,
            new_item: None,
            ..self
        }
    }

    fn edit(mut self, action: Action) -> Self {
        let request = &mut self.request;
        match action {
            Action::SetCategory(category) => {
                request.requester = std::mem::take(&mut request.requester).switch_to(category);
            }
            Action::SetName(value) => request.name = value,
            Action::SetIdentifier(value) => request.identifier = value,
            Action::SetDepartment(value) => {
                request.department = if self.variant.listed_departments() {
                    std::mem::take(&mut request.department).choose(value)
                } else {
                    Department::Named(value)
                };
            }
            Action::SetOtherDepartment(value) => {
                request.department = std::mem::take(&mut request.department).set_override(value);
            }
            Action::SetInstructor(value) => {
                if let Requester::Student { instructor } = &mut request.requester {
                    *instructor = value;
                }
            }
            Action::SetEmail(value) => request.email = value,
            Action::SetMobile(value) => request.mobile = value,
            Action::SetIssueDate(value) => {
                if let Some(period) = request.period.as_mut() {
                    period.issue_date = value;
                }
            }
            Action::SetReturnDate(value) => {
                if let Some(period) = request.period.as_mut() {
                    period.return_date = value;
                }
            }

            Action::AddItem => request.items.push_blank(),
            Action::RemoveItem(index) => {
                if request.items.remove(index) {
                    self.new_item = shift_draft(self.new_item, index);
                }
            }
            Action::ChooseItem { index, value } => {
                if value == ADD_NEW_ITEM {
                    if index < request.items.len() {
                        self.new_item = Some(NewItemDraft {
                            row: index,
                            text: String::new(),
                        });
                    }
                } else {
                    request.items.edit(index, |row| row.name = value);
                }
            }
            Action::SetItemName { index, value } => {
                request.items.edit(index, |row| row.name = value);
            }
            Action::SetItemQuantity { index, value } => {
                request.items.edit(index, |row| row.quantity = value);
            }
            Action::SetItemIssueDate { index, value } => {
                request.items.edit(index, |row| {
                    if let Some(details) = row.details.as_mut() {
                        details.issue_date = value;
                    }
                });
            }
            Action::SetItemReturnDate { index, value } => {
                request.items.edit(index, |row| {
                    if let Some(details) = row.details.as_mut() {
                        details.return_date = value;
                    }
                });
            }
            Action::SetItemRemark { index, value } => {
                request.items.edit(index, |row| {
                    if let Some(details) = row.details.as_mut() {
                        details.remark = value;
                    }
                });
            }
            Action::ReplaceItems(rows) => {
                let per_item_dates = self.variant.per_item_dates();
                let rows = rows
                    .into_iter()
                    .map(|row| shape_row(row, per_item_dates))
                    .collect();
                request.items.replace(rows);
                self.new_item = None;
            }

            Action::SetNewItemText(text) => {
                if let Some(draft) = self.new_item.as_mut() {
                    draft.text = text;
                }
            }
            Action::ConfirmNewItem => {
                if let Some(draft) = self.new_item.take() {
                    match self.catalog.append(&draft.text) {
                        Some(name) => request.items.edit(draft.row, |row| row.name = name),
                        None => self.new_item = Some(draft),
                    }
                }
            }
            Action::CancelNewItem => self.new_item = None,

            Action::CatalogLoaded(_)
            | Action::Submit
            | Action::SubmitSucceeded
            | Action::SubmitFailed(_)
            | Action::Close => {}
        }
        self
    }
}

/// Keeps an open draft pointing at the same row after `removed` is deleted.
fn shift_draft(draft: Option<NewItemDraft>, removed: usize) -> Option<NewItemDraft> {
    match draft {
        Some(draft) if draft.row == removed => None,
        Some(NewItemDraft { row, text }) if row > removed => Some(NewItemDraft { row: row - 1, text }),
        other => other,
    }
}

/// Gives replacement rows the detail fields the variant expects.
fn shape_row(mut row: ItemRow, per_item_dates: bool) -> ItemRow {
    if per_item_dates {
        row.details.get_or_insert_with(ItemDetails::default);
    } else {
        row.details = None;
    }
    row
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(FormVariant::default())
    }
}
