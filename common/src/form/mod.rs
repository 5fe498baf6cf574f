//! The form as an explicit state container.
//!
//! `FormState::apply` takes the current state and an `Action` and returns the
//! next state. The frontend keeps one `FormState` and routes every user event
//! and network outcome through it.

mod action;
mod phase;
mod state;

pub use action::Action;
pub use phase::Phase;
pub use state::{FormState, NewItemDraft};
