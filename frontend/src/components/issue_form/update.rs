//! Update function for the issue request form.
//!
//! Elm-style: every message is turned into one or more `Action`s on the
//! form's state container. This module owns the side effects around those
//! transitions: the submission call, the new item overlay, printing.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::form::{Action, Phase};

use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::{post_submission, print_page, show_toast};
use super::messages::Msg;
use super::state::IssueFormComponent;

/// Central update function for the component.
///
/// Returns `true` whenever the form state may have changed.
pub fn update(component: &mut IssueFormComponent, ctx: &Context<IssueFormComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Form(action) => {
            let confirming = matches!(action, Action::ConfirmNewItem);
            let draft_was_open = component.form.new_item.is_some();
            let catalog_len = component.form.catalog.items().len();

            component.dispatch(action);

            match (draft_was_open, component.form.new_item.is_some()) {
                (false, true) => open_top_sheet(component.new_item_sheet_ref.clone()),
                (true, false) => close_top_sheet(component.new_item_sheet_ref.clone()),
                _ => {}
            }
            if confirming && component.form.catalog.items().len() > catalog_len {
                if let Some(name) = component.form.catalog.items().last() {
                    show_toast(&format!("\"{}\" added to the item list.", name));
                }
            }
            true
        }
        Msg::Submit => {
            let draft_was_open = component.form.new_item.is_some();
            component.dispatch(Action::Submit);
            if draft_was_open && component.form.new_item.is_none() {
                close_top_sheet(component.new_item_sheet_ref.clone());
            }

            if let Some(payload) = component.form.payload() {
                let url = ctx.props().submit_url.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = post_submission(&url, &payload).await;
                    link.send_message(Msg::SubmitSettled(outcome));
                });
            }
            true
        }
        Msg::SubmitSettled(Ok(())) => {
            component.dispatch(Action::SubmitSucceeded);
            true
        }
        Msg::SubmitSettled(Err(err)) => {
            gloo_console::error!(format!("Error submitting issue request: {}", err));
            component.dispatch(Action::SubmitFailed(err));
            true
        }
        Msg::Print => {
            if matches!(component.form.phase, Phase::Submitted(_)) {
                print_page();
            }
            false
        }
        Msg::Close => {
            component.dispatch(Action::Close);
            true
        }
    }
}
