use common::form::Action;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::issue_form::helpers::input_value;
use crate::components::issue_form::{IssueFormComponent, Msg};
use crate::tops_sheet::top_sheet::TopSheet;

/// Overlay with the text input for an item missing from the catalog.
/// Enter confirms, Escape cancels.
pub fn new_item_dialog(component: &IssueFormComponent, link: &Scope<IssueFormComponent>) -> Html {
    let draft = component.form.new_item.as_ref();
    let text = draft.map(|d| d.text.clone()).unwrap_or_default();
    let row_label = draft.map(|d| format!("Row {}", d.row + 1)).unwrap_or_default();

    html! {
        <TopSheet node_ref={component.new_item_sheet_ref.clone()}>
            <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.6);z-index:9999;display:flex;align-items:center;justify-content:center;">
                <div style="background:#fff;padding:24px;border-radius:8px;min-width:320px;">
                    <h3 style="margin-top:0;">{"Add New Item"}</h3>
                    <div class="field">
                        <label>{ row_label }</label>
                        <input
                            type="text"
                            placeholder="Item name"
                            value={text}
                            oninput={link.callback(|e: InputEvent| Msg::Form(Action::SetNewItemText(input_value(&e))))}
                            onkeydown={link.batch_callback(|e: KeyboardEvent| {
                                match e.key().as_str() {
                                    "Enter" => {
                                        e.prevent_default();
                                        vec![Msg::Form(Action::ConfirmNewItem)]
                                    }
                                    "Escape" => vec![Msg::Form(Action::CancelNewItem)],
                                    _ => vec![],
                                }
                            })}
                        />
                    </div>
                    <div style="display:flex;gap:8px;justify-content:flex-end;">
                        <button
                            class="btn secondary"
                            type="button"
                            onclick={link.callback(|_| Msg::Form(Action::CancelNewItem))}
                        >
                            {"Cancel"}
                        </button>
                        <button
                            class="btn"
                            type="button"
                            onclick={link.callback(|_| Msg::Form(Action::ConfirmNewItem))}
                        >
                            {"Add"}
                        </button>
                    </div>
                </div>
            </div>
        </TopSheet>
    }
}
