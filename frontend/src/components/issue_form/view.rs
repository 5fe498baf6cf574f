//! View rendering for the issue request form.
//!
//! While editing or submitting the page shows the form: identity fields,
//! dates, the item table and the submit button. Once a submission went
//! through, the receipt replaces the form until it is closed.

use common::catalog::ADD_NEW_ITEM;
use common::form::{Action, Phase};
use common::model::department::DEPARTMENTS;
use common::model::item::ItemRow;
use common::model::request::LoanPeriod;
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::new_item::new_item_dialog;
use super::helpers::{input_value, select_value};
use super::messages::Msg;
use super::state::IssueFormComponent;
use crate::components::receipt::ReceiptComponent;

/// Main view function: the receipt after a successful submission, the form
/// otherwise.
pub fn view(component: &IssueFormComponent, ctx: &Context<IssueFormComponent>) -> Html {
    let link = ctx.link();

    if let Phase::Submitted(receipt) = &component.form.phase {
        return html! {
            <ReceiptComponent
                receipt={receipt.clone()}
                on_print={link.callback(|_| Msg::Print)}
                on_close={link.callback(|_| Msg::Close)}
            />
        };
    }

    let submitting = matches!(component.form.phase, Phase::Submitting);

    html! {
        <div class="issue-form">
            <h1>{ component.form.variant.title() }</h1>
            <form onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                <fieldset disabled={submitting} style="border:none;padding:0;margin:0;">
                    { build_identity_section(component, link) }
                    {
                        match &component.form.request.period {
                            Some(period) => build_period_section(period, link),
                            None => html! {},
                        }
                    }
                    { build_items_section(component, link) }
                </fieldset>
                {
                    match component.form.phase.error() {
                        Some(error) => html! { <div class="form-error" role="alert">{ error.to_string() }</div> },
                        None => html! {},
                    }
                }
                <button class="btn" type="submit" disabled={submitting}>
                    { if submitting { "Submitting..." } else { "Submit" } }
                </button>
            </form>
            { new_item_dialog(component, link) }
        </div>
    }
}

/// Requester category, name, identifier, department, instructor and contact
/// fields.
fn build_identity_section(component: &IssueFormComponent, link: &Scope<IssueFormComponent>) -> Html {
    let request = &component.form.request;
    let variant = component.form.variant;
    let category = request.requester.category();

    let categories = variant
        .categories()
        .iter()
        .map(|&option| {
            html! {
                <label>
                    <input
                        type="radio"
                        name="requester-category"
                        checked={option == category}
                        onchange={link.callback(move |_: Event| Msg::Form(Action::SetCategory(option)))}
                    />
                    { format!(" {}", option.label()) }
                </label>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <div class="field category-choice">
                <label>{"I am a"}</label>
                <div>{ categories }</div>
            </div>
            <div class="field-row">
                { text_field("Name", &request.name, "text", link.callback(|e: InputEvent| Msg::Form(Action::SetName(input_value(&e))))) }
                { text_field(category.identifier_label(), &request.identifier, "text", link.callback(|e: InputEvent| Msg::Form(Action::SetIdentifier(input_value(&e))))) }
            </div>
            { build_department_field(component, link) }
            {
                match request.requester.instructor() {
                    Some(instructor) => field(
                        "Instructor Name (optional)",
                        instructor,
                        "text",
                        false,
                        link.callback(|e: InputEvent| Msg::Form(Action::SetInstructor(input_value(&e)))),
                    ),
                    None => html! {},
                }
            }
            <div class="field-row">
                { text_field("Email", &request.email, "email", link.callback(|e: InputEvent| Msg::Form(Action::SetEmail(input_value(&e))))) }
                <div class="field">
                    <label>{"Mobile Number"}</label>
                    <input
                        type="tel"
                        inputmode="numeric"
                        maxlength="10"
                        required=true
                        value={request.mobile.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Form(Action::SetMobile(input_value(&e))))}
                    />
                </div>
            </div>
        </>
    }
}

/// Department select with the "Others" override on the store form, a text
/// box on the lab form.
fn build_department_field(component: &IssueFormComponent, link: &Scope<IssueFormComponent>) -> Html {
    let department = &component.form.request.department;

    if !component.form.variant.listed_departments() {
        return text_field(
            "Department",
            department.resolved(),
            "text",
            link.callback(|e: InputEvent| Msg::Form(Action::SetDepartment(input_value(&e)))),
        );
    }

    let choice = department.choice();
    let options = DEPARTMENTS
        .iter()
        .map(|&name| html! { <option value={name} selected={name == choice}>{ name }</option> })
        .collect::<Html>();

    html! {
        <>
            <div class="field">
                <label>{"Department"}</label>
                <select
                    required=true
                    onchange={link.callback(|e: Event| Msg::Form(Action::SetDepartment(select_value(&e))))}
                >
                    <option value="" disabled=true selected={choice.is_empty()}>{"Select department"}</option>
                    { options }
                </select>
            </div>
            {
                match department.override_text() {
                    Some(text) => text_field(
                        "Specify Department",
                        text,
                        "text",
                        link.callback(|e: InputEvent| Msg::Form(Action::SetOtherDepartment(input_value(&e)))),
                    ),
                    None => html! {},
                }
            }
        </>
    }
}

/// Form-level issue and return dates.
fn build_period_section(period: &LoanPeriod, link: &Scope<IssueFormComponent>) -> Html {
    html! {
        <div class="field-row">
            { text_field("Issue Date", &period.issue_date, "date", link.callback(|e: InputEvent| Msg::Form(Action::SetIssueDate(input_value(&e))))) }
            { text_field("Return Date", &period.return_date, "date", link.callback(|e: InputEvent| Msg::Form(Action::SetReturnDate(input_value(&e))))) }
        </div>
    }
}

/// Numbered item table with add and remove controls.
fn build_items_section(component: &IssueFormComponent, link: &Scope<IssueFormComponent>) -> Html {
    let per_item_dates = component.form.variant.per_item_dates();
    let items = &component.form.request.items;
    let can_remove = items.len() > 1;

    let rows = items
        .iter()
        .enumerate()
        .map(|(index, row)| build_item_row(component, link, index, row, can_remove))
        .collect::<Html>();

    html! {
        <>
            <h2 style="font-size:1.1rem;">{"Items Requested"}</h2>
            <table class="items-table">
                <thead>
                    <tr>
                        <th style="width:32px;">{"#"}</th>
                        <th>{"Item Name"}</th>
                        <th style="width:80px;">{"Quantity"}</th>
                        {
                            if per_item_dates {
                                html! {
                                    <>
                                        <th>{"Issue Date"}</th>
                                        <th>{"Return Date"}</th>
                                        <th>{"Remark"}</th>
                                    </>
                                }
                            } else {
                                html! {}
                            }
                        }
                        <th style="width:40px;"></th>
                    </tr>
                </thead>
                <tbody>{ rows }</tbody>
            </table>
            <button
                class="btn secondary"
                type="button"
                onclick={link.callback(|_| Msg::Form(Action::AddItem))}
            >
                {"+ Add Item"}
            </button>
        </>
    }
}

fn build_item_row(
    component: &IssueFormComponent,
    link: &Scope<IssueFormComponent>,
    index: usize,
    row: &ItemRow,
    can_remove: bool,
) -> Html {
    html! {
        <tr key={index}>
            <td>{ index + 1 }</td>
            <td>{ build_item_name_cell(component, link, index, row) }</td>
            <td>
                <input
                    type="number"
                    min="1"
                    required=true
                    value={row.quantity.clone()}
                    oninput={link.callback(move |e: InputEvent| Msg::Form(Action::SetItemQuantity { index, value: input_value(&e) }))}
                />
            </td>
            {
                match &row.details {
                    Some(details) => html! {
                        <>
                            <td>
                                <input
                                    type="date"
                                    required=true
                                    value={details.issue_date.clone()}
                                    oninput={link.callback(move |e: InputEvent| Msg::Form(Action::SetItemIssueDate { index, value: input_value(&e) }))}
                                />
                            </td>
                            <td>
                                <input
                                    type="date"
                                    required=true
                                    value={details.return_date.clone()}
                                    oninput={link.callback(move |e: InputEvent| Msg::Form(Action::SetItemReturnDate { index, value: input_value(&e) }))}
                                />
                            </td>
                            <td>
                                <input
                                    type="text"
                                    value={details.remark.clone()}
                                    oninput={link.callback(move |e: InputEvent| Msg::Form(Action::SetItemRemark { index, value: input_value(&e) }))}
                                />
                            </td>
                        </>
                    },
                    None => html! {},
                }
            }
            <td>
                <button
                    class="btn danger"
                    type="button"
                    title="Remove item"
                    disabled={!can_remove}
                    onclick={link.callback(move |_| Msg::Form(Action::RemoveItem(index)))}
                >
                    {"✕"}
                </button>
            </td>
        </tr>
    }
}

/// Catalog select with the add-new sentinel when the form has a catalog,
/// plain text otherwise. The select is keyed on the draft epoch so closing
/// the new item input recreates it with the selection held in state.
fn build_item_name_cell(
    component: &IssueFormComponent,
    link: &Scope<IssueFormComponent>,
    index: usize,
    row: &ItemRow,
) -> Html {
    if !component.form.variant.uses_catalog() {
        return html! {
            <input
                type="text"
                required=true
                value={row.name.clone()}
                oninput={link.callback(move |e: InputEvent| Msg::Form(Action::SetItemName { index, value: input_value(&e) }))}
            />
        };
    }

    let options = component
        .form
        .catalog
        .items()
        .iter()
        .map(|name| html! { <option value={name.clone()} selected={*name == row.name}>{ name }</option> })
        .collect::<Html>();

    let drafting = component.form.new_item.as_ref().is_some_and(|draft| draft.row == index);

    html! {
        <select
            key={format!("item-{}-{}", index, component.item_select_epoch)}
            required=true
            onchange={link.callback(move |e: Event| Msg::Form(Action::ChooseItem { index, value: select_value(&e) }))}
        >
            <option value="" disabled=true selected={row.name.is_empty() && !drafting}>{"Select item"}</option>
            { options }
            <option value={ADD_NEW_ITEM} selected={drafting}>{"+ Add new item"}</option>
        </select>
    }
}

/// Labelled, required input bound to `value`.
fn text_field(label: &str, value: &str, input_type: &'static str, oninput: Callback<InputEvent>) -> Html {
    field(label, value, input_type, true, oninput)
}

fn field(
    label: &str,
    value: &str,
    input_type: &'static str,
    required: bool,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <div class="field">
            <label>{ label.to_string() }</label>
            <input type={input_type} required={required} value={value.to_string()} oninput={oninput} />
        </div>
    }
}
