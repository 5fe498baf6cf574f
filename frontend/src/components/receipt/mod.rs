//! Printable receipt for a submitted request.
//!
//! Renders the frozen snapshot read-only on a paper-sized page with the
//! signature blocks for the requester's category. The action bar is hidden
//! when printing.

use common::receipt::Receipt;
use yew::prelude::*;

use crate::components::issue_form::helpers::today;
use crate::signature_grid::SignatureGrid;

#[derive(Properties, PartialEq)]
pub struct ReceiptProps {
    pub receipt: Receipt,
    pub on_print: Callback<MouseEvent>,
    pub on_close: Callback<MouseEvent>,
}

pub struct ReceiptComponent;

impl Component for ReceiptComponent {
    type Message = ();
    type Properties = ReceiptProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ReceiptComponent
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let receipt = &props.receipt;
        let request = &receipt.request;
        let category = request.requester.category();
        let signatures = receipt.signature_blocks();

        html! {
            <>
                <div class="receipt-actions no-print">
                    <button class="btn" onclick={props.on_print.clone()}>{"Print"}</button>
                    <button class="btn secondary" onclick={props.on_close.clone()}>{"Close"}</button>
                </div>
                <div class="receipt-page">
                    <h2 style="text-align:center;margin:0;">{"The LNM Institute of Information Technology"}</h2>
                    <h3 style="text-align:center;margin:4px 0 16px;">{ receipt.variant.title() }</h3>
                    <p style="text-align:right;">{ format!("Date: {}", today()) }</p>

                    <table>
                        <tbody>
                            { detail_row("Requester", category.label()) }
                            { detail_row("Name", &request.name) }
                            { detail_row(category.identifier_label(), &request.identifier) }
                            { detail_row("Department", receipt.department()) }
                            {
                                match request.requester.instructor() {
                                    Some(instructor) if !instructor.trim().is_empty() => detail_row("Instructor", instructor),
                                    _ => html! {},
                                }
                            }
                            { detail_row("Email", &request.email) }
                            { detail_row("Mobile", &request.mobile) }
                            {
                                match &request.period {
                                    Some(period) => html! {
                                        <>
                                            { detail_row("Issue Date", &period.issue_date) }
                                            { detail_row("Return Date", &period.return_date) }
                                        </>
                                    },
                                    None => html! {},
                                }
                            }
                        </tbody>
                    </table>

                    <h4>{"Items"}</h4>
                    { items_table(receipt) }

                    <SignatureGrid columns={signatures.len()}>
                        {
                            for signatures.iter().map(|block| html! {
                                <div class="signature-block">
                                    <div class="signature-line"></div>
                                    <div><strong>{ block.title }</strong></div>
                                    <div>{ block.name.clone().unwrap_or_default() }</div>
                                </div>
                            })
                        }
                    </SignatureGrid>
                </div>
            </>
        }
    }
}

fn detail_row(label: &str, value: &str) -> Html {
    html! {
        <tr>
            <th style="width:30%;">{ label.to_string() }</th>
            <td>{ value.to_string() }</td>
        </tr>
    }
}

fn items_table(receipt: &Receipt) -> Html {
    let per_item_dates = receipt.variant.per_item_dates();

    let rows = receipt
        .request
        .items
        .iter()
        .enumerate()
        .map(|(index, row)| {
            html! {
                <tr>
                    <td>{ index + 1 }</td>
                    <td>{ row.name.clone() }</td>
                    <td>{ row.quantity.clone() }</td>
                    {
                        match &row.details {
                            Some(details) => html! {
                                <>
                                    <td>{ details.issue_date.clone() }</td>
                                    <td>{ details.return_date.clone() }</td>
                                    <td>{ details.remark.clone() }</td>
                                </>
                            },
                            None => html! {},
                        }
                    }
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <table>
            <thead>
                <tr>
                    <th>{"#"}</th>
                    <th>{"Item Name"}</th>
                    <th>{"Quantity"}</th>
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
                </tr>
            </thead>
            <tbody>{ rows }</tbody>
        </table>
    }
}
