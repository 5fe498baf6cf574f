//! Browser-side helpers for the issue request form.
//!
//! - Reading values out of input events.
//! - Posting the submission body.
//! - Toast notifications and the native print dialog.

use common::requests::SubmissionPayload;
use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, RequestMode};
use yew::prelude::*;

pub fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

/// Posts `payload` to `url` without reading the response.
///
/// The call runs in `no-cors` mode, so the response is opaque: only a
/// transport failure surfaces as `Err`. The body goes out as `text/plain` to
/// keep the request a simple one.
pub async fn post_submission(url: &str, payload: &SubmissionPayload) -> Result<(), String> {
    let body = serde_json::to_string(payload).map_err(|e| e.to_string())?;

    Request::post(url)
        .mode(RequestMode::NoCors)
        .header("Content-Type", "text/plain;charset=utf-8")
        .body(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Opens the browser's print dialog for the current page.
pub fn print_page() {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.print() {
            gloo_console::error!("Print failed", err);
        }
    }
}

/// Today's date as shown on the receipt, e.g. `19/10/2026`.
pub fn today() -> String {
    js_sys::Date::new_0()
        .to_locale_date_string("en-IN", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

/// Displays a short notification at the bottom of the screen that removes
/// itself after three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                toast.set_class_name("no-print");
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
