//! Issue request form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering and helpers.
//!
//! Responsibilities
//! - Re-export `Msg`, `IssueFormProps` and `IssueFormComponent`.
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - On first render, fetch the item catalog when the form uses one. A failed
//!   fetch is logged and the form keeps an empty catalog.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::form::Action;

use crate::components::data_sources::catalog::fetch_catalog;

mod dialogs;
pub(crate) mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::IssueFormProps;
pub use state::IssueFormComponent;

impl Component for IssueFormComponent {
    type Message = Msg;
    type Properties = IssueFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        IssueFormComponent::new(ctx.props().variant)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            if let Some(url) = ctx.props().catalog_url.clone() {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match fetch_catalog(&url).await {
                        Ok(items) => {
                            gloo_console::log!(format!("Loaded {} catalog items", items.len()));
                            link.send_message(Msg::Form(Action::CatalogLoaded(items)));
                        }
                        Err(err) => {
                            gloo_console::error!(format!("Error loading item catalog: {}", err));
                        }
                    }
                });
            }
        }
    }
}
