use crate::components::issue_form::IssueFormComponent;
use crate::config;
use yew::{html, AttrValue, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let variant = config::variant();
        let catalog_url = variant
            .uses_catalog()
            .then(|| AttrValue::from(config::CATALOG_URL));

        html! {
            <div>
                <IssueFormComponent
                    variant={variant}
                    submit_url={AttrValue::from(config::SUBMIT_URL)}
                    catalog_url={catalog_url}
                />
            </div>
        }
    }
}
