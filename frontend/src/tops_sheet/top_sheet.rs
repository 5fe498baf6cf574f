use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::{html, Component, Context, Html, NodeRef, Properties};

/// Overlay shown above the form. Hidden until `open_top_sheet` adds the
/// `show` class.
pub struct TopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet no-print" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    toggle_show(top_sheet_ref, true);
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    toggle_show(top_sheet_ref, false);
}

// Deferred so the class change lands after the render that produced the
// sheet's new content.
fn toggle_show(top_sheet_ref: NodeRef, show: bool) {
    Timeout::new(50, move || {
        if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
            let classes = top_sheet.class_list();
            let toggled = if show {
                classes.add_1("show")
            } else {
                classes.remove_1("show")
            };
            if let Err(err) = toggled {
                gloo_console::error!("Toggling top sheet failed", err);
            }
        }
    })
    .forget();
}
