use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct SignatureGridProps {
    pub columns: usize,
    pub children: Children,
}

/// Lays signature blocks side by side, one equal column per block.
pub struct SignatureGrid;

impl Component for SignatureGrid {
    type Message = ();
    type Properties = SignatureGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SignatureGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, 1fr);
             gap: 24px;
             margin-top: 48px;
             page-break-inside: avoid;",
            props.columns.max(1)
        );

        html! {
            <div class="signature-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
