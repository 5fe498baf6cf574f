//! Properties for the `IssueFormComponent`.

use common::model::variant::FormVariant;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IssueFormProps {
    /// Which form to render. Fixed for the lifetime of the component.
    #[prop_or_default]
    pub variant: FormVariant,

    /// Endpoint the submission body is posted to.
    pub submit_url: AttrValue,

    /// CSV export of the item catalog. When `None` item names are typed
    /// freely and nothing is fetched.
    #[prop_or_default]
    pub catalog_url: Option<AttrValue>,
}
