use yew::prelude::*;

use crate::interaction::dom::scroll_to_section;
use crate::interaction::navbar::Anchor;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub to: Anchor,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub on_navigate: Option<Callback<()>>,
    pub children: Children,
}

/// In-page link that scrolls smoothly instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let to = props.to;
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(to.id());
            if let Some(callback) = &on_navigate {
                callback.emit(());
            }
        })
    };

    html! {
        <a href={props.to.href()} class={props.classes.clone()} onclick={onclick}>
            { for props.children.iter() }
        </a>
    }
}
