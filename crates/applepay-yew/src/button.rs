//! # ApplePayButton Component
//!
//! Renders the vendor's `<apple-pay-button>` custom element. The element is
//! outside Yew's delegated event system, so the click handler is attached
//! imperatively on the real DOM node through a `NodeRef` effect.

use applepay_core::{ButtonKind, ButtonStyle};
use tracing::warn;
use yew::prelude::*;

use crate::apple_pay::PaymentTrigger;

#[derive(Properties, PartialEq)]
pub struct ApplePayButtonProps {
    /// Visual style (`buttonstyle` attribute)
    #[prop_or_default]
    pub button_style: ButtonStyle,

    /// Call-to-action variant (`type` attribute)
    #[prop_or_default]
    pub kind: ButtonKind,

    /// BCP 47 locale for the button label
    #[prop_or_else(|| AttrValue::from("en-US"))]
    pub locale: AttrValue,

    /// Explicit click handler; falls back to the surrounding `ApplePay`
    /// provider's `PaymentTrigger` context when absent
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(ApplePayButton)]
pub fn apple_pay_button(props: &ApplePayButtonProps) -> Html {
    let node = use_node_ref();
    let trigger = use_context::<PaymentTrigger>();

    let onclick = props
        .onclick
        .clone()
        .or_else(|| trigger.map(|trigger| trigger.onclick()));

    {
        let node = node.clone();
        use_effect_with((node, onclick), |(node, onclick)| {
            let mut guard = None;
            if let (Some(element), Some(onclick)) =
                (node.cast::<web_sys::Element>(), onclick.clone())
            {
                match applepay_dom::attach_click(&element, move |event| onclick.emit(event)) {
                    Ok(attached) => guard = Some(attached),
                    Err(err) => warn!(error = %err, "could not attach apple-pay-button click listener"),
                }
            }
            move || drop(guard)
        });
    }

    html! {
        <apple-pay-button
            ref={node}
            buttonstyle={props.button_style.as_attr()}
            type={props.kind.as_attr()}
            locale={props.locale.clone()}
        ></apple-pay-button>
    }
}
