//! # Apple Pay Button Element Helpers
//!
//! The vendor SDK registers an `<apple-pay-button>` custom element. Custom
//! elements sit outside component frameworks' delegated event systems, so
//! the click handler has to be attached imperatively on the real DOM node.

use applepay_core::{PaymentRequestError, PaymentResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::bindings::js_error_message;

/// Tag name of the vendor-registered custom element
pub const APPLE_PAY_BUTTON_TAG: &str = "apple-pay-button";

/// Keeps a click listener alive; removes it from the element on drop.
pub struct ClickGuard {
    target: web_sys::EventTarget,
    closure: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl Drop for ClickGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("click", self.closure.as_ref().unchecked_ref());
    }
}

/// Attach `f` as a click listener on the button element.
///
/// The returned guard owns the closure; dropping it detaches the listener.
pub fn attach_click(
    element: &web_sys::Element,
    f: impl Fn(web_sys::MouseEvent) + 'static,
) -> PaymentResult<ClickGuard> {
    let closure =
        Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |event: web_sys::MouseEvent| f(event));
    element
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(|err| PaymentRequestError::Construction(js_error_message(&err)))?;
    Ok(ClickGuard {
        target: web_sys::EventTarget::from(element.clone()),
        closure,
    })
}
