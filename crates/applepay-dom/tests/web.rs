//! Browser tests for the script cache and button helpers.
//!
//! Run with `wasm-pack test --headless --chrome crates/applepay-dom`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use applepay_core::{
    ApplePayRequestData, CurrencyAmount, PaymentDetailsInit, PaymentItem, PaymentMethodData,
    PaymentOptions, PaymentRequestError,
};
use applepay_dom::{
    attach_click, load_script, payment_request_supported, script_status, PaymentRequestHandle,
    ScriptLoad, ScriptStatus,
};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn script_tag_count(src: &str) -> u32 {
    document()
        .query_selector_all(&format!("script[src=\"{}\"]", src))
        .unwrap()
        .length()
}

#[wasm_bindgen_test]
async fn load_inserts_exactly_one_script_tag() {
    let src = "data:text/javascript,void%200;//one-tag";

    let first = load_script(src);
    let promise = match first {
        ScriptLoad::Pending(promise) => promise,
        other => panic!("expected pending on first load, got {:?}", other),
    };

    // A second request while pending must reuse the entry, not insert again
    assert!(matches!(load_script(src), ScriptLoad::Pending(_)));
    assert_eq!(script_tag_count(src), 1);

    JsFuture::from(promise).await.unwrap();

    assert!(matches!(load_script(src), ScriptLoad::Loaded));
    assert_eq!(script_status(src), Some(ScriptStatus::Loaded));
    assert_eq!(script_tag_count(src), 1);
}

#[wasm_bindgen_test]
async fn pending_promise_is_shared_across_callers() {
    let src = "data:text/javascript,void%200;//shared";

    let first = match load_script(src) {
        ScriptLoad::Pending(promise) => promise,
        other => panic!("expected pending, got {:?}", other),
    };
    let second = match load_script(src) {
        ScriptLoad::Pending(promise) => promise,
        other => panic!("expected pending, got {:?}", other),
    };

    // Both callers settle from the same underlying load
    JsFuture::from(first).await.unwrap();
    JsFuture::from(second).await.unwrap();
    assert!(matches!(load_script(src), ScriptLoad::Loaded));
}

#[wasm_bindgen_test]
async fn failed_load_is_recorded_and_sticky() {
    // Reserved .invalid TLD guarantees the fetch fails
    let src = "https://sdk.example.invalid/apple-pay-sdk.js";

    let promise = match load_script(src) {
        ScriptLoad::Pending(promise) => promise,
        other => panic!("expected pending, got {:?}", other),
    };

    assert!(JsFuture::from(promise).await.is_err());
    assert_eq!(script_status(src), Some(ScriptStatus::Failed));

    // The failure is cached; no second tag is inserted on retry
    assert!(matches!(load_script(src), ScriptLoad::Failed(_)));
    assert_eq!(script_tag_count(src), 1);
}

#[wasm_bindgen_test]
fn unknown_script_has_no_status() {
    assert_eq!(script_status("https://never-requested.example/sdk.js"), None);
}

#[wasm_bindgen_test]
fn click_guard_attaches_and_detaches() {
    let element = document().create_element("apple-pay-button").unwrap();
    document().body().unwrap().append_child(&element).unwrap();

    let clicks = Rc::new(Cell::new(0));
    let counter = clicks.clone();
    let guard = attach_click(&element, move |_| counter.set(counter.get() + 1)).unwrap();

    let click = |element: &web_sys::Element| {
        let event = web_sys::MouseEvent::new("click").unwrap();
        element.dispatch_event(&event).unwrap();
    };

    click(&element);
    assert_eq!(clicks.get(), 1);

    drop(guard);
    click(&element);
    assert_eq!(clicks.get(), 1, "listener must be removed on drop");

    element.remove();
}

fn demo_details() -> PaymentDetailsInit {
    PaymentDetailsInit::new(PaymentItem::new(
        "Demo (Card is not charged)",
        CurrencyAmount::new("27.50", "USD"),
    ))
}

#[wasm_bindgen_test]
fn construction_rejects_empty_method_data() {
    if !payment_request_supported() {
        return;
    }

    let result = PaymentRequestHandle::new(&[], &demo_details(), &PaymentOptions::default());
    assert!(matches!(
        result,
        Err(PaymentRequestError::Construction(_))
    ));
}

#[wasm_bindgen_test]
fn listeners_fire_and_stop_with_the_handle() {
    if !payment_request_supported() {
        return;
    }

    let method_data = vec![PaymentMethodData::apple_pay(ApplePayRequestData::new(
        "merchant.com.apdemo",
        "US",
    ))];
    let mut handle =
        PaymentRequestHandle::new(&method_data, &demo_details(), &PaymentOptions::default())
            .unwrap();

    let validations = Rc::new(Cell::new(0u32));
    let counter = validations.clone();
    handle
        .on_merchant_validation(move |_| counter.set(counter.get() + 1))
        .unwrap();

    let shipping_changes = Rc::new(Cell::new(0u32));
    let counter = shipping_changes.clone();
    handle
        .on_shipping_option_change(move |_| counter.set(counter.get() + 1))
        .unwrap();

    let request = handle.request().clone();
    let dispatch = |name: &str| {
        let event = web_sys::Event::new(name).unwrap();
        request.dispatch_event(&event).unwrap();
    };

    dispatch("merchantvalidation");
    dispatch("shippingoptionchange");
    assert_eq!(validations.get(), 1);
    assert_eq!(shipping_changes.get(), 1);

    // Events without a registered forwarder are ignored
    dispatch("paymentmethodchange");
    assert_eq!(validations.get(), 1);
    assert_eq!(shipping_changes.get(), 1);

    // Dropping the handle drops the listener closures with it
    drop(handle);
    dispatch("merchantvalidation");
    assert_eq!(validations.get(), 1);
}
