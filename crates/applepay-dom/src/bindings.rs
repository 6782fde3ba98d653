//! Low-level wasm-bindgen bindings to the Payment Request API and the
//! `ApplePaySession` global the vendor SDK provides.
//!
//! Exposes the raw handles (`JsPaymentRequest`, `JsPaymentResponse`) and the
//! native event types via `js_sys::Promise`. Higher-level wrappers live in
//! `request.rs`.

use js_sys::Promise;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    //------------------------------------------------------------------------------
    // Core Types
    //------------------------------------------------------------------------------

    /// Raw `PaymentRequest` handle.
    #[wasm_bindgen(extends = web_sys::EventTarget, js_name = PaymentRequest)]
    #[derive(Debug, Clone)]
    pub type JsPaymentRequest;

    /// Raw `PaymentResponse` handle, resolved from `show()`.
    #[wasm_bindgen(js_name = PaymentResponse)]
    #[derive(Debug, Clone)]
    pub type JsPaymentResponse;

    /// `merchantvalidation` event fired when the sheet needs the merchant
    /// validated against the payment network.
    #[wasm_bindgen(extends = web_sys::Event, js_name = MerchantValidationEvent)]
    #[derive(Debug, Clone)]
    pub type MerchantValidationEvent;

    /// Base event for `shippingaddresschange` / `shippingoptionchange`.
    #[wasm_bindgen(extends = web_sys::Event, js_name = PaymentRequestUpdateEvent)]
    #[derive(Debug, Clone)]
    pub type PaymentRequestUpdateEvent;

    /// `paymentmethodchange` event.
    #[wasm_bindgen(extends = PaymentRequestUpdateEvent, extends = web_sys::Event, js_name = PaymentMethodChangeEvent)]
    #[derive(Debug, Clone)]
    pub type PaymentMethodChangeEvent;

    /// `ApplePaySession` global registered by the vendor SDK (and natively
    /// present in Safari).
    #[wasm_bindgen(js_name = ApplePaySession)]
    pub type ApplePaySession;

    //------------------------------------------------------------------------------
    // PaymentRequest
    //------------------------------------------------------------------------------

    /// `new PaymentRequest(methodData, details, options)`
    #[wasm_bindgen(catch, constructor, js_class = "PaymentRequest")]
    pub fn new(
        method_data: &JsValue,
        details: &JsValue,
        options: &JsValue,
    ) -> Result<JsPaymentRequest, JsValue>;

    /// `request.show()` → JS `Promise<PaymentResponse>`
    #[wasm_bindgen(method, catch)]
    pub fn show(this: &JsPaymentRequest) -> Result<Promise, JsValue>;

    /// `request.abort()` → JS `Promise<void>`
    #[wasm_bindgen(method, catch)]
    pub fn abort(this: &JsPaymentRequest) -> Result<Promise, JsValue>;

    /// `request.canMakePayment()` → JS `Promise<boolean>`
    #[wasm_bindgen(method, catch, js_name = canMakePayment)]
    pub fn can_make_payment(this: &JsPaymentRequest) -> Result<Promise, JsValue>;

    /// `request.id`
    #[wasm_bindgen(method, getter)]
    pub fn id(this: &JsPaymentRequest) -> String;

    /// `request.shippingAddress` (opaque; shape is browser-defined)
    #[wasm_bindgen(method, getter, js_name = shippingAddress)]
    pub fn shipping_address(this: &JsPaymentRequest) -> JsValue;

    /// `request.shippingOption`
    #[wasm_bindgen(method, getter, js_name = shippingOption)]
    pub fn shipping_option(this: &JsPaymentRequest) -> Option<String>;

    //------------------------------------------------------------------------------
    // PaymentResponse
    //------------------------------------------------------------------------------

    /// `response.complete(result)` → JS `Promise<void>`
    #[wasm_bindgen(method, catch)]
    pub fn complete(this: &JsPaymentResponse, result: &str) -> Result<Promise, JsValue>;

    /// `response.details` (method-specific payload, opaque to this crate)
    #[wasm_bindgen(method, getter)]
    pub fn details(this: &JsPaymentResponse) -> JsValue;

    /// `response.requestId`
    #[wasm_bindgen(method, getter, js_name = requestId)]
    pub fn request_id(this: &JsPaymentResponse) -> String;

    /// `response.methodName`
    #[wasm_bindgen(method, getter, js_name = methodName)]
    pub fn method_name(this: &JsPaymentResponse) -> String;

    //------------------------------------------------------------------------------
    // Events
    //------------------------------------------------------------------------------

    /// `event.validationURL` — the opaque URL the merchant backend must POST
    /// to; this crate never performs the handshake itself.
    #[wasm_bindgen(method, getter, js_name = validationURL)]
    pub fn validation_url(this: &MerchantValidationEvent) -> String;

    /// `event.complete(merchantSessionPromise)`
    #[wasm_bindgen(method, catch, js_name = complete)]
    pub fn complete_with_merchant_session(
        this: &MerchantValidationEvent,
        merchant_session: &Promise,
    ) -> Result<(), JsValue>;

    /// `event.updateWith(detailsPromise)`
    #[wasm_bindgen(method, catch, js_name = updateWith)]
    pub fn update_with(
        this: &PaymentRequestUpdateEvent,
        details: &Promise,
    ) -> Result<(), JsValue>;

    /// `event.methodName`
    #[wasm_bindgen(method, getter, js_name = methodName)]
    pub fn changed_method_name(this: &PaymentMethodChangeEvent) -> String;

    /// `event.methodDetails`
    #[wasm_bindgen(method, getter, js_name = methodDetails)]
    pub fn method_details(this: &PaymentMethodChangeEvent) -> JsValue;

    //------------------------------------------------------------------------------
    // ApplePaySession statics
    //------------------------------------------------------------------------------

    /// `ApplePaySession.canMakePayments()`
    #[wasm_bindgen(catch, static_method_of = ApplePaySession, js_name = canMakePayments)]
    pub fn can_make_payments() -> Result<bool, JsValue>;

    /// `ApplePaySession.supportsVersion(version)`
    #[wasm_bindgen(catch, static_method_of = ApplePaySession, js_name = supportsVersion)]
    pub fn supports_version(version: u32) -> Result<bool, JsValue>;
}

/// True if the global scope exposes a `PaymentRequest` constructor.
pub fn payment_request_supported() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("PaymentRequest"))
        .unwrap_or(false)
}

/// True if the global scope exposes `ApplePaySession` (Safari, or any browser
/// after the vendor SDK script has loaded).
pub fn apple_pay_supported() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("ApplePaySession"))
        .unwrap_or(false)
}

/// True if the device can make Apple Pay payments. Returns `false` rather
/// than erroring when `ApplePaySession` is absent.
pub fn can_make_apple_payments() -> bool {
    if !apple_pay_supported() {
        return false;
    }
    ApplePaySession::can_make_payments().unwrap_or(false)
}

/// Extract a readable message from a JS exception value.
pub(crate) fn js_error_message(value: &JsValue) -> String {
    use wasm_bindgen::JsCast;
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        String::from(error.message())
    } else {
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value))
    }
}

/// True if a JS exception is a `DOMException` named `AbortError`, which the
/// sheet raises when the user dismisses it.
pub(crate) fn is_abort_error(value: &JsValue) -> bool {
    js_sys::Reflect::get(value, &JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string())
        .map(|name| name == "AbortError")
        .unwrap_or(false)
}
