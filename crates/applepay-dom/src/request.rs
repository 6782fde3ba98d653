//! # Payment Request Wiring
//!
//! `PaymentRequestHandle` owns a native `PaymentRequest` together with the
//! listener closures registered on it, forwards native events to Rust
//! callbacks, and drives the show/complete lifecycle. The handle must stay
//! alive while the sheet is visible; dropping it drops the listeners.

use applepay_core::{
    PaymentDetailsInit, PaymentDetailsUpdate, PaymentMethodData, PaymentOptions, PaymentOutcome,
    PaymentRequestError, PaymentResult,
};
use js_sys::Promise;
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::bindings::{
    is_abort_error, js_error_message, payment_request_supported, JsPaymentRequest,
    JsPaymentResponse, MerchantValidationEvent, PaymentMethodChangeEvent,
    PaymentRequestUpdateEvent,
};

fn serialize<T: serde::Serialize>(value: &T) -> PaymentResult<JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|err| PaymentRequestError::Serialization(err.to_string()))
}

/// A merchant-validation event surfaced to the caller.
///
/// The caller's backend must POST to `validation_url()` and resolve
/// `complete` with the opaque merchant session it gets back. This crate
/// never sees or processes the session itself.
#[derive(Debug, Clone)]
pub struct MerchantValidation {
    event: MerchantValidationEvent,
}

impl MerchantValidation {
    /// The opaque validation URL the merchant backend must contact
    pub fn validation_url(&self) -> String {
        self.event.validation_url()
    }

    /// Hand the (pending) merchant session back to the browser
    pub fn complete(&self, merchant_session: &Promise) -> PaymentResult<()> {
        self.event
            .complete_with_merchant_session(merchant_session)
            .map_err(|err| PaymentRequestError::Show(js_error_message(&err)))
    }
}

/// A payment-method-change event surfaced to the caller.
#[derive(Debug, Clone)]
pub struct MethodChange {
    event: PaymentMethodChangeEvent,
}

impl MethodChange {
    /// Identifier of the newly selected method
    pub fn method_name(&self) -> String {
        self.event.changed_method_name()
    }

    /// Method-specific change payload, opaque to this crate
    pub fn method_details(&self) -> JsValue {
        self.event.method_details()
    }

    /// Respond with updated details for the sheet
    pub fn update_with(&self, update: &PaymentDetailsUpdate) -> PaymentResult<()> {
        update_event(&self.event, update)
    }
}

/// A shipping address or shipping option change surfaced to the caller.
#[derive(Debug, Clone)]
pub struct ShippingChange {
    event: PaymentRequestUpdateEvent,
    request: JsPaymentRequest,
}

impl ShippingChange {
    /// The request's redacted shipping address, as the browser exposes it
    pub fn shipping_address(&self) -> JsValue {
        self.request.shipping_address()
    }

    /// Identifier of the currently selected shipping option
    pub fn shipping_option(&self) -> Option<String> {
        self.request.shipping_option()
    }

    /// Respond with updated details for the sheet
    pub fn update_with(&self, update: &PaymentDetailsUpdate) -> PaymentResult<()> {
        update_event(&self.event, update)
    }
}

fn update_event(event: &PaymentRequestUpdateEvent, update: &PaymentDetailsUpdate) -> PaymentResult<()> {
    let details = serialize(update)?;
    event
        .update_with(&Promise::resolve(&details))
        .map_err(|err| PaymentRequestError::Show(js_error_message(&err)))
}

/// Snapshot of a settled payment response, handed to caller callbacks.
#[derive(Debug, Clone)]
pub struct PaymentResponseDetails {
    /// Identifier echoed from the request
    pub request_id: String,
    /// The method that produced the response
    pub method_name: String,
    /// Method-specific response payload (e.g. the Apple Pay token), opaque
    pub details: JsValue,
}

/// Owns a native `PaymentRequest` plus its registered listeners.
pub struct PaymentRequestHandle {
    request: JsPaymentRequest,
    listeners: Vec<Closure<dyn FnMut(web_sys::Event)>>,
}

impl PaymentRequestHandle {
    /// Construct a native request from typed constructor payloads.
    pub fn new(
        method_data: &[PaymentMethodData],
        details: &PaymentDetailsInit,
        options: &PaymentOptions,
    ) -> PaymentResult<Self> {
        if !payment_request_supported() {
            return Err(PaymentRequestError::Unsupported(
                "PaymentRequest is not defined in this browsing context".to_string(),
            ));
        }

        let method_data = serialize(&method_data)?;
        let details = serialize(details)?;
        let options = serialize(options)?;

        let request = JsPaymentRequest::new(&method_data, &details, &options)
            .map_err(|err| PaymentRequestError::Construction(js_error_message(&err)))?;

        debug!(id = %request.id(), "payment request constructed");

        Ok(Self {
            request,
            listeners: Vec::new(),
        })
    }

    /// The underlying native request, for callers that need the raw handle.
    pub fn request(&self) -> &JsPaymentRequest {
        &self.request
    }

    fn listen(
        &mut self,
        event_name: &str,
        closure: Closure<dyn FnMut(web_sys::Event)>,
    ) -> PaymentResult<()> {
        self.request
            .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
            .map_err(|err| PaymentRequestError::Construction(js_error_message(&err)))?;
        self.listeners.push(closure);
        Ok(())
    }

    /// Forward `merchantvalidation` events to `f`.
    pub fn on_merchant_validation(
        &mut self,
        f: impl Fn(MerchantValidation) + 'static,
    ) -> PaymentResult<()> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let event: MerchantValidationEvent = event.unchecked_into();
            f(MerchantValidation { event });
        });
        self.listen("merchantvalidation", closure)
    }

    /// Forward `paymentmethodchange` events to `f`.
    pub fn on_payment_method_change(
        &mut self,
        f: impl Fn(MethodChange) + 'static,
    ) -> PaymentResult<()> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let event: PaymentMethodChangeEvent = event.unchecked_into();
            f(MethodChange { event });
        });
        self.listen("paymentmethodchange", closure)
    }

    /// Forward `shippingaddresschange` events to `f`.
    pub fn on_shipping_address_change(
        &mut self,
        f: impl Fn(ShippingChange) + 'static,
    ) -> PaymentResult<()> {
        self.on_shipping_event("shippingaddresschange", f)
    }

    /// Forward `shippingoptionchange` events to `f`.
    pub fn on_shipping_option_change(
        &mut self,
        f: impl Fn(ShippingChange) + 'static,
    ) -> PaymentResult<()> {
        self.on_shipping_event("shippingoptionchange", f)
    }

    fn on_shipping_event(
        &mut self,
        event_name: &str,
        f: impl Fn(ShippingChange) + 'static,
    ) -> PaymentResult<()> {
        let request = self.request.clone();
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let event: PaymentRequestUpdateEvent = event.unchecked_into();
            f(ShippingChange {
                event,
                request: request.clone(),
            });
        });
        self.listen(event_name, closure)
    }

    /// Show the payment sheet and await the payer's response.
    ///
    /// User dismissal surfaces as `PaymentRequestError::Aborted`.
    pub async fn show(&self) -> PaymentResult<PaymentResponseHandle> {
        let promise = self.request.show().map_err(|err| show_error(&err))?;
        let response = JsFuture::from(promise)
            .await
            .map_err(|err| show_error(&err))?;
        Ok(PaymentResponseHandle {
            response: response.unchecked_into(),
        })
    }

    /// Abort the request, dismissing a visible sheet.
    pub async fn abort(&self) -> PaymentResult<()> {
        let promise = self
            .request
            .abort()
            .map_err(|err| PaymentRequestError::Show(js_error_message(&err)))?;
        JsFuture::from(promise)
            .await
            .map_err(|err| PaymentRequestError::Show(js_error_message(&err)))?;
        Ok(())
    }

    /// Ask the browser whether the payer can make a payment with any of the
    /// requested methods.
    pub async fn can_make_payment(&self) -> PaymentResult<bool> {
        let promise = self
            .request
            .can_make_payment()
            .map_err(|err| PaymentRequestError::Show(js_error_message(&err)))?;
        let value = JsFuture::from(promise)
            .await
            .map_err(|err| PaymentRequestError::Show(js_error_message(&err)))?;
        Ok(value.as_bool().unwrap_or(false))
    }
}

fn show_error(err: &JsValue) -> PaymentRequestError {
    if is_abort_error(err) {
        PaymentRequestError::Aborted
    } else {
        PaymentRequestError::Show(js_error_message(err))
    }
}

/// A settled payment response awaiting completion.
pub struct PaymentResponseHandle {
    response: JsPaymentResponse,
}

impl PaymentResponseHandle {
    /// Snapshot the response fields for caller callbacks
    pub fn snapshot(&self) -> PaymentResponseDetails {
        PaymentResponseDetails {
            request_id: self.response.request_id(),
            method_name: self.response.method_name(),
            details: self.response.details(),
        }
    }

    /// Report the outcome, closing the sheet.
    pub async fn complete(&self, outcome: PaymentOutcome) -> PaymentResult<()> {
        let promise = self
            .response
            .complete(outcome.as_str())
            .map_err(|err| PaymentRequestError::Completion(js_error_message(&err)))?;
        JsFuture::from(promise)
            .await
            .map_err(|err| PaymentRequestError::Completion(js_error_message(&err)))?;
        debug!(outcome = outcome.as_str(), "payment response completed");
        Ok(())
    }
}
