//! # ApplePay Provider Component
//!
//! Suspends until the vendor SDK script settles, then provides its children
//! a `PaymentTrigger` context. Triggering constructs the native request from
//! the props, forwards native events to the prop callbacks, shows the sheet,
//! and completes the response with the outcome `on_payment` returns.

use applepay_core::{
    PaymentDetailsInit, PaymentMethodData, PaymentOptions, PaymentOutcome, PaymentRequestError,
    PaymentResult, SdkConfig,
};
use applepay_dom::{
    MerchantValidation, MethodChange, PaymentRequestHandle, PaymentResponseDetails, ShippingChange,
};
use tracing::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_sdk_script;

/// Click callback provided to descendants of `ApplePay`.
///
/// `ApplePayButton` picks this up from context when it has no explicit
/// `onclick` prop.
#[derive(Clone, PartialEq)]
pub struct PaymentTrigger {
    onclick: Callback<MouseEvent>,
}

impl PaymentTrigger {
    /// The click callback that starts the payment flow
    pub fn onclick(&self) -> Callback<MouseEvent> {
        self.onclick.clone()
    }
}

#[derive(Properties, PartialEq)]
pub struct ApplePayProps {
    /// Where to load the vendor SDK script from
    #[prop_or_default]
    pub sdk: SdkConfig,

    /// Method entries for the native constructor
    pub payment_method_data: Vec<PaymentMethodData>,

    /// Sheet contents for the native constructor
    pub payment_details: PaymentDetailsInit,

    /// Payer/shipping collection flags
    #[prop_or_default]
    pub payment_options: PaymentOptions,

    /// Called when the sheet needs the merchant validated; the caller's
    /// backend must handle the opaque validation URL
    #[prop_or_default]
    pub on_merchant_validation: Option<Callback<MerchantValidation>>,

    /// Called when the payer changes the payment method on the sheet
    #[prop_or_default]
    pub on_payment_method_change: Option<Callback<MethodChange>>,

    /// Called when the payer changes the shipping address
    #[prop_or_default]
    pub on_shipping_address_change: Option<Callback<ShippingChange>>,

    /// Called when the payer picks a different shipping option
    #[prop_or_default]
    pub on_shipping_option_change: Option<Callback<ShippingChange>>,

    /// Called with the settled response; the returned outcome is reported
    /// back to the sheet (defaults to success when the prop is absent)
    #[prop_or_default]
    pub on_payment: Option<Callback<PaymentResponseDetails, PaymentOutcome>>,

    /// Called on script-load, construction, and completion failures
    #[prop_or_default]
    pub on_error: Callback<PaymentRequestError>,

    #[prop_or_default]
    pub children: Html,
}

#[function_component(ApplePay)]
pub fn apple_pay(props: &ApplePayProps) -> HtmlResult {
    let loaded = use_sdk_script(&props.sdk, true)?;

    {
        let on_error = props.on_error.clone();
        use_effect_with(loaded.clone(), move |result| {
            if let Err(err) = result {
                on_error.emit(err.clone());
            }
        });
    }

    if !matches!(loaded, Ok(true)) {
        // Load failure was reported through on_error above
        return Ok(Html::default());
    }

    let trigger = {
        let method_data = props.payment_method_data.clone();
        let details = props.payment_details.clone();
        let options = props.payment_options;
        let on_merchant_validation = props.on_merchant_validation.clone();
        let on_payment_method_change = props.on_payment_method_change.clone();
        let on_shipping_address_change = props.on_shipping_address_change.clone();
        let on_shipping_option_change = props.on_shipping_option_change.clone();
        let on_payment = props.on_payment.clone();
        let on_error = props.on_error.clone();

        Callback::from(move |_event: MouseEvent| {
            let handle = build_request(
                &method_data,
                &details,
                &options,
                on_merchant_validation.clone(),
                on_payment_method_change.clone(),
                on_shipping_address_change.clone(),
                on_shipping_option_change.clone(),
            );
            let handle = match handle {
                Ok(handle) => handle,
                Err(err) => {
                    on_error.emit(err);
                    return;
                }
            };

            let on_payment = on_payment.clone();
            let on_error = on_error.clone();
            spawn_local(async move {
                present_sheet(handle, on_payment, on_error).await;
            });
        })
    };

    Ok(html! {
        <ContextProvider<PaymentTrigger> context={PaymentTrigger { onclick: trigger }}>
            { props.children.clone() }
        </ContextProvider<PaymentTrigger>>
    })
}

#[allow(clippy::too_many_arguments)]
fn build_request(
    method_data: &[PaymentMethodData],
    details: &PaymentDetailsInit,
    options: &PaymentOptions,
    on_merchant_validation: Option<Callback<MerchantValidation>>,
    on_payment_method_change: Option<Callback<MethodChange>>,
    on_shipping_address_change: Option<Callback<ShippingChange>>,
    on_shipping_option_change: Option<Callback<ShippingChange>>,
) -> PaymentResult<PaymentRequestHandle> {
    let mut handle = PaymentRequestHandle::new(method_data, details, options)?;

    if let Some(callback) = on_merchant_validation {
        handle.on_merchant_validation(move |validation| callback.emit(validation))?;
    }
    if let Some(callback) = on_payment_method_change {
        handle.on_payment_method_change(move |change| callback.emit(change))?;
    }
    if let Some(callback) = on_shipping_address_change {
        handle.on_shipping_address_change(move |change| callback.emit(change))?;
    }
    if let Some(callback) = on_shipping_option_change {
        handle.on_shipping_option_change(move |change| callback.emit(change))?;
    }

    Ok(handle)
}

async fn present_sheet(
    handle: PaymentRequestHandle,
    on_payment: Option<Callback<PaymentResponseDetails, PaymentOutcome>>,
    on_error: Callback<PaymentRequestError>,
) {
    match handle.show().await {
        Ok(response) => {
            let outcome = on_payment
                .as_ref()
                .map(|callback| callback.emit(response.snapshot()))
                .unwrap_or_default();
            if let Err(err) = response.complete(outcome).await {
                on_error.emit(err);
            }
        }
        Err(err) if err.is_user_abort() => {
            debug!("payment sheet dismissed by user");
        }
        Err(err) => on_error.emit(err),
    }
}
