//! # applepay-yew
//!
//! Yew components and hooks for Apple Pay via the browser's Payment Request
//! API. The hard parts of a payment (merchant validation, authorization,
//! session tokens) happen in the browser and on Apple's servers; this crate
//! only wires scripts, constructor data, and event callbacks.
//!
//! ## Example
//!
//! ```rust,ignore
//! use applepay_yew::prelude::*;
//! use yew::prelude::*;
//!
//! #[function_component(Checkout)]
//! fn checkout() -> Html {
//!     let fallback = html! { <p>{"Loading Apple Pay…"}</p> };
//!     html! {
//!         <Suspense {fallback}>
//!             <ApplePay
//!                 payment_method_data={vec![PaymentMethodData::apple_pay(
//!                     ApplePayRequestData::new("merchant.com.apdemo", "US"),
//!                 )]}
//!                 payment_details={PaymentDetailsInit::new(PaymentItem::new(
//!                     "Demo (Card is not charged)",
//!                     CurrencyAmount::new("27.50", "USD"),
//!                 ))}
//!                 on_merchant_validation={Callback::from(|validation: MerchantValidation| {
//!                     // POST validation.validation_url() from your backend,
//!                     // then validation.complete(session_promise)
//!                 })}
//!             >
//!                 <ApplePayButton />
//!             </ApplePay>
//!         </Suspense>
//!     }
//! }
//! ```

pub mod apple_pay;
pub mod button;
pub mod hooks;

pub use apple_pay::{ApplePay, ApplePayProps, PaymentTrigger};
pub use button::{ApplePayButton, ApplePayButtonProps};
pub use hooks::{use_apple_pay_sdk, use_sdk_script};

/// Everything an embedding app typically needs.
pub mod prelude {
    pub use crate::{ApplePay, ApplePayButton, PaymentTrigger};
    pub use crate::{use_apple_pay_sdk, use_sdk_script};
    pub use applepay_core::{
        ApplePayRequestData, ButtonKind, ButtonStyle, CurrencyAmount, MerchantCapability,
        PaymentDetailsInit, PaymentDetailsUpdate, PaymentItem, PaymentMethodData, PaymentNetwork,
        PaymentOptions, PaymentOutcome, PaymentRequestError, SdkConfig, ShippingOption,
        ShippingType,
    };
    pub use applepay_dom::{
        can_make_apple_payments, MerchantValidation, MethodChange, PaymentResponseDetails,
        ShippingChange,
    };
}
