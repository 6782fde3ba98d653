//! # applepay-dom
//!
//! Browser plumbing for the Apple Pay / Payment Request bindings:
//!
//! - a process-wide script-load cache with one `<script>` tag and one settle
//!   promise per URL (`script`)
//! - hand-written externs for `PaymentRequest`, `PaymentResponse`, the
//!   native change events, and `ApplePaySession` (`bindings`)
//! - `PaymentRequestHandle`, which owns the native request plus its listener
//!   closures and drives the show/complete lifecycle (`request`)
//! - imperative click attachment for the `<apple-pay-button>` custom element
//!   (`button`)
//!
//! This crate is framework-free; `applepay-yew` layers components and hooks
//! on top of it.

pub mod bindings;
pub mod button;
pub mod request;
pub mod script;

// Re-exports for convenience
pub use bindings::{apple_pay_supported, can_make_apple_payments, payment_request_supported};
pub use button::{attach_click, ClickGuard, APPLE_PAY_BUTTON_TAG};
pub use request::{
    MerchantValidation, MethodChange, PaymentRequestHandle, PaymentResponseDetails,
    PaymentResponseHandle, ShippingChange,
};
pub use script::{load_script, load_script_with, script_status, ScriptLoad, ScriptStatus};
