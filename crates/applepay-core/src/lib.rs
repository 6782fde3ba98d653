//! # applepay-core
//!
//! Typed data model for the browser's Payment Request / Apple Pay JS SDK.
//!
//! This crate provides:
//! - `PaymentMethodData` and `ApplePayRequestData` for the constructor's
//!   method entries
//! - `PaymentDetailsInit`, `PaymentItem`, and `CurrencyAmount` for the sheet
//!   contents
//! - `PaymentOptions` for payer/shipping collection flags
//! - `ButtonStyle` / `ButtonKind` for the vendor button element
//! - `SdkConfig` for the vendor script location
//! - `PaymentRequestError` for typed error handling
//!
//! Everything serializes to the exact camelCase JS shapes the native API
//! expects, so the DOM layer can hand values straight to the constructor.
//!
//! ## Example
//!
//! ```rust
//! use applepay_core::{
//!     ApplePayRequestData, CurrencyAmount, PaymentDetailsInit, PaymentItem,
//!     PaymentMethodData,
//! };
//!
//! let method = PaymentMethodData::apple_pay(
//!     ApplePayRequestData::new("merchant.com.apdemo", "US"),
//! );
//!
//! let details = PaymentDetailsInit::new(PaymentItem::new(
//!     "Demo (Card is not charged)",
//!     CurrencyAmount::new("27.50", "USD"),
//! ));
//!
//! assert_eq!(method.supported_methods, "https://apple.com/apple-pay");
//! assert_eq!(details.total.amount.value, "27.50");
//! ```

pub mod button;
pub mod config;
pub mod details;
pub mod error;
pub mod method;
pub mod options;

// Re-exports for convenience
pub use button::{ButtonKind, ButtonStyle};
pub use config::{SdkConfig, APPLE_PAY_SDK_URL};
pub use details::{
    CurrencyAmount, PaymentDetailsInit, PaymentDetailsUpdate, PaymentItem, PaymentOutcome,
    ShippingOption,
};
pub use error::{PaymentRequestError, PaymentResult};
pub use method::{
    ApplePayRequestData, MerchantCapability, PaymentMethodData, PaymentNetwork, APPLE_PAY_METHOD,
};
pub use options::{PaymentOptions, ShippingType};
