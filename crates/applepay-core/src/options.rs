//! # Payment Options
//!
//! The third argument of the native `PaymentRequest` constructor: which
//! payer fields to collect and what kind of shipping to offer.

use serde::{Deserialize, Serialize};

/// How purchased goods reach the payer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingType {
    Shipping,
    Delivery,
    Pickup,
}

impl Default for ShippingType {
    fn default() -> Self {
        ShippingType::Shipping
    }
}

/// Options controlling what the payment sheet collects from the payer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOptions {
    /// Collect the payer's name
    #[serde(default)]
    pub request_payer_name: bool,

    /// Collect the payer's email address
    #[serde(default)]
    pub request_payer_email: bool,

    /// Collect the payer's phone number
    #[serde(default)]
    pub request_payer_phone: bool,

    /// Collect a shipping address and offer shipping options
    #[serde(default)]
    pub request_shipping: bool,

    /// Wording used for the shipping section of the sheet
    #[serde(default)]
    pub shipping_type: ShippingType,
}

impl Default for PaymentOptions {
    fn default() -> Self {
        Self {
            request_payer_name: false,
            request_payer_email: false,
            request_payer_phone: false,
            request_shipping: false,
            shipping_type: ShippingType::Shipping,
        }
    }
}

impl PaymentOptions {
    /// Collect name, email, and phone
    pub fn with_payer_contact(mut self) -> Self {
        self.request_payer_name = true;
        self.request_payer_email = true;
        self.request_payer_phone = true;
        self
    }

    /// Collect a shipping address with the given shipping wording
    pub fn with_shipping(mut self, shipping_type: ShippingType) -> Self {
        self.request_shipping = true;
        self.shipping_type = shipping_type;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_requests_nothing() {
        let opts = PaymentOptions::default();
        assert!(!opts.request_payer_name);
        assert!(!opts.request_shipping);
        assert_eq!(opts.shipping_type, ShippingType::Shipping);
    }

    #[test]
    fn test_options_shape() {
        let opts = PaymentOptions::default().with_shipping(ShippingType::Pickup);
        let json = serde_json::to_value(opts).unwrap();
        assert_eq!(json["requestShipping"], true);
        assert_eq!(json["shippingType"], "pickup");
        assert_eq!(json["requestPayerEmail"], false);
    }
}
