//! # Payment Method Data
//!
//! Typed constructor payloads for the first argument of the native
//! `PaymentRequest` constructor. Serialized field names match the JS
//! shapes the browser expects, so these types convert directly with
//! `serde-wasm-bindgen`.

use serde::{Deserialize, Serialize};

/// Canonical Payment Request method identifier for Apple Pay
pub const APPLE_PAY_METHOD: &str = "https://apple.com/apple-pay";

/// One entry of the `paymentMethodData` constructor argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodData {
    /// Payment method identifier URL
    pub supported_methods: String,

    /// Method-specific data (Apple Pay request data for the Apple method)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ApplePayRequestData>,
}

impl PaymentMethodData {
    /// Create method data for the Apple Pay method identifier
    pub fn apple_pay(data: ApplePayRequestData) -> Self {
        Self {
            supported_methods: APPLE_PAY_METHOD.to_string(),
            data: Some(data),
        }
    }
}

/// Merchant capabilities advertised to the payment sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MerchantCapability {
    #[serde(rename = "supports3DS")]
    Supports3DS,
    #[serde(rename = "supportsCredit")]
    SupportsCredit,
    #[serde(rename = "supportsDebit")]
    SupportsDebit,
    #[serde(rename = "supportsEMV")]
    SupportsEmv,
}

/// Card networks accepted by the merchant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentNetwork {
    #[serde(rename = "amex")]
    Amex,
    #[serde(rename = "chinaUnionPay")]
    ChinaUnionPay,
    #[serde(rename = "discover")]
    Discover,
    #[serde(rename = "interac")]
    Interac,
    #[serde(rename = "jcb")]
    Jcb,
    #[serde(rename = "masterCard")]
    MasterCard,
    #[serde(rename = "privateLabel")]
    PrivateLabel,
    #[serde(rename = "visa")]
    Visa,
}

/// Apple Pay specific request data, nested under `data` in the method entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayRequestData {
    /// Apple Pay JS API version
    pub version: u32,

    /// Merchant identifier registered with Apple (e.g. `merchant.com.example`)
    pub merchant_identifier: String,

    /// Advertised merchant capabilities
    pub merchant_capabilities: Vec<MerchantCapability>,

    /// Accepted card networks
    pub supported_networks: Vec<PaymentNetwork>,

    /// ISO 3166 country code of the merchant
    pub country_code: String,
}

impl ApplePayRequestData {
    /// Create request data with the widely deployed defaults: API version 3,
    /// 3-D Secure capability, and the four major US networks.
    pub fn new(merchant_identifier: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            version: 3,
            merchant_identifier: merchant_identifier.into(),
            merchant_capabilities: vec![MerchantCapability::Supports3DS],
            supported_networks: vec![
                PaymentNetwork::Amex,
                PaymentNetwork::Discover,
                PaymentNetwork::MasterCard,
                PaymentNetwork::Visa,
            ],
            country_code: country_code.into(),
        }
    }

    /// Set the Apple Pay JS API version
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Replace the advertised capabilities
    pub fn with_capabilities(mut self, capabilities: Vec<MerchantCapability>) -> Self {
        self.merchant_capabilities = capabilities;
        self
    }

    /// Replace the accepted networks
    pub fn with_networks(mut self, networks: Vec<PaymentNetwork>) -> Self {
        self.supported_networks = networks;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apple_pay_method_shape() {
        let data = ApplePayRequestData::new("merchant.com.apdemo", "US");
        let method = PaymentMethodData::apple_pay(data);

        let json = serde_json::to_value(&method).unwrap();
        assert_eq!(json["supportedMethods"], "https://apple.com/apple-pay");
        assert_eq!(json["data"]["version"], 3);
        assert_eq!(json["data"]["merchantIdentifier"], "merchant.com.apdemo");
        assert_eq!(json["data"]["merchantCapabilities"][0], "supports3DS");
        assert_eq!(json["data"]["countryCode"], "US");
    }

    #[test]
    fn test_network_strings() {
        let json = serde_json::to_value(vec![
            PaymentNetwork::Amex,
            PaymentNetwork::Discover,
            PaymentNetwork::MasterCard,
            PaymentNetwork::Visa,
        ])
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!(["amex", "discover", "masterCard", "visa"])
        );
    }

    #[test]
    fn test_builder_setters() {
        let data = ApplePayRequestData::new("merchant.com.apdemo", "GB")
            .with_version(14)
            .with_networks(vec![PaymentNetwork::Visa]);

        assert_eq!(data.version, 14);
        assert_eq!(data.supported_networks, vec![PaymentNetwork::Visa]);
        assert_eq!(data.country_code, "GB");
    }
}
