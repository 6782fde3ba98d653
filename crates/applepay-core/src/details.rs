//! # Payment Details
//!
//! The second argument of the native `PaymentRequest` constructor: the total,
//! optional line items, and optional shipping options shown on the sheet.
//! Amounts are decimal strings, as the Payment Request API requires.

use serde::{Deserialize, Serialize};

/// A monetary amount: decimal string value plus ISO 4217 currency code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyAmount {
    /// Decimal string, e.g. `"27.50"`
    pub value: String,
    /// ISO 4217 code, e.g. `"USD"`
    pub currency: String,
}

impl CurrencyAmount {
    /// Create an amount from a pre-formatted decimal string
    pub fn new(value: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            currency: currency.into(),
        }
    }

    /// Create an amount from minor units (cents), formatted to two decimals
    pub fn from_minor_units(amount: i64, currency: impl Into<String>) -> Self {
        let sign = if amount < 0 { "-" } else { "" };
        let abs = amount.unsigned_abs();
        Self {
            value: format!("{}{}.{:02}", sign, abs / 100, abs % 100),
            currency: currency.into(),
        }
    }
}

/// A labeled amount displayed on the payment sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentItem {
    /// Human-readable label
    pub label: String,
    /// Item amount
    pub amount: CurrencyAmount,
}

impl PaymentItem {
    pub fn new(label: impl Into<String>, amount: CurrencyAmount) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// A shipping option offered on the payment sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingOption {
    /// Identifier reported back on shipping-option-change events
    pub id: String,
    /// Human-readable label
    pub label: String,
    /// Shipping cost
    pub amount: CurrencyAmount,
    /// Whether this option is preselected
    #[serde(default)]
    pub selected: bool,
}

impl ShippingOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>, amount: CurrencyAmount) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            amount,
            selected: false,
        }
    }

    /// Mark this option as preselected
    pub fn preselected(mut self) -> Self {
        self.selected = true;
        self
    }
}

/// Initial payment details passed to the constructor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetailsInit {
    /// Optional request identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The total line (always required by the native API)
    pub total: PaymentItem,

    /// Optional line items shown above the total
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub display_items: Vec<PaymentItem>,

    /// Optional shipping options
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shipping_options: Vec<ShippingOption>,
}

impl PaymentDetailsInit {
    /// Create details with just a total
    pub fn new(total: PaymentItem) -> Self {
        Self {
            id: None,
            total,
            display_items: Vec::new(),
            shipping_options: Vec::new(),
        }
    }

    /// Set the request identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a display line item
    pub fn with_item(mut self, item: PaymentItem) -> Self {
        self.display_items.push(item);
        self
    }

    /// Add a shipping option
    pub fn with_shipping_option(mut self, option: ShippingOption) -> Self {
        self.shipping_options.push(option);
        self
    }
}

/// Updated details supplied in response to a shipping or method change event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetailsUpdate {
    /// Replacement total, if it changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<PaymentItem>,

    /// Replacement line items
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub display_items: Vec<PaymentItem>,

    /// Replacement shipping options
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shipping_options: Vec<ShippingOption>,

    /// Error message shown on the sheet (e.g. "cannot ship to this address")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PaymentDetailsUpdate {
    /// An update that changes nothing (acknowledges the event)
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// An update that replaces the total
    pub fn with_total(total: PaymentItem) -> Self {
        Self {
            total: Some(total),
            ..Self::default()
        }
    }

    /// An update that surfaces an error on the sheet
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }
}

/// Outcome reported to `PaymentResponse.complete()`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentOutcome {
    /// Payment processed; the sheet shows success
    Success,
    /// Payment failed; the sheet shows failure
    Fail,
    /// No outcome known; the browser picks the UI
    Unknown,
}

impl PaymentOutcome {
    /// The string accepted by the native `complete()` call
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentOutcome::Success => "success",
            PaymentOutcome::Fail => "fail",
            PaymentOutcome::Unknown => "unknown",
        }
    }
}

impl Default for PaymentOutcome {
    fn default() -> Self {
        PaymentOutcome::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_unit_formatting() {
        assert_eq!(CurrencyAmount::from_minor_units(2750, "USD").value, "27.50");
        assert_eq!(CurrencyAmount::from_minor_units(5, "USD").value, "0.05");
        assert_eq!(CurrencyAmount::from_minor_units(100, "EUR").value, "1.00");
        assert_eq!(CurrencyAmount::from_minor_units(-250, "USD").value, "-2.50");
    }

    #[test]
    fn test_details_shape() {
        let details = PaymentDetailsInit::new(PaymentItem::new(
            "Demo (Card is not charged)",
            CurrencyAmount::new("27.50", "USD"),
        ));

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["total"]["label"], "Demo (Card is not charged)");
        assert_eq!(json["total"]["amount"]["value"], "27.50");
        assert_eq!(json["total"]["amount"]["currency"], "USD");
        // Empty collections are omitted from the wire shape
        assert!(json.get("displayItems").is_none());
        assert!(json.get("shippingOptions").is_none());
    }

    #[test]
    fn test_shipping_options_serialized_camel_case() {
        let details = PaymentDetailsInit::new(PaymentItem::new(
            "Total",
            CurrencyAmount::new("12.00", "USD"),
        ))
        .with_shipping_option(
            ShippingOption::new("std", "Standard", CurrencyAmount::new("0.00", "USD"))
                .preselected(),
        );

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["shippingOptions"][0]["id"], "std");
        assert_eq!(json["shippingOptions"][0]["selected"], true);
    }

    #[test]
    fn test_outcome_strings() {
        assert_eq!(PaymentOutcome::Success.as_str(), "success");
        assert_eq!(PaymentOutcome::Fail.as_str(), "fail");
        assert_eq!(PaymentOutcome::default(), PaymentOutcome::Success);
    }
}
