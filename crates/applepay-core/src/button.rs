//! # Apple Pay Button Appearance
//!
//! Attribute values understood by the `<apple-pay-button>` custom element
//! that the vendor SDK registers once its script has loaded.

use serde::{Deserialize, Serialize};

/// Visual style of the button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonStyle {
    Black,
    White,
    WhiteOutline,
}

impl ButtonStyle {
    /// Value for the element's `buttonstyle` attribute
    pub fn as_attr(&self) -> &'static str {
        match self {
            ButtonStyle::Black => "black",
            ButtonStyle::White => "white",
            ButtonStyle::WhiteOutline => "white-outline",
        }
    }
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle::Black
    }
}

/// Call-to-action variant of the button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    Plain,
    Buy,
    Donate,
    Checkout,
    Book,
    Subscribe,
}

impl ButtonKind {
    /// Value for the element's `type` attribute
    pub fn as_attr(&self) -> &'static str {
        match self {
            ButtonKind::Plain => "plain",
            ButtonKind::Buy => "buy",
            ButtonKind::Donate => "donate",
            ButtonKind::Checkout => "checkout",
            ButtonKind::Book => "book",
            ButtonKind::Subscribe => "subscribe",
        }
    }
}

impl Default for ButtonKind {
    fn default() -> Self {
        ButtonKind::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_attrs() {
        assert_eq!(ButtonStyle::Black.as_attr(), "black");
        assert_eq!(ButtonStyle::WhiteOutline.as_attr(), "white-outline");
    }

    #[test]
    fn test_kind_attrs() {
        assert_eq!(ButtonKind::Plain.as_attr(), "plain");
        assert_eq!(ButtonKind::Checkout.as_attr(), "checkout");
    }

    #[test]
    fn test_defaults_match_vendor_defaults() {
        assert_eq!(ButtonStyle::default(), ButtonStyle::Black);
        assert_eq!(ButtonKind::default(), ButtonKind::Plain);
    }
}
