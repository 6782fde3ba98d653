//! # SDK Configuration
//!
//! Where to fetch the vendor SDK script from. The default is Apple's CDN
//! endpoint for the latest 1.x release.

/// Default Apple Pay SDK script URL
pub const APPLE_PAY_SDK_URL: &str =
    "https://applepay.cdn-apple.com/jsapi/1.latest/apple-pay-sdk.js";

/// Configuration for loading the vendor SDK script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    /// URL of the SDK script
    pub script_url: String,

    /// Value for the script tag's `crossorigin` attribute, if any
    pub cross_origin: Option<String>,
}

impl SdkConfig {
    /// Config pointing at a custom script URL
    pub fn new(script_url: impl Into<String>) -> Self {
        Self {
            script_url: script_url.into(),
            cross_origin: Some("anonymous".to_string()),
        }
    }

    /// Drop the `crossorigin` attribute (e.g. for same-origin mirrors)
    pub fn without_cross_origin(mut self) -> Self {
        self.cross_origin = None;
        self
    }
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self::new(APPLE_PAY_SDK_URL)
    }
}
