//! # Suspending Script Hooks
//!
//! `use_sdk_script` is the suspending accessor over the script-load cache:
//! while the vendor script is in flight the component suspends on the
//! cache's shared promise; once settled the hook reports the outcome.

use applepay_core::{PaymentRequestError, SdkConfig};
use applepay_dom::{load_script_with, ScriptLoad};
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;
use yew::suspense::{Suspension, SuspensionResult};

/// Load the vendor SDK script and suspend until it settles.
///
/// Returns `Ok(true)` once the script is loaded. On load failure the
/// recorded error is returned if `throw_error` is set, otherwise `Ok(false)`
/// so the caller can degrade quietly.
#[hook]
pub fn use_sdk_script(
    config: &SdkConfig,
    throw_error: bool,
) -> SuspensionResult<Result<bool, PaymentRequestError>> {
    match load_script_with(&config.script_url, config.cross_origin.as_deref()) {
        ScriptLoad::Pending(promise) => {
            // Settlement only wakes the suspension; the outcome is read from
            // the cache on the re-render.
            Err(Suspension::from_future(async move {
                let _ = JsFuture::from(promise).await;
            }))
        }
        ScriptLoad::Loaded => Ok(Ok(true)),
        ScriptLoad::Failed(message) => {
            if throw_error {
                Ok(Err(PaymentRequestError::ScriptLoad {
                    url: config.script_url.clone(),
                    message,
                }))
            } else {
                Ok(Ok(false))
            }
        }
    }
}

/// `use_sdk_script` over the default Apple CDN URL, propagating load errors.
#[hook]
pub fn use_apple_pay_sdk() -> SuspensionResult<Result<bool, PaymentRequestError>> {
    use_sdk_script(&SdkConfig::default(), true)
}
