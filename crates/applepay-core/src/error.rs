//! # Payment Request Error Types
//!
//! Typed error handling for the Apple Pay binding crates.
//! All fallible operations return `Result<T, PaymentRequestError>`.

use thiserror::Error;

/// Core error type for all Payment Request operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaymentRequestError {
    /// The vendor SDK script failed to load
    #[error("Failed to load payment SDK script {url}: {message}")]
    ScriptLoad { url: String, message: String },

    /// The browser does not expose the required native API
    #[error("Payment Request API unavailable: {0}")]
    Unsupported(String),

    /// The native `PaymentRequest` constructor rejected the supplied data
    #[error("Payment request construction failed: {0}")]
    Construction(String),

    /// `show()` failed for a reason other than user dismissal
    #[error("Payment sheet failed: {0}")]
    Show(String),

    /// The user dismissed the payment sheet
    #[error("Payment sheet dismissed by user")]
    Aborted,

    /// `complete()` on the payment response failed
    #[error("Payment completion failed: {0}")]
    Completion(String),

    /// Converting request data to or from its JS shape failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PaymentRequestError {
    /// Returns true if the error is the user closing the payment sheet,
    /// which callers usually treat as a non-error outcome.
    pub fn is_user_abort(&self) -> bool {
        matches!(self, PaymentRequestError::Aborted)
    }

    /// Returns true if retrying the same operation could succeed
    /// (script loads are retried by reloading the page, not the cache).
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PaymentRequestError::Show(_) | PaymentRequestError::Aborted
        )
    }
}

/// Result type alias for Payment Request operations
pub type PaymentResult<T> = Result<T, PaymentRequestError>;
