//! Error types for the wallet and exclusive-content views.
//!
//! - [`FetchError`] - REST fetch failures (transactions, content API)
//! - [`WalletError`] - Wallet provider failures
//! - [`TippingError`] - Tipping service failures
//! - [`PaymentError`] - Top-level exclusive-content payment errors
//!
//! Lower-level errors convert into [`PaymentError`] via `From`, so `?`
//! works across the payment flow.

use thiserror::Error;

// =============================================================================
// Fetch Errors
// =============================================================================

/// Errors while fetching data from the REST back-end.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Request never reached the server, or the connection dropped.
    #[error("Network error: {0}")]
    Network(String),

    /// The server rejected the session (401/403).
    #[error("Not authorized")]
    Unauthorized,

    /// Any other non-success HTTP status.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Body could not be decoded into the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The server answered but returned nothing usable.
    #[error("No data available")]
    Empty,
}

impl FetchError {
    /// Classify an HTTP status code. Returns `None` for success codes.
    pub fn from_status(status: u16, message: impl Into<String>) -> Option<Self> {
        match status {
            200..=299 => None,
            401 | 403 => Some(FetchError::Unauthorized),
            _ => Some(FetchError::Server {
                status,
                message: message.into(),
            }),
        }
    }

    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Network(_) => true,
            FetchError::Server { status, .. } => *status == 429 || *status >= 500,
            FetchError::Unauthorized | FetchError::Decode(_) | FetchError::Empty => false,
        }
    }

    /// Short sentence suitable for display in a view.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "Network error, please check your connection and try again.",
            FetchError::Unauthorized => "You are not authorized to view this data. Please sign in again.",
            FetchError::Server { .. } => "The server could not handle the request. Please try again later.",
            FetchError::Decode(_) => "The server returned an unexpected response.",
            FetchError::Empty => "Data not available",
        }
    }
}

// =============================================================================
// Wallet Errors
// =============================================================================

/// Errors from the wallet/network provider.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WalletError {
    /// No wallet extension or no connected account.
    #[error("No wallet connected")]
    Unavailable,

    /// The provider refused or failed to switch networks.
    #[error("Failed to switch network: {0}")]
    SwitchFailed(String),
}

// =============================================================================
// Tipping Errors
// =============================================================================

/// Errors from the tipping service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TippingError {
    /// The tip request could not be handed to the tipping service.
    #[error("Failed to dispatch tip: {0}")]
    Dispatch(String),
}

// =============================================================================
// Payment Errors (top-level)
// =============================================================================

/// Errors of the exclusive-content payment flow.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaymentError {
    /// Content API call failed.
    #[error("Content error: {0}")]
    Content(#[from] FetchError),

    /// The content has no price attached.
    #[error("Exclusive content has no price")]
    MissingPrice,

    /// Wallet provider error.
    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),

    /// Tipping service error.
    #[error("Tipping error: {0}")]
    Tipping(#[from] TippingError),
}

impl PaymentError {
    /// Short sentence suitable for display next to the payment button.
    pub fn user_message(&self) -> String {
        match self {
            PaymentError::Content(e) => e.user_message().to_string(),
            PaymentError::MissingPrice => "This content is not for sale yet.".to_string(),
            PaymentError::Wallet(e) => e.to_string(),
            PaymentError::Tipping(_) => "The payment could not be started. Please try again.".to_string(),
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

/// Result type for the payment flow.
pub type PaymentResult<T> = Result<T, PaymentError>;
