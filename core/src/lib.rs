//! # Myriad Core - view models for the wallet and exclusive-content views
//!
//! Framework-independent logic behind the Leptos views of the frontend:
//!
//! ```text
//! ┌──────────────┐    ┌───────────────────┐    ┌──────────────────┐
//! │  REST / JS   │───▶│  services traits  │───▶│   view models    │───▶ Leptos views
//! │  (frontend)  │    │ (fetch, wallet,   │    │ (social, history,│
//! └──────────────┘    │  tipping)         │    │  payment)        │
//!                     └───────────────────┘    └──────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`models`] - Records exchanged with the API, wallet and tipping store
//! - [`services`] - Capabilities the views depend on
//! - [`retry`] - Exponential back-off for transient fetch failures
//! - [`units`] - Smallest-unit to Myria conversion
//! - [`social`] - Social-link toggle list
//! - [`history`] - Transaction history partitioning and view state
//! - [`payment`] - Exclusive-content payment flow and network prompt

pub mod error;
pub mod models;
pub mod services;
pub mod retry;
pub mod units;
pub mod social;
pub mod history;
pub mod payment;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{
    FetchError, FetchResult,
    PaymentError, PaymentResult,
    TippingError,
    WalletError, WalletResult,
};

pub use models::{
    content_id_from_url,
    ContentOwner, Currency, CurrentWallet, ExclusiveContent, Network, NetworkId,
    PaidSignal, Price, PriceExclusiveContent, Receiver, ReferenceType,
    SocialMedia, SocialsEnum, TipRequest, Transaction, UserContext,
};

pub use services::{ContentApi, TippingService, TransactionSource, WalletProvider};

pub use retry::{retry, RetryPolicy};

pub use units::{format_myria, format_units, MYRIA_DECIMALS, MYRIA_SYMBOL};

pub use social::{social_links, SocialLink};

pub use history::{
    fetch_history,
    Direction, HistoryDisplay, HistoryTab, HistoryView,
    TransactionHistory, TxRow, TxStatus,
};

pub use payment::{ExclusivePayment, NetworkPrompt, PaymentOutcome};
