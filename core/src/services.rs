//! Capabilities the views depend on.
//!
//! The browser implementations live in the frontend crate; tests use
//! in-memory fakes. Futures are not required to be `Send`: everything runs
//! on the single-threaded browser event loop.

#![allow(async_fn_in_trait)]

use serde_json::Value;

use crate::error::{FetchResult, TippingError, WalletResult};
use crate::models::{CurrentWallet, ExclusiveContent, Network, PriceExclusiveContent, TipRequest, Transaction};

/// Source of the wallet transaction history.
pub trait TransactionSource {
    /// Fetch every transaction known to the back-end.
    async fn fetch_transactions(&self) -> FetchResult<Vec<Transaction>>;
}

/// Exclusive-content REST endpoints.
pub trait ContentApi {
    /// Fetch the content at `url`; carries a payload once paid.
    async fn reveal(&self, url: &str) -> FetchResult<ExclusiveContent>;

    /// Fetch price information of the content at `url`.
    async fn price(&self, url: &str) -> FetchResult<PriceExclusiveContent>;

    /// Fetch the wallet detail of the owner of content `id`.
    async fn wallet_address(&self, id: &str) -> FetchResult<Value>;
}

/// The user's wallet extension.
pub trait WalletProvider {
    /// Wallet currently selected, if any.
    fn current_wallet(&self) -> Option<CurrentWallet>;

    /// Ask the wallet to switch to `network`.
    async fn switch_network(&self, network: &Network) -> WalletResult<()>;
}

/// The tipping store; executes payments asynchronously.
pub trait TippingService {
    /// Hand a payment request over. Completion is reported later through a
    /// [`crate::models::PaidSignal`].
    fn send(&self, request: TipRequest) -> Result<(), TippingError>;
}
