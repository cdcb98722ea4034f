//! Exclusive-content payment flow.
//!
//! ```text
//! pay(url) ──▶ reveal ──content?──▶ Revealed
//!                 │ locked
//!                 ▼
//!               price ──network differs──▶ NetworkMismatch (prompt)
//!                 │ same network
//!                 ▼
//!          wallet address ──▶ tipping.send ──▶ TipDispatched
//!                                   ┆
//!                      PaidSignal(ecId) ┆ later ──▶ pay(url) again ──▶ Revealed
//! ```

use std::future::Future;
use std::time::Duration;

use crate::error::{PaymentError, PaymentResult, WalletError};
use crate::models::{Currency, ExclusiveContent, Network, NetworkId, Receiver, ReferenceType, TipRequest};
use crate::retry::{retry, RetryPolicy};
use crate::services::{ContentApi, TippingService, WalletProvider};

// =============================================================================
// Outcome
// =============================================================================

/// Result of one click on the payment button.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
    /// The user already paid; here is the content.
    Revealed(ExclusiveContent),
    /// The wallet is on another network than the price currency.
    NetworkMismatch {
        accept: Currency,
        current: Option<NetworkId>,
    },
    /// A tip was handed to the tipping service.
    TipDispatched { reference_id: String },
}

// =============================================================================
// Switch-Network Prompt
// =============================================================================

/// State of the "switch network" confirmation prompt.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NetworkPrompt {
    open: bool,
    accept: Option<Currency>,
    current: Option<NetworkId>,
}

impl NetworkPrompt {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Currency the content is sold in.
    pub fn accept(&self) -> Option<&Currency> {
        self.accept.as_ref()
    }

    pub fn current(&self) -> Option<&NetworkId> {
        self.current.as_ref()
    }

    /// Open the prompt for a detected mismatch.
    pub fn show(&mut self, accept: Currency, current: Option<NetworkId>) {
        self.accept = Some(accept);
        self.current = current;
        self.open = true;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Close the prompt and return the network to switch to.
    pub fn confirm_switch(&mut self) -> Option<Network> {
        self.open = false;
        self.accept.as_ref().map(Currency::target_network)
    }

    /// Body text of the prompt.
    pub fn message(&self) -> String {
        let accept = self
            .accept
            .as_ref()
            .map(|c| c.network_id.to_string())
            .unwrap_or_else(|| "another network".to_string());
        let current = self
            .current
            .as_ref()
            .map(NetworkId::to_string)
            .unwrap_or_else(|| "no network".to_string());
        format!(
            "This content only accepts payment on {}. Your wallet is connected to {}.",
            accept, current
        )
    }
}

// =============================================================================
// Payment Flow
// =============================================================================

/// Drives the payment button: reveal, price check, network guard, tip.
pub struct ExclusivePayment<C, W, T, S> {
    api: C,
    wallet: W,
    tipping: T,
    policy: RetryPolicy,
    sleep: S,
}

impl<C, W, T, S, SleepFut> ExclusivePayment<C, W, T, S>
where
    C: ContentApi,
    W: WalletProvider,
    T: TippingService,
    S: Fn(Duration) -> SleepFut,
    SleepFut: Future<Output = ()>,
{
    pub fn new(api: C, wallet: W, tipping: T, policy: RetryPolicy, sleep: S) -> Self {
        Self {
            api,
            wallet,
            tipping,
            policy,
            sleep,
        }
    }

    /// Handle a click on the payment button (or a matching paid signal).
    pub async fn pay(&self, url: &str, content_id: &str) -> PaymentResult<PaymentOutcome> {
        let detail = retry(&self.policy, &self.sleep, || self.api.reveal(url)).await?;
        if detail.is_unlocked() {
            log::info!("Exclusive content {} revealed", url);
            return Ok(PaymentOutcome::Revealed(detail));
        }

        let price = retry(&self.policy, &self.sleep, || self.api.price(url)).await?;
        let accept = price
            .accepted_currency()
            .cloned()
            .ok_or(PaymentError::MissingPrice)?;

        let current = self.wallet.current_wallet().and_then(|w| w.network_id);
        if current.as_ref() != Some(&accept.network_id) {
            log::warn!(
                "Network mismatch: content accepts {}, wallet is on {:?}",
                accept.network_id,
                current
            );
            return Ok(PaymentOutcome::NetworkMismatch { accept, current });
        }

        let wallet_detail = retry(&self.policy, &self.sleep, || self.api.wallet_address(&price.id)).await?;
        let reference_id = format!("{}/{}", price.id, content_id);

        let request = TipRequest {
            receiver: Receiver {
                owner: price.user.clone(),
                wallet_detail,
            },
            reference: price,
            reference_type: ReferenceType::ExclusiveContent,
            currency_content: accept,
            reference_id: reference_id.clone(),
        };
        self.tipping.send(request)?;

        log::info!("Tip dispatched for {}", reference_id);
        Ok(PaymentOutcome::TipDispatched { reference_id })
    }

    /// Ask the wallet to move to `network`.
    ///
    /// Fails with [`WalletError::Unavailable`] when no wallet is selected.
    pub async fn switch_network(&self, network: &Network) -> PaymentResult<()> {
        if self.wallet.current_wallet().is_none() {
            log::warn!("No wallet selected, cannot switch to network {}", network.id);
            return Err(WalletError::Unavailable.into());
        }

        log::info!("Switching wallet to network {}", network.id);
        self.wallet.switch_network(network).await?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
