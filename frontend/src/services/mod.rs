//! Back-end, wallet and tipping services.
//!
//! # Services
//!
//! - [`http`] - JSON GET helper with error classification
//! - [`transactions`] - `GET /transactions`
//! - [`content`] - Exclusive-content reveal / price / wallet address
//! - [`wallet`] - Wallet provider (current network, network switch)
//! - [`tipping`] - Tipping store (send tip, paid notifications)
//! - [`session`] - Signed-in user and linked social accounts
//!
//! # JavaScript Bindings
//!
//! Some services use JavaScript bindings located in `src/js/`:
//! - `wallet.js` - Wallet SDK
//! - `tipping.js` - Tipping store
//! - `session.js` - Host page session

pub mod http;
pub mod transactions;
pub mod content;
pub mod wallet;
pub mod tipping;
pub mod session;

pub use transactions::*;
pub use content::*;
pub use wallet::*;
pub use tipping::*;
pub use session::*;

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;

use myriad_core::{ExclusivePayment, UserContext};

use crate::config::{retry_policy, API_URL};

/// Back-off sleeper for the browser event loop.
pub fn browser_sleep(delay: Duration) -> TimeoutFuture {
    TimeoutFuture::new(delay.as_millis().min(u32::MAX as u128) as u32)
}

/// Payment flow wired to the browser services.
pub type BrowserPayment =
    ExclusivePayment<ContentClient, BrowserWallet, BrowserTipping, fn(Duration) -> TimeoutFuture>;

/// Build the payment flow for `user`.
pub fn payment_flow(user: &UserContext) -> BrowserPayment {
    ExclusivePayment::new(
        ContentClient::new(API_URL, user),
        BrowserWallet,
        BrowserTipping,
        retry_policy(),
        browser_sleep as fn(Duration) -> TimeoutFuture,
    )
}

/// Best-effort message out of a rejected JS promise or thrown value.
pub(crate) fn js_error_message(e: &JsValue) -> String {
    js_sys::Reflect::get(e, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| e.as_string())
        .unwrap_or_else(|| "Unknown JS error".to_string())
}
