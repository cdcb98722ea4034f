//! Wallet provider bridge.
//!
//! The wallet SDK lives on the JavaScript side; `wallet.js` exposes the
//! selected wallet and network switching.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use myriad_core::{CurrentWallet, Network, WalletError, WalletProvider, WalletResult};

use super::js_error_message;

/// Wallet provider backed by the browser wallet SDK.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserWallet;

impl WalletProvider for BrowserWallet {
    fn current_wallet(&self) -> Option<CurrentWallet> {
        let value = current_wallet_js();
        if value.is_null() || value.is_undefined() {
            log::warn!("⚠️ No wallet selected");
            return None;
        }

        serde_wasm_bindgen::from_value(value)
            .map_err(|e| log::error!("Failed to parse current wallet: {}", e))
            .ok()
    }

    async fn switch_network(&self, network: &Network) -> WalletResult<()> {
        let value = serde_wasm_bindgen::to_value(network)
            .map_err(|e| WalletError::SwitchFailed(format!("Failed to serialize network: {}", e)))?;

        JsFuture::from(switch_network_js(value))
            .await
            .map_err(|e| WalletError::SwitchFailed(js_error_message(&e)))?;

        log::info!("🔀 Wallet switched to network {}", network.id);
        Ok(())
    }
}

/// JavaScript functions from wallet.js
#[wasm_bindgen(module = "/src/js/wallet.js")]
extern "C" {
    #[wasm_bindgen(js_name = "currentWallet")]
    fn current_wallet_js() -> JsValue;

    #[wasm_bindgen(js_name = "switchNetwork")]
    fn switch_network_js(network: JsValue) -> js_sys::Promise;
}
