//! Tipping store bridge.
//!
//! Tips are handed to `tipping.js`; completion comes back as a
//! [`PAID_EVENT`] DOM event carrying the paid content id.

use leptos::*;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::CustomEvent;

use myriad_core::{PaidSignal, TipRequest, TippingError, TippingService};

use super::js_error_message;
use crate::config::PAID_EVENT;
use crate::types::PaidEventDetail;

/// Tipping service backed by the browser tipping store.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTipping;

impl TippingService for BrowserTipping {
    fn send(&self, request: TipRequest) -> Result<(), TippingError> {
        let value = request
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| TippingError::Dispatch(format!("Failed to serialize tip: {}", e)))?;

        send_tip_js(value).map_err(|e| TippingError::Dispatch(js_error_message(&e)))?;

        log::info!("💸 Tip sent to tipping store: {}", request.reference_id);
        Ok(())
    }
}

/// Signal that follows the tipping store's "paid" notifications.
///
/// The listener is removed when the owning component is disposed.
pub fn use_paid_signal() -> ReadSignal<PaidSignal> {
    let (paid, set_paid) = create_signal(PaidSignal::default());

    let handle = window_event_listener_untyped(PAID_EVENT, move |event| {
        let Some(event) = event.dyn_ref::<CustomEvent>() else {
            return;
        };
        match serde_wasm_bindgen::from_value::<PaidEventDetail>(event.detail()) {
            Ok(detail) => {
                log::info!("✅ Exclusive content {} paid", detail.ec_id);
                set_paid.set(PaidSignal::paid(detail.ec_id));
            }
            Err(e) => log::warn!("Ignoring malformed paid event: {}", e),
        }
    });
    on_cleanup(move || handle.remove());

    paid
}

/// JavaScript functions from tipping.js
#[wasm_bindgen(module = "/src/js/tipping.js")]
extern "C" {
    #[wasm_bindgen(js_name = "sendTip", catch)]
    fn send_tip_js(request: JsValue) -> Result<(), JsValue>;
}
