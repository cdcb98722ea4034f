//! Session bridge: the signed-in user and their linked social accounts.
//!
//! Authentication is owned by the host page; `session.js` only exposes
//! what it already knows.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::CustomEvent;

use myriad_core::{SocialMedia, SocialsEnum};

use crate::config::SOCIALS_EVENT;
use crate::types::{AppError, AppResult, Session};

/// Read the signed-in user from the host page.
pub fn current_session() -> AppResult<Session> {
    let value = current_session_js();
    if value.is_null() || value.is_undefined() {
        return Err(AppError::Session("No signed-in user".to_string()));
    }

    serde_wasm_bindgen::from_value(value)
        .map_err(|e| AppError::Session(format!("Failed to parse session: {}", e)))
}

/// Ask the host page to start (or revoke) verification of `platform`.
pub fn request_social_verification(platform: SocialsEnum) {
    log::info!("🔗 Social verification requested for {}", platform);
    request_social_verification_js(platform.as_str());
}

/// Signal that follows the host page's linked-accounts updates.
pub fn use_connected_socials(initial: Vec<SocialMedia>) -> ReadSignal<Vec<SocialMedia>> {
    let (socials, set_socials) = create_signal(initial);

    let handle = window_event_listener_untyped(SOCIALS_EVENT, move |event| {
        let Some(event) = event.dyn_ref::<CustomEvent>() else {
            return;
        };
        match serde_wasm_bindgen::from_value::<Vec<SocialMedia>>(event.detail()) {
            Ok(list) => set_socials.set(list),
            Err(e) => log::warn!("Ignoring malformed socials event: {}", e),
        }
    });
    on_cleanup(move || handle.remove());

    socials
}

/// JavaScript functions from session.js
#[wasm_bindgen(module = "/src/js/session.js")]
extern "C" {
    #[wasm_bindgen(js_name = "currentSession")]
    fn current_session_js() -> JsValue;

    #[wasm_bindgen(js_name = "requestSocialVerification")]
    fn request_social_verification_js(platform: &str);
}
