//! Myriad - Wallet & Exclusive Content Frontend
//!
//! A WebAssembly frontend rendering the wallet page widgets: linked social
//! accounts, transaction history and the exclusive-content payment trigger.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  WalletPage (signed-in session)                              │
//! │  ├── SocialMediaList (linked accounts, verify toggle)        │
//! │  └── TransactionHistory (All / In / Out tabs)                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ExclusiveContentView (mounted per post / comment)           │
//! │  └── ButtonPayment + switch-network Prompt                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! View logic lives in `myriad-core`; this crate renders it and wires the
//! browser services.
//!
//! # Modules
//!
//! - [`types`] - Session, event payloads and errors
//! - [`components`] - UI components
//! - [`services`] - REST, wallet, tipping and session bridges

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult, PaidEventDetail, Session};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 {} - WASM module loaded", APP_NAME);
}

// =============================================================================
// Host Page Mount Points
// =============================================================================

fn mount_target(element_id: &str) -> AppResult<HtmlElement> {
    gloo_utils::document()
        .get_element_by_id(element_id)
        .ok_or_else(|| AppError::Mount(format!("No element with id '{}'", element_id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| AppError::Mount(format!("'{}' is not an HTML element", element_id)))
}

fn to_js(e: AppError) -> JsValue {
    log::error!("❌ {}", e);
    JsValue::from_str(&e.to_string())
}

/// Mount the transaction history of the signed-in user into `element_id`.
#[wasm_bindgen(js_name = "mountTransactionHistory")]
pub fn mount_transaction_history(element_id: &str) -> Result<(), JsValue> {
    let target = mount_target(element_id).map_err(to_js)?;
    let session = current_session().map_err(to_js)?;

    mount_to(target, move || view! { <TransactionHistory user=session.user/> });
    Ok(())
}

/// Mount the linked social accounts of the signed-in user into `element_id`.
#[wasm_bindgen(js_name = "mountSocialMediaList")]
pub fn mount_social_media_list(element_id: &str) -> Result<(), JsValue> {
    let target = mount_target(element_id).map_err(to_js)?;
    let session = current_session().map_err(to_js)?;

    mount_to(target, move || view! { <SocialAccounts initial=session.socials/> });
    Ok(())
}

/// Mount the exclusive content at `url`, attached to post or comment
/// `content_id`, into `element_id`.
#[wasm_bindgen(js_name = "mountExclusiveContent")]
pub fn mount_exclusive_content(element_id: &str, url: String, content_id: String) -> Result<(), JsValue> {
    let target = mount_target(element_id).map_err(to_js)?;
    let session = current_session().map_err(to_js)?;

    mount_to(target, move || view! {
        <ExclusiveContentView user=session.user url=url content_id=content_id/>
    });
    Ok(())
}

// =============================================================================
// Standalone App
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    match current_session() {
        Ok(session) => view! { <WalletPage session=session/> }.into_view(),
        Err(e) => {
            log::warn!("⚠️ {}", e);
            view! {
                <div class="container">
                    <h1>{APP_NAME}</h1>
                    <p class="signed-out">"Sign in to see your wallet."</p>
                </div>
            }
            .into_view()
        }
    }
}

#[component]
fn WalletPage(session: Session) -> impl IntoView {
    view! {
        <div class="container wallet-page">
            <SocialAccounts initial=session.socials/>
            <TransactionHistory user=session.user/>
        </div>
    }
}

/// Social list following the host page's updates, with verification requests
/// forwarded to it.
#[component]
fn SocialAccounts(initial: Vec<myriad_core::SocialMedia>) -> impl IntoView {
    let connected = use_connected_socials(initial);
    let toggle_verify = Callback::new(request_social_verification);

    view! { <SocialMediaList connected=connected toggle_verify=toggle_verify/> }
}
