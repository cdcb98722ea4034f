//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Session Types** - What the host page tells us about the signed-in user
//! - **Event Types** - Payloads of DOM events raised by the host page
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

use myriad_core::{SocialMedia, UserContext};

// =============================================================================
// Session Types
// =============================================================================

/// Signed-in user as exposed by the host page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Address and access token.
    #[serde(flatten)]
    pub user: UserContext,
    /// Social accounts linked to the profile.
    #[serde(default)]
    pub socials: Vec<SocialMedia>,
}

// =============================================================================
// Event Types
// =============================================================================

/// `detail` of the paid event raised by the tipping store.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaidEventDetail {
    pub ec_id: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug)]
pub enum AppError {
    /// No signed-in user, or the session could not be read.
    Session(String),
    /// Mount target missing or not an HTML element.
    Mount(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Session(msg) => write!(f, "Session error: {}", msg),
            AppError::Mount(msg) => write!(f, "Mount error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
