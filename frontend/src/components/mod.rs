//! UI components.
//!
//! # Components
//!
//! - [`BoxComponent`] - Titled panel
//! - [`Prompt`] - Modal dialog
//! - [`SocialMediaList`] - Linked social accounts
//! - [`ButtonPayment`] - Exclusive-content payment trigger
//! - [`ExclusiveContentView`] - Locked / revealed exclusive content
//! - [`TransactionHistory`] - Transaction history with tabs

mod panel;
mod prompt;
mod social_media_list;
mod button_payment;
mod exclusive_content;
mod transaction_history;

pub use panel::*;
pub use prompt::*;
pub use social_media_list::*;
pub use button_payment::*;
pub use exclusive_content::*;
pub use transaction_history::*;
