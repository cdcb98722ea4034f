//! Wallet transaction history endpoint.

use myriad_core::{FetchResult, Transaction, TransactionSource, UserContext};

use super::http::{get_json, resolve_url};

/// `GET /transactions` client.
#[derive(Debug, Clone)]
pub struct TransactionClient {
    base_url: String,
    token: Option<String>,
}

impl TransactionClient {
    pub fn new(base_url: &str, user: &UserContext) -> Self {
        Self {
            base_url: base_url.to_string(),
            token: user.access_token.clone(),
        }
    }
}

impl TransactionSource for TransactionClient {
    async fn fetch_transactions(&self) -> FetchResult<Vec<Transaction>> {
        let url = resolve_url(&self.base_url, "/transactions");
        get_json(&url, self.token.as_deref()).await
    }
}
