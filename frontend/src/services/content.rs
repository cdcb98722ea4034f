//! Exclusive-content REST endpoints.
//!
//! | Call             | Request                                              |
//! |------------------|------------------------------------------------------|
//! | `reveal`         | `GET {url}`                                          |
//! | `price`          | `GET {url}/price`                                    |
//! | `wallet_address` | `GET {API_URL}/exclusive-contents/{id}/wallet-address` |

use serde_json::Value;

use myriad_core::{ContentApi, ExclusiveContent, FetchResult, PriceExclusiveContent, UserContext};

use super::http::{get_json, resolve_url};

/// Client for the exclusive-content endpoints.
#[derive(Debug, Clone)]
pub struct ContentClient {
    base_url: String,
    token: Option<String>,
}

impl ContentClient {
    pub fn new(base_url: &str, user: &UserContext) -> Self {
        Self {
            base_url: base_url.to_string(),
            token: user.access_token.clone(),
        }
    }

    fn price_url(&self, url: &str) -> String {
        format!("{}/price", resolve_url(&self.base_url, url).trim_end_matches('/'))
    }

    fn wallet_address_url(&self, id: &str) -> String {
        resolve_url(&self.base_url, &format!("/exclusive-contents/{}/wallet-address", id))
    }
}

impl ContentApi for ContentClient {
    async fn reveal(&self, url: &str) -> FetchResult<ExclusiveContent> {
        get_json(&resolve_url(&self.base_url, url), self.token.as_deref()).await
    }

    async fn price(&self, url: &str) -> FetchResult<PriceExclusiveContent> {
        get_json(&self.price_url(url), self.token.as_deref()).await
    }

    async fn wallet_address(&self, id: &str) -> FetchResult<Value> {
        get_json(&self.wallet_address_url(id), self.token.as_deref()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ContentClient {
        ContentClient::new("http://localhost:3001", &UserContext::default())
    }

    #[test]
    fn test_price_url() {
        assert_eq!(
            client().price_url("/exclusive-contents/ec-1/"),
            "http://localhost:3001/exclusive-contents/ec-1/price"
        );
        assert_eq!(
            client().price_url("https://api.myriad.social/exclusive-contents/ec-1"),
            "https://api.myriad.social/exclusive-contents/ec-1/price"
        );
    }

    #[test]
    fn test_wallet_address_url() {
        assert_eq!(
            client().wallet_address_url("ec-1"),
            "http://localhost:3001/exclusive-contents/ec-1/wallet-address"
        );
    }
}
