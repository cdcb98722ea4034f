//! JSON GET helper over `gloo-net` with error classification.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use myriad_core::{FetchError, FetchResult};

/// Resolve `path` against `base_url` unless it is already absolute.
pub fn resolve_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// GET `url` and decode the JSON body.
///
/// 401/403 map to [`FetchError::Unauthorized`], a blank body to
/// [`FetchError::Empty`].
pub async fn get_json<T: DeserializeOwned>(url: &str, token: Option<&str>) -> FetchResult<T> {
    let mut request = Request::get(url).header("Accept", "application/json");
    if let Some(token) = token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }

    let response = request
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(format!("Failed to read body: {}", e)))?;

    if let Some(err) = FetchError::from_status(status, body.as_str()) {
        log::warn!("GET {} -> {}", url, status);
        return Err(err);
    }

    decode_body(&body)
}

/// Decode a response body, treating a blank body as empty.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> FetchResult<T> {
    if body.trim().is_empty() {
        return Err(FetchError::Empty);
    }
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use myriad_core::Transaction;

    #[test]
    fn test_resolve_url() {
        assert_eq!(
            resolve_url("http://localhost:3001", "/transactions"),
            "http://localhost:3001/transactions"
        );
        assert_eq!(
            resolve_url("http://localhost:3001/", "transactions"),
            "http://localhost:3001/transactions"
        );
        assert_eq!(
            resolve_url("http://localhost:3001", "https://cdn.myriad.social/ec/1"),
            "https://cdn.myriad.social/ec/1"
        );
    }

    #[test]
    fn test_decode_body() {
        let json = r#"[{"id": "1", "trxHash": "0x1", "from": "A", "to": "B",
            "value": 1000000000000, "state": "success", "createdAt": "2021-09-01T10:00:00Z"}]"#;
        let txs: Vec<Transaction> = decode_body(json).unwrap();
        assert_eq!(txs.len(), 1);

        assert_eq!(decode_body::<Vec<Transaction>>("  "), Err(FetchError::Empty));
        assert!(matches!(
            decode_body::<Vec<Transaction>>("<html>"),
            Err(FetchError::Decode(_))
        ));
    }
}
