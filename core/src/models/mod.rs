//! Records exchanged with the REST API, the wallet and the tipping service.
//!
//! - [`SocialMedia`] / [`SocialsEnum`] - Connected social platforms
//! - [`Transaction`] - Wallet transaction history entry
//! - [`ExclusiveContent`] / [`PriceExclusiveContent`] - Paid content and its price
//! - [`Currency`] / [`Network`] / [`NetworkId`] - Payment currency and chain
//! - [`TipRequest`] - Payload handed to the tipping service
//! - [`CurrentWallet`] / [`UserContext`] / [`PaidSignal`] - Session and store values

mod de;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// =============================================================================
// Social Media
// =============================================================================

/// Social platforms a user can link to their profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialsEnum {
    Twitter,
    Reddit,
    Facebook,
    Instagram,
    Telegram,
}

impl SocialsEnum {
    /// Every known platform, in display order.
    pub const ALL: [SocialsEnum; 5] = [
        SocialsEnum::Twitter,
        SocialsEnum::Reddit,
        SocialsEnum::Facebook,
        SocialsEnum::Instagram,
        SocialsEnum::Telegram,
    ];

    /// Wire identifier, as sent by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialsEnum::Twitter => "twitter",
            SocialsEnum::Reddit => "reddit",
            SocialsEnum::Facebook => "facebook",
            SocialsEnum::Instagram => "instagram",
            SocialsEnum::Telegram => "telegram",
        }
    }

    /// Human-readable platform name.
    pub fn label(&self) -> &'static str {
        match self {
            SocialsEnum::Twitter => "Twitter",
            SocialsEnum::Reddit => "Reddit",
            SocialsEnum::Facebook => "Facebook",
            SocialsEnum::Instagram => "Instagram",
            SocialsEnum::Telegram => "Telegram",
        }
    }

    /// Path of the platform icon asset.
    pub fn icon(&self) -> &'static str {
        match self {
            SocialsEnum::Twitter => "/icons/twitter.svg",
            SocialsEnum::Reddit => "/icons/reddit.svg",
            SocialsEnum::Facebook => "/icons/facebook.svg",
            SocialsEnum::Instagram => "/icons/instagram.svg",
            SocialsEnum::Telegram => "/icons/telegram.svg",
        }
    }
}

impl fmt::Display for SocialsEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A social account linked by the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    #[serde(default)]
    pub id: String,
    pub platform: SocialsEnum,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub primary: bool,
}

// =============================================================================
// Transactions
// =============================================================================

/// One entry of `GET /transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    #[serde(default)]
    pub trx_hash: String,
    pub from: String,
    pub to: String,
    /// Amount in the smallest unit (10^-12 Myria).
    #[serde(deserialize_with = "de::amount")]
    pub value: u128,
    #[serde(default)]
    pub state: String,
    /// RFC 3339 string or epoch milliseconds (string or number).
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub created_at: String,
}

impl Transaction {
    /// Whether the transaction involves `address` as sender or receiver.
    pub fn involves(&self, address: &str) -> bool {
        self.from == address || self.to == address
    }

    /// Parsed creation time.
    ///
    /// Accepts RFC 3339 strings and epoch milliseconds.
    pub fn created_at_time(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        raw.parse::<i64>()
            .ok()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }
}

// =============================================================================
// Networks & Currencies
// =============================================================================

/// Chain identifier. The API sends it as a string or a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NetworkId(pub String);

impl<'de> Deserialize<'de> for NetworkId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        de::string_or_number(deserializer).map(NetworkId)
    }
}

impl NetworkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A chain the wallet can switch to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub id: NetworkId,
    #[serde(default, rename = "rpcURL")]
    pub rpc_url: Option<String>,
    #[serde(default, rename = "explorerURL")]
    pub explorer_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A currency accepted for payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    pub symbol: String,
    #[serde(default)]
    pub decimal: u32,
    #[serde(default)]
    pub native: bool,
    pub network_id: NetworkId,
    #[serde(default)]
    pub network: Option<Network>,
}

impl Currency {
    /// The network to switch to when paying with this currency.
    ///
    /// Falls back to a bare network built from `network_id` when the API
    /// did not embed the network record.
    pub fn target_network(&self) -> Network {
        self.network.clone().unwrap_or_else(|| Network {
            id: self.network_id.clone(),
            rpc_url: None,
            explorer_url: None,
            image: None,
        })
    }
}

// =============================================================================
// Exclusive Content
// =============================================================================

/// Result of revealing an exclusive content.
///
/// `content` is only present once the current user has paid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExclusiveContent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub content: Option<Value>,
}

impl ExclusiveContent {
    pub fn is_unlocked(&self) -> bool {
        self.content.is_some()
    }
}

/// Owner of an exclusive content; receives the tip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentOwner {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, rename = "profilePictureURL")]
    pub profile_picture_url: Option<String>,
}

/// A price of an exclusive content in a given currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    #[serde(default)]
    pub amount: f64,
    pub currency: Currency,
}

/// Price information of a locked exclusive content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceExclusiveContent {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    pub user: ContentOwner,
    #[serde(default)]
    pub prices: Vec<Price>,
}

impl PriceExclusiveContent {
    /// The currency the content is sold in (first listed price).
    pub fn accepted_currency(&self) -> Option<&Currency> {
        self.prices.first().map(|p| &p.currency)
    }
}

// =============================================================================
// Tipping
// =============================================================================

/// What a tip refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceType {
    #[serde(rename = "post")]
    Post,
    #[serde(rename = "comment")]
    Comment,
    #[serde(rename = "user")]
    User,
    #[serde(rename = "unlockable_content")]
    ExclusiveContent,
}

/// Tip receiver: the content owner plus their wallet detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receiver {
    #[serde(flatten)]
    pub owner: ContentOwner,
    pub wallet_detail: Value,
}

/// Payment request handed to the tipping service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipRequest {
    pub receiver: Receiver,
    pub reference: PriceExclusiveContent,
    pub reference_type: ReferenceType,
    pub currency_content: Currency,
    pub reference_id: String,
}

/// "Payment completed" signal from the tipping store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaidSignal {
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub ec_id: Option<String>,
}

impl PaidSignal {
    /// Signal for a completed payment of content `ec_id`.
    pub fn paid(ec_id: impl Into<String>) -> Self {
        Self {
            paid: true,
            ec_id: Some(ec_id.into()),
        }
    }

    /// Whether this signal completes the payment of the content at `url`.
    ///
    /// The content id is the last `/`-separated segment of the url.
    pub fn matches(&self, url: &str) -> bool {
        self.paid && self.ec_id.as_deref() == Some(content_id_from_url(url))
    }
}

/// Last path segment of an exclusive-content url.
pub fn content_id_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

// =============================================================================
// Session
// =============================================================================

/// The wallet currently selected in the wallet provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWallet {
    pub address: String,
    #[serde(default)]
    pub network_id: Option<NetworkId>,
}

/// The signed-in user, passed explicitly to every view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    /// Wallet address used to attribute transactions.
    pub address: String,
    /// Bearer token for authenticated API calls.
    #[serde(default)]
    pub access_token: Option<String>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_deserialization() {
        let json = r#"{
            "id": "1",
            "trxHash": "0xabc",
            "from": "A",
            "to": "B",
            "value": 1000000000000,
            "state": "success",
            "createdAt": "2021-09-01T10:00:00.000Z"
        }"#;

        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.trx_hash, "0xabc");
        assert_eq!(tx.value, 1_000_000_000_000);
        assert!(tx.involves("A"));
        assert!(tx.involves("B"));
        assert!(!tx.involves("C"));
        assert!(tx.created_at_time().is_some());
    }

    #[test]
    fn test_transaction_lenient_fields() {
        let json = r#"{"id": 7, "from": "A", "to": "B", "value": "2500000000000"}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.id, "7");
        assert_eq!(tx.value, 2_500_000_000_000);
        assert_eq!(tx.state, "");
        assert!(tx.created_at_time().is_none());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let json = r#"{"id": "1", "from": "A", "to": "B", "value": -5}"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn test_large_amount_decoded_exactly() {
        let json = r#"{"id": "1", "from": "A", "to": "B", "value": "123456789012345678901"}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.value, 123_456_789_012_345_678_901);

        // Beyond u64 a JSON number is already a float; refuse instead of rounding.
        let json = r#"{"id": "1", "from": "A", "to": "B", "value": 123456789012345678901}"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn test_fractional_amount_rejected() {
        for value in [r#""0.5""#, "0.5", r#""1e3""#] {
            let json = format!(r#"{{"id": "1", "from": "A", "to": "B", "value": {}}}"#, value);
            assert!(
                serde_json::from_str::<Transaction>(&json).is_err(),
                "accepted {}",
                value
            );
        }

        let json = r#"{"id": "1", "from": "A", "to": "B", "value": 2000.0}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.value, 2000);
    }

    #[test]
    fn test_numeric_created_at() {
        let json = r#"{"id": "1", "from": "A", "to": "B", "value": 1, "createdAt": 1630490400000}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.created_at, "1630490400000");
        assert!(tx.created_at_time().is_some());
    }

    #[test]
    fn test_epoch_millis_created_at() {
        let tx = Transaction {
            id: "1".into(),
            trx_hash: String::new(),
            from: "A".into(),
            to: "B".into(),
            value: 0,
            state: String::new(),
            created_at: "1630490400000".into(),
        };
        let parsed = tx.created_at_time().unwrap();
        assert_eq!(parsed.timestamp(), 1_630_490_400);
    }

    #[test]
    fn test_price_deserialization() {
        let json = r#"{
            "id": "ec-1",
            "user": {"id": "u-1", "name": "Alice", "username": "alice"},
            "prices": [{
                "amount": 3,
                "currency": {
                    "id": "MATIC",
                    "symbol": "MATIC",
                    "decimal": 18,
                    "networkId": 137,
                    "network": {"id": "137", "rpcURL": "https://polygon-rpc.com"}
                }
            }]
        }"#;

        let price: PriceExclusiveContent = serde_json::from_str(json).unwrap();
        let currency = price.accepted_currency().unwrap();
        assert_eq!(currency.network_id, NetworkId::new("137"));
        assert_eq!(
            currency.target_network().rpc_url.as_deref(),
            Some("https://polygon-rpc.com")
        );
    }

    #[test]
    fn test_exclusive_content_locked_when_content_null() {
        let locked: ExclusiveContent = serde_json::from_str(r#"{"id": "1", "content": null}"#).unwrap();
        assert!(!locked.is_unlocked());

        let unlocked: ExclusiveContent =
            serde_json::from_str(r#"{"id": "1", "content": {"text": "secret"}}"#).unwrap();
        assert!(unlocked.is_unlocked());
    }

    #[test]
    fn test_paid_signal_matches_last_segment() {
        let url = "https://api.myriad.social/user/exclusive-contents/ec-42";
        assert!(PaidSignal::paid("ec-42").matches(url));
        assert!(!PaidSignal::paid("ec-41").matches(url));
        assert!(!PaidSignal::default().matches(url));
        assert!(!PaidSignal { paid: false, ec_id: Some("ec-42".into()) }.matches(url));
    }

    #[test]
    fn test_tip_request_wire_format() {
        let owner = ContentOwner {
            id: "u-1".into(),
            name: "Alice".into(),
            username: None,
            profile_picture_url: None,
        };
        let currency = Currency {
            id: "MYRIA".into(),
            symbol: "MYRIA".into(),
            decimal: 18,
            native: true,
            network_id: NetworkId::new("myriad"),
            network: None,
        };
        let request = TipRequest {
            receiver: Receiver {
                owner: owner.clone(),
                wallet_detail: serde_json::json!({"referenceId": "0xalice"}),
            },
            reference: PriceExclusiveContent {
                id: "ec-1".into(),
                user: owner,
                prices: vec![],
            },
            reference_type: ReferenceType::ExclusiveContent,
            currency_content: currency,
            reference_id: "ec-1/c-9".into(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["referenceType"], "unlockable_content");
        assert_eq!(json["referenceId"], "ec-1/c-9");
        assert_eq!(json["receiver"]["name"], "Alice");
        assert_eq!(json["receiver"]["walletDetail"]["referenceId"], "0xalice");
        assert_eq!(json["currencyContent"]["networkId"], "myriad");
    }

    #[test]
    fn test_socials_wire_names() {
        let media: SocialMedia =
            serde_json::from_str(r#"{"id": "s1", "platform": "reddit", "verified": true}"#).unwrap();
        assert_eq!(media.platform, SocialsEnum::Reddit);
        assert_eq!(SocialsEnum::ALL.len(), 5);
    }
}
