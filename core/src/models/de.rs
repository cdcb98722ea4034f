//! Lenient deserializers for values the REST API sends as either JSON
//! numbers or strings.

use serde::de::{self, Deserializer, Visitor};
use std::fmt;

/// Largest integer an `f64` holds exactly (2^53).
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

/// Deserialize a non-negative integer amount from a number or numeric string.
///
/// Decoding is exact or fails. JSON integers above `u64::MAX` reach the
/// visitor as `f64`, so float input is only accepted when it is whole and
/// at most 2^53; larger amounts must be sent as decimal strings.
pub fn amount<'de, D>(deserializer: D) -> Result<u128, D::Error>
where
    D: Deserializer<'de>,
{
    struct AmountVisitor;

    impl<'de> Visitor<'de> for AmountVisitor {
        type Value = u128;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a non-negative integer amount as number or string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u128, E> {
            Ok(v as u128)
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<u128, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u128, E> {
            u128::try_from(v).map_err(|_| E::custom(format!("negative amount: {}", v)))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<u128, E> {
            if !v.is_finite() || v < 0.0 || v.fract() != 0.0 {
                return Err(E::custom(format!("invalid amount: {}", v)));
            }
            if v > MAX_EXACT_F64 {
                return Err(E::custom(format!(
                    "amount {} cannot be decoded exactly, send it as a string",
                    v
                )));
            }
            Ok(v as u128)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u128, E> {
            v.trim()
                .parse::<u128>()
                .map_err(|_| E::custom(format!("invalid amount: {:?}", v)))
        }
    }

    deserializer.deserialize_any(AmountVisitor)
}

/// Deserialize an identifier that may be a JSON number or a string.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or an integer identifier")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}
