//! Application configuration.
//!
//! Compile-time settings for the Myriad views. `MYRIAD_API_URL` is read
//! at build time; everything else is fixed.

use std::time::Duration;

use myriad_core::RetryPolicy;

/// REST API base URL.
///
/// Override with `MYRIAD_API_URL=https://... trunk build`.
pub const API_URL: &str = match option_env!("MYRIAD_API_URL") {
    Some(url) => url,
    None => "http://localhost:3001",
};

/// Application name, used in log lines.
pub const APP_NAME: &str = "Myriad";

/// Attempts per REST call, including the first one.
pub const FETCH_MAX_ATTEMPTS: u32 = 3;

/// Back-off before the first retry (milliseconds).
pub const FETCH_BASE_DELAY_MS: u64 = 500;

/// Upper bound of a single back-off (milliseconds).
pub const FETCH_MAX_DELAY_MS: u64 = 5_000;

/// DOM event fired by the tipping store once a payment completes.
///
/// `detail` is `{ "ecId": "<content id>" }`.
pub const PAID_EVENT: &str = "myriad:exclusive-content-paid";

/// DOM event fired by the host page when the linked social accounts change.
///
/// `detail` is the new list of social accounts.
pub const SOCIALS_EVENT: &str = "myriad:socials-changed";

/// Retry policy for REST calls.
pub fn retry_policy() -> RetryPolicy {
    RetryPolicy {
        max_attempts: FETCH_MAX_ATTEMPTS,
        base_delay: Duration::from_millis(FETCH_BASE_DELAY_MS),
        max_delay: Duration::from_millis(FETCH_MAX_DELAY_MS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_policy_from_constants() {
        let policy = retry_policy();
        assert_eq!(policy.max_attempts, FETCH_MAX_ATTEMPTS);
        assert_eq!(policy.delay_for(1), Duration::from_millis(FETCH_BASE_DELAY_MS));
        assert!(policy.delay_for(10) <= Duration::from_millis(FETCH_MAX_DELAY_MS));
    }

    #[test]
    fn test_api_url_has_no_trailing_slash() {
        assert!(!API_URL.ends_with('/'));
    }
}
