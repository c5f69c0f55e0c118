use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_ACCOUNT_ID: i64 = 1;
pub const DEFAULT_MAX_SPEAK_WORDS: u32 = 100;

/// Deadline for a respond call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(60_000);
/// Deadline for the health probe. Much shorter, it only reports a boolean.
pub const PROBE_TIMEOUT: Duration = Duration::from_millis(5_000);

/// Read-only client configuration, fixed for the lifetime of the client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub account_id: i64,
    pub request_timeout: Duration,
    pub probe_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            account_id: DEFAULT_ACCOUNT_ID,
            request_timeout: REQUEST_TIMEOUT,
            probe_timeout: PROBE_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Build a config from `FOLIO_API_URL` and `FOLIO_ACCOUNT_ID`, falling
    /// back to the defaults. Never fails; a malformed account id is ignored.
    pub fn from_env() -> Self {
        let base_url = env::var("FOLIO_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let account_id = env::var("FOLIO_ACCOUNT_ID")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(DEFAULT_ACCOUNT_ID);

        Self {
            base_url,
            account_id,
            ..Self::default()
        }
    }
}
