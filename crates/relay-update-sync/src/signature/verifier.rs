use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying `v0=<hex digest>`
pub const SIGNATURE_HEADER: &str = "x-slack-signature";

/// Header carrying the request timestamp in Unix seconds
pub const TIMESTAMP_HEADER: &str = "x-slack-request-timestamp";

const VERSION: &str = "v0";

/// Maximum distance between the request timestamp and now
const DEFAULT_TOLERANCE_SECS: i64 = 5 * 60;

/// Signature verification failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    #[error("Missing header {0}")]
    MissingHeader(&'static str),

    #[error("Timestamp is not a Unix time: {0:?}")]
    InvalidTimestamp(String),

    #[error("Timestamp is {age_secs}s away from now")]
    Stale { age_secs: i64 },

    #[error("Signature is not of the form v0=<hex>")]
    Malformed,

    #[error("Signature mismatch")]
    Mismatch,
}

/// Verifies Slack request signatures against the signing secret
#[derive(Clone)]
pub struct SlackVerifier {
    secret: String,
    tolerance_secs: i64,
}

impl SlackVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            tolerance_secs: DEFAULT_TOLERANCE_SECS,
        }
    }

    /// Compute the signature header value for a body
    pub fn sign(&self, timestamp: &str, body: &[u8]) -> String {
        format!("{VERSION}={}", hex::encode(self.mac(timestamp, body).finalize().into_bytes()))
    }

    /// Verify against the current time
    pub fn verify(
        &self,
        timestamp: Option<&str>,
        signature: Option<&str>,
        body: &[u8],
    ) -> Result<(), SignatureError> {
        self.verify_at(timestamp, signature, body, Utc::now())
    }

    /// Verify against an explicit clock
    ///
    /// The digest comparison is constant time.
    pub fn verify_at(
        &self,
        timestamp: Option<&str>,
        signature: Option<&str>,
        body: &[u8],
        now: DateTime<Utc>,
    ) -> Result<(), SignatureError> {
        let timestamp = timestamp.ok_or(SignatureError::MissingHeader(TIMESTAMP_HEADER))?;
        let signature = signature.ok_or(SignatureError::MissingHeader(SIGNATURE_HEADER))?;

        let sent_at: i64 = timestamp
            .trim()
            .parse()
            .map_err(|_| SignatureError::InvalidTimestamp(timestamp.to_string()))?;
        let age_secs = now
            .timestamp()
            .checked_sub(sent_at)
            .ok_or(SignatureError::Stale { age_secs: i64::MAX })?;
        if age_secs.unsigned_abs() > self.tolerance_secs.unsigned_abs() {
            return Err(SignatureError::Stale { age_secs });
        }

        let digest = signature
            .strip_prefix("v0=")
            .and_then(|hex_digest| hex::decode(hex_digest).ok())
            .ok_or(SignatureError::Malformed)?;

        self.mac(timestamp, body)
            .verify_slice(&digest)
            .map_err(|_| SignatureError::Mismatch)
    }

    fn mac(&self, timestamp: &str, body: &[u8]) -> HmacSha256 {
        let mut mac = <HmacSha256 as Mac>::new_from_slice(self.secret.as_bytes())
            .unwrap_or_else(|_| unreachable!("HMAC accepts keys of any length"));
        mac.update(VERSION.as_bytes());
        mac.update(b":");
        mac.update(timestamp.as_bytes());
        mac.update(b":");
        mac.update(body);
        mac
    }
}

impl std::fmt::Debug for SlackVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackVerifier")
            .field("secret", &"[redacted]")
            .field("tolerance_secs", &self.tolerance_secs)
            .finish()
    }
}
