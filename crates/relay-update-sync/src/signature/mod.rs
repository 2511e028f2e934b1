//! Slack request signature verification
//!
//! Slack signs every delivery with `v0=` + hex(HMAC-SHA256(signing secret,
//! `v0:{timestamp}:{raw body}`)) and sends the timestamp alongside. Requests
//! older or newer than five minutes are rejected to limit replay.

mod verifier;

pub use verifier::{SignatureError, SlackVerifier, SIGNATURE_HEADER, TIMESTAMP_HEADER};
