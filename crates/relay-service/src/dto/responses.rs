//! Response DTOs

use serde::Serialize;
use serde_json::Value;

/// Echo of a verification challenge, serialized as `{"challenge": X}`
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeResponse {
    pub challenge: Value,
}

impl ChallengeResponse {
    pub fn new(challenge: Value) -> Self {
        Self { challenge }
    }
}
