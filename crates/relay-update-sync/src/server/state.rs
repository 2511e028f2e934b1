//! Relay state
//!
//! Application state for the Slack events server.

use std::sync::Arc;

use relay_service::ServiceContext;

use crate::signature::SlackVerifier;

/// Relay application state
///
/// Holds all shared dependencies for the events server.
#[derive(Clone)]
pub struct RelayState {
    /// Service context with the board API client
    service_context: Arc<ServiceContext>,
    /// Request signature verifier
    verifier: Arc<SlackVerifier>,
}

impl RelayState {
    /// Create a new relay state
    pub fn new(service_context: ServiceContext, signing_secret: &str) -> Self {
        Self {
            service_context: Arc::new(service_context),
            verifier: Arc::new(SlackVerifier::new(signing_secret)),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the signature verifier
    pub fn verifier(&self) -> &SlackVerifier {
        &self.verifier
    }
}

impl std::fmt::Debug for RelayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayState")
            .field("service_context", &self.service_context)
            .field("verifier", &self.verifier)
            .finish()
    }
}
