//! Shared handler state

use contact_application::RelayContactUseCase;
use std::sync::Arc;

/// State handed to every handler
///
/// Built once at startup. Holds the relay use case and, through it, the
/// single provider client.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<RelayContactUseCase>,
}

impl AppState {
    pub fn new(relay: RelayContactUseCase) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }
}
