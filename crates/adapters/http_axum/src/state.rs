//! Shared application state for axum handlers.

use std::sync::Arc;

use homehub_app::ports::StateStore;
use homehub_app::services::hub_service::HomeHubService;

/// Application state shared across all axum handlers.
///
/// Generic over the state store type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the store itself does not need to be `Clone` —
/// only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// The hub's remote-control service.
    pub hub_service: Arc<HomeHubService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            hub_service: Arc::clone(&self.hub_service),
        }
    }
}

impl<S> AppState<S>
where
    S: StateStore + Send + 'static,
{
    /// Create a new application state owning the hub service.
    pub fn new(hub_service: HomeHubService<S>) -> Self {
        Self {
            hub_service: Arc::new(hub_service),
        }
    }
}
