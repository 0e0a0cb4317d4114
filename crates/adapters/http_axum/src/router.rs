//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use homehub_app::ports::StateStore;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the remote-control API under `/home-hub` and exposes a plain
/// `/health` probe. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: StateStore + Send + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/home-hub", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use homehub_adapter_store_memory::InMemoryStateStore;
    use homehub_app::messages::{Locale, MessageCatalog};
    use homehub_app::services::hub_service::HomeHubService;
    use tower::ServiceExt;

    fn test_state() -> AppState<InMemoryStateStore> {
        AppState::new(HomeHubService::new(
            InMemoryStateStore::new(),
            MessageCatalog::new(),
            Locale::default(),
        ))
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_route_slot_listing_under_home_hub() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/home-hub/remote/slots")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
