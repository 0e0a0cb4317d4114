//! JSON API handler modules for the `/home-hub` surface.

#[allow(clippy::missing_errors_doc)]
pub mod appliances;
#[allow(clippy::missing_errors_doc)]
pub mod remote;

use axum::Router;
use axum::routing::{get, post};

use homehub_app::ports::StateStore;

use crate::state::AppState;

/// Build the `/home-hub` sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: StateStore + Send + 'static,
{
    Router::new()
        // Remote control
        .route("/remote/slots", get(remote::list_slots::<S>))
        .route("/remote/undo", post(remote::undo::<S>))
        .route(
            "/remote/{slot_id}/appliance/{appliance_name}",
            post(remote::bind::<S>),
        )
        .route("/remote/{slot_id}/{operation}", post(remote::operate::<S>))
        // Appliance registry
        .route(
            "/appliances/{appliance_name}",
            post(appliances::register::<S>),
        )
}
