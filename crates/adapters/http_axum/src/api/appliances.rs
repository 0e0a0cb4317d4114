//! Handlers for the appliance registry endpoint.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use homehub_app::ports::StateStore;
use homehub_app::response::ApplianceRegistered;
use homehub_domain::id::ApplianceName;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the register endpoint.
pub enum RegisterResponse {
    Created(Json<ApplianceRegistered>),
}

impl IntoResponse for RegisterResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `POST /home-hub/appliances/{appliance_name}`
pub async fn register<S>(
    State(state): State<AppState<S>>,
    Path(appliance_name): Path<String>,
) -> Result<RegisterResponse, ApiError>
where
    S: StateStore + Send + 'static,
{
    let appliance = ApplianceName::parse(appliance_name)
        .map_err(|err| state.hub_service.reject(err.into()))?;
    let registered = state.hub_service.register_appliance(appliance).await?;
    Ok(RegisterResponse::Created(Json(registered)))
}
