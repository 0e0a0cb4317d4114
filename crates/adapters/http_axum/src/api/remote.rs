//! Handlers for the remote-control endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use homehub_app::ports::StateStore;
use homehub_app::response::{ApplianceOperated, SlotBound};
use homehub_domain::error::HomeHubError;
use homehub_domain::id::{ApplianceName, SlotId};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the slot listing endpoint.
pub enum SlotListResponse {
    Ok(String),
}

impl IntoResponse for SlotListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(joined) => joined.into_response(),
        }
    }
}

/// Possible responses from the bind endpoint.
pub enum BindResponse {
    Created(Json<SlotBound>),
}

impl IntoResponse for BindResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the operate and undo endpoints.
pub enum OperateResponse {
    Ok(Json<ApplianceOperated>),
}

impl IntoResponse for OperateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /home-hub/remote/slots`
///
/// Returns the bound slot identifiers as a comma-joined plain-text list,
/// sorted for stable output.
pub async fn list_slots<S>(State(state): State<AppState<S>>) -> SlotListResponse
where
    S: StateStore + Send + 'static,
{
    let slots = state.hub_service.list_bound_slots().await;
    let joined = slots
        .iter()
        .map(SlotId::as_str)
        .collect::<Vec<_>>()
        .join(",");
    SlotListResponse::Ok(joined)
}

/// `POST /home-hub/remote/{slot_id}/appliance/{appliance_name}`
pub async fn bind<S>(
    State(state): State<AppState<S>>,
    Path((slot_id, appliance_name)): Path<(String, String)>,
) -> Result<BindResponse, ApiError>
where
    S: StateStore + Send + 'static,
{
    let slot = SlotId::parse(slot_id).map_err(|err| state.hub_service.reject(err.into()))?;
    let appliance = ApplianceName::parse(appliance_name)
        .map_err(|err| state.hub_service.reject(err.into()))?;
    let bound = state.hub_service.bind_slot(slot, appliance).await?;
    Ok(BindResponse::Created(Json(bound)))
}

/// `POST /home-hub/remote/{slot_id}/{operation}`
pub async fn operate<S>(
    State(state): State<AppState<S>>,
    Path((slot_id, operation)): Path<(String, String)>,
) -> Result<OperateResponse, ApiError>
where
    S: StateStore + Send + 'static,
{
    let slot = SlotId::parse(slot_id).map_err(|err| state.hub_service.reject(err.into()))?;
    // A non-numeric operation segment is refused like an out-of-range
    // code, echoing the raw segment back.
    let Ok(code) = operation.parse::<i64>() else {
        return Err(state
            .hub_service
            .reject(HomeHubError::InvalidOperation {
                slot,
                code: operation,
            })
            .into());
    };
    let operated = state.hub_service.operate_appliance(slot, code).await?;
    Ok(OperateResponse::Ok(Json(operated)))
}

/// `POST /home-hub/remote/undo`
pub async fn undo<S>(State(state): State<AppState<S>>) -> Result<OperateResponse, ApiError>
where
    S: StateStore + Send + 'static,
{
    let operated = state.hub_service.undo_last_operation().await?;
    Ok(OperateResponse::Ok(Json(operated)))
}
