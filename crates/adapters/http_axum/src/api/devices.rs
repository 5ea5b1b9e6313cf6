//! JSON REST handlers for devices.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use homedash_domain::device::{Device, DeviceUpdate};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the device endpoints.
pub enum DeviceResponse {
    Ok(Json<Device>),
}

impl IntoResponse for DeviceResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/devices/{id}`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<DeviceResponse, ApiError> {
    let device = state.registry.device(&id)?;
    Ok(DeviceResponse::Ok(Json(device)))
}

/// `POST /api/devices/{id}/toggle`
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<DeviceResponse, ApiError> {
    let device = state.registry.toggle_device(&id)?;
    Ok(DeviceResponse::Ok(Json(device)))
}

/// `PATCH /api/devices/{id}`
///
/// Fields outside `is_on`, `brightness`, `speed` and `temperature` are
/// rejected by the extractor before reaching the registry.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<DeviceUpdate>,
) -> Result<DeviceResponse, ApiError> {
    let device = state.registry.update_device(&id, update)?;
    Ok(DeviceResponse::Ok(Json(device)))
}
