//! JSON REST handlers for rooms and the home summary.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use homedash_domain::home::HomeSummary;
use homedash_domain::room::Room;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Room>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Room>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/rooms`
pub async fn list(State(state): State<AppState>) -> ListResponse {
    ListResponse::Ok(Json(state.registry.snapshot()))
}

/// `GET /api/rooms/{id}`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError> {
    let room = state.registry.room(&id)?;
    Ok(GetResponse::Ok(Json(room)))
}

/// `GET /api/summary`
pub async fn summary(State(state): State<AppState>) -> Json<HomeSummary> {
    Json(state.registry.summary())
}
