//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod rooms;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Rooms
        .route("/rooms", get(rooms::list))
        .route("/rooms/{id}", get(rooms::get))
        .route("/summary", get(rooms::summary))
        // Devices
        .route("/devices/{id}", get(devices::get).patch(devices::update))
        .route("/devices/{id}/toggle", post(devices::toggle))
}
