//! Shared application state for axum handlers.

use std::sync::Arc;

use homedash_app::registry::DeviceRegistry;

/// Application state shared across all axum handlers.
///
/// Cloning only bumps the `Arc`; every handler sees the same registry.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide device registry.
    pub registry: Arc<DeviceRegistry>,
}

impl AppState {
    /// Take ownership of a registry.
    #[must_use]
    pub fn new(registry: DeviceRegistry) -> Self {
        Self::from_arc(Arc::new(registry))
    }

    /// Use a registry that is already shared elsewhere.
    #[must_use]
    pub fn from_arc(registry: Arc<DeviceRegistry>) -> Self {
        Self { registry }
    }
}
