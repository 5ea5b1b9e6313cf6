//! # homedash-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** over the device registry
//!   (`/api/rooms`, `/api/devices/{id}`, `/api/devices/{id}/toggle`, …)
//! - Map HTTP requests into registry calls (driving adapter)
//! - Map registry results and errors into HTTP responses
//!
//! Clients are pull-based: after a mutation they re-read `/api/rooms`.
//!
//! ## Dependency rule
//! Depends on `homedash-app` (for the registry) and `homedash-domain`
//! (for types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
