//! # homedash-app
//!
//! Application layer — owns the process-wide device state.
//!
//! ## Responsibilities
//! - Hold the single [`registry::DeviceRegistry`] instance built at startup
//! - Serialise access to the home tree so it can be shared by driving adapters
//! - Log every mutation through `tracing`
//!
//! ## Dependency rule
//! Depends on `homedash-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod registry;
