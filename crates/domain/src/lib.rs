//! # homedash-domain
//!
//! Pure domain model for the homedash smart-home dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Devices** (lights, fans, thermostats, outlets) and their
//!   partial updates
//! - Define **Rooms** (ordered groupings of devices)
//! - Define the **Home** tree and its point mutations
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod error;
pub mod id;

pub mod device;
pub mod home;
pub mod room;
