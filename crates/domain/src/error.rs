//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HomeError`]
//! via `#[from]`.

use crate::id::{DeviceId, RoomId};

/// Base error for every fallible domain operation.
#[derive(Debug, thiserror::Error)]
pub enum HomeError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("identifier must not be empty")]
    EmptyId,

    #[error("name must not be empty")]
    EmptyName,

    #[error("room id {0} is used more than once")]
    DuplicateRoomId(RoomId),

    #[error("device id {0} is used more than once")]
    DuplicateDeviceId(DeviceId),
}

/// A lookup by identifier matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_not_found_message_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Device",
            id: "lr-light-1".to_string(),
        };
        assert_eq!(err.to_string(), "Device not found: lr-light-1");
    }

    #[test]
    fn should_convert_validation_error_into_home_error() {
        let err: HomeError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            HomeError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_name_duplicate_device_id_in_message() {
        let err = ValidationError::DuplicateDeviceId(DeviceId::from("kt-light-1"));
        assert_eq!(err.to_string(), "device id kt-light-1 is used more than once");
    }
}
