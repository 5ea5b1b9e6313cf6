//! Typed identifier newtypes backed by human-readable slugs.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Borrow the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the identifier holds no characters.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.is_empty() {
                    return Err(ValidationError::EmptyId);
                }
                Ok(Self(s.to_string()))
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Device`](crate::device::Device), e.g. `lr-light-1`.
    DeviceId
);

define_id!(
    /// Unique identifier for a [`Room`](crate::room::Room), e.g. `living-room`.
    RoomId
);

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = DeviceId::from("lr-light-1");
        let parsed: DeviceId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_return_error_when_parsing_empty_string() {
        let result = RoomId::from_str("");
        assert_eq!(result, Err(ValidationError::EmptyId));
    }

    #[test]
    fn should_serialize_as_bare_string() {
        let json = serde_json::to_string(&RoomId::from("kitchen")).unwrap();
        assert_eq!(json, "\"kitchen\"");
    }

    #[test]
    fn should_lookup_map_entries_by_str() {
        let mut map = HashMap::new();
        map.insert(DeviceId::from("of-fan-1"), 7);
        assert_eq!(map.get("of-fan-1"), Some(&7));
    }
}
