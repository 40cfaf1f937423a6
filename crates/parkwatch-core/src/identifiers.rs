use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new instance without validation; callers are responsible for conformity.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Parses an identifier, trimming surrounding whitespace and rejecting blank input.
            pub fn parse(value: impl AsRef<str>) -> Result<Self, ValidationError> {
                let trimmed = value.as_ref().trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::Blank {
                        field: stringify!($name),
                    });
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
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
    };
}

newtype!(SpotId, "Identifier of a physical parking spot (e.g. `A1`).");
newtype!(DeviceId, "Identifier of the sensor that reported an event.");
newtype!(PlateNumber, "Licence plate detected on the spot, as reported by the sensor.");
newtype!(
    Status,
    "Occupancy status reported by a sensor. Treated as an opaque string; see [`Status::OCCUPIED`] and [`Status::VACANT`]."
);

impl Status {
    /// Well-known status for a spot with a vehicle on it.
    pub const OCCUPIED: &'static str = "Occupied";
    /// Well-known status for an empty spot.
    pub const VACANT: &'static str = "Vacant";

    /// Shorthand for an `Occupied` status.
    pub fn occupied() -> Self {
        Self::new(Self::OCCUPIED)
    }

    /// Shorthand for a `Vacant` status.
    pub fn vacant() -> Self {
        Self::new(Self::VACANT)
    }
}

impl PlateNumber {
    /// Returns true if this plate matches `query`, ignoring ASCII case and
    /// surrounding whitespace on both sides.
    pub fn matches(&self, query: &str) -> bool {
        self.0.trim().eq_ignore_ascii_case(query.trim())
    }
}

/// Content-derived event identifier (base64url, no padding).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Wraps an already-encoded identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the encoded identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EventId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
