//! Shared identifier types
//!
//! Ids are thin string wrappers so wire payloads keep the original
//! short forms ("u1", "m3") while the type system keeps user, mission,
//! and meetup references from crossing.

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

id_type! {
    /// User identifier ("u1", "u2", ...)
    UserId
}

id_type! {
    /// Mission identifier ("m1", "m2", ...)
    MissionId
}

id_type! {
    /// Meetup identifier - seeded meetups use short numerals, created
    /// meetups get a v4 uuid
    MeetupId
}

id_type! {
    /// Wallet account address (ss58 string from the extension)
    AccountId
}

id_type! {
    /// Wallet session identifier - one per connect, v4 uuid
    SessionId
}

impl MeetupId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl SessionId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}
