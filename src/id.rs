//! Strongly typed game and player identifiers backed by random UUIDs.

use core::fmt;
use core::str::FromStr;

use rand::Rng;
use uuid::{Builder, Uuid};

/// An identifier string was not a UUID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdError(uuid::Error);

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid identifier: {}", self.0)
    }
}

impl core::error::Error for IdError {}

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
        pub struct $name(Uuid);

        impl $name {
            /// Fresh identifier drawn from the thread RNG.
            #[cfg(feature = "std")]
            pub fn generate() -> Self {
                Self::generate_with(&mut rand::rng())
            }

            /// Fresh identifier drawn from `rng`.
            pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
                let bytes = rng.random::<u128>().to_le_bytes();
                Self(Builder::from_random_bytes(bytes).into_uuid())
            }

            /// The "unset" sentinel.
            pub const fn nil() -> Self {
                Self(Uuid::nil())
            }

            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0.hyphenated(), f)
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self).map_err(IdError)
            }
        }
    };
}

uuid_id!(
    /// Identifies one match.
    GameId
);

uuid_id!(
    /// Identifies a participant. Also used for the participant's private secret.
    PlayerId
);
