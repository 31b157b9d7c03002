//! Participants and their private/public projections.

use alloc::string::String;

use crate::id::PlayerId;

/// A participant in a game.
///
/// The private form carries `private_id`, a secret known only to the owner
/// and the game. Use [`Player::public`] before sharing a player with anyone
/// else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct Player {
    id: PlayerId,
    name: String,
    is_computer: bool,
    #[cfg_attr(feature = "std", serde(default, skip_serializing_if = "Option::is_none"))]
    private_id: Option<PlayerId>,
}

impl Player {
    /// A human participant with a freshly generated secret.
    #[cfg(feature = "std")]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_ids(name, PlayerId::generate(), Some(PlayerId::generate()))
    }

    /// A computer participant. Computers have no secret.
    #[cfg(feature = "std")]
    pub fn computer(name: impl Into<String>) -> Self {
        Self::with_ids(name, PlayerId::generate(), None).into_computer()
    }

    /// Build a player from ids minted elsewhere, e.g. by a seeded RNG.
    pub fn with_ids(name: impl Into<String>, id: PlayerId, private_id: Option<PlayerId>) -> Self {
        Self {
            id,
            name: name.into(),
            is_computer: false,
            private_id,
        }
    }

    pub(crate) fn into_computer(self) -> Self {
        Self {
            is_computer: true,
            private_id: None,
            ..self
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_computer(&self) -> bool {
        self.is_computer
    }

    pub fn private_id(&self) -> Option<PlayerId> {
        self.private_id
    }

    /// Copy of this player with the secret removed.
    pub fn public(&self) -> Self {
        Self {
            private_id: None,
            ..self.clone()
        }
    }

    /// Does `claimed` carry this player's id and secret?
    ///
    /// Always false when this player has no secret.
    pub fn is_user_who_they_say_they_are(&self, claimed: &Player) -> bool {
        match (self.private_id, claimed.private_id) {
            (Some(secret), Some(offered)) => {
                self.id == claimed.id && !secret.is_nil() && secret == offered
            }
            _ => false,
        }
    }
}
