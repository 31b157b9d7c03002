//! Common types for the rules engine: attack results and board errors.

use core::fmt;

use crate::config::{
    ALREADY_ATTACKED_POINTS, HIT_AND_SUNK_POINTS, HIT_POINTS, INVALID_POSITION_POINTS,
    MISS_POINTS,
};
use crate::coordinate::Coordinate;
use crate::grid::GridError;
use crate::id::PlayerId;
use crate::ship::ShipType;

/// What happened when a shot was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    Miss,
    Hit,
    HitAndSunk,
    /// The attacker already fired at this cell; nothing changed.
    AlreadyAttacked,
    /// The cell is not on the target's board.
    InvalidPosition,
}

impl AttackOutcome {
    /// Leaderboard points earned by one shot with this outcome.
    pub fn points(self) -> i32 {
        match self {
            AttackOutcome::Miss => MISS_POINTS,
            AttackOutcome::Hit => HIT_POINTS,
            AttackOutcome::HitAndSunk => HIT_AND_SUNK_POINTS,
            AttackOutcome::AlreadyAttacked => ALREADY_ATTACKED_POINTS,
            AttackOutcome::InvalidPosition => INVALID_POSITION_POINTS,
        }
    }

    pub fn is_hit(self) -> bool {
        matches!(self, AttackOutcome::Hit | AttackOutcome::HitAndSunk)
    }
}

/// Result of one attack attempt. `ship_type` is only set for hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct AttackResult {
    pub coordinate: Coordinate,
    pub outcome: AttackOutcome,
    pub ship_type: Option<ShipType>,
    pub targeted_player: Option<PlayerId>,
}

impl AttackResult {
    pub fn miss(coordinate: Coordinate) -> Self {
        Self::untyped(coordinate, AttackOutcome::Miss)
    }

    pub fn hit(coordinate: Coordinate, ship_type: ShipType, sunk: bool) -> Self {
        Self {
            coordinate,
            outcome: if sunk {
                AttackOutcome::HitAndSunk
            } else {
                AttackOutcome::Hit
            },
            ship_type: Some(ship_type),
            targeted_player: None,
        }
    }

    pub fn already_attacked(coordinate: Coordinate) -> Self {
        Self::untyped(coordinate, AttackOutcome::AlreadyAttacked)
    }

    pub fn invalid_position(coordinate: Coordinate) -> Self {
        Self::untyped(coordinate, AttackOutcome::InvalidPosition)
    }

    /// Tag the result with the participant that was shot at.
    pub fn against(self, target: PlayerId) -> Self {
        Self {
            targeted_player: Some(target),
            ..self
        }
    }

    fn untyped(coordinate: Coordinate, outcome: AttackOutcome) -> Self {
        Self {
            coordinate,
            outcome,
            ship_type: None,
            targeted_player: None,
        }
    }
}

/// Reasons a ship could not be placed on a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying grid error (cell outside the packed grid).
    Grid(GridError),
    /// The ship has no position or orientation.
    ShipNotPositioned,
    /// No unplaced ship of this type is left in the fleet.
    ShipAlreadyPlaced(ShipType),
    /// A segment falls outside the board.
    ShipOutOfBounds(Coordinate),
    /// A segment lands on a cell another ship occupies.
    ShipOverlaps(Coordinate),
    /// No legal placement is left for this ship.
    UnableToPlaceShip(ShipType),
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        BoardError::Grid(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Grid(e) => write!(f, "Grid error: {}", e),
            BoardError::ShipNotPositioned => write!(f, "Ship has no position"),
            BoardError::ShipAlreadyPlaced(t) => {
                write!(f, "No unplaced {} is left in the fleet", t)
            }
            BoardError::ShipOutOfBounds(c) => {
                write!(f, "Ship placement is out of bounds at ({}, {})", c.row(), c.col())
            }
            BoardError::ShipOverlaps(c) => {
                write!(f, "Ship placement overlaps another ship at {}", c)
            }
            BoardError::UnableToPlaceShip(t) => write!(f, "Unable to place {}", t),
        }
    }
}

impl core::error::Error for BoardError {}
