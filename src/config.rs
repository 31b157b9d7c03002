//! Compile-time rules: board size, fleets per game variant and the scoring table.

use crate::ship::ShipType;

/// Width and height of every implemented board.
pub const BOARD_SIZE: u16 = 10;

/// First and last row letters understood by the coordinate parser.
pub const MIN_ROW_LETTER: char = 'A';
pub const MAX_ROW_LETTER: char = 'J';

pub const CLASSIC_FLEET: [ShipType; 5] = [
    ShipType::Destroyer,
    ShipType::Submarine,
    ShipType::Cruiser,
    ShipType::Battleship,
    ShipType::AircraftCarrier,
];

pub const BIG_BANG_THEORY_FLEET: [ShipType; 5] = [
    ShipType::Destroyer,
    ShipType::Submarine,
    ShipType::Cruiser,
    ShipType::RomulanBattleBagel,
    ShipType::AircraftCarrier,
];

/// Points awarded per attack outcome when folding a shot history.
pub const HIT_POINTS: i32 = 2;
pub const MISS_POINTS: i32 = 0;
pub const HIT_AND_SUNK_POINTS: i32 = 5;
pub const ALREADY_ATTACKED_POINTS: i32 = -1;
pub const INVALID_POSITION_POINTS: i32 = -1;

/// Adjustment applied once a whole fleet has gone down.
pub const FLEET_SUNK_BONUS: i32 = 100;

/// Off-board shots kept in one history. Further off-board shots are
/// answered but not recorded.
pub const MAX_RECORDED_INVALID_SHOTS: usize = 100;

/// Random origin/orientation draws per ship before falling back to an
/// exhaustive scan of the remaining legal placements.
pub const RANDOM_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Rule variants a game can be started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameType {
    #[default]
    Classic,
    BigBangTheory,
    Melee,
}

impl GameType {
    /// Board width and height for this variant.
    ///
    /// # Panics
    /// `Melee` has no rules yet; asking for its board is a deployment error.
    pub fn board_size(self) -> u16 {
        match self {
            GameType::Classic | GameType::BigBangTheory => BOARD_SIZE,
            GameType::Melee => unimplemented!("Melee games have no board size"),
        }
    }

    /// Ships every participant must place, in declaration order.
    ///
    /// # Panics
    /// `Melee` has no rules yet; asking for its fleet is a deployment error.
    pub fn fleet(self) -> &'static [ShipType] {
        match self {
            GameType::Classic => &CLASSIC_FLEET,
            GameType::BigBangTheory => &BIG_BANG_THEORY_FLEET,
            GameType::Melee => unimplemented!("Melee games have no fleet"),
        }
    }
}

impl core::fmt::Display for GameType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameType::Classic => write!(f, "Classic"),
            GameType::BigBangTheory => write!(f, "Big Bang Theory"),
            GameType::Melee => write!(f, "Melee"),
        }
    }
}
