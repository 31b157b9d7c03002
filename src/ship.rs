//! Ship types, their shapes, and per-segment hit tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::common::AttackResult;
use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Segments run along increasing columns.
    Horizontal,
    /// Segments run along increasing rows.
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

/// Cells a ship covers, as (row, col) offsets from its origin, per orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipShape {
    horizontal: &'static [(i16, i16)],
    vertical: &'static [(i16, i16)],
}

impl ShipShape {
    pub fn offsets(&self, orientation: Orientation) -> &'static [(i16, i16)] {
        match orientation {
            Orientation::Horizontal => self.horizontal,
            Orientation::Vertical => self.vertical,
        }
    }
}

const DESTROYER: ShipShape = ShipShape {
    horizontal: &[(0, 0), (0, 1)],
    vertical: &[(0, 0), (1, 0)],
};

const THREE_IN_LINE: ShipShape = ShipShape {
    horizontal: &[(0, 0), (0, 1), (0, 2)],
    vertical: &[(0, 0), (1, 0), (2, 0)],
};

const BATTLESHIP: ShipShape = ShipShape {
    horizontal: &[(0, 0), (0, 1), (0, 2), (0, 3)],
    vertical: &[(0, 0), (1, 0), (2, 0), (3, 0)],
};

const AIRCRAFT_CARRIER: ShipShape = ShipShape {
    horizontal: &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)],
    vertical: &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)],
};

// A ring of four cells around an empty centre. Horizontally the origin is
// the left tip, vertically it is the top tip.
const ROMULAN_BATTLE_BAGEL: ShipShape = ShipShape {
    horizontal: &[(0, 0), (-1, 1), (1, 1), (0, 2)],
    vertical: &[(0, 0), (1, -1), (1, 1), (2, 0)],
};

/// Every kind of ship the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipType {
    Battleship,
    AircraftCarrier,
    Cruiser,
    Destroyer,
    Submarine,
    RomulanBattleBagel,
}

impl ShipType {
    pub const ALL: [ShipType; 6] = [
        ShipType::Battleship,
        ShipType::AircraftCarrier,
        ShipType::Cruiser,
        ShipType::Destroyer,
        ShipType::Submarine,
        ShipType::RomulanBattleBagel,
    ];

    pub fn shape(self) -> ShipShape {
        match self {
            ShipType::Battleship => BATTLESHIP,
            ShipType::AircraftCarrier => AIRCRAFT_CARRIER,
            ShipType::Cruiser | ShipType::Submarine => THREE_IN_LINE,
            ShipType::Destroyer => DESTROYER,
            ShipType::RomulanBattleBagel => ROMULAN_BATTLE_BAGEL,
        }
    }

    /// Number of cells the ship occupies once placed.
    pub fn segment_count(self) -> usize {
        self.shape().horizontal.len()
    }

    /// Human readable name, e.g. "Aircraft Carrier".
    pub fn friendly_name(self) -> &'static str {
        match self {
            ShipType::Battleship => "Battleship",
            ShipType::AircraftCarrier => "Aircraft Carrier",
            ShipType::Cruiser => "Cruiser",
            ShipType::Destroyer => "Destroyer",
            ShipType::Submarine => "Submarine",
            ShipType::RomulanBattleBagel => "Romulan Battle Bagel",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.friendly_name())
    }
}

/// One occupied cell of a placed ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct Segment {
    pub coordinate: Coordinate,
    pub is_hit: bool,
}

/// A ship, either still waiting to be placed or placed with its segments.
///
/// Serialized ships report their damage, but deserializing only reads the
/// type, position and orientation: segments come back rebuilt and unhit.
/// Treat the deserialized form as a placement request, not a saved ship.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase", from = "ShipRecord"))]
pub struct Ship {
    ship_type: ShipType,
    position: Option<Coordinate>,
    orientation: Option<Orientation>,
    segments: Vec<Segment>,
}

impl Ship {
    /// An unplaced ship of the given type.
    pub fn new(ship_type: ShipType) -> Self {
        Self {
            ship_type,
            position: None,
            orientation: None,
            segments: Vec::new(),
        }
    }

    /// A ship placed with its origin at `position`. Segments are not checked
    /// against any board here.
    pub fn positioned(ship_type: ShipType, position: Coordinate, orientation: Orientation) -> Self {
        let segments = ship_type
            .shape()
            .offsets(orientation)
            .iter()
            .map(|&(rows, cols)| Segment {
                coordinate: position.offset(rows, cols),
                is_hit: false,
            })
            .collect();
        Self {
            ship_type,
            position: Some(position),
            orientation: Some(orientation),
            segments,
        }
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn position(&self) -> Option<Coordinate> {
        self.position
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Cells covered by the ship, in shape order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.segments.iter().map(|s| s.coordinate)
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.segments.iter().any(|s| s.coordinate == coordinate)
    }

    pub fn is_positioned(&self) -> bool {
        !self.segments.is_empty()
    }

    pub fn is_afloat(&self) -> bool {
        self.is_positioned() && self.segments.iter().any(|s| !s.is_hit)
    }

    pub fn is_sunk(&self) -> bool {
        self.is_positioned() && self.segments.iter().all(|s| s.is_hit)
    }

    /// Resolve a shot against this ship. Hitting an already hit segment
    /// reports the current state again.
    pub fn attack(&mut self, coordinate: Coordinate) -> AttackResult {
        match self.segments.iter_mut().find(|s| s.coordinate == coordinate) {
            Some(segment) => {
                segment.is_hit = true;
                AttackResult::hit(coordinate, self.ship_type, self.is_sunk())
            }
            None => AttackResult::miss(coordinate),
        }
    }
}

/// Incoming ship description; segments are always rebuilt from the shape so
/// a client cannot hand in an arbitrary cell set.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShipRecord {
    ship_type: ShipType,
    #[serde(default)]
    position: Option<Coordinate>,
    #[serde(default)]
    orientation: Option<Orientation>,
}

#[cfg(feature = "std")]
impl From<ShipRecord> for Ship {
    fn from(record: ShipRecord) -> Self {
        match (record.position, record.orientation) {
            (Some(position), Some(orientation)) => {
                Ship::positioned(record.ship_type, position, orientation)
            }
            _ => Ship::new(record.ship_type),
        }
    }
}
