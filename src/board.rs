//! One participant's board: the fleet, its placement rules and incoming fire.

use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::common::{AttackResult, BoardError};
use crate::config::{GameType, RANDOM_PLACEMENT_ATTEMPTS};
use crate::coordinate::Coordinate;
use crate::grid::BoardGrid;
use crate::ship::{Orientation, Ship, ShipType};

/// A fleet plus the cells it occupies.
#[derive(Debug, Clone)]
pub struct Board {
    game_type: GameType,
    board_size: u16,
    fleet: Vec<Ship>,
    occupied: BoardGrid,
}

impl Board {
    /// Board with one unplaced ship per fleet entry of `game_type`.
    ///
    /// # Panics
    /// If the variant has no rules (`Melee`).
    pub fn new(game_type: GameType) -> Self {
        Board {
            game_type,
            board_size: game_type.board_size(),
            fleet: game_type.fleet().iter().copied().map(Ship::new).collect(),
            occupied: BoardGrid::new(),
        }
    }

    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    pub fn board_size(&self) -> u16 {
        self.board_size
    }

    /// Fleet in declaration order.
    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    /// Every cell covered by a placed ship.
    pub fn occupied(&self) -> BoardGrid {
        self.occupied
    }

    /// Types still waiting to be placed, in declaration order.
    pub fn unplaced(&self) -> impl Iterator<Item = ShipType> + '_ {
        self.fleet
            .iter()
            .filter(|s| !s.is_positioned())
            .map(|s| s.ship_type())
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.is_within(self.board_size)
    }

    pub fn is_fleet_ready(&self) -> bool {
        self.fleet.iter().all(|s| s.is_positioned())
    }

    pub fn is_fleet_sunk(&self) -> bool {
        self.fleet.iter().all(|s| s.is_sunk())
    }

    /// Check `ship` against the fleet and the board without placing it.
    /// Returns the index of the fleet slot it would fill.
    pub fn check_placement(&self, ship: &Ship) -> Result<usize, BoardError> {
        if !ship.is_positioned() {
            return Err(BoardError::ShipNotPositioned);
        }
        let slot = self
            .fleet
            .iter()
            .position(|s| !s.is_positioned() && s.ship_type() == ship.ship_type())
            .ok_or(BoardError::ShipAlreadyPlaced(ship.ship_type()))?;

        if let Some(cell) = ship.coordinates().find(|&c| !self.contains(c)) {
            return Err(BoardError::ShipOutOfBounds(cell));
        }
        let footprint = BoardGrid::from_coordinates(ship.coordinates())?;
        if let Some(cell) = (self.occupied & footprint).cells().next() {
            return Err(BoardError::ShipOverlaps(cell));
        }
        Ok(slot)
    }

    /// Place `ship` in the matching unplaced fleet slot, or explain why not.
    /// Nothing changes on error.
    pub fn try_place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        let slot = self.check_placement(&ship)?;
        let mask = BoardGrid::from_coordinates(ship.coordinates())?;
        self.occupied |= mask;
        debug!(
            "placed {} at {:?} {:?}",
            ship.ship_type(),
            ship.position(),
            ship.orientation()
        );
        self.fleet[slot] = ship;
        Ok(())
    }

    /// Place `ship`, reporting only whether it worked.
    pub fn place_ship(&mut self, ship: Ship) -> bool {
        let ship_type = ship.ship_type();
        match self.try_place_ship(ship) {
            Ok(()) => true,
            Err(e) => {
                debug!("rejected {} placement: {}", ship_type, e);
                false
            }
        }
    }

    /// Returns a random legal origin and orientation for `ship_type`.
    ///
    /// Draws uniformly random placements up to `RANDOM_PLACEMENT_ATTEMPTS`
    /// times, then picks uniformly among every remaining legal placement.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Result<(Coordinate, Orientation), BoardError> {
        for _ in 0..RANDOM_PLACEMENT_ATTEMPTS {
            let origin = Coordinate::new(
                rng.random_range(1..=self.board_size),
                rng.random_range(1..=self.board_size),
            );
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let ship = Ship::positioned(ship_type, origin, orientation);
            if self.check_placement(&ship).is_ok() {
                return Ok((origin, orientation));
            }
        }

        warn!(
            "no random spot for {} after {} attempts, scanning the board",
            ship_type, RANDOM_PLACEMENT_ATTEMPTS
        );
        let legal = self.legal_placements(ship_type);
        if legal.is_empty() {
            return Err(BoardError::UnableToPlaceShip(ship_type));
        }
        Ok(legal[rng.random_range(0..legal.len())])
    }

    /// Every origin and orientation at which `ship_type` could go right now.
    pub fn legal_placements(&self, ship_type: ShipType) -> Vec<(Coordinate, Orientation)> {
        Coordinate::all(self.board_size)
            .flat_map(|origin| Orientation::ALL.into_iter().map(move |o| (origin, o)))
            .filter(|&(origin, o)| {
                self.check_placement(&Ship::positioned(ship_type, origin, o))
                    .is_ok()
            })
            .collect()
    }

    /// Place every unplaced ship at a random legal spot. Stops at the first
    /// ship with nowhere left to go.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        let pending: Vec<ShipType> = self.unplaced().collect();
        for ship_type in pending {
            let (origin, orientation) = self.random_placement(rng, ship_type)?;
            self.try_place_ship(Ship::positioned(ship_type, origin, orientation))?;
        }
        Ok(())
    }

    /// Resolve a shot against the fleet.
    pub fn attack(&mut self, coordinate: Coordinate) -> AttackResult {
        for ship in self.fleet.iter_mut() {
            let result = ship.attack(coordinate);
            if result.outcome.is_hit() {
                return result;
            }
        }
        AttackResult::miss(coordinate)
    }
}
