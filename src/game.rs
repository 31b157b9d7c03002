//! A match: participants, their boards and shot histories.
//!
//! The game has no stored phase. It is *forming* until every fleet is
//! placed, *active* while no fleet is sunk, and *over* once any fleet is.
//! Nothing stops callers from firing after the game is over; boards stay
//! consistent because every shot is idempotent per attacker.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::common::{AttackOutcome, AttackResult};
use crate::config::{GameType, MAX_RECORDED_INVALID_SHOTS};
use crate::coordinate::Coordinate;
use crate::grid::BoardGrid;
use crate::id::{GameId, PlayerId};
use crate::leaderboard::{rank_by_score, score, PlayerWithScore};
use crate::player::Player;
use crate::ship::Ship;

/// Phase of a game, derived from its boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// At least one fleet is not fully placed.
    Forming,
    /// Every fleet is placed and none is sunk.
    Active,
    /// A fleet has been sunk.
    Over,
}

/// Errors from addressing a participant the game cannot resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// No participant with this id is registered.
    UnknownPlayer(PlayerId),
    /// The participant has nobody to fire at.
    NoOpponent(PlayerId),
    /// More than one other participant; shots need an explicit target.
    AmbiguousOpponent(PlayerId),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::UnknownPlayer(id) => write!(f, "Player {} is not in this game", id),
            GameError::NoOpponent(id) => write!(f, "Player {} has no opponent yet", id),
            GameError::AmbiguousOpponent(id) => {
                write!(f, "Player {} has more than one opponent", id)
            }
        }
    }
}

impl core::error::Error for GameError {}

struct Participant {
    player: Player,
    board: Board,
    shots: Vec<AttackResult>,
}

/// One match between registered participants.
pub struct Game {
    id: GameId,
    game_type: GameType,
    participants: Vec<Participant>,
    rng: SmallRng,
}

impl Game {
    /// Empty game seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn new(game_type: GameType) -> Self {
        Self::with_rng(game_type, SmallRng::from_rng(&mut rand::rng()))
    }

    /// Empty game whose ids, placements and computer shots all follow `seed`.
    pub fn with_seed(game_type: GameType, seed: u64) -> Self {
        Self::with_rng(game_type, SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(game_type: GameType, mut rng: SmallRng) -> Self {
        let id = GameId::generate_with(&mut rng);
        info!("created {} game {}", game_type, id);
        Game {
            id,
            game_type,
            participants: Vec::new(),
            rng,
        }
    }

    /// Game with `players` already registered. Computer fleets are placed.
    #[cfg(feature = "std")]
    pub fn start_new_game<I>(players: I, game_type: GameType) -> Self
    where
        I: IntoIterator<Item = Player>,
    {
        let mut game = Self::new(game_type);
        for player in players {
            game.register(player);
        }
        game
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    /// Create and register a participant. The returned player carries the
    /// secret needed for later identity checks; computers have their fleet
    /// placed immediately.
    pub fn add_player(&mut self, name: &str, is_computer: bool) -> Player {
        let id = PlayerId::generate_with(&mut self.rng);
        let player = if is_computer {
            Player::with_ids(name, id, None).into_computer()
        } else {
            let secret = PlayerId::generate_with(&mut self.rng);
            Player::with_ids(name, id, Some(secret))
        };
        self.register(player.clone());
        player
    }

    /// Register a player created elsewhere. Returns false if the id is
    /// already taken.
    pub fn register(&mut self, player: Player) -> bool {
        if self.index_of(player.id()).is_some() {
            warn!("player {} is already in game {}", player.id(), self.id);
            return false;
        }
        info!("{} joined game {}", player.name(), self.id);
        let is_computer = player.is_computer();
        self.participants.push(Participant {
            player,
            board: Board::new(self.game_type),
            shots: Vec::new(),
        });
        if is_computer {
            let idx = self.participants.len() - 1;
            if let Err(e) = self.participants[idx].board.place_fleet_randomly(&mut self.rng) {
                warn!("could not place computer fleet: {}", e);
            }
        }
        true
    }

    /// Public projections of every participant, in registration order.
    pub fn players(&self) -> impl Iterator<Item = Player> + '_ {
        self.participants.iter().map(|p| p.player.public())
    }

    pub fn player(&self, id: PlayerId) -> Option<Player> {
        self.participant(id).map(|p| p.player.public())
    }

    pub fn board(&self, id: PlayerId) -> Option<&Board> {
        self.participant(id).map(|p| &p.board)
    }

    pub fn fleet(&self, id: PlayerId) -> Option<&[Ship]> {
        self.board(id).map(Board::fleet)
    }

    /// Shot history of `id`, oldest first.
    pub fn shots(&self, id: PlayerId) -> Option<&[AttackResult]> {
        self.participant(id).map(|p| p.shots.as_slice())
    }

    /// Public projection of the participant `id` fires at.
    pub fn opponent(&self, id: PlayerId) -> Result<Player, GameError> {
        let (_, opponent) = self.opponent_indices(id)?;
        Ok(self.participants[opponent].player.public())
    }

    pub fn opponent_name(&self, id: PlayerId) -> Result<&str, GameError> {
        let (_, opponent) = self.opponent_indices(id)?;
        Ok(self.participants[opponent].player.name())
    }

    pub fn are_fleets_ready(&self) -> bool {
        self.participants.iter().all(|p| p.board.is_fleet_ready())
    }

    pub fn is_over(&self) -> bool {
        self.participants.iter().any(|p| p.board.is_fleet_sunk())
    }

    pub fn status(&self) -> GameStatus {
        if self.is_over() {
            GameStatus::Over
        } else if !self.participants.is_empty() && self.are_fleets_ready() {
            GameStatus::Active
        } else {
            GameStatus::Forming
        }
    }

    /// Does `caller` prove to be the registered participant it claims?
    /// Computers need no proof.
    pub fn authenticate(&self, caller: &Player) -> bool {
        match self.participant(caller.id()) {
            Some(p) if p.player.is_computer() => true,
            Some(p) => p.player.is_user_who_they_say_they_are(caller),
            None => false,
        }
    }

    /// Like [`Game::authenticate`], but only a human holding the stored
    /// secret passes. Callers reached from outside the process use this.
    pub fn authenticate_human(&self, caller: &Player) -> bool {
        match self.participant(caller.id()) {
            Some(p) if !p.player.is_computer() => p.player.is_user_who_they_say_they_are(caller),
            _ => false,
        }
    }

    /// Place `ships` as given, or the whole remaining fleet at random when
    /// `do_it_for_me` is set or no ships are given. Returns whether the
    /// caller's fleet is now complete; false if the identity check fails.
    pub fn place_ships(
        &mut self,
        caller: &Player,
        ships: Option<Vec<Ship>>,
        do_it_for_me: bool,
    ) -> bool {
        let Some(idx) = self.authorized_index(caller) else {
            return false;
        };
        let board = &mut self.participants[idx].board;
        match ships {
            Some(ships) if !do_it_for_me => {
                for ship in ships {
                    board.place_ship(ship);
                }
            }
            _ => {
                if let Err(e) = board.place_fleet_randomly(&mut self.rng) {
                    warn!("random placement for {} stopped: {}", caller.name(), e);
                }
            }
        }
        board.is_fleet_ready()
    }

    /// Place a single ship for `caller`.
    pub fn place_ship(&mut self, caller: &Player, ship: Ship) -> bool {
        match self.authorized_index(caller) {
            Some(idx) => self.participants[idx].board.place_ship(ship),
            None => false,
        }
    }

    /// Fire one shot from `attacker` at its opponent.
    ///
    /// A cell the attacker already fired at yields `AlreadyAttacked` and
    /// leaves both the opponent's board and the history untouched. A cell off
    /// the opponent's board yields `InvalidPosition`, which is recorded for
    /// the first `MAX_RECORDED_INVALID_SHOTS` distinct cells only.
    pub fn fire(
        &mut self,
        attacker: PlayerId,
        coordinate: Coordinate,
    ) -> Result<AttackResult, GameError> {
        let (attacker, opponent) = self.opponent_indices(attacker)?;
        Ok(self.fire_between(attacker, opponent, coordinate))
    }

    /// Fire at each coordinate in turn. Shots happen as the returned
    /// iterator is consumed; anything left unconsumed is never fired.
    pub fn fire_salvo<I>(
        &mut self,
        attacker: PlayerId,
        coordinates: I,
    ) -> Result<Salvo<'_, I::IntoIter>, GameError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let (attacker, opponent) = self.opponent_indices(attacker)?;
        Ok(Salvo {
            game: self,
            attacker,
            opponent,
            coordinates: coordinates.into_iter(),
        })
    }

    /// Every computer participant fires once at a random cell it has not
    /// tried yet. Results come in registration order; computers without a
    /// single opponent or without cells left are skipped.
    pub fn other_players_fire(&mut self) -> Vec<AttackResult> {
        let mut results = Vec::new();
        for idx in 0..self.participants.len() {
            if !self.participants[idx].player.is_computer() {
                continue;
            }
            let id = self.participants[idx].player.id();
            let Ok((attacker, opponent)) = self.opponent_indices(id) else {
                continue;
            };
            let open: Vec<Coordinate> = (!self.attacked_cells(attacker))
                .cells()
                .filter(|&c| self.participants[opponent].board.contains(c))
                .collect();
            if open.is_empty() {
                continue;
            }
            let target = open[self.rng.random_range(0..open.len())];
            results.push(self.fire_between(attacker, opponent, target));
        }
        results
    }

    /// Participants ranked by score, best first, with dense positions.
    pub fn leader_board(&self) -> Vec<PlayerWithScore> {
        let scores = self
            .participants
            .iter()
            .map(|p| {
                let opponent_sunk = self
                    .opponent_indices(p.player.id())
                    .map(|(_, o)| self.participants[o].board.is_fleet_sunk())
                    .unwrap_or(false);
                let total = score(&p.shots, p.board.is_fleet_sunk(), opponent_sunk);
                (p.player.clone(), total)
            })
            .collect();
        rank_by_score(scores)
    }

    fn fire_between(
        &mut self,
        attacker: usize,
        opponent: usize,
        coordinate: Coordinate,
    ) -> AttackResult {
        let target = self.participants[opponent].player.id();
        if self.participants[attacker]
            .shots
            .iter()
            .any(|s| s.coordinate == coordinate)
        {
            debug!(
                "{} already fired at {:?}",
                self.participants[attacker].player.name(),
                coordinate
            );
            return AttackResult::already_attacked(coordinate).against(target);
        }

        if !self.participants[opponent].board.contains(coordinate) {
            let result = AttackResult::invalid_position(coordinate).against(target);
            let shooter = &mut self.participants[attacker];
            let recorded = shooter
                .shots
                .iter()
                .filter(|s| s.outcome == AttackOutcome::InvalidPosition)
                .count();
            if recorded < MAX_RECORDED_INVALID_SHOTS {
                shooter.shots.push(result);
            } else {
                debug!("{} is out of off-board shots to record", shooter.player.name());
            }
            return result;
        }

        let board = &mut self.participants[opponent].board;
        let result = board.attack(coordinate).against(target);
        let fleet_sunk = board.is_fleet_sunk();

        let shooter = &mut self.participants[attacker];
        debug!(
            "{} fired at {:?}: {:?}",
            shooter.player.name(),
            coordinate,
            result.outcome
        );
        shooter.shots.push(result);
        if fleet_sunk && result.outcome.is_hit() {
            info!(
                "{} sank the last ship in game {}",
                shooter.player.name(),
                self.id
            );
        }
        result
    }

    /// Cells `idx` has already fired at that lie on the grid.
    fn attacked_cells(&self, idx: usize) -> BoardGrid {
        let mut grid = BoardGrid::new();
        for shot in &self.participants[idx].shots {
            // Off-board shots have no cell to mark.
            let _ = grid.insert(shot.coordinate);
        }
        grid
    }

    fn participant(&self, id: PlayerId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.player.id() == id)
    }

    fn index_of(&self, id: PlayerId) -> Option<usize> {
        self.participants.iter().position(|p| p.player.id() == id)
    }

    fn authorized_index(&self, caller: &Player) -> Option<usize> {
        if !self.authenticate(caller) {
            warn!("identity check failed for {} in game {}", caller.id(), self.id);
            return None;
        }
        self.index_of(caller.id())
    }

    fn opponent_indices(&self, id: PlayerId) -> Result<(usize, usize), GameError> {
        let attacker = self.index_of(id).ok_or(GameError::UnknownPlayer(id))?;
        let mut others = (0..self.participants.len()).filter(|&i| i != attacker);
        match (others.next(), others.next()) {
            (Some(opponent), None) => Ok((attacker, opponent)),
            (None, _) => Err(GameError::NoOpponent(id)),
            (Some(_), Some(_)) => Err(GameError::AmbiguousOpponent(id)),
        }
    }
}

/// Lazily fired sequence of shots; see [`Game::fire_salvo`].
pub struct Salvo<'a, I> {
    game: &'a mut Game,
    attacker: usize,
    opponent: usize,
    coordinates: I,
}

impl<I> Iterator for Salvo<'_, I>
where
    I: Iterator<Item = Coordinate>,
{
    type Item = AttackResult;

    fn next(&mut self) -> Option<AttackResult> {
        let coordinate = self.coordinates.next()?;
        Some(self.game.fire_between(self.attacker, self.opponent, coordinate))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.coordinates.size_hint()
    }
}
