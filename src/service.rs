#![cfg(feature = "std")]
//! Thread-safe registry of running games.
//!
//! Each game sits behind its own mutex so calls touching the same game are
//! serialized while different games proceed independently. Transport and
//! session handling stay with the caller: it decides which [`Player`]
//! (including the secret) a request speaks for.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{info, warn};

use crate::common::{AttackOutcome, AttackResult};
use crate::config::GameType;
use crate::coordinate::Coordinate;
use crate::game::{Game, GameError, GameStatus};
use crate::id::GameId;
use crate::leaderboard::LeaderboardEntry;
use crate::player::Player;
use crate::ship::Ship;

/// Errors returned by [`GameService`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No game is registered under this id.
    GameNotFound(GameId),
    /// The caller failed the identity check. Computer participants never
    /// pass it from outside the game.
    NotAuthenticated,
    /// Some fleet is still being placed.
    FleetsNotReady,
    /// A fleet has already been sunk.
    GameOver,
    Game(GameError),
}

impl From<GameError> for ServiceError {
    fn from(err: GameError) -> Self {
        ServiceError::Game(err)
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::GameNotFound(id) => write!(f, "Game {} not found", id),
            ServiceError::NotAuthenticated => write!(f, "Player is not who they say they are"),
            ServiceError::FleetsNotReady => write!(f, "Not every fleet has been placed"),
            ServiceError::GameOver => write!(f, "Game is already over"),
            ServiceError::Game(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ServiceError {}

#[derive(Default)]
pub struct GameService {
    games: Mutex<HashMap<GameId, Arc<Mutex<Game>>>>,
}

impl GameService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an already built game and return its id.
    pub fn insert(&self, game: Game) -> GameId {
        let id = game.id();
        lock(&self.games).insert(id, Arc::new(Mutex::new(game)));
        id
    }

    /// Start a two-participant game between `player` and a computer.
    pub fn start_game_vs_computer(
        &self,
        player: &Player,
        computer_name: &str,
        game_type: GameType,
    ) -> GameId {
        let mut game = Game::new(game_type);
        game.register(player.clone());
        game.add_player(computer_name, true);
        info!("{} challenged {} to a {} game", player.name(), computer_name, game_type);
        self.insert(game)
    }

    pub fn remove_game(&self, game_id: GameId) -> bool {
        lock(&self.games).remove(&game_id).is_some()
    }

    pub fn game_count(&self) -> usize {
        lock(&self.games).len()
    }

    /// Run `f` with exclusive access to the game.
    pub fn with_game<T>(
        &self,
        game_id: GameId,
        f: impl FnOnce(&mut Game) -> T,
    ) -> Result<T, ServiceError> {
        let game = lock(&self.games)
            .get(&game_id)
            .cloned()
            .ok_or(ServiceError::GameNotFound(game_id))?;
        let mut game = lock(&game);
        Ok(f(&mut game))
    }

    /// Place ships for `player` and return the resulting fleet.
    pub fn place_ships(
        &self,
        game_id: GameId,
        player: &Player,
        ships: Option<Vec<Ship>>,
        do_it_for_me: bool,
    ) -> Result<Vec<Ship>, ServiceError> {
        self.with_game(game_id, |game| {
            if !game.authenticate_human(player) {
                warn!("rejected placement for {} in game {}", player.id(), game_id);
                return Err(ServiceError::NotAuthenticated);
            }
            game.place_ships(player, ships, do_it_for_me);
            Ok(game.fleet(player.id()).map(<[Ship]>::to_vec).unwrap_or_default())
        })?
    }

    /// Fire for `player`, then let every computer answer. The caller's
    /// result comes first. Computers do not answer a repeated shot or a shot
    /// that ended the game.
    pub fn fire(
        &self,
        game_id: GameId,
        player: &Player,
        coordinate: Coordinate,
    ) -> Result<Vec<AttackResult>, ServiceError> {
        self.with_game(game_id, |game| {
            if !game.authenticate_human(player) {
                warn!("rejected shot for {} in game {}", player.id(), game_id);
                return Err(ServiceError::NotAuthenticated);
            }
            match game.status() {
                GameStatus::Forming => return Err(ServiceError::FleetsNotReady),
                GameStatus::Over => return Err(ServiceError::GameOver),
                GameStatus::Active => {}
            }
            let result = game.fire(player.id(), coordinate)?;
            let mut results = vec![result];
            if result.outcome != AttackOutcome::AlreadyAttacked && !game.is_over() {
                results.extend(game.other_players_fire());
            }
            if game.is_over() {
                info!("game {} is over", game_id);
            }
            Ok(results)
        })?
    }

    /// Public projections of everyone in the game except `player`.
    pub fn opponents(&self, game_id: GameId, player: &Player) -> Result<Vec<Player>, ServiceError> {
        self.with_game(game_id, |game| {
            game.players().filter(|p| p.id() != player.id()).collect()
        })
    }

    pub fn leaderboard(&self, game_id: GameId) -> Result<Vec<LeaderboardEntry>, ServiceError> {
        self.with_game(game_id, |game| {
            game.leader_board().iter().map(LeaderboardEntry::from).collect()
        })
    }

    pub fn status(&self, game_id: GameId) -> Result<GameStatus, ServiceError> {
        self.with_game(game_id, |game| game.status())
    }

    pub fn is_game_over(&self, game_id: GameId) -> Result<bool, ServiceError> {
        self.with_game(game_id, |game| game.is_over())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
