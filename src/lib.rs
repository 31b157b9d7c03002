#![cfg_attr(not(feature = "std"), no_std)]
//! Rules engine for Battleship matches: coordinates, ship placement,
//! attack resolution and scoring. Without the `std` feature the rules core
//! builds on `core` + `alloc`.

extern crate alloc;

mod board;
mod common;
mod config;
mod coordinate;
mod game;
mod grid;
mod id;
mod leaderboard;
#[cfg(feature = "std")]
mod logging;
mod player;
#[cfg(feature = "std")]
mod service;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use game::*;
pub use grid::{BoardGrid, Grid, GridError};
pub use id::*;
pub use leaderboard::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env, parse_level, LOG_LEVEL_VAR};
pub use player::*;
#[cfg(feature = "std")]
pub use service::*;
pub use ship::*;
