//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only (velocities are per tick)
//! - Seeded RNG only
//! - Input arrives as queued commands
//! - No rendering, timer or platform dependencies

pub mod collision;
pub mod input;
pub mod phase;
pub mod state;
pub mod tick;

pub use collision::{Exit, check_exit, paddle_collision, wall_bounce};
pub use input::{InputCommand, InputReconciler, InputState, Key, KeyState, TouchPoint};
pub use phase::{MatchAction, check_win, transition};
pub use state::{
    Ball, GameEvent, MatchPhase, MatchState, Paddle, Player, PlayingField, Score,
};
pub use tick::tick;
