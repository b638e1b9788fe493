//! Duo Pong - A two-player paddle game
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (input reconciliation, physics, match phases)
//! - `controller`: Loop driver and match side effects
//! - `scheduler`: Tick sources (browser interval, headless manual)
//! - `renderer`: Draw-command frames and the surfaces that present them
//! - `ui`: Score/overlay view boundary
//! - `settings`: Persisted music/vibration flags

pub mod controller;
pub mod error;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod sim;
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod audio;

pub use controller::GameController;
pub use error::EffectError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Interval between ticks in milliseconds (rounded down, as setInterval does)
    pub const TICK_INTERVAL_MS: i32 = 1000 / TICKS_PER_SECOND as i32;

    /// Field width before the first layout measurement
    pub const DEFAULT_FIELD_WIDTH: f32 = 800.0;

    /// Paddle dimensions
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_WIDTH: f32 = 10.0;
    /// Paddle travel per tick (keyboard step and touch approach cap)
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Horizontal serve speed (pixels per tick)
    pub const SERVE_SPEED: f32 = 5.0;
    /// Serve vertical speed is drawn from [-SERVE_SPREAD, SERVE_SPREAD)
    pub const SERVE_SPREAD: f32 = 3.0;
    /// Vertical speed gained per pixel of offset from the paddle center
    pub const SPIN_FACTOR: f32 = 0.35;

    /// First player to reach this wins
    pub const WINNING_SCORE: u32 = 5;
    /// Win vibration length
    pub const WIN_VIBRATION_MS: u32 = 500;
}
