//! Match state and core simulation types
//!
//! Everything the tick mutates lives in [`MatchState`]; `reset` is the
//! wholesale re-initialisation used before every match.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Start prompt showing, nothing moves
    NotStarted,
    /// Active gameplay
    Running,
    /// Match is paused
    Paused,
    /// A player reached the winning score
    GameOver,
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Left paddle (W/S, left half of the screen)
    One,
    /// Right paddle (arrow keys, right half of the screen)
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

/// Events produced by a tick, consumed by the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball reflected off the top or bottom edge
    WallBounce,
    /// Ball reflected off a paddle
    PaddleHit(Player),
    /// A point was scored; carries the score after the increment
    Scored { scorer: Player, score: Score },
    /// Score reached the winning threshold
    MatchWon(Player),
}

/// The drawing area in simulation units. Always 2:1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayingField {
    pub width: f32,
    pub height: f32,
}

impl PlayingField {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            height: width / 2.0,
        }
    }

    /// Recompute dimensions from a new width. Returns false if nothing changed.
    pub fn resize(&mut self, width: f32) -> bool {
        if self.width == width {
            return false;
        }
        *self = Self::new(width);
        true
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Largest legal paddle `y`
    pub fn paddle_max_y(&self) -> f32 {
        (self.height - PADDLE_HEIGHT).max(0.0)
    }

    /// Which paddle a touch at horizontal position `x` controls
    pub fn side_of(&self, x: f32) -> Player {
        if x < self.width / 2.0 {
            Player::One
        } else {
            Player::Two
        }
    }
}

impl Default for PlayingField {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_WIDTH)
    }
}

/// A player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Player,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Player, field: &PlayingField) -> Self {
        let mut paddle = Self {
            side,
            y: 0.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        };
        paddle.center_in(field);
        paddle
    }

    /// Left edge; fixed against the field's side wall
    pub fn x(&self, field: &PlayingField) -> f32 {
        match self.side {
            Player::One => 0.0,
            Player::Two => field.width - self.width,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// True if `y` lies strictly inside the paddle's vertical span
    pub fn spans(&self, y: f32) -> bool {
        y > self.y && y < self.y + self.height
    }

    pub fn center_in(&mut self, field: &PlayingField) {
        self.y = (field.height - self.height) / 2.0;
        self.clamp_to(field);
    }

    pub fn clamp_to(&mut self, field: &PlayingField) {
        self.y = self.y.clamp(0.0, field.paddle_max_y());
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(field: &PlayingField) -> Self {
        Self {
            pos: field.center(),
            vel: Vec2::new(SERVE_SPEED, 0.0),
            radius: BALL_RADIUS,
        }
    }

    /// Place the ball at the field center heading toward `receiver`
    pub fn serve<R: Rng>(&mut self, field: &PlayingField, receiver: Player, rng: &mut R) {
        self.pos = field.center();
        let vx = match receiver {
            Player::One => -SERVE_SPEED,
            Player::Two => SERVE_SPEED,
        };
        let vy = rng.random_range(-SERVE_SPREAD..SERVE_SPREAD);
        self.vel = Vec2::new(vx, vy);
    }
}

/// Points per player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player1: u32,
    pub player2: u32,
}

impl Score {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    pub fn increment(&mut self, player: Player) {
        match player {
            Player::One => self.player1 += 1,
            Player::Two => self.player2 += 1,
        }
    }

    /// The first player at or above `WINNING_SCORE`, if any
    pub fn winner(&self) -> Option<Player> {
        if self.player1 >= WINNING_SCORE {
            Some(Player::One)
        } else if self.player2 >= WINNING_SCORE {
            Some(Player::Two)
        } else {
            None
        }
    }
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct MatchState {
    pub field: PlayingField,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: MatchPhase,
    pub winner: Option<Player>,
    /// Ticks simulated since the last reset
    pub(crate) time_ticks: u64,
    rng: Pcg32,
}

impl MatchState {
    /// Create a fresh, not-yet-started match
    pub fn new(field: PlayingField, seed: u64) -> Self {
        let mut state = Self {
            field,
            left: Paddle::new(Player::One, &field),
            right: Paddle::new(Player::Two, &field),
            ball: Ball::new(&field),
            score: Score::default(),
            phase: MatchPhase::NotStarted,
            winner: None,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset();
        state
    }

    /// Full reset: scores, paddles, ball, phase back to `NotStarted`
    pub fn reset(&mut self) {
        self.reset_positions();
        self.phase = MatchPhase::NotStarted;
    }

    /// Zero the score and put paddles and ball back at their starting places
    pub fn reset_positions(&mut self) {
        self.score = Score::default();
        self.winner = None;
        self.time_ticks = 0;
        self.left.center_in(&self.field);
        self.right.center_in(&self.field);
        self.serve(Player::Two);
    }

    /// Re-center the ball heading toward `receiver`
    pub fn serve(&mut self, receiver: Player) {
        self.ball.serve(&self.field, receiver, &mut self.rng);
    }

    pub fn paddle(&self, side: Player) -> &Paddle {
        match side {
            Player::One => &self.left,
            Player::Two => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Player) -> &mut Paddle {
        match side {
            Player::One => &mut self.left,
            Player::Two => &mut self.right,
        }
    }

    /// Apply a new surface width. Paddles are re-clamped; the ball is left alone.
    pub fn resize(&mut self, width: f32) -> bool {
        if !self.field.resize(width) {
            return false;
        }
        self.left.clamp_to(&self.field);
        self.right.clamp_to(&self.field);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_is_two_to_one() {
        let mut field = PlayingField::new(640.0);
        assert_eq!(field.height, 320.0);
        assert!(field.resize(1000.0));
        assert_eq!(field.height, 500.0);
        assert!(!field.resize(1000.0));
    }

    #[test]
    fn test_new_match_is_centered() {
        let state = MatchState::new(PlayingField::new(800.0), 1);
        assert_eq!(state.phase, MatchPhase::NotStarted);
        assert_eq!(state.left.y, 160.0);
        assert_eq!(state.right.y, 160.0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(state.ball.vel.x, SERVE_SPEED);
        assert_eq!(state.right.x(&state.field), 790.0);
    }

    #[test]
    fn test_serve_direction_and_spread() {
        let mut state = MatchState::new(PlayingField::new(800.0), 7);
        for _ in 0..200 {
            state.serve(Player::One);
            assert_eq!(state.ball.vel.x, -SERVE_SPEED);
            assert!(state.ball.vel.y >= -SERVE_SPREAD && state.ball.vel.y < SERVE_SPREAD);
        }
        state.serve(Player::Two);
        assert_eq!(state.ball.vel.x, SERVE_SPEED);
    }

    #[test]
    fn test_resize_clamps_paddles() {
        let mut state = MatchState::new(PlayingField::new(800.0), 1);
        state.left.y = 320.0;
        state.right.y = 300.0;
        assert!(state.resize(400.0));
        assert_eq!(state.field.height, 200.0);
        assert_eq!(state.left.y, 120.0);
        assert_eq!(state.right.y, 120.0);
    }

    #[test]
    fn test_tiny_field_pins_paddles_to_top() {
        let mut state = MatchState::new(PlayingField::new(800.0), 1);
        state.resize(100.0);
        assert_eq!(state.left.y, 0.0);
        assert_eq!(state.right.y, 0.0);
    }

    #[test]
    fn test_score_winner() {
        let mut score = Score::default();
        for _ in 0..4 {
            score.increment(Player::Two);
        }
        assert_eq!(score.winner(), None);
        score.increment(Player::Two);
        assert_eq!(score.winner(), Some(Player::Two));
        assert_eq!(score.get(Player::One), 0);
    }
}
