//! Input reconciliation
//!
//! Keyboard and touch handlers never touch paddles directly. They queue
//! [`InputCommand`]s which the tick drains before moving paddles, so input
//! is applied at one well-defined point per tick.

use std::collections::VecDeque;

use super::state::{Paddle, Player, PlayingField};
use crate::consts::PADDLE_SPEED;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    P1Up,
    P1Down,
    P2Up,
    P2Down,
    Pause,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key_str(key: &str) -> Option<Self> {
        match key {
            "w" | "W" => Some(Key::P1Up),
            "s" | "S" => Some(Key::P1Down),
            "ArrowUp" => Some(Key::P2Up),
            "ArrowDown" => Some(Key::P2Down),
            "p" | "P" => Some(Key::Pause),
            _ => None,
        }
    }
}

/// A touch point in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Queued input, drained once per tick
#[derive(Debug, Clone, PartialEq)]
pub enum InputCommand {
    KeyDown(Key),
    KeyUp(Key),
    /// All currently active touch points
    TouchUpdate(Vec<TouchPoint>),
    /// A touch ended; `remaining` is the number of points still down
    TouchEnd { remaining: usize },
}

/// Held keys for one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
}

/// Reconciled input for both paddles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    pub player1: KeyState,
    pub player2: KeyState,
    /// Touch Y (surface-local) per side, if a finger controls it
    pub touch1: Option<f32>,
    pub touch2: Option<f32>,
    /// Any touch point is live; suppresses keyboard for both paddles
    pub touch_active: bool,
}

impl InputState {
    pub fn keys(&self, side: Player) -> KeyState {
        match side {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    pub fn touch_target(&self, side: Player) -> Option<f32> {
        match side {
            Player::One => self.touch1,
            Player::Two => self.touch2,
        }
    }

    /// Fold one command into the state
    pub fn apply(&mut self, command: &InputCommand, field: &PlayingField) {
        match command {
            InputCommand::KeyDown(key) => self.set_key(*key, true),
            InputCommand::KeyUp(key) => self.set_key(*key, false),
            InputCommand::TouchUpdate(points) => {
                self.touch_active = true;
                for point in points {
                    match field.side_of(point.x) {
                        Player::One => self.touch1 = Some(point.y),
                        Player::Two => self.touch2 = Some(point.y),
                    }
                }
            }
            InputCommand::TouchEnd { remaining } => {
                if *remaining == 0 {
                    self.touch1 = None;
                    self.touch2 = None;
                    self.touch_active = false;
                }
            }
        }
    }

    fn set_key(&mut self, key: Key, held: bool) {
        // Keyboard is ignored while a finger is down
        if self.touch_active {
            return;
        }
        match key {
            Key::P1Up => self.player1.up = held,
            Key::P1Down => self.player1.down = held,
            Key::P2Up => self.player2.up = held,
            Key::P2Down => self.player2.down = held,
            Key::Pause => {}
        }
    }

    /// Compute a paddle's `y` for this tick
    pub fn next_paddle_y(&self, paddle: &Paddle, field: &PlayingField) -> f32 {
        let max_y = field.paddle_max_y();

        if self.touch_active {
            let Some(touch_y) = self.touch_target(paddle.side) else {
                return paddle.y;
            };
            let target = touch_y - paddle.height / 2.0;
            let y = if target < paddle.y - PADDLE_SPEED {
                (paddle.y - PADDLE_SPEED).max(0.0)
            } else if target > paddle.y + PADDLE_SPEED {
                (paddle.y + PADDLE_SPEED).min(max_y)
            } else {
                target
            };
            return y.clamp(0.0, max_y);
        }

        let keys = self.keys(paddle.side);
        let mut y = paddle.y;
        if keys.up {
            y = (y - PADDLE_SPEED).max(0.0);
        }
        if keys.down {
            y = (y + PADDLE_SPEED).min(max_y);
        }
        y
    }
}

/// Command queue plus the state it folds into
#[derive(Debug, Clone, Default)]
pub struct InputReconciler {
    pub state: InputState,
    queue: VecDeque<InputCommand>,
}

impl InputReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: InputCommand) {
        self.queue.push_back(command);
    }

    pub(crate) fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Apply every queued command in arrival order
    pub fn drain(&mut self, field: &PlayingField) {
        while let Some(command) = self.queue.pop_front() {
            self.state.apply(&command, field);
        }
    }

    /// Drain the queue and move both paddles one tick
    pub fn move_paddles(&mut self, left: &mut Paddle, right: &mut Paddle, field: &PlayingField) {
        self.drain(field);
        left.y = self.state.next_paddle_y(left, field);
        right.y = self.state.next_paddle_y(right, field);
    }

    /// Forget held keys, touches and anything still queued
    pub fn clear(&mut self) {
        self.state = InputState::default();
        self.queue.clear();
    }
}
