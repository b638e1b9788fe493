//! Collision detection and response
//!
//! Discrete checks against the ball's position after this tick's movement.
//! Nothing is swept, so a ball travelling further than a paddle's width in
//! one tick can pass straight through it.

use super::state::{Ball, Paddle, Player, PlayingField};
use crate::consts::SPIN_FACTOR;

/// Which field edge the ball has left, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Past the left edge; player 2 scores
    Left,
    /// Past the right edge; player 1 scores
    Right,
}

impl Exit {
    pub fn scorer(self) -> Player {
        match self {
            Exit::Left => Player::Two,
            Exit::Right => Player::One,
        }
    }
}

/// Reflect off the top/bottom edge. Returns true on a bounce.
///
/// Only the velocity flips; the ball may already sit up to one tick's travel
/// beyond the edge and is left there.
pub fn wall_bounce(ball: &mut Ball, field: &PlayingField) -> bool {
    if ball.pos.y < ball.radius || ball.pos.y > field.height - ball.radius {
        ball.vel.y = -ball.vel.y;
        return true;
    }
    false
}

/// Check whether the ball center has crossed a side edge
pub fn check_exit(ball: &Ball, field: &PlayingField) -> Option<Exit> {
    if ball.pos.x < 0.0 {
        Some(Exit::Left)
    } else if ball.pos.x > field.width {
        Some(Exit::Right)
    } else {
        None
    }
}

/// Reflect the ball off `paddle` if they touch and the ball is heading into it.
///
/// The new vertical speed is proportional to how far from the paddle center
/// the ball struck. It is not capped.
pub fn paddle_collision(ball: &mut Ball, paddle: &Paddle, field: &PlayingField) -> bool {
    let reached = match paddle.side {
        Player::One => ball.pos.x - ball.radius < paddle.width && ball.vel.x < 0.0,
        Player::Two => {
            ball.pos.x + ball.radius > field.width - paddle.width && ball.vel.x > 0.0
        }
    };
    if !reached || !paddle.spans(ball.pos.y) {
        return false;
    }

    ball.vel.x = -ball.vel.x;
    ball.vel.y = (ball.pos.y - paddle.center_y()) * SPIN_FACTOR;
    true
}
