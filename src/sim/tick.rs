//! Fixed timestep simulation tick
//!
//! Advances the match by exactly one step. Velocities are in pixels per tick,
//! so there is no `dt`.

use super::collision::{check_exit, paddle_collision, wall_bounce};
use super::input::InputReconciler;
use super::phase::check_win;
use super::state::{GameEvent, MatchPhase, MatchState};

/// Advance the match by one tick.
///
/// Outside `Running` this does nothing: positions stay put and queued input
/// waits for the next running tick.
pub fn tick(state: &mut MatchState, input: &mut InputReconciler) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != MatchPhase::Running {
        return events;
    }

    state.time_ticks += 1;

    let field = state.field;
    input.move_paddles(&mut state.left, &mut state.right, &field);

    state.ball.pos += state.ball.vel;

    if wall_bounce(&mut state.ball, &field) {
        events.push(GameEvent::WallBounce);
    }

    if let Some(exit) = check_exit(&state.ball, &field) {
        let scorer = exit.scorer();
        state.score.increment(scorer);
        events.push(GameEvent::Scored {
            scorer,
            score: state.score,
        });
        log::debug!(
            "{} scores ({}-{})",
            scorer.label(),
            state.score.player1,
            state.score.player2
        );

        if let Some(winner) = check_win(state) {
            events.push(GameEvent::MatchWon(winner));
            return events;
        }
        state.serve(scorer.opponent());
    }

    // Left and right are checked independently
    if paddle_collision(&mut state.ball, &state.left, &field) {
        events.push(GameEvent::PaddleHit(state.left.side));
    }
    if paddle_collision(&mut state.ball, &state.right, &field) {
        events.push(GameEvent::PaddleHit(state.right.side));
    }

    events
}
