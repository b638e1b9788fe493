//! Match phase transitions
//!
//! Pure transition table. Side effects (scheduler, overlays, win effects)
//! belong to the controller.

use super::state::{MatchPhase, MatchState, Player};

/// Player-initiated actions that can change the phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    /// Start button
    Start,
    /// Pause key or pause/resume buttons
    TogglePause,
    /// Play-again or the pause panel's restart button
    Restart,
}

/// Where `action` leads from `phase`, or `None` if it is not legal there
pub fn transition(phase: MatchPhase, action: MatchAction) -> Option<MatchPhase> {
    use MatchAction::*;
    use MatchPhase::*;

    match (phase, action) {
        (NotStarted, Start) => Some(Running),
        (Running, TogglePause) => Some(Paused),
        (Paused, TogglePause) => Some(Running),
        (Paused, Restart) | (GameOver, Restart) => Some(NotStarted),
        _ => None,
    }
}

/// Move to GameOver if someone has reached the winning score.
///
/// Only fires out of `Running`, so a winner is declared at most once per match.
pub fn check_win(state: &mut MatchState) -> Option<Player> {
    if state.phase != MatchPhase::Running {
        return None;
    }
    let winner = state.score.winner()?;
    state.phase = MatchPhase::GameOver;
    state.winner = Some(winner);
    Some(winner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::PlayingField;

    #[test]
    fn test_legal_transitions() {
        use MatchAction::*;
        use MatchPhase::*;

        assert_eq!(transition(NotStarted, Start), Some(Running));
        assert_eq!(transition(Running, TogglePause), Some(Paused));
        assert_eq!(transition(Paused, TogglePause), Some(Running));
        assert_eq!(transition(GameOver, Restart), Some(NotStarted));
        assert_eq!(transition(Paused, Restart), Some(NotStarted));
    }

    #[test]
    fn test_illegal_transitions_are_ignored() {
        use MatchAction::*;
        use MatchPhase::*;

        assert_eq!(transition(NotStarted, TogglePause), None);
        assert_eq!(transition(NotStarted, Restart), None);
        assert_eq!(transition(Running, Start), None);
        assert_eq!(transition(Running, Restart), None);
        assert_eq!(transition(Paused, Start), None);
        assert_eq!(transition(GameOver, Start), None);
        assert_eq!(transition(GameOver, TogglePause), None);
    }

    #[test]
    fn test_check_win_fires_once() {
        let mut state = MatchState::new(PlayingField::new(800.0), 3);
        state.phase = MatchPhase::Running;
        state.score.player1 = 5;
        state.score.player2 = 3;

        assert_eq!(check_win(&mut state), Some(Player::One));
        assert_eq!(state.phase, MatchPhase::GameOver);
        assert_eq!(state.winner, Some(Player::One));
        assert_eq!(check_win(&mut state), None);
    }

    #[test]
    fn test_check_win_below_threshold() {
        let mut state = MatchState::new(PlayingField::new(800.0), 3);
        state.phase = MatchPhase::Running;
        state.score.player2 = 4;
        assert_eq!(check_win(&mut state), None);
        assert_eq!(state.phase, MatchPhase::Running);
    }
}
