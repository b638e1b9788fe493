//! UI boundary
//!
//! The controller reports what the page should show through [`MatchView`]
//! and requests win effects through [`EffectSink`]. The browser versions
//! live in `ui::dom` and `audio`; the logging versions here back the native
//! binary.

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomView, bind_settings_page};

use crate::error::EffectError;
use crate::settings::Settings;
use crate::sim::{Player, Score};

/// Which overlay panel is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Start prompt before a match
    StartPrompt,
    /// Pause panel
    Paused,
    /// Game-over panel with the winner's label
    GameOver { winner: Player },
    /// Nothing over the field
    None,
}

/// Text shown on the game-over panel
pub fn winner_slogan(winner: Player) -> String {
    format!("{} is the Winner!!!", winner.label())
}

/// Score text for one player
pub fn score_text(player: Player, score: &Score) -> String {
    format!("{}: {}", player.label(), score.get(player))
}

/// Score display and overlay control
pub trait MatchView {
    fn show_scores(&mut self, score: &Score);
    fn show_overlay(&mut self, overlay: Overlay);
}

/// Win sound and vibration.
///
/// Implementations honour the settings flags themselves and report missing
/// hardware as [`EffectError::Unsupported`].
pub trait EffectSink {
    /// Called on every match reset with freshly loaded settings
    fn apply_settings(&mut self, settings: &Settings);
    fn play_win_sound(&mut self) -> Result<(), EffectError>;
    fn vibrate(&mut self, duration_ms: u32) -> Result<(), EffectError>;
}

/// View that writes to the log
#[derive(Debug, Default)]
pub struct LogView;

impl MatchView for LogView {
    fn show_scores(&mut self, score: &Score) {
        log::info!(
            "{} | {}",
            score_text(Player::One, score),
            score_text(Player::Two, score)
        );
    }

    fn show_overlay(&mut self, overlay: Overlay) {
        match overlay {
            Overlay::GameOver { winner } => log::info!("{}", winner_slogan(winner)),
            other => log::info!("Overlay: {:?}", other),
        }
    }
}

/// Effect sink with no audio or haptic hardware
#[derive(Debug, Default)]
pub struct LogEffects {
    settings: Settings,
}

impl EffectSink for LogEffects {
    fn apply_settings(&mut self, settings: &Settings) {
        self.settings = *settings;
    }

    fn play_win_sound(&mut self) -> Result<(), EffectError> {
        if self.settings.music {
            log::info!("(win sound)");
        }
        Ok(())
    }

    fn vibrate(&mut self, duration_ms: u32) -> Result<(), EffectError> {
        if !self.settings.vibration {
            return Ok(());
        }
        log::debug!("Vibration requested ({} ms)", duration_ms);
        Err(EffectError::Unsupported("vibration"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(winner_slogan(Player::Two), "Player 2 is the Winner!!!");
        let score = Score {
            player1: 3,
            player2: 1,
        };
        assert_eq!(score_text(Player::One, &score), "Player 1: 3");
        assert_eq!(score_text(Player::Two, &score), "Player 2: 1");
    }

    #[test]
    fn test_log_effects_respects_flags() {
        let mut effects = LogEffects::default();
        effects.apply_settings(&Settings {
            music: true,
            vibration: false,
        });
        assert_eq!(effects.play_win_sound(), Ok(()));
        assert_eq!(effects.vibrate(500), Ok(()));

        effects.apply_settings(&Settings::default());
        assert_eq!(
            effects.vibrate(500),
            Err(EffectError::Unsupported("vibration"))
        );
    }
}
