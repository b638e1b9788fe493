//! DOM-backed view: score labels and overlay panels

use web_sys::{Document, Element};

use super::{MatchView, Overlay, score_text, winner_slogan};
use crate::sim::{Player, Score};

/// Element ids the game page provides
pub mod ids {
    pub const CANVAS: &str = "gameCanvas";
    pub const PLAYER1_SCORE: &str = "player1Score";
    pub const PLAYER2_SCORE: &str = "player2Score";
    pub const START_OVERLAY: &str = "startOverlay";
    pub const PAUSE_OVERLAY: &str = "pauseOverlay";
    pub const GAME_OVER_OVERLAY: &str = "gameOverOverlay";
    pub const WINNER_SLOGAN: &str = "winnerSlogan";
    pub const START_BUTTON: &str = "startButton";
    pub const PAUSE_BUTTON: &str = "pauseButton";
    pub const RESUME_BUTTON: &str = "resumeButton";
    pub const RESTART_BUTTON_PAUSE: &str = "restartButtonPause";
    pub const PLAY_AGAIN_BUTTON: &str = "playAgainButton";
    pub const MUSIC_CHECKBOX: &str = "musicCheckbox";
    pub const VIBRATION_CHECKBOX: &str = "vibrationCheckbox";
}

const HIDDEN: &str = "hidden";

/// Writes scores and toggles the `hidden` class on overlay panels
pub struct DomView {
    player1_score: Option<Element>,
    player2_score: Option<Element>,
    start_overlay: Option<Element>,
    pause_overlay: Option<Element>,
    game_over_overlay: Option<Element>,
    winner_slogan: Option<Element>,
}

impl DomView {
    pub fn new(document: &Document) -> Self {
        let find = |id: &str| {
            let el = document.get_element_by_id(id);
            if el.is_none() {
                log::warn!("Element #{} not found", id);
            }
            el
        };
        Self {
            player1_score: find(ids::PLAYER1_SCORE),
            player2_score: find(ids::PLAYER2_SCORE),
            start_overlay: find(ids::START_OVERLAY),
            pause_overlay: find(ids::PAUSE_OVERLAY),
            game_over_overlay: find(ids::GAME_OVER_OVERLAY),
            winner_slogan: find(ids::WINNER_SLOGAN),
        }
    }

    fn set_visible(el: &Option<Element>, visible: bool) {
        let Some(el) = el else { return };
        let classes = el.class_list();
        let _ = if visible {
            classes.remove_1(HIDDEN)
        } else {
            classes.add_1(HIDDEN)
        };
    }
}

impl MatchView for DomView {
    fn show_scores(&mut self, score: &Score) {
        if let Some(el) = &self.player1_score {
            el.set_text_content(Some(&score_text(Player::One, score)));
        }
        if let Some(el) = &self.player2_score {
            el.set_text_content(Some(&score_text(Player::Two, score)));
        }
    }

    fn show_overlay(&mut self, overlay: Overlay) {
        if let Overlay::GameOver { winner } = overlay {
            if let Some(el) = &self.winner_slogan {
                el.set_text_content(Some(&winner_slogan(winner)));
            }
        }
        Self::set_visible(&self.start_overlay, overlay == Overlay::StartPrompt);
        Self::set_visible(&self.pause_overlay, overlay == Overlay::Paused);
        Self::set_visible(
            &self.game_over_overlay,
            matches!(overlay, Overlay::GameOver { .. }),
        );
    }
}

/// Wire the settings page checkboxes to the persisted flags
pub fn bind_settings_page(document: &Document) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::audio::vibration_supported;
    use crate::settings::{SettingKey, Settings};

    let settings = Settings::load();
    for (id, key) in [
        (ids::MUSIC_CHECKBOX, SettingKey::Music),
        (ids::VIBRATION_CHECKBOX, SettingKey::Vibration),
    ] {
        let Some(checkbox) = document.get_element_by_id(id) else {
            log::warn!("Element #{} not found", id);
            continue;
        };
        show_checked(&checkbox, settings.get(key));

        let el = checkbox.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let mut settings = Settings::load();
            let enabled = settings.toggle(key);
            if key == SettingKey::Vibration && enabled && !vibration_supported() {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(
                        "Warning: Vibration setting has been turned ON, but your browser/device \
                         does not support the Vibration API.",
                    );
                }
            }
            settings.save_flag(key);
            show_checked(&el, enabled);
        });
        let _ = checkbox.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn show_checked(checkbox: &Element, checked: bool) {
    let _ = checkbox.set_attribute("data-checked", if checked { "true" } else { "false" });
    checkbox.set_text_content(Some(if checked { "✓" } else { "" }));
}
