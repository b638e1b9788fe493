//! Loop driver and match side effects
//!
//! [`GameController`] owns the match state and every collaborator. Page
//! events call its action methods; the scheduler calls [`GameController::tick`].
//! Phase changes are the only place the scheduler is started or stopped.

use crate::consts::WIN_VIBRATION_MS;
use crate::renderer::{Surface, render};
use crate::scheduler::Scheduler;
use crate::settings::Settings;
use crate::sim::{
    GameEvent, InputCommand, InputReconciler, Key, MatchAction, MatchPhase, MatchState, Player,
    PlayingField, TouchPoint, tick, transition,
};
use crate::ui::{EffectSink, MatchView, Overlay};

/// Source of the persisted settings, read on every match reset
pub type SettingsLoader = Box<dyn Fn() -> Settings>;

/// Owns a match and drives it
pub struct GameController<S, D, V, E> {
    state: MatchState,
    input: InputReconciler,
    scheduler: S,
    surface: D,
    view: V,
    effects: E,
    load_settings: SettingsLoader,
    /// The surface buffer has been sized at least once
    surface_sized: bool,
}

impl<S, D, V, E> GameController<S, D, V, E>
where
    S: Scheduler,
    D: Surface,
    V: MatchView,
    E: EffectSink,
{
    pub fn new(seed: u64, scheduler: S, surface: D, view: V, effects: E) -> Self {
        Self {
            state: MatchState::new(PlayingField::default(), seed),
            input: InputReconciler::new(),
            scheduler,
            surface,
            view,
            effects,
            load_settings: Box::new(Settings::load),
            surface_sized: false,
        }
    }

    /// Replace where settings come from
    pub fn with_settings_loader(mut self, loader: impl Fn() -> Settings + 'static) -> Self {
        self.load_settings = Box::new(loader);
        self
    }

    /// Measure the surface and show the idle layout with the start prompt
    pub fn boot(&mut self) {
        self.check_resize();
        self.reset();
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    // === Actions ===

    /// Wholesale reset back to the start prompt
    pub fn reset(&mut self) {
        self.scheduler.stop();

        let settings = (self.load_settings)();
        self.effects.apply_settings(&settings);

        self.state.reset();
        self.input.clear();
        self.view.show_scores(&self.state.score);
        self.view.show_overlay(Overlay::StartPrompt);
        self.redraw();
    }

    /// Start button. Returns false if not legal in the current phase.
    pub fn start(&mut self) -> bool {
        let Some(next) = transition(self.state.phase, MatchAction::Start) else {
            return false;
        };
        self.check_resize();
        self.input.clear();
        self.state.reset_positions();
        self.state.phase = next;
        self.view.show_scores(&self.state.score);
        self.view.show_overlay(Overlay::None);
        self.scheduler.start();
        log::info!("Match started");
        true
    }

    /// Pause key or pause/resume buttons
    pub fn toggle_pause(&mut self) -> bool {
        let Some(next) = transition(self.state.phase, MatchAction::TogglePause) else {
            return false;
        };
        self.state.phase = next;
        match next {
            MatchPhase::Paused => {
                self.scheduler.stop();
                self.view.show_overlay(Overlay::Paused);
                log::info!("Paused");
            }
            _ => {
                self.view.show_overlay(Overlay::None);
                self.scheduler.start();
                log::info!("Resumed");
            }
        }
        true
    }

    /// Play-again, or restart from the pause panel
    pub fn restart(&mut self) -> bool {
        if transition(self.state.phase, MatchAction::Restart).is_none() {
            return false;
        }
        log::info!("Restarting match");
        self.reset();
        true
    }

    // === Input ===

    pub fn key_down(&mut self, key: Key) {
        // Pause acts on release
        if key == Key::Pause || self.state.phase != MatchPhase::Running {
            return;
        }
        self.input.push(InputCommand::KeyDown(key));
    }

    /// Releases are queued while paused too so keys held across a pause get let go
    pub fn key_up(&mut self, key: Key) {
        if key == Key::Pause {
            self.toggle_pause();
            return;
        }
        if !matches!(self.state.phase, MatchPhase::Running | MatchPhase::Paused) {
            return;
        }
        self.input.push(InputCommand::KeyUp(key));
    }

    pub fn touch_update(&mut self, points: Vec<TouchPoint>) {
        if self.state.phase != MatchPhase::Running || points.is_empty() {
            return;
        }
        self.input.push(InputCommand::TouchUpdate(points));
    }

    pub fn touch_end(&mut self, remaining: usize) {
        if self.state.phase != MatchPhase::Running {
            return;
        }
        self.input.push(InputCommand::TouchEnd { remaining });
    }

    /// Window resize; also usable while the match is idle
    pub fn on_resize(&mut self) -> bool {
        self.check_resize()
    }

    // === Loop ===

    /// One scheduled tick: resize check, physics, render
    pub fn tick(&mut self) {
        if self.state.phase != MatchPhase::Running {
            return;
        }

        self.check_resize();

        for event in tick(&mut self.state, &mut self.input) {
            match event {
                GameEvent::Scored { score, .. } => self.view.show_scores(&score),
                GameEvent::MatchWon(winner) => self.finish(winner),
                GameEvent::WallBounce | GameEvent::PaddleHit(_) => {}
            }
        }

        self.redraw();
    }

    fn finish(&mut self, winner: Player) {
        self.scheduler.stop();
        log::info!(
            "{} wins {}-{}",
            winner.label(),
            self.state.score.player1,
            self.state.score.player2
        );
        self.view.show_overlay(Overlay::GameOver { winner });

        if let Err(e) = self.effects.play_win_sound() {
            log::warn!("Win sound failed: {}", e);
        }
        if let Err(e) = self.effects.vibrate(WIN_VIBRATION_MS) {
            log::warn!("Win vibration failed: {}", e);
        }
    }

    /// Match the field to the surface's layout width. Redraws on change.
    fn check_resize(&mut self) -> bool {
        // Canvas buffers hold whole pixels
        let width = self.surface.layout_width().floor();
        let changed = self.state.resize(width);
        if !changed && self.surface_sized {
            return false;
        }
        let field = self.state.field;
        self.surface.resize(field.width, field.height);
        self.surface_sized = true;
        log::info!("Field resized to {}x{}", field.width, field.height);
        self.redraw();
        true
    }

    fn redraw(&mut self) {
        let frame = render(&self.state);
        self.surface.present(&frame);
    }
}
