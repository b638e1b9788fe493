//! Whole matches driven through the public controller API with the headless stack

use duo_pong::renderer::{DrawCommand, HeadlessSurface};
use duo_pong::scheduler::{ManualScheduler, Scheduler};
use duo_pong::sim::{Key, MatchPhase, Score};
use duo_pong::ui::{EffectSink, MatchView, Overlay};
use duo_pong::{EffectError, GameController, Settings};

#[derive(Default)]
struct Recorder {
    scores: Vec<Score>,
    overlays: Vec<Overlay>,
}

impl MatchView for Recorder {
    fn show_scores(&mut self, score: &Score) {
        self.scores.push(*score);
    }

    fn show_overlay(&mut self, overlay: Overlay) {
        self.overlays.push(overlay);
    }
}

#[derive(Default)]
struct CountingEffects {
    settings: Settings,
    sounds: u32,
    vibrations: u32,
}

impl EffectSink for CountingEffects {
    fn apply_settings(&mut self, settings: &Settings) {
        self.settings = *settings;
    }

    fn play_win_sound(&mut self) -> Result<(), EffectError> {
        if self.settings.music {
            self.sounds += 1;
        }
        Ok(())
    }

    fn vibrate(&mut self, _duration_ms: u32) -> Result<(), EffectError> {
        if self.settings.vibration {
            self.vibrations += 1;
        }
        Ok(())
    }
}

type Game = GameController<ManualScheduler, HeadlessSurface, Recorder, CountingEffects>;

const MAX_TICKS: u32 = 200_000;

fn new_game(seed: u64, settings: Settings) -> Game {
    let mut game = GameController::new(
        seed,
        ManualScheduler::new(),
        HeadlessSurface::new(800.0),
        Recorder::default(),
        CountingEffects::default(),
    )
    .with_settings_loader(move || settings);
    game.boot();
    game
}

/// Player 1 follows the ball, player 2 parks at the bottom
fn steer(game: &mut Game, held: &mut Option<Key>) {
    let ball_y = game.state().ball.pos.y;
    let center = game.state().left.center_y();
    let want = if center > ball_y + 4.0 {
        Some(Key::P1Up)
    } else if center < ball_y - 4.0 {
        Some(Key::P1Down)
    } else {
        None
    };
    if want != *held {
        if let Some(key) = held.take() {
            game.key_up(key);
        }
        if let Some(key) = want {
            game.key_down(key);
        }
        *held = want;
    }
}

fn play_out(game: &mut Game) -> u32 {
    let mut held = None;
    game.key_down(Key::P2Down);
    let mut ticks = 0;
    while game.scheduler().is_running() && ticks < MAX_TICKS {
        steer(game, &mut held);
        game.tick();
        ticks += 1;

        let state = game.state();
        let max_y = state.field.paddle_max_y();
        assert!((0.0..=max_y).contains(&state.left.y));
        assert!((0.0..=max_y).contains(&state.right.y));
    }
    ticks
}

#[test]
fn full_match_reaches_game_over() {
    let mut game = new_game(7, Settings::default());
    assert!(game.start());
    let ticks = play_out(&mut game);
    assert!(ticks < MAX_TICKS, "match never finished");

    let state = game.state();
    assert_eq!(state.phase, MatchPhase::GameOver);
    let winner = state.winner.expect("winner recorded");
    assert_eq!(state.score.get(winner), 5);
    assert!(state.score.get(winner.opponent()) < 5);

    // Boot and start each show 0-0, then one update per point
    let view = game.view();
    assert_eq!(
        view.scores.len() as u32 - 2,
        state.score.player1 + state.score.player2
    );
    for pair in view.scores.windows(2).skip(1) {
        let gained = (pair[1].player1 + pair[1].player2) - (pair[0].player1 + pair[0].player2);
        assert_eq!(gained, 1);
    }
    assert_eq!(view.overlays.last(), Some(&Overlay::GameOver { winner }));

    assert_eq!(game.effects().sounds, 1);
    assert_eq!(game.effects().vibrations, 1);
}

#[test]
fn same_seed_same_match() {
    let mut a = new_game(99, Settings::default());
    let mut b = new_game(99, Settings::default());
    a.start();
    b.start();
    let ticks_a = play_out(&mut a);
    let ticks_b = play_out(&mut b);
    assert_eq!(ticks_a, ticks_b);
    assert_eq!(a.state().score, b.state().score);
    assert_eq!(a.state().winner, b.state().winner);
}

#[test]
fn disabled_effects_stay_silent() {
    let mut game = new_game(
        3,
        Settings {
            music: false,
            vibration: false,
        },
    );
    game.start();
    play_out(&mut game);
    assert_eq!(game.phase(), MatchPhase::GameOver);
    assert_eq!(game.effects().sounds, 0);
    assert_eq!(game.effects().vibrations, 0);
}

#[test]
fn play_again_starts_fresh_match() {
    let mut game = new_game(11, Settings::default());
    game.start();
    play_out(&mut game);
    assert!(game.restart());

    assert_eq!(game.phase(), MatchPhase::NotStarted);
    assert_eq!(game.state().score, Score::default());
    assert_eq!(game.view().overlays.last(), Some(&Overlay::StartPrompt));

    // The reset frame shows centered paddles and the ball at center
    let frame = game.surface().last_frame.clone().expect("frame presented");
    let ball = frame.commands.iter().find_map(|cmd| match cmd {
        DrawCommand::FillCircle { center, .. } => Some(*center),
        _ => None,
    });
    assert_eq!(ball, Some(game.state().field.center()));

    assert!(game.start());
    assert_eq!(game.state().ball.vel.x, 5.0);
    let ticks = play_out(&mut game);
    assert!(ticks < MAX_TICKS);
    assert!(game.state().winner.is_some());
}

#[test]
fn pause_freezes_the_field() {
    let mut game = new_game(5, Settings::default());
    game.start();
    for _ in 0..30 {
        game.tick();
    }
    game.key_down(Key::Pause);
    game.key_up(Key::Pause);
    assert_eq!(game.phase(), MatchPhase::Paused);

    let frozen = game.state().clone();
    for _ in 0..30 {
        game.tick();
    }
    assert_eq!(game.state().ball, frozen.ball);
    assert_eq!(game.state().left, frozen.left);

    game.key_up(Key::Pause);
    assert_eq!(game.phase(), MatchPhase::Running);
    game.tick();
    assert_eq!(
        game.state().ball.pos,
        frozen.ball.pos + frozen.ball.vel
    );
    assert_eq!(game.view().overlays.last(), Some(&Overlay::None));
}
