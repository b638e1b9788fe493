//! Duo Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use duo_pong::GameController;
    use duo_pong::audio::WebEffects;
    use duo_pong::renderer::CanvasSurface;
    use duo_pong::scheduler::IntervalScheduler;
    use duo_pong::sim::{Key, MatchPhase, TouchPoint};
    use duo_pong::ui::dom::ids;
    use duo_pong::ui::{DomView, bind_settings_page};

    type WebGame = GameController<IntervalScheduler, CanvasSurface, DomView, WebEffects>;

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Duo Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // The settings page shares this bundle
        if document.get_element_by_id(ids::MUSIC_CHECKBOX).is_some() {
            bind_settings_page(&document);
        }

        let Some(canvas) = document
            .get_element_by_id(ids::CANVAS)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::info!("No game canvas on this page");
            return;
        };

        let surface = match CanvasSurface::new(canvas.clone()) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Canvas 2D unavailable: {:?}", e);
                return;
            }
        };

        let seed = js_sys::Date::now() as u64;
        let game: Rc<RefCell<WebGame>> = Rc::new(RefCell::new(GameController::new(
            seed,
            IntervalScheduler::new(),
            surface,
            DomView::new(&document),
            WebEffects::new(),
        )));
        log::info!("Game initialized with seed: {}", seed);

        // Each interval fires one tick
        {
            let tick_game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                tick_game.borrow_mut().tick();
            });
            game.borrow_mut()
                .scheduler_mut()
                .bind(closure.into_js_value().unchecked_into());
        }

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(&document, game.clone());
        setup_resize(game.clone());

        game.borrow_mut().boot();

        log::info!("Duo Pong ready");
    }

    fn touch_points(event: &TouchEvent, canvas: &HtmlCanvasElement) -> Vec<TouchPoint> {
        let rect = canvas.get_bounding_client_rect();
        let touches = event.touches();
        (0..touches.length())
            .filter_map(|i| touches.get(i))
            .map(|touch| {
                TouchPoint::new(
                    touch.client_x() as f32 - rect.left() as f32,
                    touch.client_y() as f32 - rect.top() as f32,
                )
            })
            .collect()
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<WebGame>>) {
        // Touch start/move: every live point updates its side's target
        for event_name in ["touchstart", "touchmove"] {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let mut g = game.borrow_mut();
                if g.phase() != MatchPhase::Running {
                    return;
                }
                event.prevent_default();
                g.touch_update(touch_points(&event, &canvas_clone));
            });
            let _ = canvas
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end/cancel
        for event_name in ["touchend", "touchcancel"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                game.borrow_mut().touch_end(event.touches().length() as usize);
            });
            let _ = canvas
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("no document");

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_key_str(&event.key()) {
                    game.borrow_mut().key_down(key);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_key_str(&event.key()) {
                    game.borrow_mut().key_up(key);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn on_click(document: &Document, id: &str, game: &Rc<RefCell<WebGame>>, action: fn(&mut WebGame)) {
        let Some(btn) = document.get_element_by_id(id) else {
            log::warn!("Button #{} not found", id);
            return;
        };
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            action(&mut game.borrow_mut());
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<WebGame>>) {
        on_click(document, ids::START_BUTTON, &game, |g| {
            g.start();
        });
        on_click(document, ids::PAUSE_BUTTON, &game, |g| {
            g.toggle_pause();
        });
        on_click(document, ids::RESUME_BUTTON, &game, |g| {
            g.toggle_pause();
        });
        on_click(document, ids::RESTART_BUTTON_PAUSE, &game, |g| {
            g.restart();
        });
        on_click(document, ids::PLAY_AGAIN_BUTTON, &game, |g| {
            g.restart();
        });
    }

    fn setup_resize(game: Rc<RefCell<WebGame>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().on_resize();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });

    log::info!("Duo Pong (native) starting with seed {}", seed);
    log::info!("Native mode runs a headless match - run with `trunk serve` for the web version");

    run_headless(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one match with idle paddles until someone wins or ten minutes pass
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(seed: u64) {
    use duo_pong::GameController;
    use duo_pong::consts::{DEFAULT_FIELD_WIDTH, TICKS_PER_SECOND};
    use duo_pong::renderer::HeadlessSurface;
    use duo_pong::scheduler::{ManualScheduler, Scheduler};
    use duo_pong::ui::{LogEffects, LogView};

    let max_ticks = TICKS_PER_SECOND as u64 * 60 * 10;

    let mut game = GameController::new(
        seed,
        ManualScheduler::new(),
        HeadlessSurface::new(DEFAULT_FIELD_WIDTH),
        LogView,
        LogEffects::default(),
    );
    game.boot();
    game.start();

    let mut ticks = 0;
    while game.scheduler().is_running() && ticks < max_ticks {
        game.tick();
        ticks += 1;
    }

    let state = game.state();
    match state.winner {
        Some(winner) => println!(
            "{} won {}-{} after {} ticks",
            winner.label(),
            state.score.player1,
            state.score.player2,
            ticks
        ),
        None => println!(
            "No winner after {} ticks ({}-{})",
            ticks, state.score.player1, state.score.player2
        ),
    }
}
