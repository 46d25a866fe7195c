//! Cazador entry point
//!
//! Wires the canvas, the DOM HUD and the three recurring activities (two
//! 1-second timers plus the requestAnimationFrame render chain) around one
//! shared game state.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use glam::Vec2;

    use cazador::consts::*;
    use cazador::highscores::HighScore;
    use cazador::render;
    use cazador::sim::{GameState, countdown_tick, resolve_click, sim_tick};

    /// Shared game instance. Every scheduled callback and event handler
    /// works through one `Rc<RefCell<..>>` of this.
    struct Game {
        state: GameState,
        high_score: HighScore,
        ctx: CanvasRenderingContext2d,
        /// Interval handles for the two 1 s clocks; None while stopped
        sim_timer: Option<i32>,
        countdown_timer: Option<i32>,
        /// True while a rAF chain is in flight
        render_scheduled: bool,
    }

    impl Game {
        fn new(ctx: CanvasRenderingContext2d) -> Self {
            Self {
                state: GameState::new(0),
                high_score: HighScore::load(),
                ctx,
                sim_timer: None,
                countdown_timer: None,
                render_scheduled: false,
            }
        }
    }

    fn now_ms() -> f64 {
        js_sys::Date::now()
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Cazador starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fixed logical size; clicks arrive in this coordinate space
        canvas.set_width(WIDTH as u32);
        canvas.set_height(HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let game = Rc::new(RefCell::new(Game::new(ctx)));

        setup_click_handler(&canvas, game.clone());
        setup_buttons(game.clone());
        setup_auto_pause(game.clone());

        update_hud(&game.borrow());

        log::info!("Cazador ready - press start");
    }

    /// Start command: full reset, fresh seed, all three activities running.
    fn start_session(game: &Rc<RefCell<Game>>) {
        let seed = now_ms() as u64;
        {
            let mut g = game.borrow_mut();
            stop_clocks(&mut g);
            g.state.start(seed, now_ms());
            log::info!("Session started with seed {}", seed);
        }

        schedule_clocks(game.clone());
        ensure_render_loop(game.clone());
        update_hud(&game.borrow());
    }

    /// Pause command: freeze entity state, stop the clocks. There is no
    /// resume; the next start command resets the session.
    fn pause_session(game: &Rc<RefCell<Game>>) {
        let mut g = game.borrow_mut();
        if g.state.is_active() {
            g.state.pause();
            stop_clocks(&mut g);
            log::info!("Session paused");
        }
        update_hud(&g);
    }

    /// Spin up the simulation clock and the countdown timer, each on its own
    /// 1 s interval. No ordering is guaranteed between the two.
    fn schedule_clocks(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        let sim_handle = {
            let game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                let mut g = game.borrow_mut();
                sim_tick(&mut g.state, now_ms());
                if !g.state.is_active() {
                    stop_clocks(&mut g);
                }
                update_hud(&g);
            });
            let handle = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    TICK_PERIOD_MS,
                )
                .expect("set_interval failed");
            closure.forget();
            handle
        };

        let countdown_handle = {
            let game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                let mut g = game.borrow_mut();
                countdown_tick(&mut g.state);
                if !g.state.is_active() {
                    stop_clocks(&mut g);
                }
                update_hud(&g);
            });
            let handle = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    TICK_PERIOD_MS,
                )
                .expect("set_interval failed");
            closure.forget();
            handle
        };

        let mut g = game.borrow_mut();
        g.sim_timer = Some(sim_handle);
        g.countdown_timer = Some(countdown_handle);
    }

    /// Clear both interval handles. Callbacks already queued this turn still
    /// fire once, but they guard on the phase and mutate nothing.
    fn stop_clocks(g: &mut Game) {
        let window = web_sys::window().unwrap();
        if let Some(handle) = g.sim_timer.take() {
            window.clear_interval_with_handle(handle);
        }
        if let Some(handle) = g.countdown_timer.take() {
            window.clear_interval_with_handle(handle);
        }
    }

    /// Kick off the rAF chain unless one is already in flight.
    fn ensure_render_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.render_scheduled {
                return;
            }
            g.render_scheduled = true;
        }
        request_render_frame(game);
    }

    fn request_render_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            render_frame(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn render_frame(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if !g.state.is_active() {
                // Chain ends here; the next start command restarts it
                g.render_scheduled = false;
                return;
            }
            render::draw_frame(&g.ctx, &g.state);
        }
        request_render_frame(game);
    }

    fn setup_click_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let mut g = game.borrow_mut();

            // Canvas-local pixel coordinates, origin top-left
            let pointer = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
            resolve_click(&mut g.state, pointer);

            let score = g.state.score;
            if g.high_score.submit(score) {
                log::info!("New high score: {}", score);
            }

            if !g.state.is_active() {
                stop_clocks(&mut g);
            }
            update_hud(&g);
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                start_session(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("pause-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                pause_session(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Tab hidden while a session is running counts as a pause command.
    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                pause_session(&game);
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Push the current snapshot into the DOM readouts.
    fn update_hud(g: &Game) {
        use cazador::sim::GamePhase;

        let document = web_sys::window().unwrap().document().unwrap();
        let hud = g.state.hud(g.high_score.value());

        let set = |id: &str, text: String| {
            if let Some(el) = document.get_element_by_id(id) {
                el.set_text_content(Some(&text));
            }
        };
        set("hud-score", hud.score.to_string());
        set("hud-lives", hud.lives.to_string());
        set("hud-time", format!("{}s", hud.time_left));
        set("hud-record", hud.high_score.to_string());
        set("hud-level", hud.level.to_string());

        if let Some(el) = document.get_element_by_id("game-over") {
            if g.state.phase == GamePhase::GameOver {
                let _ = el.set_attribute("class", "game-over");
                if let Some(score_el) = document.get_element_by_id("final-score") {
                    score_el.set_text_content(Some(&hud.score.to_string()));
                }
            } else {
                let _ = el.set_attribute("class", "game-over hidden");
            }
        }
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
    log::info!("Cazador (native) starting...");
    log::info!("Run with `trunk serve` for the browser version; running a headless demo");

    run_demo_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted ten-second session against a fixed seed: click whatever monster
/// is first in the collection, then let both clocks fire once.
#[cfg(not(target_arch = "wasm32"))]
fn run_demo_session() {
    use cazador::sim::{GameState, countdown_tick, resolve_click, sim_tick};

    const DEMO_SEED: u64 = 0xCA2A;

    let mut state = GameState::new(DEMO_SEED);
    let mut clock_ms = 0.0;
    state.start(DEMO_SEED, clock_ms);

    for _ in 0..10 {
        clock_ms += 1000.0;
        if let Some(target) = state.monsters.first().map(|m| m.pos) {
            resolve_click(&mut state, target);
        }
        sim_tick(&mut state, clock_ms);
        countdown_tick(&mut state);
    }

    match serde_json::to_string(&state.hud(0)) {
        Ok(json) => log::info!("Demo session after 10s: {}", json),
        Err(err) => log::warn!("Could not encode demo summary: {}", err),
    }
}
