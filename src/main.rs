//! River Crossing entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use river_crossing::Game;
    use river_crossing::view::SceneCache;
    use river_crossing::view::canvas::CanvasPainter;

    /// Game instance plus the view's cache and painter
    struct App {
        game: Game,
        scene: SceneCache,
        painter: CanvasPainter,
        // Track phase for logging transitions
        was_over: bool,
    }

    impl App {
        /// Queue due ticks and fold every pending event into the view
        fn update(&mut self, time: f64) {
            self.game.frame(time);
            let scene = &mut self.scene;
            self.game.process(|config, state| {
                scene.apply(config, state);
            });

            let over = self.game.state().is_over();
            if over && !self.was_over {
                match self.game.snapshot_json() {
                    Ok(json) => log::debug!("Final state: {}", json),
                    Err(e) => log::warn!("Snapshot failed: {}", e),
                }
            }
            self.was_over = over;
        }

        fn render(&self) {
            self.painter.paint(self.game.config(), &self.scene);
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let hud = self.scene.hud();

            if let Some(el) = document.get_element_by_id("currScore") {
                el.set_text_content(Some(&hud.current_score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("highScore") {
                el.set_text_content(Some(&hud.high_score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("level") {
                el.set_text_content(Some(&hud.level.to_string()));
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("River Crossing starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let game = Game::new();
        canvas.set_width(game.config().canvas_width as u32);
        canvas.set_height(game.config().canvas_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let app = Rc::new(RefCell::new(App {
            game,
            scene: SceneCache::new(),
            painter: CanvasPainter::new(ctx),
            was_over: false,
        }));

        // Draw the initial board before the first tick
        {
            let mut a = app.borrow_mut();
            let App { game, scene, .. } = &mut *a;
            scene.apply(game.config(), game.state());
        }

        setup_input_handlers(app.clone())?;
        request_animation_frame(app);

        log::info!("River Crossing running!");
        Ok(())
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Key press: only the first press of each press-and-release cycle counts
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                if a.game.key_down(&event.key(), event.repeat()) {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key release
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Window blur: releases will never arrive
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().game.blur();
                log::info!("Input released (window blur)");
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window for animation frame");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.update(time);
            a.render();
            a.update_hud();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("River Crossing (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    println!("\nRunning headless demo...");
    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Hop upward on a fixed rhythm until the run ends, then report
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use river_crossing::Game;
    use river_crossing::consts::TICK_INTERVAL_MS;
    use river_crossing::view::SceneCache;

    const HOP_EVERY_MS: f64 = 400.0;
    const MAX_MS: f64 = 120_000.0;

    let mut game = Game::new();
    let mut scene = SceneCache::new();
    let mut ops = 0;
    let mut now = 0.0;
    let mut next_hop = HOP_EVERY_MS;

    while now < MAX_MS && !game.state().is_over() {
        if now >= next_hop {
            game.key_down("ArrowUp", false);
            game.key_up("ArrowUp");
            next_hop += HOP_EVERY_MS;
        }
        game.frame(now);
        game.process(|config, state| {
            ops += scene.apply(config, state).len();
        });
        now += TICK_INTERVAL_MS;
    }

    let state = game.state();
    println!(
        "Run ended after {} ticks: score {}, targets {}, level {}, game over: {}",
        state.time, state.current_score, state.targets_reached, state.level, state.game_over
    );
    println!("View applied {} changes", ops);
}
