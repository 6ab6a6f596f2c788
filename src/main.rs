//! Ski Run entry point
//!
//! Handles platform-specific initialization and runs the game loop.
//! The browser build draws to a canvas; the native build runs a headless
//! scripted descent and prints a JSON summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, KeyboardEvent, MouseEvent,
    };

    use ski_run::Settings;
    use ski_run::consts::*;
    use ski_run::renderer::{RenderFrame, Renderer, SpriteRegion};
    use ski_run::sim::{InputEvent, SimulationState, Viewport, handle_input, tick};

    const SPRITE_SHEET_SRC: &str = "images/spritemap.png";

    /// Blits sprite sheet regions with the canvas 2D API
    struct CanvasRenderer {
        ctx: CanvasRenderingContext2d,
        sheet: HtmlImageElement,
    }

    impl Renderer for CanvasRenderer {
        fn draw_sprite(&mut self, region: SpriteRegion, dest: Vec2, size: Vec2) {
            let _ = self
                .ctx
                .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                    &self.sheet,
                    region.x as f64,
                    region.y as f64,
                    size.x as f64,
                    size.y as f64,
                    dest.x as f64,
                    dest.y as f64,
                    size.x as f64,
                    size.y as f64,
                );
        }
    }

    /// Game instance holding all state
    struct Game {
        state: SimulationState,
        frame: RenderFrame,
        renderer: CanvasRenderer,
        accumulator: f32,
        last_time: f64,
    }

    impl Game {
        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, SIM_DT, &mut self.frame);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
        }

        /// Draw the latest frame
        fn render(&mut self) {
            let viewport = self.state.viewport;
            self.renderer
                .ctx
                .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
            self.frame.draw(&mut self.renderer);
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.query_selector("#hud-speed .hud-value").ok().flatten() {
                el.set_text_content(Some(&format!("{} m/s", self.frame.stats.speed)));
            }
            if let Some(el) = document
                .query_selector("#hud-distance .hud-value")
                .ok()
                .flatten()
            {
                el.set_text_content(Some(&format!("{} m", self.frame.stats.distance)));
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Ski Run starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        // Sprite sheet must be decoded before the first blit
        let sheet = HtmlImageElement::new()?;
        sheet.set_src(SPRITE_SHEET_SRC);
        wasm_bindgen_futures::JsFuture::from(sheet.decode()).await?;

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let viewport = Viewport::new(canvas.width() as f32, canvas.height() as f32)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let settings = Settings::load();
        // Stored copy becomes the full effective settings (defaults filled in)
        settings.save();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let state = SimulationState::new(&settings, viewport, seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let game = Rc::new(RefCell::new(Game {
            frame: RenderFrame::with_capacity(state.entities.len() + 1),
            state,
            renderer: CanvasRenderer { ctx, sheet },
            accumulator: 0.0,
            last_time: 0.0,
        }));

        setup_input_handlers(&window, &canvas, game.clone());
        setup_restart_button(&document, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Ski Run running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) {
        // Mouse move steers
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let input = InputEvent::PointerMove {
                    x: event.offset_x() as f32,
                    y: event.offset_y() as f32,
                };
                handle_input(&mut g.state, input);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.repeat() {
                    return;
                }
                if let Some(input) = InputEvent::from_key(&event.key()) {
                    handle_input(&mut game.borrow_mut().state, input);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.state.restart();
                g.accumulator = 0.0;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        web_sys::console::error_1(&e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use serde::Serialize;

    use ski_run::consts::*;
    use ski_run::renderer::{FrameStats, RenderFrame};
    use ski_run::sim::{InputEvent, SimPhase, SimulationState, Viewport, handle_input, tick};
    use ski_run::{Settings, SettingsError};

    /// 30 seconds of skiing
    const DEFAULT_TICKS: u64 = 900;
    const VIEWPORT_WIDTH: f32 = 800.0;
    const VIEWPORT_HEIGHT: f32 = 600.0;

    /// What a headless run prints
    #[derive(Debug, Serialize)]
    struct RunSummary {
        seed: u64,
        ticks: u64,
        crashes: u32,
        stats: FrameStats,
        sprites_last_frame: usize,
    }

    /// Tick count argument; falls back to `DEFAULT_TICKS` when absent or bad
    fn parse_ticks(arg: Option<&str>) -> u64 {
        let Some(arg) = arg else {
            return DEFAULT_TICKS;
        };
        match arg.parse() {
            Ok(ticks) => ticks,
            Err(e) => {
                log::warn!(
                    "Bad tick count {:?} ({}), running {} ticks",
                    arg,
                    e,
                    DEFAULT_TICKS
                );
                DEFAULT_TICKS
            }
        }
    }

    /// `ski-run [settings.json] [ticks]`
    pub fn run() -> Result<(), SettingsError> {
        let mut args = std::env::args().skip(1);
        let settings = match args.next() {
            Some(path) => Settings::load_from_path(path)?,
            None => Settings::default(),
        };
        let ticks = parse_ticks(args.next().as_deref());

        let seed = settings.seed.unwrap_or_else(rand::random);
        let viewport = Viewport::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)?;
        let mut state = SimulationState::new(&settings, viewport, seed)?;
        let mut frame = RenderFrame::with_capacity(state.entities.len() + 1);
        let mut crashes = 0;

        for t in 0..ticks {
            // Sweep the pointer side to side below the skier
            let hit = state.player.hit_point();
            let sweep = (t as f32 * 0.05).sin() * 120.0;
            handle_input(
                &mut state,
                InputEvent::PointerMove {
                    x: hit.x + sweep,
                    y: hit.y + 150.0,
                },
            );
            if t == ticks / 3 || t == 2 * ticks / 3 {
                handle_input(&mut state, InputEvent::ToggleSpeedBoost);
            }

            let before = state.phase;
            tick(&mut state, SIM_DT, &mut frame);
            if before == SimPhase::Running && state.phase == SimPhase::CrashPaused {
                crashes += 1;
            }
        }

        let summary = RunSummary {
            seed,
            ticks,
            crashes,
            stats: frame.stats,
            sprites_last_frame: frame.sprites.len(),
        };
        log::info!(
            "Finished {} ticks: {} m, {} crashes",
            ticks,
            summary.stats.distance,
            crashes
        );
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Could not encode summary: {}", e),
        }
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Ski Run (native, headless) starting...");

    if let Err(e) = headless::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
