//! Browser client for multi-ball Pong
//!
//! Runs the `game_core` simulation once per animation frame and draws it on a
//! 2D canvas. From JS:
//!
//! ```js
//! import init, { start_with_canvas_id } from "./pkg/client_wasm.js";
//! await init();
//! start_with_canvas_id("gameCanvas");
//! ```
//!
//! Note: everything here is only compiled for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod frame_loop;
mod input;
mod renderer;

use game_core::{Config, Game, Surface};
use renderer::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Log a heartbeat every this many frames
const HEARTBEAT_FRAMES: u64 = 600;

/// Game plus the canvas it draws to
pub struct Client {
    game: Game,
    surface: CanvasSurface,
}

impl Client {
    fn new(canvas: HtmlCanvasElement, seed: u64) -> Result<Self, JsValue> {
        let surface = CanvasSurface::new(canvas)?;
        let size = surface.size();

        let config = Config::new().with_arena(size.x, size.y);
        let game = Game::new(config, seed)
            .map_err(|e| JsValue::from_str(&format!("Invalid game config: {}", e)))?;

        Ok(Self { game, surface })
    }

    /// Advance one tick and redraw
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.game.frame(&mut self.surface)?;

        let frame = self.game.frame_count();
        if frame % HEARTBEAT_FRAMES == 0 {
            log::debug!("Frame {}", frame);
        }
        Ok(())
    }
}

/// Start a game on `canvas`. The arena takes the canvas' pixel size.
#[wasm_bindgen]
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed by an earlier start()
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let seed = js_sys::Date::now() as u64;
    let client = Rc::new(RefCell::new(Client::new(canvas, seed)?));

    input::attach(&window, client.clone())?;
    frame_loop::start(client)?;

    log::info!("Pong started (seed {})", seed);
    Ok(())
}

/// Look up a canvas element by id and start a game on it
#[wasm_bindgen]
pub fn start_with_canvas_id(id: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let canvas = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("No element with id '{}'", id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("Element '{}' is not a canvas", id)))?;

    start(canvas)
}
