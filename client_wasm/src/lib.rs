//! Browser client for Pong
//!
//! Draws on a 2D canvas, feeds DOM input into the core's input queue and
//! drives one render + step per animation frame.

#![cfg(target_arch = "wasm32")]

mod canvas;
mod input;

use std::cell::RefCell;
use std::rc::Rc;

use canvas::CanvasPainter;
use game_core::{Config, Game, Params};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

const CANVAS_ID: &str = "gameCanvas";
const SCOREBOARD_SELECTOR: &str = ".scoreboard";

/// Main client state
struct Client {
    game: Game,
    painter: CanvasPainter,
}

impl Client {
    /// Fit the playfield to the window width
    fn fit_to_window(&mut self, window: &Window) {
        let inner_width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(Params::SURFACE_WIDTH as f64 / Params::VIEWPORT_FILL as f64);
        let new_width = inner_width as f32 * Params::VIEWPORT_FILL;

        match self.game.resize(new_width) {
            Ok(_) => {
                let surface = self.game.surface;
                self.painter.set_size(surface.width, surface.height);
            }
            Err(e) => log::warn!("Ignoring resize: {e}"),
        }
    }

    /// Render the current state, then advance one step
    fn frame(&mut self) {
        let scorer = self.game.frame(&mut self.painter).scorer();
        if let Some(side) = scorer {
            log::info!("Player {} scored, {}", side.player(), self.game.score);
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&format!("Failed to init logger: {e}")))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("Canvas not found"))?
        .dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
        .dyn_into()?;
    let scoreboard = document
        .query_selector(SCOREBOARD_SELECTOR)?
        .ok_or_else(|| JsValue::from_str("Scoreboard not found"))?;

    let game = Game::new(Config::new()).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let painter = CanvasPainter::new(canvas, ctx, scoreboard);
    painter.set_size(game.surface.width, game.surface.height);

    let client = Rc::new(RefCell::new(Client { game, painter }));
    client.borrow_mut().fit_to_window(&window);

    setup_input_handlers(&window, client.clone())?;
    request_animation_frame(client);

    log::info!("Pong running");
    Ok(())
}

fn setup_input_handlers(window: &Window, client: Rc<RefCell<Client>>) -> Result<(), JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    // Key down
    {
        let client = client.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            client.borrow_mut().game.push_input(input::key_down(&event));
        });
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Key up
    {
        let client = client.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            client.borrow_mut().game.push_input(input::key_up(&event));
        });
        document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Pointer move over the canvas
    {
        let client = client.clone();
        let canvas = client.borrow().painter.canvas().clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let mut c = client.borrow_mut();
            let event = input::pointer_move(&event, c.painter.canvas());
            c.game.push_input(event);
        });
        canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Window resize
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Some(window) = web_sys::window() {
                client.borrow_mut().fit_to_window(&window);
            }
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

fn request_animation_frame(client: Rc<RefCell<Client>>) {
    let Some(window) = web_sys::window() else {
        log::error!("No window, stopping frame loop");
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        game_loop(client);
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {e:?}");
        return;
    }
    closure.forget();
}

fn game_loop(client: Rc<RefCell<Client>>) {
    client.borrow_mut().frame();
    request_animation_frame(client);
}
