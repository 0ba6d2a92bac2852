//! Canvas 2D implementation of the core's drawing primitives

use std::f64::consts::TAU;

use game_core::Painter;
use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

pub struct CanvasPainter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    scoreboard: Element,
}

impl CanvasPainter {
    pub fn new(
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        scoreboard: Element,
    ) -> Self {
        // Field markings are solid lines
        if let Err(e) = ctx.set_line_dash(&JsValue::from(js_sys::Array::new())) {
            log::warn!("Failed to reset line dash: {e:?}");
        }
        Self {
            canvas,
            ctx,
            scoreboard,
        }
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Match the backing store to the logical surface size
    pub fn set_size(&self, width: f32, height: f32) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    fn circle_path(&self, center: Vec2, radius: f32) -> bool {
        self.ctx.begin_path();
        match self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            Ok(()) => true,
            Err(e) => {
                log::warn!("arc at {center} r={radius} failed: {e:?}");
                false
            }
        }
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn stroke_rect(&mut self, pos: Vec2, size: Vec2, color: &str, line_width: f32) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        self.ctx
            .stroke_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: &str, line_width: f32) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: &str, line_width: f32) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        if self.circle_path(center, radius) {
            self.ctx.stroke();
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        if self.circle_path(center, radius) {
            self.ctx.set_fill_style_str(color);
            self.ctx.fill();
            self.ctx.close_path();
        }
    }

    fn set_score_text(&mut self, text: &str) {
        self.scoreboard.set_text_content(Some(text));
    }
}
