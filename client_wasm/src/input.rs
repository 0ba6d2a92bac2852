//! Keyboard and pointer event translation

use game_core::InputEvent;
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

/// Handle key down event
pub fn key_down(event: &KeyboardEvent) -> InputEvent {
    InputEvent::KeyDown(event.key())
}

/// Handle key up event
pub fn key_up(event: &KeyboardEvent) -> InputEvent {
    InputEvent::KeyUp(event.key())
}

/// Pointer y relative to the canvas top edge
pub fn pointer_move(event: &MouseEvent, canvas: &HtmlCanvasElement) -> InputEvent {
    let rect = canvas.get_bounding_client_rect();
    let y = event.client_y() as f64 - rect.top();
    InputEvent::PointerMove { y: y as f32 }
}
