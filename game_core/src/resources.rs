use std::collections::VecDeque;
use std::fmt;

use glam::Vec2;

use crate::{GameError, Side};

/// Logical size of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
    aspect_ratio: f32, // Fixed at creation, width / height
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Result<Self, GameError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(GameError::InvalidSurface { width, height });
        }
        Ok(Self {
            width,
            height,
            aspect_ratio: width / height,
        })
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Height that keeps the original aspect ratio at the given width
    pub fn height_for(&self, width: f32) -> f32 {
        width / self.aspect_ratio
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player1: u32, // Left paddle
    pub player2: u32, // Right paddle
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.player1 += 1,
            Side::Right => self.player2 += 1,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player 1: {} - Player 2: {}", self.player1, self.player2)
    }
}

/// Events that occurred during this step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub player1_scored: bool,
    pub player2_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Side that scored this step, if any
    pub fn scorer(&self) -> Option<Side> {
        if self.player1_scored {
            Some(Side::Left)
        } else if self.player2_scored {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Raw input delivered by the host
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    /// Pointer y relative to the surface's top edge
    PointerMove { y: f32 },
}

/// Input records waiting for the next step, in arrival order
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }
}
