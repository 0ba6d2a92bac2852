use glam::Vec2;

use crate::{GameError, Params, Side};

/// Up/down key identifiers, compared against `KeyboardEvent.key`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub up: String,
    pub down: String,
}

impl KeyPair {
    pub fn new(up: impl Into<String>, down: impl Into<String>) -> Self {
        Self {
            up: up.into(),
            down: down.into(),
        }
    }
}

/// Control schemes bound to one paddle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controls {
    pub keys: Option<KeyPair>,
    pub pointer: bool,
}

impl Controls {
    pub fn keyboard(up: impl Into<String>, down: impl Into<String>) -> Self {
        Self {
            keys: Some(KeyPair::new(up, down)),
            pointer: false,
        }
    }

    pub fn pointer() -> Self {
        Self {
            keys: None,
            pointer: true,
        }
    }

    pub fn with_pointer(mut self) -> Self {
        self.pointer = true;
        self
    }
}

/// Which inputs drive which paddle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    pub left: Controls,
    pub right: Controls,
}

impl Bindings {
    pub fn controls(&self, side: Side) -> &Controls {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            // Player 1 takes both W/S and the mouse
            left: Controls::keyboard("w", "s").with_pointer(),
            right: Controls::keyboard("ArrowUp", "ArrowDown"),
        }
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    pub ball_velocity: Vec2,
    pub bindings: Bindings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: Params::SURFACE_WIDTH,
            surface_height: Params::SURFACE_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            ball_velocity: Vec2::new(Params::BALL_DX, Params::BALL_DY),
            bindings: Bindings::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject geometry the simulation cannot run on
    pub fn validate(&self) -> Result<(), GameError> {
        let (w, h) = (self.surface_width, self.surface_height);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(GameError::InvalidSurface {
                width: w,
                height: h,
            });
        }
        if !(self.paddle_width > 0.0 && self.paddle_height > 0.0) {
            return Err(GameError::InvalidConfig("paddle size must be positive"));
        }
        if self.paddle_height > h {
            return Err(GameError::InvalidConfig("paddle taller than surface"));
        }
        if 2.0 * (self.paddle_margin + self.paddle_width) > w {
            return Err(GameError::InvalidConfig("paddles do not fit the surface"));
        }
        if !(self.paddle_speed.is_finite() && self.paddle_speed >= 0.0) {
            return Err(GameError::InvalidConfig("paddle speed must be non-negative"));
        }
        if !(self.ball_radius > 0.0 && self.ball_radius.is_finite()) {
            return Err(GameError::InvalidConfig("ball radius must be positive"));
        }
        if !self.ball_velocity.is_finite() {
            return Err(GameError::InvalidConfig("ball velocity must be finite"));
        }
        Ok(())
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.surface_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Top-left corner of a freshly spawned, vertically centered paddle
    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        Vec2::new(
            self.paddle_x(side),
            self.surface_height / 2.0 - self.paddle_height / 2.0,
        )
    }

    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }

    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.surface_width / 2.0, self.surface_height / 2.0)
    }
}
