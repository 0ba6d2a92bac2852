use glam::Vec2;

use crate::geometry::Aabb;

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // Player 1
    Right, // Player 2
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// Player number shown on the scoreboard
    pub fn player(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

/// Paddle component - a player's paddle, stored by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,  // x fixed after spawn, y moves
    pub size: Vec2, // width, height
    pub speed: f32, // units per frame
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            side,
            pos,
            size,
            speed,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_top_left(self.pos, self.size)
    }

    /// Largest y that keeps the paddle on a surface of the given height
    pub fn max_y(&self, surface_height: f32) -> f32 {
        (surface_height - self.size.y).max(0.0)
    }

    pub fn clamp_to(&mut self, surface_height: f32) {
        self.pos.y = self.pos.y.clamp(0.0, self.max_y(surface_height));
    }

    /// Center the paddle on a pointer y, then keep it on the surface
    pub fn follow_pointer(&mut self, pointer_y: f32, surface_height: f32) {
        self.pos.y = pointer_y - self.size.y / 2.0;
        self.clamp_to(surface_height);
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // center
    pub vel: Vec2, // units per frame
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Put the ball back on the center spot and serve it the other way.
    /// Vertical velocity is kept.
    pub fn reset(&mut self, center: Vec2) {
        self.pos = center;
        self.vel.x = -self.vel.x;
    }
}

/// Held-key state for a paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_edges() {
        let ball = Ball::new(Vec2::new(100.0, 50.0), Vec2::ZERO, 10.0);
        assert_eq!(ball.left(), 90.0);
        assert_eq!(ball.right(), 110.0);
        assert_eq!(ball.top(), 40.0);
        assert_eq!(ball.bottom(), 60.0);
    }

    #[test]
    fn test_ball_reset_flips_dx_only() {
        let mut ball = Ball::new(Vec2::new(805.0, 12.0), Vec2::new(3.0, -3.0), 10.0);
        ball.reset(Vec2::new(400.0, 200.0));
        assert_eq!(ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(ball.vel, Vec2::new(-3.0, -3.0));
    }

    #[test]
    fn test_paddle_follow_pointer_centers_and_clamps() {
        let mut paddle = Paddle::new(
            Side::Left,
            Vec2::new(50.0, 175.0),
            Vec2::new(10.0, 50.0),
            5.0,
        );
        paddle.follow_pointer(100.0, 400.0);
        assert_eq!(paddle.pos.y, 75.0);

        paddle.follow_pointer(10.0, 400.0);
        assert_eq!(paddle.pos.y, 0.0, "Clamped at the top");

        paddle.follow_pointer(395.0, 400.0);
        assert_eq!(paddle.pos.y, 350.0, "Clamped at the bottom");
    }

    #[test]
    fn test_side_player_numbers() {
        assert_eq!(Side::Left.player(), 1);
        assert_eq!(Side::Right.player(), 2);
    }
}
