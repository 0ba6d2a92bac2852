use crate::{circle_intersects_rect, Aabb, Ball, Events, Paddle, Surface};
use hecs::World;

/// Flip vertical velocity when the ball pokes out of the top or bottom.
///
/// The ball is not pushed back inside, so a fast ball can stay outside for
/// several frames and flip again on each of them.
pub fn bounce_off_walls(world: &mut World, surface: &Surface, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.bottom() > surface.height || ball.top() < 0.0 {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Flip horizontal velocity when the ball overlaps a paddle.
///
/// There is no separation or re-entry guard: a ball still inside a paddle on
/// the next frame flips again.
pub fn check_paddle_hits(world: &mut World, events: &mut Events) {
    // Collect paddle rects without holding borrows
    let paddles: Vec<Aabb> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| p.aabb())
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if paddles
            .iter()
            .any(|rect| circle_intersects_rect(ball.pos, ball.radius, rect))
        {
            ball.vel.x = -ball.vel.x;
            events.ball_hit_paddle = true;
        }
    }
}
