use crate::{Ball, Paddle, PaddleIntent, Surface};
use hecs::World;

/// Apply held-key movement to paddles.
///
/// Up is checked first, so holding both keys moves the paddle up unless it is
/// already at the top, in which case the down key applies.
pub fn move_paddles(world: &mut World, surface: &Surface) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        let max_y = paddle.max_y(surface.height);
        if intent.up && paddle.pos.y > 0.0 {
            paddle.pos.y -= paddle.speed;
        } else if intent.down && paddle.pos.y < max_y {
            paddle.pos.y += paddle.speed;
        }

        // Speed need not divide the travel evenly
        paddle.clamp_to(surface.height);
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
