pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;
pub mod viewport;

pub use components::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use geometry::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use viewport::*;

use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation
pub fn step(
    world: &mut World,
    surface: &Surface,
    bindings: &Bindings,
    score: &mut Score,
    events: &mut Events,
    input: &mut InputQueue,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Ingest inputs (held keys, pointer placement)
    ingest_inputs(world, input, bindings, surface);

    // 2. Move paddles based on held keys
    move_paddles(world, surface);

    // 3. Move ball
    move_ball(world);

    // 4. Bounce off top/bottom
    bounce_off_walls(world, surface, events);

    // 5. Check scoring (ball exited through a side)
    check_scoring(world, surface, score, events);

    // 6. Bounce off paddles
    check_paddle_hits(world, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, pos: glam::Vec2, config: &Config) -> hecs::Entity {
    world.spawn((
        Paddle::new(side, pos, config.paddle_size(), config.paddle_speed),
        PaddleIntent::new(),
    ))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, radius: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius),))
}
