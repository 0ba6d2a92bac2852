//! Proportional rescaling of the playfield when the host surface changes size.

use glam::Vec2;
use hecs::World;

use crate::{Ball, GameError, Paddle, Surface};

/// Resize the surface to `new_width`, keeping its original aspect ratio, and
/// scale every entity by the ratio between the new and the current size.
///
/// Scaling is relative to the size just before the call, so repeated resizes
/// compound. Paddles scale componentwise; the ball's radius follows the
/// horizontal factor only. Speeds and velocities are left alone.
pub fn resize_surface(
    world: &mut World,
    surface: &mut Surface,
    new_width: f32,
) -> Result<Vec2, GameError> {
    let new_height = surface.height_for(new_width);
    if !(new_width.is_finite() && new_width > 0.0 && new_height.is_finite() && new_height > 0.0) {
        return Err(GameError::InvalidSurface {
            width: new_width,
            height: new_height,
        });
    }

    let scale = Vec2::new(new_width / surface.width, new_height / surface.height);

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.pos *= scale;
        paddle.size *= scale;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos *= scale;
        ball.radius *= scale.x;
    }

    surface.width = new_width;
    surface.height = new_height;

    log::debug!(
        "Surface resized to {}x{} (scale {}, {})",
        new_width,
        new_height,
        scale.x,
        scale.y
    );

    Ok(scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config, Side};

    fn setup() -> (World, Surface, Config) {
        let config = Config::new();
        let surface = Surface::new(config.surface_width, config.surface_height).unwrap();
        let mut world = World::new();
        for side in Side::ALL {
            create_paddle(&mut world, side, config.paddle_spawn(side), &config);
        }
        create_ball(
            &mut world,
            Vec2::new(300.0, 120.0),
            config.ball_velocity,
            config.ball_radius,
        );
        (world, surface, config)
    }

    fn snapshot(world: &World) -> (Vec<Paddle>, Ball) {
        let mut paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();
        paddles.sort_by_key(|p| p.side.player());
        let ball = world.query::<&Ball>().iter().next().map(|(_e, b)| *b).unwrap();
        (paddles, ball)
    }

    #[test]
    fn test_resize_scales_geometry() {
        let (mut world, mut surface, _config) = setup();

        let scale = resize_surface(&mut world, &mut surface, 1600.0).unwrap();

        assert_eq!(scale, Vec2::new(2.0, 2.0));
        assert_eq!(surface.width, 1600.0);
        assert_eq!(surface.height, 800.0, "Height follows the aspect ratio");

        let (paddles, ball) = snapshot(&world);
        assert_eq!(paddles[0].pos, Vec2::new(100.0, 350.0));
        assert_eq!(paddles[0].size, Vec2::new(20.0, 100.0));
        assert_eq!(paddles[1].pos, Vec2::new(1480.0, 350.0));
        assert_eq!(paddles[0].speed, 5.0, "Speed is not scaled");
        assert_eq!(ball.pos, Vec2::new(600.0, 240.0));
        assert_eq!(ball.radius, 20.0);
        assert_eq!(ball.vel, Vec2::new(3.0, 3.0), "Velocity is not scaled");
    }

    #[test]
    fn test_resize_compounds() {
        let (mut world, mut surface, _config) = setup();
        resize_surface(&mut world, &mut surface, 400.0).unwrap();
        let scale = resize_surface(&mut world, &mut surface, 200.0).unwrap();

        assert_eq!(scale, Vec2::new(0.5, 0.5), "Relative to the previous size");
        let (paddles, ball) = snapshot(&world);
        assert_eq!(paddles[0].size, Vec2::new(2.5, 12.5));
        assert_eq!(ball.radius, 2.5);
        assert_eq!(surface.aspect_ratio(), 2.0, "Aspect ratio never drifts");
    }

    #[test]
    fn test_resize_rejects_bad_width() {
        let (mut world, mut surface, _config) = setup();
        let before = snapshot(&world);

        for width in [0.0, -10.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                resize_surface(&mut world, &mut surface, width),
                Err(GameError::InvalidSurface { .. })
            ));
        }

        assert_eq!(snapshot(&world), before, "State untouched on error");
        assert_eq!(surface.width, 800.0);
    }

    #[test]
    fn test_resize_roundtrip_restores_geometry() {
        let (mut world, mut surface, _config) = setup();
        let (paddles_before, ball_before) = snapshot(&world);

        resize_surface(&mut world, &mut surface, 800.0 * 1.37).unwrap();
        resize_surface(&mut world, &mut surface, 800.0).unwrap();

        let (paddles, ball) = snapshot(&world);
        for (p, q) in paddles.iter().zip(&paddles_before) {
            assert!((p.pos - q.pos).length() < 1e-3);
            assert!((p.size - q.size).length() < 1e-3);
        }
        assert!((ball.pos - ball_before.pos).length() < 1e-3);
        assert!((ball.radius - ball_before.radius).abs() < 1e-4);
    }
}
