use crate::{Ball, Events, Score, Side, Surface};
use hecs::World;

/// Check if ball left the field through a side, score it and re-serve
pub fn check_scoring(world: &mut World, surface: &Surface, score: &mut Score, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.right() > surface.width {
            Side::Left
        } else if ball.left() < 0.0 {
            Side::Right
        } else {
            continue;
        };

        score.increment(scorer);
        match scorer {
            Side::Left => events.player1_scored = true,
            Side::Right => events.player2_scored = true,
        }

        ball.reset(surface.center());
        log::debug!(
            "Player {} scored, {}; serving dx={}",
            scorer.player(),
            score,
            ball.vel.x
        );
    }
}
