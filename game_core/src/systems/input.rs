use hecs::World;

use crate::{Bindings, InputEvent, InputQueue, Paddle, PaddleIntent, Surface};

/// Drain queued input and apply it to paddle intents.
///
/// Key events set or clear held flags on every paddle bound to the key.
/// Pointer moves place pointer-bound paddles immediately.
pub fn ingest_inputs(
    world: &mut World,
    input: &mut InputQueue,
    bindings: &Bindings,
    surface: &Surface,
) {
    for event in input.drain() {
        for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &mut PaddleIntent)>() {
            let controls = bindings.controls(paddle.side);
            match &event {
                InputEvent::KeyDown(key) => {
                    if let Some(keys) = &controls.keys {
                        if *key == keys.up {
                            intent.up = true;
                        } else if *key == keys.down {
                            intent.down = true;
                        }
                    }
                }
                InputEvent::KeyUp(key) => {
                    if let Some(keys) = &controls.keys {
                        if *key == keys.up {
                            intent.up = false;
                        } else if *key == keys.down {
                            intent.down = false;
                        }
                    }
                }
                InputEvent::PointerMove { y } => {
                    if controls.pointer {
                        paddle.follow_pointer(*y, surface.height);
                    }
                }
            }
        }
    }
}
