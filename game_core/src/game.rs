//! The simulation context owned by a frame driver

use glam::Vec2;
use hecs::World;

use crate::render::{draw_frame, Painter, RenderState};
use crate::{
    create_ball, create_paddle, resize_surface, step, Ball, Config, Events, GameError, InputEvent,
    InputQueue, Paddle, Score, Side, Surface,
};

/// Everything one game needs, with no ambient state
pub struct Game {
    pub world: World,
    pub surface: Surface,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub input: InputQueue,
    pub tick: u64,
}

impl Game {
    pub fn new(config: Config) -> Result<Self, GameError> {
        config.validate()?;
        let surface = Surface::new(config.surface_width, config.surface_height)?;

        let mut world = World::new();
        for side in Side::ALL {
            create_paddle(&mut world, side, config.paddle_spawn(side), &config);
        }
        create_ball(
            &mut world,
            config.ball_spawn(),
            config.ball_velocity,
            config.ball_radius,
        );

        Ok(Self {
            world,
            surface,
            config,
            score: Score::new(),
            events: Events::new(),
            input: InputQueue::new(),
            tick: 0,
        })
    }

    /// Queue an input record for the next step
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Advance the simulation by one frame
    pub fn step(&mut self) -> &Events {
        step(
            &mut self.world,
            &self.surface,
            &self.config.bindings,
            &mut self.score,
            &mut self.events,
            &mut self.input,
        );
        self.tick += 1;
        &self.events
    }

    /// Draw the current state, then step. This is the per-frame driver order.
    pub fn frame<P: Painter>(&mut self, painter: &mut P) -> &Events {
        draw_frame(painter, &self.render_state());
        self.step()
    }

    /// Fit the playfield to a new width; see [`resize_surface`]
    pub fn resize(&mut self, new_width: f32) -> Result<Vec2, GameError> {
        resize_surface(&mut self.world, &mut self.surface, new_width)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    /// Overwrite the ball, e.g. to set up a scenario
    pub fn set_ball(&mut self, ball: Ball) {
        for (_entity, b) in self.world.query_mut::<&mut Ball>() {
            *b = ball;
        }
    }

    pub fn render_state(&self) -> RenderState {
        let paddles = Side::ALL
            .iter()
            .filter_map(|side| self.paddle(*side))
            .collect();
        RenderState {
            surface: self.surface,
            paddles,
            ball: self.ball(),
            score: self.score,
        }
    }
}
