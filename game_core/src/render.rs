//! Render adapter boundary
//!
//! The core never draws. Hosts implement [`Painter`] over their drawing API and
//! [`draw_frame`] issues the calls for one frame from a [`RenderState`].

use glam::Vec2;

use crate::{Ball, Paddle, Params, Score, Side, Surface};

/// Fill and stroke colours (CSS colour strings)
pub struct Palette;

impl Palette {
    pub const FIELD: &'static str = "#2ecc71";
    pub const LINES: &'static str = "#ffffff";
    pub const PLAYER1: &'static str = "#3498db";
    pub const PLAYER2: &'static str = "#e74c3c";
    pub const BALL: &'static str = "#f1c40f";

    pub fn paddle(side: Side) -> &'static str {
        match side {
            Side::Left => Self::PLAYER1,
            Side::Right => Self::PLAYER2,
        }
    }
}

/// Drawing primitives a host must provide
pub trait Painter {
    fn clear(&mut self, size: Vec2);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str);
    fn stroke_rect(&mut self, pos: Vec2, size: Vec2, color: &str, line_width: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: &str, line_width: f32);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: &str, line_width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn set_score_text(&mut self, text: &str);
}

/// Read-only view of everything a frame needs
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub surface: Surface,
    pub paddles: Vec<Paddle>,
    pub ball: Option<Ball>,
    pub score: Score,
}

/// Draw one frame: field, paddles, ball, then the scoreboard text
pub fn draw_frame<P: Painter>(painter: &mut P, state: &RenderState) {
    draw_field(painter, &state.surface);

    for paddle in &state.paddles {
        painter.fill_rect(paddle.pos, paddle.size, Palette::paddle(paddle.side));
    }

    if let Some(ball) = &state.ball {
        painter.fill_circle(ball.pos, ball.radius, Palette::BALL);
    }

    painter.set_score_text(&state.score.to_string());
}

// Markings use fixed sizes; only their anchors follow the surface
fn draw_field<P: Painter>(painter: &mut P, surface: &Surface) {
    let size = Vec2::new(surface.width, surface.height);
    let (w, h) = (surface.width, surface.height);
    let lw = Params::FIELD_LINE_WIDTH;

    painter.clear(size);
    painter.fill_rect(Vec2::ZERO, size, Palette::FIELD);

    painter.stroke_rect(Vec2::ZERO, size, Palette::LINES, lw);
    painter.stroke_line(Vec2::new(w / 2.0, 0.0), Vec2::new(w / 2.0, h), Palette::LINES, lw);
    painter.stroke_circle(surface.center(), Params::CENTER_CIRCLE_RADIUS, Palette::LINES, lw);

    let goal_size = Vec2::new(Params::GOAL_AREA_WIDTH, Params::GOAL_AREA_HEIGHT);
    let goal_top = h / 2.0 - Params::GOAL_AREA_HEIGHT / 2.0;
    painter.stroke_rect(Vec2::new(0.0, goal_top), goal_size, Palette::LINES, lw);
    painter.stroke_rect(
        Vec2::new(w - Params::GOAL_AREA_WIDTH, goal_top),
        goal_size,
        Palette::LINES,
        lw,
    );

    painter.stroke_circle(
        Vec2::new(Params::GOAL_AREA_WIDTH, h / 2.0),
        Params::GOAL_ARC_RADIUS,
        Palette::LINES,
        lw,
    );
    painter.stroke_circle(
        Vec2::new(w - Params::GOAL_AREA_WIDTH, h / 2.0),
        Params::GOAL_ARC_RADIUS,
        Palette::LINES,
        lw,
    );
}


#[cfg(test)]
mod tests {
    use super::recording::{Call, RecordingPainter};
    use super::*;

    fn state() -> RenderState {
        let surface = Surface::new(800.0, 400.0).unwrap();
        RenderState {
            surface,
            paddles: vec![
                Paddle::new(
                    Side::Left,
                    Vec2::new(50.0, 175.0),
                    Vec2::new(10.0, 50.0),
                    5.0,
                ),
                Paddle::new(
                    Side::Right,
                    Vec2::new(740.0, 175.0),
                    Vec2::new(10.0, 50.0),
                    5.0,
                ),
            ],
            ball: Some(Ball::new(
                Vec2::new(400.0, 200.0),
                Vec2::new(3.0, 3.0),
                10.0,
            )),
            score: Score {
                player1: 2,
                player2: 1,
            },
        }
    }

    #[test]
    fn test_frame_draws_field_first_and_score_last() {
        let mut painter = RecordingPainter::default();
        draw_frame(&mut painter, &state());

        assert_eq!(painter.calls[0], Call::Clear(Vec2::new(800.0, 400.0)));
        assert_eq!(
            painter.calls[1],
            Call::FillRect(Vec2::ZERO, Vec2::new(800.0, 400.0), Palette::FIELD.into())
        );
        assert_eq!(
            painter.calls.last(),
            Some(&Call::Score("Player 1: 2 - Player 2: 1".into()))
        );
    }

    #[test]
    fn test_field_markings() {
        let mut painter = RecordingPainter::default();
        draw_frame(&mut painter, &state());
        let calls = &painter.calls;

        assert!(calls.contains(&Call::Line(Vec2::new(400.0, 0.0), Vec2::new(400.0, 400.0))));
        assert!(calls.contains(&Call::StrokeCircle(Vec2::new(400.0, 200.0), 50.0)));
        assert!(calls.contains(&Call::StrokeRect(
            Vec2::new(0.0, 100.0),
            Vec2::new(60.0, 200.0)
        )));
        assert!(calls.contains(&Call::StrokeRect(
            Vec2::new(740.0, 100.0),
            Vec2::new(60.0, 200.0)
        )));
        assert!(calls.contains(&Call::StrokeCircle(Vec2::new(60.0, 200.0), 20.0)));
        assert!(calls.contains(&Call::StrokeCircle(Vec2::new(740.0, 200.0), 20.0)));
    }

    #[test]
    fn test_entities_drawn_with_player_colours() {
        let mut painter = RecordingPainter::default();
        draw_frame(&mut painter, &state());
        let calls = &painter.calls;

        assert!(calls.contains(&Call::FillRect(
            Vec2::new(50.0, 175.0),
            Vec2::new(10.0, 50.0),
            Palette::PLAYER1.into()
        )));
        assert!(calls.contains(&Call::FillRect(
            Vec2::new(740.0, 175.0),
            Vec2::new(10.0, 50.0),
            Palette::PLAYER2.into()
        )));
        assert!(calls.contains(&Call::FillCircle(
            Vec2::new(400.0, 200.0),
            10.0,
            Palette::BALL.into()
        )));
    }

    #[test]
    fn test_frame_without_ball() {
        let mut painter = RecordingPainter::default();
        let mut state = state();
        state.ball = None;
        draw_frame(&mut painter, &state);
        assert!(!painter
            .calls
            .iter()
            .any(|c| matches!(c, Call::FillCircle(..))));
    }
}
