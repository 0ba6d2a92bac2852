/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 400.0;
    pub const VIEWPORT_FILL: f32 = 0.9; // Share of window width used by the canvas

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 50.0;
    pub const PADDLE_SPEED: f32 = 5.0; // units per frame
    pub const PADDLE_MARGIN: f32 = 50.0; // Gap between side wall and paddle

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_DX: f32 = 3.0; // units per frame
    pub const BALL_DY: f32 = 3.0;

    // Field markings (fixed, never scaled)
    pub const FIELD_LINE_WIDTH: f32 = 5.0;
    pub const CENTER_CIRCLE_RADIUS: f32 = 50.0;
    pub const GOAL_AREA_WIDTH: f32 = 60.0;
    pub const GOAL_AREA_HEIGHT: f32 = 200.0;
    pub const GOAL_ARC_RADIUS: f32 = 20.0;
}
