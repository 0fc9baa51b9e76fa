/// Game tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const USER_PADDLE_X: f32 = 10.0; // from the left edge
    pub const OPPONENT_PADDLE_INSET: f32 = 20.0; // from the right edge

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_BASE: f32 = 7.0;
    pub const BALL_SPEED_STEP: f32 = 0.2; // added on every paddle hit, uncapped
    pub const BALL_SERVE_VX: f32 = 5.0;
    pub const BALL_SERVE_VY: f32 = 5.0;
    pub const MAX_DEFLECTION: f32 = std::f32::consts::FRAC_PI_4;

    // Net
    pub const NET_WIDTH: f32 = 2.0;
    pub const NET_SEGMENT: f32 = 10.0;
    pub const NET_SPACING: f32 = 15.0;

    // Score
    pub const WIN_SCORE: u32 = 20;

    // Loop
    pub const TICK_HZ: u32 = 50;
}
