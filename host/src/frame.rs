//! Render frames built from match state

use game_core::{side_name, Color, MatchState, Side};
use proto::{BallView, Frame, NetView, PaddleView, StatusText};

pub const START_PROMPT: &str = "Press SPACEBAR to Start";

pub fn color(color: Color) -> proto::Color {
    match color {
        Color::White => proto::Color::White,
        Color::Yellow => proto::Color::Yellow,
        Color::Red => proto::Color::Red,
        Color::Black => proto::Color::Black,
    }
}

/// Generate a frame from the current match state
pub fn build_frame(state: &MatchState) -> Frame {
    let config = state.config();
    let (width, height) = (config.field_width, config.field_height);

    let ball = state.ball();
    let net = state.net();

    let paddle_view = |side: Side| {
        let paddle = state.paddle(side);
        let score_x = match side {
            Side::User => width / 4.0,
            Side::Opponent => 3.0 * width / 4.0,
        };
        PaddleView {
            x: paddle.pos.x,
            y: paddle.pos.y,
            width: paddle.size.x,
            height: paddle.size.y,
            color: color(paddle.color),
            score: paddle.score,
            score_x,
            score_y: height / 5.0,
        }
    };

    Frame {
        tick: state.tick(),
        width,
        height,
        background: proto::Color::Black,
        ball: BallView {
            x: ball.pos.x,
            y: ball.pos.y,
            radius: ball.radius,
            color: color(ball.color),
        },
        paddles: [paddle_view(Side::User), paddle_view(Side::Opponent)],
        net: NetView {
            x: net.pos.x,
            y: net.pos.y,
            width: net.segment.x,
            height: net.segment.y,
            spacing: net.spacing,
            dashes: net.segments(height).count() as u32,
            color: color(net.color),
        },
        status: status_text(state),
    }
}

/// Banner shown over the field: the winner, or the start prompt while stopped
pub fn status_text(state: &MatchState) -> Option<StatusText> {
    let config = state.config();
    let y = config.field_height / 2.0;

    if let Some(winner) = state.winner() {
        return Some(StatusText {
            text: format!("{} Wins!", side_name(winner)),
            x: config.field_width / 2.0 - 150.0,
            y,
            color: color(state.paddle(winner).color),
        });
    }

    if !state.is_running() {
        return Some(StatusText {
            text: START_PROMPT.to_string(),
            x: config.field_width / 2.0 - 300.0,
            y,
            color: proto::Color::White,
        });
    }

    None
}
