//! Rendering
//!
//! [`render`] turns match state into a [`Frame`] of draw commands and never
//! touches the state. A [`Surface`] presents frames: a Canvas 2D element in
//! the browser, or [`HeadlessSurface`] for native runs and tests.

pub mod frame;
pub mod headless;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use frame::{Color, DrawCommand, Frame, colors};
pub use headless::HeadlessSurface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::sim::MatchState;

/// Center line dash pattern [on, off]
const CENTER_DASH: [f32; 2] = [10.0, 10.0];

/// Something frames can be drawn on
pub trait Surface {
    /// Current on-screen width in pixels, as laid out by the page
    fn layout_width(&self) -> f32;
    /// Set the drawing buffer size
    fn resize(&mut self, width: f32, height: f32);
    fn present(&mut self, frame: &Frame);
}

/// Build the frame for the current state: center line, paddles, ball
pub fn render(state: &MatchState) -> Frame {
    let field = &state.field;
    let mut frame = Frame::new(field.width, field.height);

    frame.push(DrawCommand::Clear);
    frame.push(DrawCommand::DashedLine {
        from: Vec2::new(field.width / 2.0, 0.0),
        to: Vec2::new(field.width / 2.0, field.height),
        dash: CENTER_DASH,
        color: colors::CENTER_LINE,
    });

    for paddle in [&state.left, &state.right] {
        frame.push(DrawCommand::FillRect {
            origin: Vec2::new(paddle.x(field), paddle.y),
            size: Vec2::new(paddle.width, paddle.height),
            color: colors::PADDLE,
        });
    }

    frame.push(DrawCommand::FillCircle {
        center: state.ball.pos,
        radius: state.ball.radius,
        color: colors::BALL,
    });

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{MatchPhase, PlayingField};

    #[test]
    fn test_idle_layout() {
        let state = MatchState::new(PlayingField::new(800.0), 1);
        assert_eq!(state.phase, MatchPhase::NotStarted);
        let frame = render(&state);

        assert_eq!((frame.width, frame.height), (800.0, 400.0));
        assert_eq!(frame.commands.len(), 5);
        assert_eq!(frame.commands[0], DrawCommand::Clear);
        assert_eq!(
            frame.commands[1],
            DrawCommand::DashedLine {
                from: Vec2::new(400.0, 0.0),
                to: Vec2::new(400.0, 400.0),
                dash: [10.0, 10.0],
                color: colors::CENTER_LINE,
            }
        );
        assert_eq!(
            frame.commands[3],
            DrawCommand::FillRect {
                origin: Vec2::new(790.0, 160.0),
                size: Vec2::new(10.0, 80.0),
                color: colors::PADDLE,
            }
        );
        assert_eq!(
            frame.commands[4],
            DrawCommand::FillCircle {
                center: Vec2::new(400.0, 200.0),
                radius: 8.0,
                color: colors::BALL,
            }
        );
    }

    #[test]
    fn test_render_does_not_mutate() {
        let state = MatchState::new(PlayingField::new(640.0), 2);
        let before = state.clone();
        let _ = render(&state);
        let _ = render(&state);
        assert_eq!(state.ball, before.ball);
        assert_eq!(state.left, before.left);
        assert_eq!(state.score, before.score);
    }
}
