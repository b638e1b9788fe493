//! Draw commands for 2D primitives

use glam::Vec2;

/// Straight RGBA color, components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    /// CSS `rgba()` string for Canvas 2D styles
    pub fn to_css(&self) -> String {
        let [r, g, b, a] = self.0;
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("rgba({}, {}, {}, {})", channel(r), channel(g), channel(b), a)
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const CENTER_LINE: Color = Color([1.0, 1.0, 1.0, 0.3]);
    pub const PADDLE: Color = Color([1.0, 1.0, 1.0, 1.0]);
    /// #FFD700
    pub const BALL: Color = Color([1.0, 215.0 / 255.0, 0.0, 1.0]);
}

/// One primitive, in surface pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Wipe the whole surface
    Clear,
    /// Dashed stroke from `from` to `to`; `dash` is [on, off] lengths
    DashedLine {
        from: Vec2,
        to: Vec2,
        dash: [f32; 2],
        color: Color,
    },
    /// Axis-aligned filled rectangle from its top-left corner
    FillRect { origin: Vec2, size: Vec2, color: Color },
    FillCircle { center: Vec2, radius: f32, color: Color },
}

/// Everything drawn in one pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::with_capacity(5),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}
