//! Surface without a display, for native runs and tests

use super::{Frame, Surface};

/// Keeps the last presented frame and counts presents
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    /// Width the "page" lays the surface out at; change it to simulate a resize
    pub layout_width: f32,
    pub width: f32,
    pub height: f32,
    pub presented: u64,
    pub last_frame: Option<Frame>,
}

impl HeadlessSurface {
    pub fn new(layout_width: f32) -> Self {
        Self {
            layout_width,
            width: 0.0,
            height: 0.0,
            presented: 0,
            last_frame: None,
        }
    }
}

impl Surface for HeadlessSurface {
    fn layout_width(&self) -> f32 {
        self.layout_width
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn present(&mut self, frame: &Frame) {
        self.presented += 1;
        self.last_frame = Some(frame.clone());
    }
}
