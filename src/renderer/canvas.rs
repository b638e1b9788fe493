//! Canvas 2D backend

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{DrawCommand, Frame, Surface};

/// A `<canvas>` element and its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    fn draw(&self, command: &DrawCommand, frame: &Frame) {
        let ctx = &self.ctx;
        match command {
            DrawCommand::Clear => {
                ctx.clear_rect(0.0, 0.0, frame.width as f64, frame.height as f64);
            }
            DrawCommand::DashedLine {
                from,
                to,
                dash,
                color,
            } => {
                ctx.set_stroke_style_str(&color.to_css());
                ctx.begin_path();
                let pattern = js_sys::Array::of2(&(dash[0] as f64).into(), &(dash[1] as f64).into());
                ctx.set_line_dash(&pattern).ok();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.stroke();
                ctx.set_line_dash(&js_sys::Array::new()).ok();
            }
            DrawCommand::FillRect {
                origin,
                size,
                color,
            } => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill_rect(
                    origin.x as f64,
                    origin.y as f64,
                    size.x as f64,
                    size.y as f64,
                );
            }
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, PI * 2.0)
                    .ok();
                ctx.fill();
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn layout_width(&self) -> f32 {
        self.canvas.get_bounding_client_rect().width().floor() as f32
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    fn present(&mut self, frame: &Frame) {
        for command in &frame.commands {
            self.draw(command, frame);
        }
    }
}
