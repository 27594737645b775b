use std::f64::consts::TAU;

use glam::Vec2;
use neural_field::{Color, Surface, SurfaceSize};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

/// [`Surface`] over an HTML canvas 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Grab the canvas's 2D context. `None` when the browser refuses one.
    pub fn acquire(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }
}

impl Surface for CanvasSurface {
    fn is_ready(&self) -> bool {
        self.canvas.width() > 0 && self.canvas.height() > 0
    }

    fn clear(&mut self, width: f32, height: f32) {
        // Resizing the backing store resets the transform, so set it every
        // frame instead of scaling incrementally.
        let scale = self.canvas.width() as f64 / width as f64;
        if let Err(e) = self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0) {
            log::debug!("neural-field: set_transform failed: {:?}", e);
        }
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }
}

/// Size the canvas backing store to its laid-out box times the device pixel
/// ratio. Returns the logical size the simulation should use.
pub fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement) -> SurfaceSize {
    let rect = canvas.get_bounding_client_rect();
    let size = SurfaceSize::new(
        rect.width() as f32,
        rect.height() as f32,
        window.device_pixel_ratio() as f32,
    );
    canvas.set_width(size.backing_width());
    canvas.set_height(size.backing_height());
    size
}

/// Canvas-relative logical coordinates of a client-space point.
pub fn to_canvas_coords(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        (client_x as f64 - rect.left()) as f32,
        (client_y as f64 - rect.top()) as f32,
    )
}
