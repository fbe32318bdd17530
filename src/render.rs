use crate::core::constants::HEART_RGB;
use crate::core::{heart_fill_style, HeartPath, Surface, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Surface` backed by a 2D canvas context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width.max(1.0) as u32);
        self.canvas.set_height(viewport.height.max(1.0) as u32);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_heart(&mut self, path: &HeartPath, alpha: f32) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.begin_path();
        ctx.move_to(path.start.x as f64, path.start.y as f64);
        for [c1, c2, end] in path.curves {
            ctx.bezier_curve_to(
                c1.x as f64,
                c1.y as f64,
                c2.x as f64,
                c2.y as f64,
                end.x as f64,
                end.y as f64,
            );
        }
        ctx.set_fill_style_str(&heart_fill_style(HEART_RGB, alpha));
        ctx.fill();
        ctx.restore();
    }
}
