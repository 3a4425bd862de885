//! Canvas-backed implementation of the drawing surface.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::theme::Color;

use super::surface::Surface;

/// Renders field draw calls onto a 2d canvas context.
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn new(ctx: CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}
}

impl Surface for CanvasSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.set_global_alpha(alpha);
		self.ctx.fill();
		self.ctx.set_global_alpha(1.0);
	}

	fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, alpha: f64, width: f64) {
		self.ctx.begin_path();
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_global_alpha(alpha);
		self.ctx.set_line_width(width);
		self.ctx.move_to(x1, y1);
		self.ctx.line_to(x2, y2);
		self.ctx.stroke();
		self.ctx.set_global_alpha(1.0);
	}
}
