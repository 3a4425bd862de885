//! Drawing capability the particle field renders through.

use crate::theme::Color;

/// The 2d drawing operations the field needs.
///
/// The canvas-backed implementation lives in [`render`](super::render);
/// tests substitute [`RecordingSurface`]. Implementations must restore
/// global alpha to opaque after every call, so no draw observes the
/// opacity of the previous one.
pub trait Surface {
	/// Erase the full surface.
	fn clear(&mut self, width: f64, height: f64);

	/// Filled circle centered at (x, y).
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64);

	/// Straight stroked segment.
	fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, alpha: f64, width: f64);
}

/// One recorded drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
	Clear { width: f64, height: f64 },
	Circle { x: f64, y: f64, radius: f64, color: Color, alpha: f64 },
	Line { x1: f64, y1: f64, x2: f64, y2: f64, color: Color, alpha: f64, width: f64 },
}

/// Surface double that records every operation for assertions.
#[derive(Debug, Default)]
pub struct RecordingSurface {
	pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn circle_count(&self) -> usize {
		self.ops
			.iter()
			.filter(|op| matches!(op, SurfaceOp::Circle { .. }))
			.count()
	}

	pub fn line_count(&self) -> usize {
		self.ops
			.iter()
			.filter(|op| matches!(op, SurfaceOp::Line { .. }))
			.count()
	}
}

impl Surface for RecordingSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.ops.push(SurfaceOp::Clear { width, height });
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64) {
		self.ops.push(SurfaceOp::Circle { x, y, radius, color, alpha });
	}

	fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, alpha: f64, width: f64) {
		self.ops.push(SurfaceOp::Line { x1, y1, x2, y2, color, alpha, width });
	}
}
