//! Pointer input shared between the event listeners and the field.

/// Last known pointer position plus the touch-primary latch.
///
/// The listeners write, every particle update reads. `touch_primary` latches
/// on the first touch event and never reverts, so repulsion stays disabled
/// for the rest of the session once a touch is seen.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
	pub x: f64,
	pub y: f64,
	touch_primary: bool,
}

impl PointerState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set_position(&mut self, x: f64, y: f64) {
		self.x = x;
		self.y = y;
	}

	pub fn mark_touch_primary(&mut self) {
		self.touch_primary = true;
	}

	pub fn is_touch_primary(&self) -> bool {
		self.touch_primary
	}
}
