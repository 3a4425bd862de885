//! Drag state for the pseudo-3D intro logo.

/// Logo orientation plus the active drag, if any.
///
/// The logo starts tipped back slightly. While a drag is active, horizontal
/// pointer movement yaws and vertical movement pitches, half a degree per
/// pixel; the previous position is remembered so each move applies only its
/// own delta.
#[derive(Clone, Copy, Debug)]
pub struct LogoSpin {
	rotation_x: f64,
	rotation_y: f64,
	dragging: bool,
	last_x: f64,
	last_y: f64,
}

impl Default for LogoSpin {
	fn default() -> Self {
		Self {
			rotation_x: 10.0,
			rotation_y: 0.0,
			dragging: false,
			last_x: 0.0,
			last_y: 0.0,
		}
	}
}

impl LogoSpin {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn begin_drag(&mut self, x: f64, y: f64) {
		self.dragging = true;
		self.last_x = x;
		self.last_y = y;
	}

	/// Apply a pointer move; true when it rotated the logo.
	pub fn drag_to(&mut self, x: f64, y: f64) -> bool {
		if !self.dragging {
			return false;
		}
		self.rotation_y += (x - self.last_x) * 0.5;
		self.rotation_x -= (y - self.last_y) * 0.5;
		self.last_x = x;
		self.last_y = y;
		true
	}

	pub fn end_drag(&mut self) {
		self.dragging = false;
	}

	pub fn is_dragging(&self) -> bool {
		self.dragging
	}

	/// CSS transform for the current orientation.
	pub fn transform(&self) -> String {
		format!("rotateX({}deg) rotateY({}deg)", self.rotation_x, self.rotation_y)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_tipped_back() {
		assert_eq!(LogoSpin::new().transform(), "rotateX(10deg) rotateY(0deg)");
	}

	#[test]
	fn moves_without_a_drag_are_inert() {
		let mut spin = LogoSpin::new();
		assert!(!spin.drag_to(100.0, 100.0));
		assert_eq!(spin.transform(), "rotateX(10deg) rotateY(0deg)");
	}

	#[test]
	fn dragging_applies_half_a_degree_per_pixel() {
		let mut spin = LogoSpin::new();
		spin.begin_drag(10.0, 0.0);
		assert!(spin.drag_to(30.0, 10.0));
		// +20 px horizontally yaws +10°, +10 px vertically pitches -5°.
		assert_eq!(spin.transform(), "rotateX(5deg) rotateY(10deg)");
	}

	#[test]
	fn deltas_accumulate_across_moves() {
		let mut spin = LogoSpin::new();
		spin.begin_drag(0.0, 0.0);
		spin.drag_to(10.0, 0.0);
		spin.drag_to(20.0, 0.0);
		assert_eq!(spin.transform(), "rotateX(10deg) rotateY(10deg)");
	}

	#[test]
	fn release_freezes_the_pose_and_a_new_drag_does_not_jump() {
		let mut spin = LogoSpin::new();
		spin.begin_drag(0.0, 0.0);
		spin.drag_to(40.0, 0.0);
		spin.end_drag();
		assert!(!spin.is_dragging());
		assert!(!spin.drag_to(1000.0, 1000.0));

		// Re-anchoring far away must not apply the gap as a delta.
		spin.begin_drag(500.0, 500.0);
		spin.drag_to(500.0, 500.0);
		assert_eq!(spin.transform(), "rotateX(10deg) rotateY(20deg)");
	}
}
