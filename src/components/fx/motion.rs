//! Pure geometry behind the pointer and scroll motion effects.
//!
//! Every function maps input coordinates to a CSS transform string; the
//! components only shuttle event coordinates in and the strings out, so all
//! of the motion math is testable natively.

/// Default tilt amplitude in degrees, overridable per card.
pub const TILT_DEFAULT_MAX: f64 = 10.0;

/// Rest pose for tilt cards; transitions animate back through it.
pub const TILT_REST: &str = "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)";

/// Rest pose for magnetic elements.
pub const MAGNETIC_REST: &str = "translate(0, 0)";

/// Magnetic pull toward the cursor: a fifth of the cursor's offset from the
/// element center. `x`/`y` are element-relative.
pub fn magnetic_transform(x: f64, y: f64, width: f64, height: f64) -> String {
	let dx = (x - width / 2.0) * 0.2;
	let dy = (y - height / 2.0) * 0.2;
	format!("translate({dx}px, {dy}px)")
}

/// Tilt toward the cursor with a slight pop, clamped by construction to
/// `max_tilt` degrees at the element edges.
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64, max_tilt: f64) -> String {
	let center_x = width / 2.0;
	let center_y = height / 2.0;
	let rotate_x = ((y - center_y) / center_y) * max_tilt;
	let rotate_y = ((center_x - x) / center_x) * max_tilt;
	format!("perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) scale3d(1.02, 1.02, 1.02)")
}

/// Headline depth effect: the text plane swivels toward the cursor.
pub fn text_depth_transform(x: f64, y: f64, width: f64, height: f64) -> String {
	let dx = x - width / 2.0;
	let dy = y - height / 2.0;
	format!("translateZ(30px) rotateX({}deg) rotateY({}deg)", -dy / 20.0, dx / 20.0)
}

/// Viewport position mapped to [-1, 1] per axis, 0 at the center.
pub fn normalized_pointer(client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) -> (f64, f64) {
	(
		(client_x / viewport_w - 0.5) * 2.0,
		(client_y / viewport_h - 0.5) * 2.0,
	)
}

/// Floating cube parallax; deeper cubes (higher index) travel further.
pub fn cube_transform(nx: f64, ny: f64, index: usize) -> String {
	let depth = (index + 1) as f64 * 0.5;
	format!(
		"translateX({}px) translateY({}px) rotateX({}deg) rotateY({}deg)",
		nx * 30.0 * depth,
		ny * 30.0 * depth,
		ny * 10.0,
		nx * 10.0,
	)
}

/// Pyramid parallax.
pub fn pyramid_transform(nx: f64, ny: f64) -> String {
	format!(
		"translateX({}px) translateY({}px) rotateY({}deg)",
		nx * 20.0,
		ny * 20.0,
		nx * 20.0,
	)
}

/// Ring parallax; rings stay tipped at 70° and spin with the pointer.
pub fn ring_transform(nx: f64, ny: f64, index: usize) -> String {
	let depth = (index + 1) as f64 * 0.3;
	format!(
		"rotateX(70deg) rotateZ({}deg) translateX({}px) translateY({}px)",
		nx * 30.0 * depth,
		nx * 15.0,
		ny * 15.0,
	)
}

/// Sphere parallax, the furthest-travelling element of the scene.
pub fn sphere_transform(nx: f64, ny: f64) -> String {
	format!("translateX({}px) translateY({}px)", nx * 40.0, ny * 40.0)
}

/// Scroll parallax for the floating background shapes.
pub fn shape_parallax_transform(scroll_y: f64, index: usize) -> String {
	let speed = 0.03 * (index + 1) as f64;
	format!("translateY({}px)", scroll_y * speed)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn magnetic_rests_at_center() {
		assert_eq!(magnetic_transform(50.0, 20.0, 100.0, 40.0), "translate(0px, 0px)");
	}

	#[test]
	fn magnetic_pulls_a_fifth_of_the_offset() {
		assert_eq!(magnetic_transform(100.0, 40.0, 100.0, 40.0), "translate(10px, 4px)");
	}

	#[test]
	fn tilt_is_flat_at_center() {
		let transform = tilt_transform(100.0, 50.0, 200.0, 100.0, TILT_DEFAULT_MAX);
		assert_eq!(
			transform,
			"perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1.02, 1.02, 1.02)"
		);
	}

	#[test]
	fn tilt_reaches_max_at_edges() {
		// Bottom edge pitches down by the full amplitude.
		let transform = tilt_transform(100.0, 100.0, 200.0, 100.0, TILT_DEFAULT_MAX);
		assert!(transform.contains("rotateX(10deg)"), "{transform}");
		// Left edge yaws by the full amplitude.
		let transform = tilt_transform(0.0, 50.0, 200.0, 100.0, TILT_DEFAULT_MAX);
		assert!(transform.contains("rotateY(10deg)"), "{transform}");
	}

	#[test]
	fn tilt_honors_per_card_amplitude() {
		let transform = tilt_transform(100.0, 100.0, 200.0, 100.0, 14.0);
		assert!(transform.contains("rotateX(14deg)"), "{transform}");
	}

	#[test]
	fn text_depth_turns_toward_the_cursor() {
		// Cursor right of center: positive yaw, no pitch.
		assert_eq!(
			text_depth_transform(120.0, 20.0, 200.0, 40.0),
			"translateZ(30px) rotateX(-0deg) rotateY(1deg)"
		);
	}

	#[test]
	fn normalized_pointer_spans_minus_one_to_one() {
		assert_eq!(normalized_pointer(0.0, 0.0, 800.0, 600.0), (-1.0, -1.0));
		assert_eq!(normalized_pointer(400.0, 300.0, 800.0, 600.0), (0.0, 0.0));
		assert_eq!(normalized_pointer(800.0, 600.0, 800.0, 600.0), (1.0, 1.0));
	}

	#[test]
	fn deeper_cubes_travel_further() {
		let near = cube_transform(1.0, 0.0, 0);
		let deep = cube_transform(1.0, 0.0, 1);
		assert!(near.starts_with("translateX(15px)"), "{near}");
		assert!(deep.starts_with("translateX(30px)"), "{deep}");
	}

	#[test]
	fn rings_spin_with_depth_but_translate_without() {
		let transform = ring_transform(1.0, -1.0, 1);
		assert_eq!(
			transform,
			"rotateX(70deg) rotateZ(18deg) translateX(15px) translateY(-15px)"
		);
	}

	#[test]
	fn shape_parallax_scales_with_index_and_scroll() {
		let offset = |transform: String| -> f64 {
			transform
				.strip_prefix("translateY(")
				.and_then(|rest| rest.strip_suffix("px)"))
				.expect("translateY transform")
				.parse()
				.expect("numeric offset")
		};
		assert_eq!(offset(shape_parallax_transform(0.0, 4)), 0.0);
		assert_eq!(offset(shape_parallax_transform(100.0, 0)), 100.0 * (0.03 * 1.0));
		assert_eq!(offset(shape_parallax_transform(100.0, 2)), 100.0 * (0.03 * 3.0));
	}
}
