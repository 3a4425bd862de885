//! Confetti burst description, separated from the DOM spawning.

use crate::components::particle_field::Prng;
use crate::theme::{Color, CONFETTI_PALETTE};

/// Number of pieces in one burst.
pub const BURST_SIZE: usize = 50;
/// Pieces are removed from the document this long after spawning.
pub const CLEANUP_MS: i32 = 4000;

/// One confetti piece, ready to be styled onto a DOM node.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
	pub color: Color,
	/// Horizontal position in viewport-width units.
	pub left_vw: f64,
	/// Half the pieces are discs, the rest squares.
	pub round: bool,
	/// Fall duration in seconds.
	pub fall_secs: f64,
}

impl ConfettiPiece {
	pub fn random(rng: &mut Prng) -> Self {
		Self {
			color: CONFETTI_PALETTE[rng.index(CONFETTI_PALETTE.len())],
			left_vw: rng.range(0.0, 100.0),
			round: rng.next_f64() > 0.5,
			fall_secs: rng.range(2.0, 4.0),
		}
	}

	/// Full inline style for the spawned element. The `confetti-fall`
	/// keyframes come from the stylesheet the app injects.
	pub fn css(&self) -> String {
		format!(
			"position: fixed; width: 10px; height: 10px; background: {}; left: {}vw; \
			 top: -10px; border-radius: {}; pointer-events: none; z-index: 10003; \
			 animation: confetti-fall {}s linear forwards;",
			self.color.to_css(),
			self.left_vw,
			if self.round { "50%" } else { "0" },
			self.fall_secs,
		)
	}
}

/// Draw a full burst of pieces.
pub fn burst(rng: &mut Prng) -> Vec<ConfettiPiece> {
	(0..BURST_SIZE).map(|_| ConfettiPiece::random(rng)).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn burst_has_fifty_pieces_within_documented_ranges() {
		let mut rng = Prng::new(21);
		let pieces = burst(&mut rng);
		assert_eq!(pieces.len(), BURST_SIZE);
		for piece in &pieces {
			assert!(CONFETTI_PALETTE.contains(&piece.color));
			assert!((0.0..100.0).contains(&piece.left_vw));
			assert!((2.0..4.0).contains(&piece.fall_secs));
		}
	}

	#[test]
	fn both_shapes_and_all_colors_show_up() {
		let mut rng = Prng::new(8);
		let pieces = burst(&mut rng);
		assert!(pieces.iter().any(|p| p.round));
		assert!(pieces.iter().any(|p| !p.round));
		for color in &CONFETTI_PALETTE {
			assert!(pieces.iter().any(|p| p.color == *color), "missing {color:?}");
		}
	}

	#[test]
	fn css_carries_position_shape_and_animation() {
		let piece = ConfettiPiece {
			color: CONFETTI_PALETTE[0],
			left_vw: 25.0,
			round: true,
			fall_secs: 3.0,
		};
		let css = piece.css();
		assert!(css.contains("left: 25vw"), "{css}");
		assert!(css.contains("border-radius: 50%"), "{css}");
		assert!(css.contains("animation: confetti-fall 3s linear forwards"), "{css}");
		assert!(css.contains(&format!("background: {}", CONFETTI_PALETTE[0].to_css())), "{css}");
	}
}
