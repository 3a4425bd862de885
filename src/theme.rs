//! Site-wide colors and visual style configuration.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Neon teal used for particles, links and highlights.
pub const ACCENT: Color = Color::rgb(0x00, 0xf5, 0xd4);

/// Deep violet, the second particle color.
pub const VIOLET: Color = Color::rgb(0x7b, 0x2c, 0xbf);

/// Hot pink, confetti only.
pub const PINK: Color = Color::rgb(0xf7, 0x25, 0x85);

/// Colors confetti pieces draw from.
pub const CONFETTI_PALETTE: [Color; 3] = [ACCENT, VIOLET, PINK];

/// Visual style for the ambient particle field.
#[derive(Clone, Copy, Debug)]
pub struct FieldStyle {
	/// Two-color palette particles pick from at reset.
	pub palette: [Color; 2],
	/// Stroke color for proximity links.
	pub link_color: Color,
	/// Stroke width for proximity links.
	pub link_width: f64,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			palette: [ACCENT, VIOLET],
			link_color: ACCENT,
			link_width: 0.5,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_color_renders_as_hex() {
		assert_eq!(ACCENT.to_css(), "#00f5d4");
		assert_eq!(VIOLET.to_css(), "#7b2cbf");
	}

	#[test]
	fn translucent_color_renders_as_rgba() {
		assert_eq!(
			Color::rgb(255, 255, 255).with_alpha(0.4).to_css(),
			"rgba(255, 255, 255, 0.4)"
		);
	}
}
