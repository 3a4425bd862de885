//! Proximity links drawn between nearby particles.

use crate::theme::FieldStyle;

use super::field::Particle;
use super::surface::Surface;

/// Pair distance below which a link is drawn.
pub const LINK_DISTANCE: f64 = 120.0;
/// Peak link opacity, approached as a pair's distance goes to zero.
const LINK_ALPHA: f64 = 0.1;

/// Draw a segment for every unordered pair closer than [`LINK_DISTANCE`],
/// alpha fading linearly with distance. Enumeration is quadratic, which is
/// fine at the field's fixed population sizes.
pub fn draw_links(particles: &[Particle], style: &FieldStyle, surface: &mut impl Surface) {
	for i in 0..particles.len() {
		for j in (i + 1)..particles.len() {
			let dx = particles[i].x - particles[j].x;
			let dy = particles[i].y - particles[j].y;
			let distance = (dx * dx + dy * dy).sqrt();
			if distance < LINK_DISTANCE {
				let alpha = LINK_ALPHA * (1.0 - distance / LINK_DISTANCE);
				surface.line(
					particles[i].x,
					particles[i].y,
					particles[j].x,
					particles[j].y,
					style.link_color,
					alpha,
					style.link_width,
				);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::surface::{RecordingSurface, SurfaceOp};
	use crate::components::particle_field::{Bounds, Prng};

	fn particle_at(x: f64, y: f64) -> Particle {
		let mut rng = Prng::new(11);
		let bounds = Bounds { width: 1000.0, height: 1000.0 };
		let style = FieldStyle::default();
		let mut particle = Particle::new(&mut rng, bounds, &style);
		particle.x = x;
		particle.y = y;
		particle
	}

	#[test]
	fn close_pair_gets_one_link() {
		let particles = vec![particle_at(0.0, 0.0), particle_at(60.0, 0.0)];
		let mut surface = RecordingSurface::new();
		draw_links(&particles, &FieldStyle::default(), &mut surface);
		assert_eq!(surface.line_count(), 1);
	}

	#[test]
	fn distant_pair_gets_none() {
		let particles = vec![particle_at(0.0, 0.0), particle_at(LINK_DISTANCE, 0.0)];
		let mut surface = RecordingSurface::new();
		draw_links(&particles, &FieldStyle::default(), &mut surface);
		assert_eq!(surface.line_count(), 0);
	}

	#[test]
	fn alpha_fades_linearly_with_distance() {
		let style = FieldStyle::default();

		let mut near = RecordingSurface::new();
		draw_links(&[particle_at(0.0, 0.0), particle_at(30.0, 0.0)], &style, &mut near);
		let mut far = RecordingSurface::new();
		draw_links(&[particle_at(0.0, 0.0), particle_at(90.0, 0.0)], &style, &mut far);

		let alpha_of = |surface: &RecordingSurface| match surface.ops[0] {
			SurfaceOp::Line { alpha, .. } => alpha,
			_ => panic!("expected a line"),
		};
		let near_alpha = alpha_of(&near);
		let far_alpha = alpha_of(&far);
		assert!((near_alpha - 0.075).abs() < 1e-12);
		assert!((far_alpha - 0.025).abs() < 1e-12);
		assert!(near_alpha > far_alpha);
	}

	#[test]
	fn three_close_particles_link_every_unordered_pair() {
		let particles = vec![
			particle_at(0.0, 0.0),
			particle_at(50.0, 0.0),
			particle_at(0.0, 50.0),
		];
		let mut surface = RecordingSurface::new();
		draw_links(&particles, &FieldStyle::default(), &mut surface);
		assert_eq!(surface.line_count(), 3);
	}

	#[test]
	fn links_use_the_accent_style() {
		let style = FieldStyle::default();
		let particles = vec![particle_at(0.0, 0.0), particle_at(10.0, 0.0)];
		let mut surface = RecordingSurface::new();
		draw_links(&particles, &style, &mut surface);
		match surface.ops[0] {
			SurfaceOp::Line { color, width, .. } => {
				assert_eq!(color, style.link_color);
				assert_eq!(width, 0.5);
			}
			_ => panic!("expected a line"),
		}
	}
}
