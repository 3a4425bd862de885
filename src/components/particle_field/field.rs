//! Per-particle state and the per-frame update/draw cycle.

use crate::theme::{Color, FieldStyle};

use super::links;
use super::pointer::PointerState;
use super::rng::Prng;
use super::surface::Surface;

/// Pointer distance below which repulsion applies.
pub const REPULSION_RADIUS: f64 = 100.0;
/// Scale applied to the proximity force each frame.
const REPULSION_STRENGTH: f64 = 0.02;
/// Viewport width below which the smaller population is used.
const SMALL_VIEWPORT_WIDTH: f64 = 768.0;

/// Drawing-surface dimensions the particles wrap around in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	pub width: f64,
	pub height: f64,
}

/// One self-propelled point of the ambient field.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub opacity: f64,
	pub color: Color,
}

impl Particle {
	pub fn new(rng: &mut Prng, bounds: Bounds, style: &FieldStyle) -> Self {
		let mut particle = Self {
			x: 0.0,
			y: 0.0,
			vx: 0.0,
			vy: 0.0,
			radius: 0.0,
			opacity: 0.0,
			color: style.palette[0],
		};
		particle.reset(rng, bounds, style);
		particle
	}

	/// Re-randomize every attribute: position anywhere in bounds, radius in
	/// [0.5, 2.5), velocity in [-0.25, 0.25) per axis, opacity in [0.2, 0.7),
	/// color drawn from the palette.
	pub fn reset(&mut self, rng: &mut Prng, bounds: Bounds, style: &FieldStyle) {
		self.x = rng.range(0.0, bounds.width);
		self.y = rng.range(0.0, bounds.height);
		self.radius = rng.range(0.5, 2.5);
		self.vx = rng.range(-0.25, 0.25);
		self.vy = rng.range(-0.25, 0.25);
		self.opacity = rng.range(0.2, 0.7);
		self.color = style.palette[rng.index(style.palette.len())];
	}

	/// Advance one frame: drift by velocity, shy away from a nearby pointer,
	/// then wrap around the bounds.
	pub fn update(&mut self, bounds: Bounds, pointer: &PointerState) {
		self.x += self.vx;
		self.y += self.vy;

		// Repulsion is a desktop-only effect.
		if !pointer.is_touch_primary() {
			let dx = pointer.x - self.x;
			let dy = pointer.y - self.y;
			let distance = (dx * dx + dy * dy).sqrt();
			if distance > 0.0 && distance < REPULSION_RADIUS {
				let force = (REPULSION_RADIUS - distance) / REPULSION_RADIUS;
				self.x -= dx * force * REPULSION_STRENGTH;
				self.y -= dy * force * REPULSION_STRENGTH;
			}
		}

		// Wrap to the opposite edge.
		if self.x < 0.0 {
			self.x = bounds.width;
		} else if self.x >= bounds.width {
			self.x = 0.0;
		}
		if self.y < 0.0 {
			self.y = bounds.height;
		} else if self.y >= bounds.height {
			self.y = 0.0;
		}
	}

	pub fn draw(&self, surface: &mut impl Surface) {
		surface.fill_circle(self.x, self.y, self.radius, self.color, self.opacity);
	}
}

/// The full particle population plus the bounds it lives in.
pub struct ParticleField {
	particles: Vec<Particle>,
	bounds: Bounds,
	style: FieldStyle,
}

impl ParticleField {
	/// Population for a given viewport width: 30 on narrow screens, 60 wide.
	pub fn count_for_width(width: f64) -> usize {
		if width < SMALL_VIEWPORT_WIDTH { 30 } else { 60 }
	}

	pub fn new(width: f64, height: f64, style: FieldStyle, rng: &mut Prng) -> Self {
		let bounds = Bounds { width, height };
		let particles = (0..Self::count_for_width(width))
			.map(|_| Particle::new(rng, bounds, &style))
			.collect();
		Self { particles, bounds, style }
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn bounds(&self) -> Bounds {
		self.bounds
	}

	/// Adopt new bounds. Existing particles keep their positions and wrap
	/// themselves on their next update; the population is not re-counted.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.bounds = Bounds { width, height };
	}

	/// One frame: clear, update and draw every particle, then the link pass.
	pub fn step(&mut self, pointer: &PointerState, surface: &mut impl Surface) {
		surface.clear(self.bounds.width, self.bounds.height);
		for particle in &mut self.particles {
			particle.update(self.bounds, pointer);
			particle.draw(surface);
		}
		links::draw_links(&self.particles, &self.style, surface);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn far_pointer() -> PointerState {
		let mut pointer = PointerState::new();
		pointer.set_position(-10_000.0, -10_000.0);
		pointer
	}

	#[test]
	fn population_depends_on_viewport_width() {
		assert_eq!(ParticleField::count_for_width(320.0), 30);
		assert_eq!(ParticleField::count_for_width(767.9), 30);
		assert_eq!(ParticleField::count_for_width(768.0), 60);
		assert_eq!(ParticleField::count_for_width(1920.0), 60);
	}

	#[test]
	fn reset_draws_attributes_from_documented_ranges() {
		let mut rng = Prng::new(42);
		let bounds = Bounds { width: 800.0, height: 600.0 };
		let style = FieldStyle::default();
		for _ in 0..500 {
			let particle = Particle::new(&mut rng, bounds, &style);
			assert!((0.0..800.0).contains(&particle.x));
			assert!((0.0..600.0).contains(&particle.y));
			assert!((0.5..2.5).contains(&particle.radius));
			assert!((-0.25..0.25).contains(&particle.vx));
			assert!((-0.25..0.25).contains(&particle.vy));
			assert!((0.2..0.7).contains(&particle.opacity));
			assert!(style.palette.contains(&particle.color));
		}
	}

	#[test]
	fn both_palette_colors_get_used() {
		let mut rng = Prng::new(1);
		let bounds = Bounds { width: 800.0, height: 600.0 };
		let style = FieldStyle::default();
		let mut seen = [false, false];
		for _ in 0..100 {
			let particle = Particle::new(&mut rng, bounds, &style);
			for (i, color) in style.palette.iter().enumerate() {
				if particle.color == *color {
					seen[i] = true;
				}
			}
		}
		assert_eq!(seen, [true, true]);
	}

	#[test]
	fn crossing_left_edge_reappears_at_right() {
		let mut rng = Prng::new(5);
		let bounds = Bounds { width: 100.0, height: 100.0 };
		let style = FieldStyle::default();
		let mut particle = Particle::new(&mut rng, bounds, &style);
		particle.x = 0.05;
		particle.vx = -0.2;
		particle.update(bounds, &far_pointer());
		assert_eq!(particle.x, bounds.width);
	}

	#[test]
	fn reaching_right_edge_reappears_at_left() {
		let mut rng = Prng::new(5);
		let bounds = Bounds { width: 100.0, height: 100.0 };
		let style = FieldStyle::default();
		let mut particle = Particle::new(&mut rng, bounds, &style);
		particle.x = 99.95;
		particle.vx = 0.2;
		particle.update(bounds, &far_pointer());
		assert_eq!(particle.x, 0.0);
	}

	#[test]
	fn pointer_within_radius_pushes_particle_away() {
		let mut rng = Prng::new(9);
		let bounds = Bounds { width: 500.0, height: 500.0 };
		let style = FieldStyle::default();
		let mut particle = Particle::new(&mut rng, bounds, &style);
		particle.x = 250.0;
		particle.y = 250.0;
		particle.vx = 0.0;
		particle.vy = 0.0;

		let mut pointer = PointerState::new();
		pointer.set_position(250.0 + 30.0, 250.0);
		particle.update(bounds, &pointer);

		// Pointer sits to the right, so the particle moves left.
		assert!(particle.x < 250.0);
		assert_eq!(particle.y, 250.0);
	}

	#[test]
	fn pointer_outside_radius_leaves_velocity_drift_only() {
		let mut rng = Prng::new(9);
		let bounds = Bounds { width: 500.0, height: 500.0 };
		let style = FieldStyle::default();
		let mut particle = Particle::new(&mut rng, bounds, &style);
		particle.x = 250.0;
		particle.y = 250.0;
		particle.vx = 0.1;
		particle.vy = -0.1;

		let mut pointer = PointerState::new();
		pointer.set_position(250.0 + REPULSION_RADIUS + 1.0, 250.0);
		particle.update(bounds, &pointer);

		assert_eq!(particle.x, 250.1);
		assert_eq!(particle.y, 249.9);
	}

	#[test]
	fn touch_primary_disables_repulsion_entirely() {
		let mut rng = Prng::new(9);
		let bounds = Bounds { width: 500.0, height: 500.0 };
		let style = FieldStyle::default();
		let mut particle = Particle::new(&mut rng, bounds, &style);
		particle.x = 250.0;
		particle.y = 250.0;
		particle.vx = 0.0;
		particle.vy = 0.0;

		let mut pointer = PointerState::new();
		pointer.set_position(255.0, 250.0);
		pointer.mark_touch_primary();
		particle.update(bounds, &pointer);

		assert_eq!((particle.x, particle.y), (250.0, 250.0));
	}

	#[test]
	fn pointer_exactly_on_particle_applies_no_force() {
		let mut rng = Prng::new(9);
		let bounds = Bounds { width: 500.0, height: 500.0 };
		let style = FieldStyle::default();
		let mut particle = Particle::new(&mut rng, bounds, &style);
		particle.x = 250.0;
		particle.y = 250.0;
		particle.vx = 0.0;
		particle.vy = 0.0;

		let mut pointer = PointerState::new();
		pointer.set_position(250.0, 250.0);
		particle.update(bounds, &pointer);

		assert_eq!((particle.x, particle.y), (250.0, 250.0));
	}
}
