//! Konami payoff: rainbow mode plus a confetti burst.

use crate::components::particle_field::Prng;

use super::confetti;
use super::dom;

/// Body animation while rainbow mode runs; keyframes live in the app styles.
const RAINBOW_ANIMATION: &str = "rainbow 2s linear infinite";
/// How long rainbow mode stays on.
const RAINBOW_MS: i32 = 5000;

/// Run the full payoff: hue-rotate the whole page for five seconds and drop
/// a confetti burst from the top edge.
pub fn activate(rng: &mut Prng) {
	start_rainbow();
	spawn_confetti(rng);
}

fn start_rainbow() {
	let Some(body) = dom::document().and_then(|d| d.body()) else {
		return;
	};
	let _ = body.style().set_property("animation", RAINBOW_ANIMATION);
	dom::schedule(RAINBOW_MS, || {
		if let Some(body) = dom::document().and_then(|d| d.body()) {
			let _ = body.style().remove_property("animation");
		}
	});
}

fn spawn_confetti(rng: &mut Prng) {
	let Some(document) = dom::document() else {
		return;
	};
	let Some(body) = document.body() else {
		return;
	};
	for piece in confetti::burst(rng) {
		let Ok(element) = document.create_element("div") else {
			continue;
		};
		let _ = element.set_attribute("style", &piece.css());
		let _ = body.append_child(&element);
		dom::schedule(confetti::CLEANUP_MS, move || element.remove());
	}
}
