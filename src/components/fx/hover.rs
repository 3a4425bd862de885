//! Shared per-element hover and touch behaviors.
//!
//! Components attach these as event handlers; the hover-only ones are gated
//! by the caller on [`dom::hover_capable`], checked once at setup.

use web_sys::{Event, HtmlElement, MouseEvent};

use super::dom;
use super::motion;

/// Ripple expansion starts this long after the press, so the reset to
/// `scale(0)` lands first.
const RIPPLE_EXPAND_DELAY_MS: i32 = 10;
/// Ripple resets (transitions off) once the expansion finishes.
const RIPPLE_RESET_MS: i32 = 600;
/// Vibration length for touched buttons.
const TOUCH_BUZZ_MS: u32 = 10;

/// Magnetic pull: the element chases the cursor at a fifth of its offset.
pub fn magnetic_move(ev: &MouseEvent) {
	if let Some((element, x, y, w, h)) = dom::pointer_in_element(ev) {
		dom::set_transform(&element, &motion::magnetic_transform(x, y, w, h));
	}
}

/// Snap a magnetic element back to rest.
pub fn magnetic_leave(ev: &Event) {
	if let Some(element) = dom::event_element(ev) {
		dom::set_transform(&element, motion::MAGNETIC_REST);
	}
}

/// Tilt a card toward the cursor.
pub fn tilt_move(ev: &MouseEvent, max_tilt: f64) {
	if let Some((element, x, y, w, h)) = dom::pointer_in_element(ev) {
		dom::set_transform(&element, &motion::tilt_transform(x, y, w, h, max_tilt));
	}
}

/// Level a tilted card.
pub fn tilt_leave(ev: &Event) {
	if let Some(element) = dom::event_element(ev) {
		dom::set_transform(&element, motion::TILT_REST);
	}
}

/// Swivel headline text toward the cursor.
pub fn text_depth_move(ev: &MouseEvent) {
	if let Some((element, x, y, w, h)) = dom::pointer_in_element(ev) {
		dom::set_transform(&element, &motion::text_depth_transform(x, y, w, h));
	}
}

/// Flatten headline text again.
pub fn text_depth_leave(ev: &Event) {
	if let Some(element) = dom::event_element(ev) {
		dom::clear_transform(&element);
	}
}

/// Light up a card's glow overlay.
pub fn glow_enter(ev: &Event) {
	if let Some(glow) = glow_of(ev) {
		let _ = glow.style().set_property("opacity", "0.4");
	}
}

/// Fade a card's glow overlay back out.
pub fn glow_leave(ev: &Event) {
	if let Some(glow) = glow_of(ev) {
		let _ = glow.style().remove_property("opacity");
	}
}

fn glow_of(ev: &Event) -> Option<HtmlElement> {
	use wasm_bindgen::JsCast;
	let element = dom::event_element(ev)?;
	element.query_selector(".card-glow").ok()??.dyn_into().ok()
}

/// Expanding ripple from the press point on a secondary button.
pub fn ripple(ev: &MouseEvent) {
	use wasm_bindgen::JsCast;
	let Some((button, x, y, _, _)) = dom::pointer_in_element(ev) else {
		return;
	};
	let Ok(Some(found)) = button.query_selector(".btn-ripple") else {
		return;
	};
	let Ok(ripple) = found.dyn_into::<HtmlElement>() else {
		return;
	};

	let style = ripple.style();
	let _ = style.set_property("left", &format!("{x}px"));
	let _ = style.set_property("top", &format!("{y}px"));
	let _ = style.set_property("transform", "scale(0)");

	let expanding = ripple.clone();
	dom::schedule(RIPPLE_EXPAND_DELAY_MS, move || {
		let style = expanding.style();
		let _ = style.set_property("transition", "transform 0.6s ease");
		let _ = style.set_property("transform", "scale(4)");
	});
	dom::schedule(RIPPLE_RESET_MS, move || {
		let style = ripple.style();
		let _ = style.set_property("transform", "scale(0)");
		let _ = style.set_property("transition", "none");
	});
}

/// Slight press-in while an element is touched.
pub fn touch_press(ev: &Event) {
	if let Some(element) = dom::event_element(ev) {
		dom::set_transform(&element, "scale(0.98)");
	}
}

/// Release the press-in.
pub fn touch_release(ev: &Event) {
	if let Some(element) = dom::event_element(ev) {
		dom::clear_transform(&element);
	}
}

/// Press-in plus a short buzz, for buttons.
pub fn touch_press_buzz(ev: &Event) {
	touch_press(ev);
	dom::vibrate(TOUCH_BUZZ_MS);
}
