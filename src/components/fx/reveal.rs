//! Reveal-on-scroll wiring around IntersectionObserver.

use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Class added to an element the first time it scrolls into view. The app
/// stylesheet gives it `!important` overrides for the inline hiding below.
pub const REVEAL_CLASS: &str = "animate";

/// Fraction of the element that must be visible to count as revealed.
const THRESHOLD: f64 = 0.1;
/// Shrinks the viewport bottom so elements reveal slightly after entering.
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Watch `element`; on its first intersection add [`REVEAL_CLASS`], run
/// `on_visible`, and stop observing. Until then the element sits transparent
/// and shifted down, so the reveal slides it into place.
///
/// One observer per element. The population is small and once-semantics keep
/// ownership trivial: the observer disconnects itself and the callback is
/// leaked with the other page-lifetime listeners.
pub fn on_first_visible(element: &HtmlElement, on_visible: impl FnOnce() + 'static) {
	if !element.class_list().contains(REVEAL_CLASS) {
		let style = element.style();
		let _ = style.set_property("opacity", "0");
		let _ = style.set_property("transform", "translateY(30px)");
		let _ = style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease");
	}

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(THRESHOLD));
	options.set_root_margin(ROOT_MARGIN);

	let mut action = Some(on_visible);
	let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		move |entries: js_sys::Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let entry: IntersectionObserverEntry = entry.unchecked_into();
				if entry.is_intersecting() {
					let _ = entry.target().class_list().add_1(REVEAL_CLASS);
					observer.disconnect();
					if let Some(action) = action.take() {
						action();
					}
				}
			}
		},
	);

	if let Ok(observer) =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
	{
		observer.observe(element);
	}
	callback.forget();
}

/// [`on_first_visible`] without a follow-up action.
pub fn reveal(element: &HtmlElement) {
	on_first_visible(element, || {});
}
