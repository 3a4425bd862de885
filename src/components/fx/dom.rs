//! Small wrappers over window, document, event and timer plumbing.
//!
//! Every helper degrades to a no-op when its DOM collaborator is missing, so
//! effects never panic over an absent element. Listener closures registered
//! here live for the page's lifetime and are leaked on purpose; the page is a
//! single document and nothing here unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use web_sys::{
	AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, MouseEvent,
	ScrollBehavior, ScrollToOptions, Window,
};

/// Register `closure` on `target` for the page's lifetime.
pub fn listen<T: ?Sized + WasmClosure>(target: &EventTarget, event: &str, closure: Closure<T>) {
	let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
	closure.forget();
}

/// Like [`listen`] but with addEventListener options (passive, once).
pub fn listen_with_options<T: ?Sized + WasmClosure>(
	target: &EventTarget,
	event: &str,
	closure: Closure<T>,
	options: &AddEventListenerOptions,
) {
	let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
		event,
		closure.as_ref().unchecked_ref(),
		options,
	);
	closure.forget();
}

/// Run `action` once after `delay_ms`. The callback frees itself after firing.
pub fn schedule(delay_ms: i32, action: impl FnOnce() + 'static) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let callback = Closure::once_into_js(action);
	let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
		callback.unchecked_ref::<Function>(),
		delay_ms,
	);
}

/// Run `action` on the next animation frame. One-shot.
pub fn next_frame(action: impl FnOnce() + 'static) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let callback = Closure::once_into_js(action);
	let _ = window.request_animation_frame(callback.unchecked_ref::<Function>());
}

/// Drive `step` once per animation frame until it returns false.
///
/// The closure keeps itself alive through the same self-referential cycle the
/// field's frame loop uses; a finished animation simply stops rescheduling.
pub fn animate_while(mut step: impl FnMut() -> bool + 'static) {
	let closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let inner = closure.clone();
	*closure.borrow_mut() = Some(Closure::new(move || {
		if !step() {
			return;
		}
		if let Some(ref cb) = *inner.borrow() {
			if let Some(window) = web_sys::window() {
				let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}
	}));
	if let Some(ref cb) = *closure.borrow() {
		if let Some(window) = web_sys::window() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}
}

/// Current document, when running in a browser.
pub fn document() -> Option<Document> {
	web_sys::window()?.document()
}

/// Current vertical scroll offset.
pub fn scroll_y() -> f64 {
	web_sys::window()
		.and_then(|w| w.scroll_y().ok())
		.unwrap_or(0.0)
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &Window) -> (f64, f64) {
	(
		window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
		window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
	)
}

/// True on devices with a precise hovering pointer (desktop mouse).
pub fn hover_capable() -> bool {
	web_sys::window()
		.and_then(|w| w.match_media("(hover: hover) and (pointer: fine)").ok().flatten())
		.map(|mql| mql.matches())
		.unwrap_or(false)
}

/// True when the runtime exposes touch events.
pub fn touch_device() -> bool {
	web_sys::window()
		.map(|w| js_sys::Reflect::has(w.as_ref(), &JsValue::from_str("ontouchstart")).unwrap_or(false))
		.unwrap_or(false)
}

/// Best-effort vibration; a no-op wherever the runtime lacks the API.
pub fn vibrate(duration_ms: u32) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let navigator = window.navigator();
	// iOS Safari exposes touch events but no Vibration API.
	if js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("vibrate")).unwrap_or(false) {
		let _ = navigator.vibrate_with_duration(duration_ms);
	}
}

/// Add or remove a class on `<body>`.
pub fn set_body_class(class: &str, on: bool) {
	let Some(body) = document().and_then(|d| d.body()) else {
		return;
	};
	let list = body.class_list();
	let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

/// Lock or unlock body scrolling while the mobile menu is open.
pub fn set_body_scroll_locked(locked: bool) {
	let Some(body) = document().and_then(|d| d.body()) else {
		return;
	};
	let style = body.style();
	let _ = if locked {
		style.set_property("overflow", "hidden")
	} else {
		style.remove_property("overflow").map(|_| ())
	};
}

/// Smooth-scroll the window to a vertical offset.
pub fn smooth_scroll_to(top: f64) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let options = ScrollToOptions::new();
	options.set_top(top);
	options.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&options);
}

/// Document-space top and height of the element with `id`.
pub fn section_metrics(id: &str) -> Option<(f64, f64)> {
	let element: HtmlElement = document()?.get_element_by_id(id)?.dyn_into().ok()?;
	Some((element.offset_top() as f64, element.offset_height() as f64))
}

/// Smooth-scroll so the section with `id` starts `offset` below the viewport
/// top. Missing sections scroll nowhere.
pub fn scroll_to_section(id: &str, offset: f64) {
	if let Some((top, _)) = section_metrics(id) {
		smooth_scroll_to(top - offset);
	}
}

/// Elements under `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
	let mut found = Vec::new();
	let Ok(list) = root.query_selector_all(selector) else {
		return found;
	};
	for i in 0..list.length() {
		if let Some(element) = list.get(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) {
			found.push(element);
		}
	}
	found
}

/// The element the handler was attached to.
pub fn event_element(ev: &Event) -> Option<HtmlElement> {
	ev.current_target()?.dyn_into().ok()
}

/// The handler's element plus the cursor position relative to it and its size.
pub fn pointer_in_element(ev: &MouseEvent) -> Option<(HtmlElement, f64, f64, f64, f64)> {
	let target: HtmlElement = ev.current_target()?.dyn_into().ok()?;
	let rect = target.get_bounding_client_rect();
	let x = ev.client_x() as f64 - rect.left();
	let y = ev.client_y() as f64 - rect.top();
	Some((target, x, y, rect.width(), rect.height()))
}

/// Set an inline transform on an element.
pub fn set_transform(element: &HtmlElement, transform: &str) {
	let _ = element.style().set_property("transform", transform);
}

/// Drop an element's inline transform entirely.
pub fn clear_transform(element: &HtmlElement) {
	let _ = element.style().remove_property("transform");
}

#[cfg(test)]
mod tests {
	use super::*;
	use web_sys::{KeyboardEvent, TouchEvent};

	// Signature checks only; actual registration needs a browser.
	#[test]
	fn listener_helpers_accept_every_registered_closure_shape() {
		let _: fn(&EventTarget, &str, Closure<dyn FnMut()>) = listen;
		let _: fn(&EventTarget, &str, Closure<dyn FnMut(MouseEvent)>) = listen;
		let _: fn(&EventTarget, &str, Closure<dyn FnMut(KeyboardEvent)>) = listen;
		let _: fn(&EventTarget, &str, Closure<dyn FnMut(TouchEvent)>) = listen;
		let _: fn(&EventTarget, &str, Closure<dyn FnMut()>, &AddEventListenerOptions) = listen_with_options;
	}
}
