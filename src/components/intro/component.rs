//! Intro overlay: draggable logo, enter button, loading sequence.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{KeyboardEvent, MouseEvent, TouchEvent};

use crate::components::fx::dom;
use crate::site::SiteData;

use super::spin::LogoSpin;

/// How long the loader stays up after entering.
const LOADING_MS: i32 = 2000;

/// Where the page is in its entry sequence.
///
/// `Loaded` is terminal; the deferred animations (typewriter, reveal
/// observers) key off reaching it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	/// Intro overlay is up, waiting for the visitor.
	Intro,
	/// Loader is showing; main content still hidden.
	Loading,
	/// Main content visible, animations running.
	Loaded,
}

/// Full-screen intro with the draggable pseudo-3D logo, plus the loader
/// shown between entering and the content appearing.
///
/// The drag starts on the logo container, but moves and releases are tracked
/// window-wide so a drag survives leaving the element.
#[component]
pub fn IntroScreen() -> impl IntoView {
	let phase = expect_context::<RwSignal<Phase>>();
	let data = expect_context::<SiteData>();
	let spin = RwSignal::new(LogoSpin::new());

	let start_loading = move || {
		if phase.get_untracked() != Phase::Intro {
			return;
		}
		phase.set(Phase::Loading);
		dom::schedule(LOADING_MS, move || {
			phase.set(Phase::Loaded);
			dom::set_body_class("loaded", true);
		});
	};

	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};

		let on_move: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |ev: MouseEvent| {
			if !spin.get_untracked().is_dragging() {
				return;
			}
			spin.update(|s| {
				s.drag_to(ev.client_x() as f64, ev.client_y() as f64);
			});
		});
		dom::listen(&window, "mousemove", on_move);

		let on_up: Closure<dyn FnMut()> = Closure::new(move || {
			if spin.get_untracked().is_dragging() {
				spin.update(|s| s.end_drag());
			}
		});
		dom::listen(&window, "mouseup", on_up);

		let on_touch_move: Closure<dyn FnMut(TouchEvent)> = Closure::new(move |ev: TouchEvent| {
			if !spin.get_untracked().is_dragging() {
				return;
			}
			if let Some(touch) = ev.touches().get(0) {
				spin.update(|s| {
					s.drag_to(touch.client_x() as f64, touch.client_y() as f64);
				});
			}
		});
		dom::listen(&window, "touchmove", on_touch_move);

		let on_touch_end: Closure<dyn FnMut()> = Closure::new(move || {
			if spin.get_untracked().is_dragging() {
				spin.update(|s| s.end_drag());
			}
		});
		dom::listen(&window, "touchend", on_touch_end);

		// Enter key works as long as the intro is still up.
		let on_key: Closure<dyn FnMut(KeyboardEvent)> = Closure::new(move |ev: KeyboardEvent| {
			if ev.key() == "Enter" {
				start_loading();
			}
		});
		dom::listen(&window, "keydown", on_key);
	});

	let on_logo_mousedown = move |ev: MouseEvent| {
		spin.update(|s| s.begin_drag(ev.client_x() as f64, ev.client_y() as f64));
	};
	let on_logo_touchstart = move |ev: TouchEvent| {
		if let Some(touch) = ev.touches().get(0) {
			spin.update(|s| s.begin_drag(touch.client_x() as f64, touch.client_y() as f64));
		}
	};

	let initial = data.initial();
	let name = data.name.clone();

	view! {
		<div id="intro" class="intro-screen" class:hidden=move || phase.get() != Phase::Intro>
			<div
				class="logo-3d-container"
				on:mousedown=on_logo_mousedown
				on:touchstart=on_logo_touchstart
			>
				<div
					id="logo3d"
					class="logo-3d"
					class:dragging=move || spin.get().is_dragging()
					style:transform=move || spin.get().transform()
				>
					<span class="logo-face">{initial}</span>
				</div>
			</div>
			<h1 class="intro-title">{name}</h1>
			<p class="intro-hint">"Drag the logo. Enter when ready."</p>
			<button id="enterBtn" class="btn btn-primary enter-btn" on:click=move |_| start_loading()>
				"Enter"
			</button>
		</div>
		<div class="loader" class:hidden=move || phase.get() != Phase::Loading>
			<div class="loader-ring"></div>
			<span class="loader-text">"loading"</span>
		</div>
	}
}
