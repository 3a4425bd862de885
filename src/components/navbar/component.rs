//! Fixed navigation bar, mobile menu, and the back-to-top button.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

use crate::components::fx::dom;

use super::scrollspy::{self, SectionSpan};

/// Section anchors in page order; ids double as scroll targets.
const SECTIONS: [(&str, &str); 4] = [
	("home", "Home"),
	("about", "About"),
	("skills", "Skills"),
	("contact", "Contact"),
];

/// Top navigation: compacts after a little scrolling, highlights the section
/// under the navbar, and collapses into an overlay menu on small screens.
#[component]
pub fn NavBar() -> impl IntoView {
	let scrolled = RwSignal::new(false);
	let active = RwSignal::new("home");
	let menu_open = RwSignal::new(false);

	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};

		let on_scroll: Closure<dyn FnMut()> = Closure::new(move || {
			let y = dom::scroll_y();

			let compact = scrollspy::navbar_scrolled(y);
			if scrolled.get_untracked() != compact {
				scrolled.set(compact);
			}

			// Re-measure every scroll event; section heights change as
			// reveals and bar animations run.
			let mut ids = Vec::new();
			let mut spans = Vec::new();
			for (id, _) in SECTIONS {
				if let Some((top, height)) = dom::section_metrics(id) {
					ids.push(id);
					spans.push(SectionSpan { top, height });
				}
			}
			if let Some(i) = scrollspy::active_section(&spans, y) {
				if active.get_untracked() != ids[i] {
					active.set(ids[i]);
				}
			}
		});
		dom::listen(&window, "scroll", on_scroll);

		let on_key: Closure<dyn FnMut(KeyboardEvent)> = Closure::new(move |ev: KeyboardEvent| {
			if ev.key() == "Escape" && menu_open.get_untracked() {
				menu_open.set(false);
			}
		});
		dom::listen(&window, "keydown", on_key);
	});

	// The open menu locks body scrolling.
	Effect::new(move |_| dom::set_body_scroll_locked(menu_open.get()));

	let toggle_menu = move || menu_open.update(|open| *open = !*open);
	let close_menu = move || {
		if menu_open.get_untracked() {
			menu_open.set(false);
		}
	};

	let navigate = move |id: &'static str| {
		close_menu();
		dom::scroll_to_section(id, scrollspy::NAV_SCROLL_OFFSET);
	};

	view! {
		<nav class="navbar" class:scrolled=move || scrolled.get()>
			<a
				class="nav-brand"
				href="#home"
				on:click=move |ev| {
					ev.prevent_default();
					navigate("home");
				}
			>
				"~/"
			</a>
			<button class="hamburger" class:active=move || menu_open.get() on:click=move |_| toggle_menu()>
				<span></span>
				<span></span>
				<span></span>
			</button>
			<ul class="nav-links" class:active=move || menu_open.get()>
				{SECTIONS
					.iter()
					.map(|&(id, label)| {
						view! {
							<li>
								<a
									class="nav-link"
									class:active=move || active.get() == id
									href=format!("#{id}")
									on:click=move |ev| {
										ev.prevent_default();
										navigate(id);
									}
								>
									{label}
								</a>
							</li>
						}
					})
					.collect_view()}
			</ul>
		</nav>
		<div
			class="mobile-menu-overlay"
			class:active=move || menu_open.get()
			on:click=move |_| close_menu()
		></div>
	}
}

/// Floating button that appears past the fold and smooth-scrolls home.
#[component]
pub fn BackToTop() -> impl IntoView {
	let visible = RwSignal::new(false);

	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		let on_scroll: Closure<dyn FnMut()> = Closure::new(move || {
			let now = scrollspy::back_to_top_visible(dom::scroll_y());
			if visible.get_untracked() != now {
				visible.set(now);
			}
		});
		dom::listen(&window, "scroll", on_scroll);
	});

	view! {
		<button
			class="back-to-top"
			class:visible=move || visible.get()
			title="Back to top"
			on:click=move |_| dom::smooth_scroll_to(0.0)
		>
			"^"
		</button>
	}
}
