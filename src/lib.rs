//! folio-fx: the interactive layer of a single-page portfolio site.
//!
//! The crate renders client-side with Leptos over a statically styled page:
//! an ambient particle field behind the content, an intro gate with a
//! draggable 3D logo, scroll reveals, a typewriter headline, pointer-driven
//! 3D flourishes, and one well-hidden easter egg. Page content is read from
//! an embedded JSON block so the markup can be re-skinned without a rebuild.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};
use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

pub mod components;
pub mod site;
pub mod theme;

pub use components::particle_field::ParticleCanvas;
pub use site::SiteData;

use components::about::About;
use components::contact::Contact;
use components::fx::{dom, easter_egg, konami::KonamiTracker, reveal};
use components::hero::Hero;
use components::intro::{IntroScreen, Phase};
use components::navbar::{BackToTop, NavBar};
use components::particle_field::Prng;
use components::skills::Skills;

/// Styles the components rely on that are not the stylesheet's business:
/// the reveal end-state that overrides the inline pre-hide, and the easter
/// egg keyframes.
const APP_CSS: &str = "
.animate {
	opacity: 1 !important;
	transform: translateY(0) !important;
}
@keyframes rainbow {
	0% { filter: hue-rotate(0deg); }
	100% { filter: hue-rotate(360deg); }
}
@keyframes confetti-fall {
	to {
		transform: translateY(100vh) rotate(720deg);
		opacity: 0;
	}
}
";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("folio-fx: logging initialized");
}

/// Root component: page chrome, the section stack, and the two behaviors
/// that belong to the page rather than any one section.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let phase = RwSignal::new(Phase::Intro);
	provide_context(phase);

	let data = site::load_site_data().unwrap_or_default();
	let title = format!("{} | Portfolio", data.name);
	provide_context(data);

	// Konami code, page-wide: ten keys and the page celebrates.
	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		let tracker = Rc::new(RefCell::new(KonamiTracker::new()));
		let rng = Rc::new(RefCell::new(Prng::new(js_sys::Date::now() as u64 as u32)));
		let on_key: Closure<dyn FnMut(KeyboardEvent)> = Closure::new(move |ev: KeyboardEvent| {
			if tracker.borrow_mut().feed(&ev.code()) {
				easter_egg::activate(&mut rng.borrow_mut());
			}
		});
		dom::listen(&window, "keydown", on_key);
	});

	// Reveal-on-scroll for every element carrying the marker class, once the
	// loading screen is out of the way. Section-specific triggers (counters,
	// bars, terminal) register their own observers.
	Effect::new(move |_| {
		if phase.get() != Phase::Loaded {
			return;
		}
		let Some(body) = dom::document().and_then(|d| d.body()) else {
			return;
		};
		for element in dom::query_all(&body, ".reveal") {
			reveal::reveal(&element);
		}
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Style>{APP_CSS}</Style>

		<IntroScreen />
		<ParticleCanvas />
		<NavBar />
		<main>
			<Hero />
			<About />
			<Skills />
			<Contact />
		</main>
		<BackToTop />
	}
}
