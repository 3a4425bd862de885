//! Hero section markup and the effects that animate it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent, TouchEvent};

use crate::components::fx::{dom, hover, motion};
use crate::components::intro::Phase;
use crate::components::navbar::NAV_SCROLL_OFFSET;
use crate::site::SiteData;

use super::typewriter::{START_DELAY_MS, Typewriter};

/// Landing section: typewriter headline, scroll-parallax background shapes,
/// and a 3D ornament scene that leans toward the pointer.
#[component]
pub fn Hero() -> impl IntoView {
	let phase = expect_context::<RwSignal<Phase>>();
	let data = expect_context::<SiteData>();

	let typed = RwSignal::new(String::new());
	let shapes_ref = NodeRef::<html::Div>::new();
	let scene_ref = NodeRef::<html::Div>::new();

	let hover_ok = dom::hover_capable();
	let touch = dom::touch_device();

	// The headline starts cycling once the loading screen has faded.
	let words = data.words.clone();
	Effect::new(move |_| {
		if phase.get() == Phase::Loaded {
			start_typewriter(words.clone(), typed);
		}
	});

	// Scroll parallax for the background shapes, at most one transform pass
	// per animation frame however fast scroll events arrive.
	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		let ticking = Rc::new(Cell::new(false));
		let on_scroll: Closure<dyn FnMut()> = Closure::new(move || {
			if ticking.get() {
				return;
			}
			ticking.set(true);
			let ticking = ticking.clone();
			dom::next_frame(move || {
				ticking.set(false);
				let Some(container) = shapes_ref.get_untracked() else {
					return;
				};
				let scroll_y = dom::scroll_y();
				let children = container.children();
				for i in 0..children.length() {
					let Some(shape) = children.item(i).and_then(|el| el.dyn_into().ok()) else {
						continue;
					};
					dom::set_transform(&shape, &motion::shape_parallax_transform(scroll_y, i as usize));
				}
			});
		});
		dom::listen(&window, "scroll", on_scroll);
	});

	// Pointer parallax across the scene, desktop pointers only.
	Effect::new(move |_| {
		if !hover_ok {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		let on_move: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |ev: MouseEvent| {
			let Some(window) = web_sys::window() else {
				return;
			};
			let (width, height) = dom::viewport_size(&window);
			if width <= 0.0 || height <= 0.0 {
				return;
			}
			let (nx, ny) = motion::normalized_pointer(ev.client_x() as f64, ev.client_y() as f64, width, height);
			let Some(scene) = scene_ref.get_untracked() else {
				return;
			};
			drive_scene(&scene, nx, ny);
		});
		dom::listen(&window, "mousemove", on_move);
	});

	let name = data.name.clone();
	let tagline = data.tagline.clone();

	view! {
		<section class="hero" id="home">
			<div class="floating-shapes" node_ref=shapes_ref>
				<span></span>
				<span></span>
				<span></span>
				<span></span>
			</div>
			<div class="hero-content">
				<div class="hero-text">
					<p class="hero-greeting reveal">"Hi, my name is"</p>
					<h1
						class="hero-title text-3d reveal"
						on:mousemove=move |ev: MouseEvent| hover::text_depth_move(&ev)
						on:mouseleave=move |ev: MouseEvent| hover::text_depth_leave(&ev)
					>
						{name}
					</h1>
					<h2 class="hero-subtitle reveal">
						"I'm a "
						<span class="dynamic-text">{move || typed.get()}</span>
						<span class="cursor">"|"</span>
					</h2>
					<p class="hero-tagline reveal">{tagline}</p>
					<div class="hero-buttons reveal">
						<a
							class="btn btn-primary magnetic"
							href="#contact"
							on:click=move |ev| {
								ev.prevent_default();
								dom::scroll_to_section("contact", NAV_SCROLL_OFFSET);
							}
							on:mousemove=move |ev: MouseEvent| {
								if hover_ok {
									hover::magnetic_move(&ev);
								}
							}
							on:mouseleave=move |ev: MouseEvent| {
								if hover_ok {
									hover::magnetic_leave(&ev);
								}
							}
							on:touchstart=move |ev: TouchEvent| {
								if touch {
									hover::touch_press_buzz(&ev);
								}
							}
							on:touchend=move |ev: TouchEvent| {
								if touch {
									hover::touch_release(&ev);
								}
							}
						>
							"Get In Touch"
						</a>
						<a
							class="btn btn-secondary"
							href="#skills"
							on:click=move |ev| {
								hover::ripple(&ev);
								ev.prevent_default();
								dom::scroll_to_section("skills", NAV_SCROLL_OFFSET);
							}
							on:touchstart=move |ev: TouchEvent| {
								if touch {
									hover::touch_press_buzz(&ev);
								}
							}
							on:touchend=move |ev: TouchEvent| {
								if touch {
									hover::touch_release(&ev);
								}
							}
						>
							"View My Work"
							<span class="btn-ripple"></span>
						</a>
					</div>
				</div>
				<div class="hero-image reveal">
					<div class="scene-3d" node_ref=scene_ref>
						<div class="floating-cube"></div>
						<div class="floating-cube"></div>
						<div class="floating-cube"></div>
						<div class="floating-pyramid"></div>
						<div class="floating-ring"></div>
						<div class="floating-ring"></div>
						<div class="floating-ring"></div>
						<div class="floating-sphere"></div>
					</div>
				</div>
			</div>
		</section>
	}
}

/// Kick off the endless type/delete cycle driving the `dynamic-text` span.
///
/// The closure reschedules itself with the delay each tick reports, through
/// the same self-referential cycle the frame loop uses, and runs for the rest
/// of the page's life.
fn start_typewriter(words: Vec<String>, text: RwSignal<String>) {
	let machine = Rc::new(RefCell::new(Typewriter::new(words)));
	let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let inner = Rc::clone(&tick);

	*tick.borrow_mut() = Some(Closure::new(move || {
		let step = machine.borrow_mut().tick();
		text.set(step.text);
		if let Some(ref cb) = *inner.borrow() {
			schedule_tick(cb, step.delay_ms);
		}
	}));

	// The first tick waits out the loading fade.
	if let Some(ref cb) = *tick.borrow() {
		schedule_tick(cb, START_DELAY_MS);
	}
}

fn schedule_tick(cb: &Closure<dyn FnMut()>, delay_ms: i32) {
	if let Some(window) = web_sys::window() {
		let _ =
			window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), delay_ms);
	}
}

/// Apply pointer parallax to every ornament in the scene.
fn drive_scene(scene: &Element, nx: f64, ny: f64) {
	for (i, cube) in dom::query_all(scene, ".floating-cube").into_iter().enumerate() {
		dom::set_transform(&cube, &motion::cube_transform(nx, ny, i));
	}
	for pyramid in dom::query_all(scene, ".floating-pyramid") {
		dom::set_transform(&pyramid, &motion::pyramid_transform(nx, ny));
	}
	for (i, ring) in dom::query_all(scene, ".floating-ring").into_iter().enumerate() {
		dom::set_transform(&ring, &motion::ring_transform(nx, ny, i));
	}
	for sphere in dom::query_all(scene, ".floating-sphere") {
		dom::set_transform(&sphere, &motion::sphere_transform(nx, ny));
	}
}
