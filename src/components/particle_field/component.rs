//! Leptos component hosting the particle canvas.
//!
//! The component creates a fixed, full-viewport canvas behind the page
//! content, seeds a [`ParticleField`] from the window size, and advances it
//! once per animation frame. Pointer position is tracked at the window level
//! because the canvas itself never receives events; the first touch event
//! latches the field into touch mode.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use crate::components::fx::dom;
use crate::theme::FieldStyle;

use super::field::ParticleField;
use super::pointer::PointerState;
use super::render::CanvasSurface;
use super::rng::Prng;

/// Drives a callback once per display repaint until stopped.
///
/// The callback keeps itself alive through a self-referential `Rc` cycle and
/// reschedules after every frame. `stop` flips a shared flag and cancels the
/// pending frame, so the handle stays cheap to move into a cleanup hook.
pub struct FrameLoop {
	running: Arc<AtomicBool>,
	// Pending requestAnimationFrame handle; 0 means none (real handles start at 1).
	frame_id: Arc<AtomicI32>,
}

impl FrameLoop {
	/// Start invoking `frame` before every repaint.
	pub fn start(mut frame: impl FnMut() + 'static) -> Self {
		let running = Arc::new(AtomicBool::new(true));
		let frame_id = Arc::new(AtomicI32::new(0));

		let closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
		let inner = closure.clone();
		let (running_cb, frame_id_cb) = (running.clone(), frame_id.clone());
		*closure.borrow_mut() = Some(Closure::new(move || {
			if !running_cb.load(Ordering::Relaxed) {
				return;
			}
			frame();
			if let Some(ref cb) = *inner.borrow() {
				frame_id_cb.store(request_frame(cb), Ordering::Relaxed);
			}
		}));
		if let Some(ref cb) = *closure.borrow() {
			frame_id.store(request_frame(cb), Ordering::Relaxed);
		}

		Self { running, frame_id }
	}

	/// Deregister the pending frame callback; the loop never fires again.
	pub fn stop(&self) {
		self.running.store(false, Ordering::Relaxed);
		let id = self.frame_id.swap(0, Ordering::Relaxed);
		if id != 0 {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
	}
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> i32 {
	web_sys::window()
		.and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
		.unwrap_or(0)
}

/// Renders the ambient particle field on a viewport-sized canvas.
#[component]
pub fn ParticleCanvas() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = dom::viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let mut rng = Prng::new(js_sys::Date::now() as u64 as u32);
		let field = Rc::new(RefCell::new(ParticleField::new(
			w,
			h,
			FieldStyle::default(),
			&mut rng,
		)));
		let pointer = Rc::new(RefCell::new(PointerState::new()));
		let mut surface = CanvasSurface::new(ctx);

		// Resizes update the canvas backing store and the wrap bounds only;
		// particles stay put and wrap on their next update.
		{
			let (field_resize, canvas_resize) = (field.clone(), canvas.clone());
			let on_resize: Closure<dyn FnMut()> = Closure::new(move || {
				let Some(window) = web_sys::window() else {
					return;
				};
				let (nw, nh) = dom::viewport_size(&window);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				field_resize.borrow_mut().resize(nw, nh);
			});
			dom::listen(&window, "resize", on_resize);
		}

		{
			let pointer_move = pointer.clone();
			let on_pointer: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |ev: MouseEvent| {
				pointer_move
					.borrow_mut()
					.set_position(ev.client_x() as f64, ev.client_y() as f64);
			});
			dom::listen(&window, "mousemove", on_pointer);

			let pointer_touch = pointer.clone();
			let on_touch: Closure<dyn FnMut()> = Closure::new(move || {
				pointer_touch.borrow_mut().mark_touch_primary();
			});
			let options = AddEventListenerOptions::new();
			options.set_once(true);
			options.set_passive(true);
			dom::listen_with_options(&window, "touchstart", on_touch, &options);
		}

		let frame_loop = FrameLoop::start(move || {
			let pointer_now = *pointer.borrow();
			field.borrow_mut().step(&pointer_now, &mut surface);
		});
		on_cleanup(move || frame_loop.stop());
	});

	view! { <canvas node_ref=canvas_ref id="particles" class="particle-canvas"></canvas> }
}
