//! Contact section with magnetic outbound links.

use leptos::prelude::*;
use web_sys::{MouseEvent, TouchEvent};

use crate::components::fx::{dom, hover};
use crate::site::SiteData;

/// Closing section: a short invitation and the outbound links, which chase
/// the cursor on desktop and press in under touch.
#[component]
pub fn Contact() -> impl IntoView {
	let data = expect_context::<SiteData>();

	let hover_ok = dom::hover_capable();
	let touch = dom::touch_device();

	view! {
		<section class="contact" id="contact">
			<div class="section-header reveal">
				<h2 class="section-title">"Get In Touch"</h2>
				<div class="section-line"></div>
			</div>
			<p class="contact-blurb reveal">
				"Have a project in mind, or just want to say hi? My inbox is always open."
			</p>
			<div class="contact-links">
				{data.contact
					.into_iter()
					.map(|link| {
						view! {
							<a
								class="contact-link magnetic reveal"
								href=link.href
								target="_blank"
								rel="noreferrer"
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
										hover::touch_press(&ev);
									}
								}
								on:touchend=move |ev: TouchEvent| {
									if touch {
										hover::touch_release(&ev);
									}
								}
							>
								{link.label}
							</a>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}
