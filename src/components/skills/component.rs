//! Skills section: tilting cards with animated proficiency bars.

use leptos::html;
use leptos::prelude::*;
use web_sys::{MouseEvent, TouchEvent};

use crate::components::fx::{dom, hover, motion, reveal};
use crate::components::intro::Phase;
use crate::site::SiteData;

/// Delay between the section revealing and the bars filling.
const BAR_DELAY_MS: i32 = 500;

/// Skill cards that tilt toward the cursor; each card's bar fills to its
/// percentage half a second after the section first scrolls into view.
#[component]
pub fn Skills() -> impl IntoView {
	let phase = expect_context::<RwSignal<Phase>>();
	let data = expect_context::<SiteData>();

	let section_ref = NodeRef::<html::Section>::new();
	let bars_on = RwSignal::new(false);

	let hover_ok = dom::hover_capable();
	let touch = dom::touch_device();

	Effect::new(move |_| {
		if phase.get() != Phase::Loaded {
			return;
		}
		let Some(section) = section_ref.get_untracked() else {
			return;
		};
		reveal::on_first_visible(&section, move || {
			dom::schedule(BAR_DELAY_MS, move || bars_on.set(true));
		});
	});

	view! {
		<section class="skills" id="skills" node_ref=section_ref>
			<div class="section-header reveal">
				<h2 class="section-title">"Skills"</h2>
				<div class="section-line"></div>
			</div>
			<div class="skills-grid">
				{data.skills
					.into_iter()
					.map(|skill| {
						let max_tilt = skill.tilt_max.unwrap_or(motion::TILT_DEFAULT_MAX);
						let percent = skill.percent;
						view! {
							<div
								class="skill-card card-3d reveal"
								on:mousemove=move |ev: MouseEvent| {
									if hover_ok {
										hover::tilt_move(&ev, max_tilt);
									}
								}
								on:mouseenter=move |ev: MouseEvent| hover::glow_enter(&ev)
								on:mouseleave=move |ev: MouseEvent| {
									if hover_ok {
										hover::tilt_leave(&ev);
									}
									hover::glow_leave(&ev);
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
								<div class="card-glow"></div>
								<div class="skill-info">
									<span class="skill-name">{skill.name}</span>
									<span class="skill-percent">{format!("{percent}%")}</span>
								</div>
								<div class="skill-bar">
									<div
										class="progress-bar"
										style:width=move || format!("{}%", if bars_on.get() { percent } else { 0 })
									></div>
								</div>
							</div>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}
