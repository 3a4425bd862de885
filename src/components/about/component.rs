//! About section markup plus the counter and terminal reveal effects.

use leptos::html;
use leptos::prelude::*;

use crate::components::fx::{dom, reveal};
use crate::components::intro::Phase;
use crate::site::SiteData;

use super::counter::Counter;

/// Delay between the section revealing and the counters starting.
const COUNTER_DELAY_MS: i32 = 300;
/// Stagger between consecutive terminal lines fading in.
const TERMINAL_STAGGER_MS: i32 = 200;

/// About section: bio copy, a fake terminal that types itself out, and
/// statistics that count up the first time they scroll into view.
#[component]
pub fn About() -> impl IntoView {
	let phase = expect_context::<RwSignal<Phase>>();
	let data = expect_context::<SiteData>();

	let section_ref = NodeRef::<html::Section>::new();
	let terminal_ref = NodeRef::<html::Div>::new();

	let stats = data.stats.clone();
	let stat_texts: Vec<RwSignal<String>> =
		stats.iter().map(|_| RwSignal::new("0+".to_string())).collect();
	let line_shown: Vec<RwSignal<bool>> =
		data.terminal_lines.iter().map(|_| RwSignal::new(false)).collect();

	// Counters start once, shortly after the section first scrolls into view.
	// Observers only register after the loading screen is gone.
	{
		let targets: Vec<u32> = stats.iter().map(|stat| stat.target).collect();
		let stat_texts = stat_texts.clone();
		Effect::new(move |_| {
			if phase.get() != Phase::Loaded {
				return;
			}
			let Some(section) = section_ref.get_untracked() else {
				return;
			};
			let targets = targets.clone();
			let stat_texts = stat_texts.clone();
			reveal::on_first_visible(&section, move || {
				dom::schedule(COUNTER_DELAY_MS, move || {
					for (text, target) in stat_texts.into_iter().zip(targets) {
						let mut counter = Counter::new(target);
						dom::animate_while(move || {
							let (value, running) = counter.tick();
							text.set(value);
							running
						});
					}
				});
			});
		});
	}

	// Terminal lines fade in staggered when the terminal becomes visible.
	{
		let line_shown = line_shown.clone();
		Effect::new(move |_| {
			if phase.get() != Phase::Loaded {
				return;
			}
			let Some(terminal) = terminal_ref.get_untracked() else {
				return;
			};
			let line_shown = line_shown.clone();
			reveal::on_first_visible(&terminal, move || {
				for (i, shown) in line_shown.into_iter().enumerate() {
					dom::schedule(i as i32 * TERMINAL_STAGGER_MS, move || shown.set(true));
				}
			});
		});
	}

	let terminal_lines = data.terminal_lines.clone();

	view! {
		<section class="about" id="about" node_ref=section_ref>
			<div class="section-header reveal">
				<h2 class="section-title">"About Me"</h2>
				<div class="section-line"></div>
			</div>
			<div class="about-content reveal">
				<div class="about-text">
					<p>
						"I turn ideas into interactive experiences. Most of my time goes "
						"into the space where design meets engineering: interfaces that "
						"feel alive without getting in the way."
					</p>
					<p>
						"Away from the keyboard I collect synthesizers, over-engineer my "
						"coffee, and read more RFCs than is probably healthy."
					</p>
				</div>
				<div class="terminal" node_ref=terminal_ref>
					<div class="terminal-header">
						<span class="terminal-dot"></span>
						<span class="terminal-dot"></span>
						<span class="terminal-dot"></span>
						<span class="terminal-title">"~/about"</span>
					</div>
					<div class="terminal-body">
						{terminal_lines
							.into_iter()
							.zip(line_shown)
							.map(|(line, shown)| {
								view! {
									<p
										style:opacity=move || if shown.get() { "1" } else { "0" }
										style:transition="opacity 0.3s ease"
									>
										{line}
									</p>
								}
							})
							.collect_view()}
					</div>
				</div>
			</div>
			<div class="about-stats">
				{stats
					.into_iter()
					.zip(stat_texts)
					.map(|(stat, text)| {
						view! {
							<div class="stat reveal">
								<span class="stat-number">{move || text.get()}</span>
								<span class="stat-label">{stat.label}</span>
							</div>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}
