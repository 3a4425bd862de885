//! Scroll-position math for the navigation bar.

/// Scroll offset past which the navbar switches to its compact style.
pub const NAVBAR_SCROLLED_Y: f64 = 50.0;
/// Scroll offset past which the back-to-top button shows.
pub const BACK_TO_TOP_Y: f64 = 500.0;
/// Height reserved for the fixed navbar when jumping to a section.
pub const NAV_SCROLL_OFFSET: f64 = 80.0;
/// The active-section probe sits this far below the scroll position, so a
/// section counts as active while its heading is under the navbar.
pub const PROBE_OFFSET: f64 = 150.0;

/// A section's document-space extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpan {
	pub top: f64,
	pub height: f64,
}

impl SectionSpan {
	fn contains(&self, probe: f64) -> bool {
		probe >= self.top && probe < self.top + self.height
	}
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
	scroll_y > NAVBAR_SCROLLED_Y
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
	scroll_y > BACK_TO_TOP_Y
}

/// Index of the active section: the last span containing the probe line.
/// `None` means no span matched; callers keep the previous highlight.
pub fn active_section(spans: &[SectionSpan], scroll_y: f64) -> Option<usize> {
	let probe = scroll_y + PROBE_OFFSET;
	spans.iter().rposition(|span| span.contains(probe))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn stacked() -> Vec<SectionSpan> {
		vec![
			SectionSpan { top: 0.0, height: 600.0 },
			SectionSpan { top: 600.0, height: 800.0 },
			SectionSpan { top: 1400.0, height: 400.0 },
		]
	}

	#[test]
	fn probe_leads_the_scroll_position() {
		// scroll 500 probes at 650, inside the second section.
		assert_eq!(active_section(&stacked(), 500.0), Some(1));
	}

	#[test]
	fn section_top_is_inclusive_and_bottom_exclusive() {
		// Probe exactly at 600: first section's [0, 600) no longer contains it.
		assert_eq!(active_section(&stacked(), 450.0), Some(1));
		// One less and it still belongs to the first.
		assert_eq!(active_section(&stacked(), 449.0), Some(0));
	}

	#[test]
	fn no_match_reports_none() {
		let spans = vec![SectionSpan { top: 1000.0, height: 100.0 }];
		assert_eq!(active_section(&spans, 0.0), None);
	}

	#[test]
	fn overlapping_spans_resolve_to_the_later_one() {
		let spans = vec![
			SectionSpan { top: 0.0, height: 1000.0 },
			SectionSpan { top: 100.0, height: 100.0 },
		];
		assert_eq!(active_section(&spans, 0.0), Some(1));
	}

	#[test]
	fn navbar_compacts_just_past_fifty() {
		assert!(!navbar_scrolled(50.0));
		assert!(navbar_scrolled(50.1));
	}

	#[test]
	fn back_to_top_shows_just_past_five_hundred() {
		assert!(!back_to_top_visible(500.0));
		assert!(back_to_top_visible(500.1));
	}
}
