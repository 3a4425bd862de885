//! Stat counter run-up.

/// Counts from zero toward a target over about two seconds of frames.
///
/// One tick is one animation frame; the increment is sized for a 2000ms run
/// at 16ms per frame. Intermediate values render floored with a trailing `+`,
/// and the final tick lands on the exact target.
#[derive(Clone, Debug)]
pub struct Counter {
	target: u32,
	current: f64,
	increment: f64,
}

impl Counter {
	pub fn new(target: u32) -> Self {
		Self {
			target,
			current: 0.0,
			increment: target as f64 / 125.0,
		}
	}

	/// Advance one frame: the text to show and whether to keep running.
	pub fn tick(&mut self) -> (String, bool) {
		self.current += self.increment;
		if self.current < self.target as f64 {
			(format!("{}+", self.current.floor() as u32), true)
		} else {
			(format!("{}+", self.target), false)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn run(target: u32) -> Vec<String> {
		let mut counter = Counter::new(target);
		let mut texts = Vec::new();
		loop {
			let (text, running) = counter.tick();
			texts.push(text);
			if !running {
				break;
			}
			assert!(texts.len() < 1_000, "counter for {target} never finished");
		}
		texts
	}

	#[test]
	fn counts_up_to_the_exact_target() {
		let texts = run(50);
		assert_eq!(texts.first().unwrap(), "0+");
		assert_eq!(texts.last().unwrap(), "50+");
	}

	#[test]
	fn runs_for_about_two_seconds_of_frames() {
		let ticks = run(50).len();
		assert!((125..=126).contains(&ticks), "{ticks}");
	}

	#[test]
	fn never_counts_down() {
		let values: Vec<u32> = run(30)
			.iter()
			.map(|text| text.trim_end_matches('+').parse().unwrap())
			.collect();
		assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
	}

	#[test]
	fn zero_target_finishes_immediately() {
		let mut counter = Counter::new(0);
		assert_eq!(counter.tick(), ("0+".to_string(), false));
	}
}
