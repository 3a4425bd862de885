//! Typewriter headline state machine.

/// Delay before the first tick once the page has loaded.
pub const START_DELAY_MS: i32 = 500;
/// Per-character delay while typing.
const TYPE_MS: i32 = 100;
/// Per-character delay while deleting.
const DELETE_MS: i32 = 50;
/// Hold on a completed word before deleting it.
const HOLD_MS: i32 = 2000;
/// Pause on the empty string before typing the next word.
const GAP_MS: i32 = 500;

/// One step of the animation: what to show and when to tick again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tick {
	pub text: String,
	pub delay_ms: i32,
}

/// Cycles through a word list, typing forward and deleting backward.
///
/// Each `tick` moves one character. Completing a word switches to deleting
/// after a long hold; emptying one advances to the next word (wrapping) after
/// a short gap.
#[derive(Clone, Debug)]
pub struct Typewriter {
	words: Vec<String>,
	word: usize,
	chars: usize,
	deleting: bool,
}

impl Typewriter {
	/// An empty `words` list yields a machine that idles on the empty string.
	pub fn new(words: Vec<String>) -> Self {
		Self {
			words,
			word: 0,
			chars: 0,
			deleting: false,
		}
	}

	/// Advance one character and report the new text plus the next delay.
	pub fn tick(&mut self) -> Tick {
		let Some(word) = self.words.get(self.word) else {
			return Tick { text: String::new(), delay_ms: GAP_MS };
		};
		let len = word.chars().count();

		if self.deleting {
			self.chars = self.chars.saturating_sub(1);
		} else {
			self.chars += 1;
		}
		let text: String = word.chars().take(self.chars).collect();

		let mut delay_ms = if self.deleting { DELETE_MS } else { TYPE_MS };
		if !self.deleting && self.chars == len {
			self.deleting = true;
			delay_ms = HOLD_MS;
		} else if self.deleting && self.chars == 0 {
			self.deleting = false;
			self.word = (self.word + 1) % self.words.len();
			delay_ms = GAP_MS;
		}

		Tick { text, delay_ms }
	}
}
