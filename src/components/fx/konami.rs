//! Konami code tracking.

/// The classic sequence, matched against `KeyboardEvent.code` values.
const SEQUENCE: [&str; 10] = [
	"ArrowUp",
	"ArrowUp",
	"ArrowDown",
	"ArrowDown",
	"ArrowLeft",
	"ArrowRight",
	"ArrowLeft",
	"ArrowRight",
	"KeyB",
	"KeyA",
];

/// Positional matcher for the code sequence.
///
/// Any mismatch resets progress to the start. There is no partial-restart
/// credit: a wrong key discards everything, even when it could have begun a
/// new attempt.
#[derive(Debug, Default)]
pub struct KonamiTracker {
	progress: usize,
}

impl KonamiTracker {
	pub fn new() -> Self {
		Self::default()
	}

	/// Feed one key code; true exactly when the full sequence completes.
	pub fn feed(&mut self, code: &str) -> bool {
		if code == SEQUENCE[self.progress] {
			self.progress += 1;
			if self.progress == SEQUENCE.len() {
				self.progress = 0;
				return true;
			}
		} else {
			self.progress = 0;
		}
		false
	}
}
