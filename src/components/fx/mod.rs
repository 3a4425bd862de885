//! Cross-cutting interaction effects.
//!
//! DOM plumbing, the pure motion math behind pointer effects, reveal-on-
//! scroll observers, and the Konami easter egg.

pub mod confetti;
pub mod dom;
pub mod easter_egg;
pub mod hover;
pub mod konami;
pub mod motion;
pub mod reveal;
