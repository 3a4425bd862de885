//! Intro overlay and the page entry sequence.

mod component;
mod spin;

pub use component::{IntroScreen, Phase};
pub use spin::LogoSpin;
