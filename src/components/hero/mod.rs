//! Landing section with the typewriter headline and 3D ornaments.

mod component;
mod typewriter;

pub use component::Hero;
pub use typewriter::{Tick, Typewriter};
