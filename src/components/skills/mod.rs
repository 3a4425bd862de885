//! Skills section with tilt cards and progress bars.

mod component;

pub use component::Skills;
