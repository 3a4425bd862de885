//! About section with animated stats and the fake terminal.

mod component;
mod counter;

pub use component::About;
pub use counter::Counter;
