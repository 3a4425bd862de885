//! Ambient particle field rendered behind the page content.
//!
//! A fixed population of slow-drifting particles wraps around the viewport,
//! shies away from the pointer on hover-capable devices, and gets joined by
//! distance-faded links. Each animation frame runs one `step`: clear, update
//! and draw every particle, then the link pass.

mod component;
mod field;
mod links;
mod pointer;
mod render;
mod rng;
mod surface;

pub use component::{FrameLoop, ParticleCanvas};
pub use field::{Bounds, Particle, ParticleField, REPULSION_RADIUS};
pub use links::{LINK_DISTANCE, draw_links};
pub use pointer::PointerState;
pub use render::CanvasSurface;
pub use rng::Prng;
pub use surface::{RecordingSurface, Surface, SurfaceOp};
