//! Navigation bar, scrollspy, and back-to-top.

mod component;
mod scrollspy;

pub use component::{BackToTop, NavBar};
pub use scrollspy::{NAV_SCROLL_OFFSET, SectionSpan, active_section};
