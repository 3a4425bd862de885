//! Contact section.

mod component;

pub use component::Contact;
