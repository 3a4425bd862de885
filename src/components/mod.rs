//! Leptos components making up the page, top to bottom, plus the shared
//! interaction effects they hang off.

pub mod about;
pub mod contact;
pub mod fx;
pub mod hero;
pub mod intro;
pub mod navbar;
pub mod particle_field;
pub mod skills;
