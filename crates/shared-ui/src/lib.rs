//! Styled Dioxus components shared by the clinic pages.

pub mod components;

pub use components::*;
