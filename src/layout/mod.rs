//! Utilities for positioning content on pages: margin geometry, text
//! measurement, and the whitespace line splitter used by the sheet layout
//! engine.
//!
//! The layout functions here are deliberately small: they measure and
//! split, but never decide *where* content goes. Pagination policy lives
//! in [crate::sheet].

mod margins;
mod text;

pub use margins::*;
pub use text::*;
