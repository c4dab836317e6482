//! Compositing module
//!
//! Renders the output banner from the source pixels, the background colour
//! and a planned placement.

mod compositor;

pub use compositor::{composite_relocate, composite_replace};
