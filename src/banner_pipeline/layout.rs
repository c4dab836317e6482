//! Layout module
//!
//! Pure geometry over a decoded banner: which colour is background, where the
//! current logo sits, and where the new one goes. Nothing here touches pixels
//! beyond reading them.

mod sampler;
mod locator;
mod planner;
pub mod types;

pub use sampler::sample_background;
pub use locator::{locate_content, locate_content_with};
pub use planner::{plan_relocate, plan_replace};
pub use types::{BackgroundMatch, LayoutConfig, LayoutMode};
