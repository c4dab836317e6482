//! Layout configuration types

use crate::banner_pipeline::raster::types::Color;

/// Where the painted logo comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Paint an external icon, scaled down to fit the logo area
    Replace,
    /// Move the banner's existing artwork, pixel for pixel
    Relocate,
}

/// How a pixel is judged to be background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundMatch {
    /// Exact RGBA equality
    #[default]
    Exact,
    /// Every channel (alpha included) within the given absolute difference
    Tolerance(u8),
}

impl BackgroundMatch {
    pub fn matches(&self, pixel: &Color, background: &Color) -> bool {
        match *self {
            BackgroundMatch::Exact => pixel == background,
            BackgroundMatch::Tolerance(limit) => pixel
                .0
                .iter()
                .zip(background.0.iter())
                .all(|(&a, &b)| a.abs_diff(b) <= limit),
        }
    }
}

/// Geometry knobs for the planner. Ratios are fractions of the banner size.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Right-hand margin between the logo and the banner edge, in pixels
    pub padding: u32,
    /// Logo area assumed when the banner has no content, as (width, height) ratios
    pub default_area: (f64, f64),
    /// Upper bound on the overlay size, as (width, height) ratios
    pub max_extent: (f64, f64),
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: 10,
            default_area: (0.25, 0.6),
            max_extent: (0.6, 0.9),
        }
    }
}
