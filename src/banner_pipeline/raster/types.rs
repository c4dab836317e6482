//! Pixel data model for banners and overlay icons

use image::{ImageFormat, Rgba, RgbaImage};

/// A pixel value. Only ever compared for background matching.
pub type Color = Rgba<u8>;

/// Inclusive rectangle enclosing every non-background pixel.
///
/// A banner with no content has no box at all; callers carry that state as
/// `Option<BoundingBox>` rather than as an empty box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    /// Box covering the single pixel at `(x, y)`.
    pub fn at(x: u32, y: u32) -> Self {
        Self {
            left: x,
            top: y,
            right: x,
            bottom: y,
        }
    }

    /// Grows the box so that it contains `(x, y)`.
    pub fn include(&mut self, x: u32, y: u32) {
        self.left = self.left.min(x);
        self.top = self.top.min(y);
        self.right = self.right.max(x);
        self.bottom = self.bottom.max(y);
    }

    pub fn width(&self) -> u32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top + 1
    }
}

/// Destination rectangle in the output raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub dest_x: u32,
    pub dest_y: u32,
    pub dest_w: u32,
    pub dest_h: u32,
}

impl Placement {
    /// True when the rectangle lies entirely inside a `width` x `height` canvas.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.dest_x as u64 + self.dest_w as u64 <= width as u64
            && self.dest_y as u64 + self.dest_h as u64 <= height as u64
    }
}

/// A decoded image together with what is needed to write it back unchanged
/// in layout.
#[derive(Debug, Clone)]
pub struct BannerRaster {
    /// Pixels, always widened to RGBA in memory
    pub pixels: RgbaImage,
    /// Container format the bytes were decoded from
    pub format: ImageFormat,
    /// Whether the source carried an alpha channel
    pub has_alpha: bool,
}

impl BannerRaster {
    pub fn new(pixels: RgbaImage, format: ImageFormat, has_alpha: bool) -> Self {
        Self {
            pixels,
            format,
            has_alpha,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// New raster with the same format and channel layout as `self`.
    pub fn with_pixels(&self, pixels: RgbaImage) -> Self {
        Self {
            pixels,
            format: self.format,
            has_alpha: self.has_alpha,
        }
    }
}
