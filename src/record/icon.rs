//! In-memory application icons
//!
//! Icons are square RGBA8 bitmaps. Pixel data is reference counted so entries
//! can be cloned into the paged view without copying bitmaps.

use crate::error::{LaunchBoardError, Result};
use image::{DynamicImage, imageops::FilterType};
use std::fmt;
use std::sync::Arc;

/// Number of bytes per RGBA8 pixel
const BYTES_PER_PIXEL: usize = 4;

/// RGBA8 bitmap for an application or folder tile
#[derive(Clone, PartialEq, Eq)]
pub struct Icon {
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
}

impl Icon {
    /// Build an icon from raw RGBA8 pixel data
    ///
    /// Fails if `rgba` is not exactly `width * height * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if rgba.len() != expected {
            return Err(LaunchBoardError::IconResolutionFailed(format!(
                "expected {expected} bytes of RGBA data for {width}x{height}, got {}",
                rgba.len()
            )));
        }

        Ok(Self {
            width,
            height,
            pixels: rgba.into(),
        })
    }

    /// Resize a decoded image to `size`x`size` and convert it to RGBA8
    ///
    /// Uses Lanczos3 resampling, which keeps icon edges sharp when
    /// downscaling large bundle artwork.
    pub fn from_image(image: &DynamicImage, size: u32) -> Self {
        let size = size.max(1);
        let rgba = image.resize_exact(size, size, FilterType::Lanczos3).to_rgba8();

        Self {
            width: size,
            height: size,
            pixels: rgba.into_raw().into(),
        }
    }

    /// Generic application icon used when a bundle ships no usable artwork
    ///
    /// A light grey rounded tile on a transparent background.
    pub fn placeholder(size: u32) -> Self {
        let size = size.max(1);
        let radius = f64::from(size) / 5.0;
        let max = f64::from(size) - 1.0;
        let mut pixels = Vec::with_capacity(size as usize * size as usize * BYTES_PER_PIXEL);

        for y in 0..size {
            for x in 0..size {
                let (fx, fy) = (f64::from(x), f64::from(y));
                // Distance outside the rounded corner, if this pixel sits in a corner region
                let cx = if fx < radius {
                    radius - fx
                } else if fx > max - radius {
                    fx - (max - radius)
                } else {
                    0.0
                };
                let cy = if fy < radius {
                    radius - fy
                } else if fy > max - radius {
                    fy - (max - radius)
                } else {
                    0.0
                };
                let inside = cx.hypot(cy) <= radius;
                let alpha = if inside { 0xFF } else { 0x00 };
                pixels.extend_from_slice(&[0xC8, 0xC8, 0xCC, alpha]);
            }
        }

        Self {
            width: size,
            height: size,
            pixels: pixels.into(),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 pixel data, row-major
    pub fn rgba(&self) -> &[u8] {
        &self.pixels
    }
}

impl fmt::Debug for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Icon")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}
