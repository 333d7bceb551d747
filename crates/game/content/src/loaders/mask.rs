//! Opacity mask loader.

use std::path::Path;

use game_core::AlphaMask;
use image::{DynamicImage, RgbaImage};

use crate::loaders::LoadResult;

/// Loader for opacity masks from image files.
///
/// Only the alpha channel is kept; color is irrelevant to collision.
pub struct MaskLoader;

impl MaskLoader {
    /// Load the alpha channel of an image file (PNG).
    pub fn load(path: &Path) -> LoadResult<AlphaMask> {
        let image = image::open(path)
            .map_err(|e| anyhow::anyhow!("Failed to decode image {}: {}", path.display(), e))?;
        Self::from_image(&image)
    }

    /// Convert an already decoded image. Images without alpha are fully opaque.
    pub fn from_image(image: &DynamicImage) -> LoadResult<AlphaMask> {
        Self::from_rgba(&image.to_rgba8())
    }

    pub fn from_rgba(image: &RgbaImage) -> LoadResult<AlphaMask> {
        let alpha = image.pixels().map(|pixel| pixel.0[3]).collect();
        let mask = AlphaMask::from_raw(image.width(), image.height(), alpha)?;
        Ok(mask)
    }
}
