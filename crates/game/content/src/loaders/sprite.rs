//! Worm sprite loader.

use std::path::Path;

use game_core::{Hitbox, extract_outline};

use crate::loaders::{LoadResult, MaskLoader};

/// Loader that traces a worm's collision outline from its sprite image.
pub struct SpriteLoader;

impl SpriteLoader {
    pub fn load_hitbox(path: &Path) -> LoadResult<Hitbox> {
        let sprite = MaskLoader::load(path)?;
        let hitbox = extract_outline(&sprite);
        if hitbox.is_empty() {
            anyhow::bail!("Sprite {} has no visible pixels", path.display());
        }
        Ok(hitbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Point;
    use image::{Rgba, RgbaImage};

    #[test]
    fn traces_outline_of_sprite_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("worm.png");
        RgbaImage::from_pixel(3, 3, Rgba([200, 120, 80, 255]))
            .save(&path)
            .unwrap();

        let hitbox = SpriteLoader::load_hitbox(&path).unwrap();

        assert_eq!(hitbox.len(), 8);
        assert!(!hitbox.contains(Point::new(1, 1)));
        assert_eq!(hitbox.sprite_height(), 3);
    }

    #[test]
    fn invisible_sprite_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ghost.png");
        RgbaImage::new(2, 2).save(&path).unwrap();

        assert!(SpriteLoader::load_hitbox(&path).is_err());
    }
}
