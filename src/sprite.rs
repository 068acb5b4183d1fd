use std::path::Path;

use color_eyre::{Result, eyre::WrapErr};
use image::{RgbaImage, imageops::FilterType};

use crate::constants::{ENEMY_HEIGHT, ENEMY_WIDTH, SHIP_HEIGHT, SHIP_WIDTH};

/// An RGBA image scaled to its on-screen size in world units
#[derive(Debug, Clone)]
pub struct Sprite {
    image: RgbaImage,
}

impl Sprite {
    pub fn load(path: &Path, width: u32, height: u32) -> Result<Self> {
        let image = image::open(path)
            .wrap_err_with(|| format!("failed to load sprite {}", path.display()))?;
        Ok(Self::from_image(
            image.resize_exact(width, height, FilterType::Nearest).to_rgba8(),
        ))
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Colour at a sprite-local position, `None` when outside or transparent
    pub fn sample(&self, x: f32, y: f32) -> Option<(u8, u8, u8)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let (px, py) = (x as u32, y as u32);
        if px >= self.width() || py >= self.height() {
            return None;
        }
        let [r, g, b, a] = self.image.get_pixel(px, py).0;
        (a >= 128).then_some((r, g, b))
    }
}

/// The two sprites the game draws
#[derive(Debug, Clone)]
pub struct Sprites {
    pub ship: Sprite,
    pub enemy: Sprite,
}

impl Sprites {
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            ship: Sprite::load(&dir.join("ship.png"), SHIP_WIDTH, SHIP_HEIGHT)?,
            enemy: Sprite::load(&dir.join("enemy.png"), ENEMY_WIDTH, ENEMY_HEIGHT)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_sample_respects_alpha() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
        image.put_pixel(1, 0, Rgba([10, 20, 30, 0]));
        let sprite = Sprite::from_image(image);

        assert_eq!(sprite.sample(0.5, 0.5), Some((10, 20, 30)));
        assert_eq!(sprite.sample(1.5, 0.5), None);
        assert_eq!(sprite.sample(-0.5, 0.5), None);
        assert_eq!(sprite.sample(0.5, 1.0), None);
    }

    #[test]
    fn test_missing_asset_is_an_error() {
        let err = Sprites::load(Path::new("does/not/exist")).unwrap_err();
        assert!(format!("{err:?}").contains("ship.png"));
    }

    #[test]
    fn test_bundled_assets_load_at_nominal_size() {
        let sprites = Sprites::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")).unwrap();
        assert_eq!((sprites.ship.width(), sprites.ship.height()), (55, 75));
        assert_eq!((sprites.enemy.width(), sprites.enemy.height()), (57, 35));
    }
}
