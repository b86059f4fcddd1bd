//! Resolving and decoding bundled destination images.

use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::catalog::ImageAsset;

/// File extensions probed for each asset, in order.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("no image for `{asset}` in {}", dir.display())]
    NotFound { asset: ImageAsset, dir: PathBuf },
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Finds asset files by identifier inside one directory.
#[derive(Debug, Clone)]
pub struct AssetLoader {
    dir: PathBuf,
}

impl AssetLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the first existing `<identifier>.<ext>` file.
    pub fn resolve(&self, asset: ImageAsset) -> Result<PathBuf, AssetError> {
        SUPPORTED_EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{}.{ext}", asset.identifier())))
            .find(|path| path.is_file())
            .ok_or_else(|| AssetError::NotFound {
                asset,
                dir: self.dir.clone(),
            })
    }

    /// Decode the asset's image.
    pub fn load(&self, asset: ImageAsset) -> Result<DynamicImage, AssetError> {
        let path = self.resolve(asset)?;
        image::open(&path).map_err(|source| AssetError::Decode { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_missing_asset_is_not_found() {
        let dir = tempdir().unwrap();
        let loader = AssetLoader::new(dir.path());
        let err = loader.resolve(ImageAsset::TuguJogja).unwrap_err();
        assert!(matches!(
            err,
            AssetError::NotFound {
                asset: ImageAsset::TuguJogja,
                ..
            }
        ));
        assert!(err.to_string().contains("tugujogja"));
    }

    #[test]
    fn test_resolve_prefers_png_over_jpg() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("tebingbreksi.jpg"), b"x").unwrap();
        std::fs::write(dir.path().join("tebingbreksi.png"), b"x").unwrap();
        let loader = AssetLoader::new(dir.path());
        let path = loader.resolve(ImageAsset::TebingBreksi).unwrap();
        assert_eq!(path, dir.path().join("tebingbreksi.png"));
    }

    #[test]
    fn test_load_decodes_png() {
        let dir = tempdir().unwrap();
        RgbImage::new(6, 3)
            .save(dir.path().join("candiprambanan.png"))
            .unwrap();
        let loader = AssetLoader::new(dir.path());
        let img = loader.load(ImageAsset::CandiPrambanan).unwrap();
        assert_eq!((img.width(), img.height()), (6, 3));
    }

    #[test]
    fn test_load_garbage_is_decode_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("malioboro.png"), b"not an image").unwrap();
        let loader = AssetLoader::new(dir.path());
        let err = loader.load(ImageAsset::Malioboro).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }
}
