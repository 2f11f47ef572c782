//! Per-run processing state shared by the text menu and the GUI.
//!
//! A session owns the operation catalog and the currently loaded image.
//! The loaded image is never modified: every dispatch works on the stored
//! original and returns a fresh buffer.

use image::RgbImage;
use image_effect::{
    Catalog, ImageEffectError, ImageEffectResult, Intensity, Operation, Selection,
    io::load_image,
};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    original: Option<RgbImage>,
    source: Option<PathBuf>,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            original: None,
            source: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn original(&self) -> Option<&RgbImage> {
        self.original.as_ref()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Replaces the loaded image. On failure the previous image stays loaded.
    pub fn load(&mut self, path: impl AsRef<Path>) -> ImageEffectResult<&RgbImage> {
        let path = path.as_ref();
        let image = load_image(path)?;

        log::info!(
            "loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );

        self.source = Some(path.to_path_buf());
        Ok(self.original.insert(image))
    }

    pub fn apply(&self, selection: &Selection) -> ImageEffectResult<RgbImage> {
        let original = self
            .original
            .as_ref()
            .ok_or_else(|| ImageEffectError::InvalidInput("no image loaded".to_string()))?;

        self.catalog.dispatch(original, selection)
    }

    /// Builds a selection from a GUI list position and a raw slider value.
    /// List positions are operation tags; the standard catalog lists its
    /// operations in tag order. The slider value is snapped to one decimal.
    pub fn selection_at(&self, index: i32, raw_intensity: f32) -> ImageEffectResult<Selection> {
        let operation = u8::try_from(index)
            .ok()
            .and_then(|tag| Operation::try_from(tag).ok())
            .ok_or_else(|| {
                ImageEffectError::InvalidInput(format!("no operation at position {index}"))
            })?;
        let operation = self.catalog.lookup(operation.category(), operation.name())?;

        let intensity = Intensity::new(snap_intensity(raw_intensity))?;
        Selection::new(operation.category(), operation, intensity)
    }

    /// GUI list position (operation tag) of a registered operation `name`.
    pub fn position_of(&self, name: &str) -> Option<i32> {
        let operation = Operation::from_name(name)?;
        self.catalog
            .lookup(operation.category(), operation.name())
            .ok()
            .map(|op| i32::from(u8::from(op)))
    }
}

pub fn snap_intensity(raw: f32) -> f32 {
    (raw * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use image::Rgb;
    use image_effect::ErrorKind;
    use tempfile::TempDir;

    fn session() -> Session {
        Session::new(Catalog::standard().unwrap())
    }

    fn write_image(dir: &TempDir, name: &str, pixel: Rgb<u8>) -> Result<PathBuf> {
        let path = dir.path().join(name);
        RgbImage::from_pixel(6, 4, pixel).save(&path)?;
        Ok(path)
    }

    #[test]
    fn test_apply_without_image() {
        let session = session();
        let selection = session.selection_at(0, 1.0).unwrap();

        let err = session.apply(&selection).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputValidationFailure);
    }

    #[test]
    fn test_load_and_apply() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_image(&dir, "gray.png", Rgb([128, 128, 128]))?;

        let mut session = session();
        session.load(&path)?;
        assert_eq!(session.source(), Some(path.as_path()));

        let index = session.position_of("Contrast Adjustment").unwrap();
        let selection = session.selection_at(index, 1.0)?;
        let out = session.apply(&selection)?;

        assert!(out.pixels().all(|p| *p == Rgb([255, 255, 255])));
        assert!(session.original().unwrap().pixels().all(|p| *p == Rgb([128, 128, 128])));
        Ok(())
    }

    #[test]
    fn test_failed_load_keeps_previous_image() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_image(&dir, "black.png", Rgb([0, 0, 0]))?;

        let mut session = session();
        session.load(&path)?;

        let err = session.load(dir.path().join("missing.png")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LoadFailure);
        assert_eq!(session.source(), Some(path.as_path()));
        assert!(session.original().is_some());
        Ok(())
    }

    #[test]
    fn test_selection_at() {
        let session = session();

        let selection = session.selection_at(5, 2.34).unwrap();
        assert_eq!(selection.operation, Operation::BrightnessAdjustment);
        assert_eq!(selection.intensity.value(), 2.3);

        let selection = session.selection_at(4, 1.0).unwrap();
        assert_eq!(selection.operation, Operation::NoiseReduction);

        for index in [-1, 10] {
            let err = session.selection_at(index, 1.0).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InputValidationFailure);
        }

        let err = session.selection_at(0, 5.4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputValidationFailure);
    }

    #[test]
    fn test_positions_are_operation_tags() {
        let session = session();

        for (index, op) in session.catalog().entries().enumerate() {
            assert_eq!(session.position_of(op.name()), Some(index as i32));
            assert_eq!(session.selection_at(index as i32, 1.0).unwrap().operation, op);
        }
        assert_eq!(session.position_of("Sepia"), None);
    }

    #[test]
    fn test_selection_at_unregistered_operation() {
        let mut catalog = Catalog::default();
        catalog.register(Operation::Sharpen).unwrap();
        let session = Session::new(catalog);

        assert_eq!(session.position_of("Gaussian Blur"), None);
        assert_eq!(session.position_of("sharpen"), Some(2));

        let err = session.selection_at(0, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputValidationFailure);
        assert_eq!(
            session.selection_at(2, 1.0).unwrap().operation,
            Operation::Sharpen
        );
    }

    #[test]
    fn test_snap_intensity() {
        assert_eq!(snap_intensity(0.04), 0.0);
        assert_eq!(snap_intensity(1.26), 1.3);
        assert_eq!(snap_intensity(4.96), 5.0);
    }
}
