pub mod base_effect;
pub mod blur_effect;
pub mod catalog;
pub mod colour_space;
pub mod histogram_effect;
pub mod io;
pub mod noise_effect;
pub mod stylized_effect;

mod intensity;

pub use catalog::{Catalog, Category, Operation, Selection};
pub use intensity::Intensity;

use image::RgbImage;
use std::path::PathBuf;

pub type ImageEffectResult<T> = Result<T, ImageEffectError>;

#[derive(thiserror::Error, Debug)]
pub enum ImageEffectError {
    #[error("Failed to load image `{}`: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Degenerate parameter: {0}")]
    DegenerateParameter(String),
    #[error("Catalog registration error: {0}")]
    Registration(String),
}

/// Coarse failure classes surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    LoadFailure,
    InputValidationFailure,
    DegenerateParameter,
    Internal,
}

impl ImageEffectError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ImageEffectError::Load { .. } => ErrorKind::LoadFailure,
            ImageEffectError::InvalidInput(_) => ErrorKind::InputValidationFailure,
            ImageEffectError::DegenerateParameter(_) => ErrorKind::DegenerateParameter,
            ImageEffectError::Registration(_) => ErrorKind::Internal,
        }
    }
}

/// A pure image transform. Implementations never touch their input and
/// always return a buffer with the input's dimensions.
pub trait Effect {
    fn apply(&self, image: &RgbImage) -> ImageEffectResult<RgbImage>;
}

#[derive(Debug, Clone)]
pub enum ImageEffect {
    // Filters
    GaussianBlur(blur_effect::GaussianBlurConfig),
    MedianBlur(blur_effect::MedianBlurConfig),
    Sharpen(stylized_effect::SharpenConfig),
    EdgeDetection(stylized_effect::EdgeDetectionConfig),
    NoiseReduction(noise_effect::NoiseReductionConfig),

    // Enhancements
    Brightness(base_effect::BrightnessConfig),
    Contrast(base_effect::ContrastConfig),
    HistogramEqualization(histogram_effect::HistogramEqualizationConfig),
    Saturation(base_effect::SaturationConfig),
    GammaCorrection(base_effect::GammaCorrectionConfig),
}

impl Effect for ImageEffect {
    fn apply(&self, image: &RgbImage) -> ImageEffectResult<RgbImage> {
        match self {
            ImageEffect::GaussianBlur(config) => config.apply(image),
            ImageEffect::MedianBlur(config) => config.apply(image),
            ImageEffect::Sharpen(config) => config.apply(image),
            ImageEffect::EdgeDetection(config) => config.apply(image),
            ImageEffect::NoiseReduction(config) => config.apply(image),

            ImageEffect::Brightness(config) => config.apply(image),
            ImageEffect::Contrast(config) => config.apply(image),
            ImageEffect::HistogramEqualization(config) => config.apply(image),
            ImageEffect::Saturation(config) => config.apply(image),
            ImageEffect::GammaCorrection(config) => config.apply(image),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        let err = ImageEffectError::InvalidInput("ordinal 9".to_string());
        assert_eq!(err.kind(), ErrorKind::InputValidationFailure);

        let err = ImageEffectError::DegenerateParameter("gamma".to_string());
        assert_eq!(err.kind(), ErrorKind::DegenerateParameter);

        let err = ImageEffectError::Registration("duplicate Sharpen".to_string());
        assert_eq!(err.kind(), ErrorKind::Internal);
    }
}
