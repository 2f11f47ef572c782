use crate::{Effect, ImageEffectResult, Intensity};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbImage;
use imageproc::filter::{bilateral::GaussianEuclideanColorDistance, bilateral_filter};

/// Spatial falloff of the smoothing window, in pixels.
const SPATIAL_SIGMA: f32 = 3.5;

/// Edge preserving noise reduction (using imageproc's bilateral filter)
///
/// `strength` plays the role of the luminance and colour filter strength:
/// colour differences well below it are smoothed, larger ones are kept.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct NoiseReductionConfig {
    #[derivative(Default(value = "10.0"))]
    strength: f32,
}

impl NoiseReductionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_intensity(intensity: Intensity) -> Self {
        Self::new().with_strength(10.0 * intensity.value())
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }
}

impl Effect for NoiseReductionConfig {
    fn apply(&self, image: &RgbImage) -> ImageEffectResult<RgbImage> {
        // Zero strength filters nothing
        if self.strength <= 0.0 {
            return Ok(image.clone());
        }

        // 7x7 template window
        Ok(bilateral_filter(
            image,
            3,
            SPATIAL_SIGMA,
            GaussianEuclideanColorDistance::new(self.strength),
        ))
    }
}
