use crate::{
    Effect, ImageEffectResult, Intensity,
    colour_space::{extract_plane, replace_plane, rgb_to_yuv, yuv_to_rgb},
};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbImage;
use imageproc::contrast::equalize_histogram;

const YUV_LUMA: usize = 0;

/// Number of equalization passes for `intensity`: one, plus
/// `floor(intensity) - 1` more when intensity exceeds 1.
pub fn equalization_passes(intensity: Intensity) -> u32 {
    let value = intensity.value();
    if value > 1.0 {
        1 + (value.floor() as u32).saturating_sub(1)
    } else {
        1
    }
}

/// Histogram equalization on the luma plane (using imageproc)
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct HistogramEqualizationConfig {
    #[derivative(Default(value = "1"))]
    passes: u32,
}

impl HistogramEqualizationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_intensity(intensity: Intensity) -> Self {
        Self::new().with_passes(equalization_passes(intensity))
    }

    pub fn passes(&self) -> u32 {
        self.passes
    }
}

impl Effect for HistogramEqualizationConfig {
    fn apply(&self, image: &RgbImage) -> ImageEffectResult<RgbImage> {
        let mut yuv = rgb_to_yuv(image);
        let mut luma = extract_plane(&yuv, YUV_LUMA);

        for _ in 0..self.passes.max(1) {
            luma = equalize_histogram(&luma);
        }

        replace_plane(&mut yuv, YUV_LUMA, &luma);
        Ok(yuv_to_rgb(&yuv))
    }
}
