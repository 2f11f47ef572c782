use crate::{Effect, ImageEffectResult, Intensity};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbImage;

/// Base kernel edge length at intensity 1.
const BASE_KERNEL_SIZE: f32 = 15.0;

/// Derives an odd kernel size of at least 1 from `intensity`.
pub fn kernel_size(intensity: Intensity) -> u32 {
    let size = (BASE_KERNEL_SIZE * intensity.value()).round() as u32;
    if size % 2 == 0 { size + 1 } else { size }
}

/// Gaussian sigma for a kernel size when none is given explicitly.
pub fn sigma_for_kernel_size(kernel_size: u32) -> f32 {
    0.3 * ((kernel_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Gaussian blur configuration (using imageproc)
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct GaussianBlurConfig {
    #[derivative(Default(value = "15"))]
    kernel_size: u32,
}

impl GaussianBlurConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_intensity(intensity: Intensity) -> Self {
        Self::new().with_kernel_size(kernel_size(intensity))
    }

    pub fn kernel_size(&self) -> u32 {
        self.kernel_size
    }
}

impl Effect for GaussianBlurConfig {
    fn apply(&self, image: &RgbImage) -> ImageEffectResult<RgbImage> {
        // A 1x1 kernel leaves every pixel untouched
        if self.kernel_size <= 1 {
            return Ok(image.clone());
        }

        // kernel_size only sets sigma; imageproc sizes the kernel from sigma itself
        let sigma = sigma_for_kernel_size(self.kernel_size);
        Ok(imageproc::filter::gaussian_blur_f32(image, sigma))
    }
}

/// Median blur configuration (using imageproc)
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct MedianBlurConfig {
    #[derivative(Default(value = "15"))]
    kernel_size: u32,
}

impl MedianBlurConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_intensity(intensity: Intensity) -> Self {
        Self::new().with_kernel_size(kernel_size(intensity))
    }

    pub fn kernel_size(&self) -> u32 {
        self.kernel_size
    }
}

impl Effect for MedianBlurConfig {
    fn apply(&self, image: &RgbImage) -> ImageEffectResult<RgbImage> {
        if self.kernel_size <= 1 {
            return Ok(image.clone());
        }

        // Channels are filtered independently, keeping the colour
        let radius = self.kernel_size / 2;
        Ok(imageproc::filter::median_filter(image, radius, radius))
    }
}
