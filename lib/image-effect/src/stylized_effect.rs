use crate::{Effect, ImageEffectResult, Intensity};
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgb, RgbImage};

/// Smallest threshold passed to canny.
const MIN_THRESHOLD: f32 = f32::MIN_POSITIVE;

/// Edge detection configuration (Canny hysteresis thresholds, using imageproc)
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct EdgeDetectionConfig {
    #[derivative(Default(value = "100.0"))]
    low_threshold: f32,

    #[derivative(Default(value = "200.0"))]
    high_threshold: f32,
}

impl EdgeDetectionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_intensity(intensity: Intensity) -> Self {
        Self::new()
            .with_low_threshold(100.0 * intensity.value())
            .with_high_threshold(200.0 * intensity.value())
    }

    pub fn thresholds(&self) -> (f32, f32) {
        (self.low_threshold, self.high_threshold)
    }

    /// Thresholds handed to canny: clamped to `MIN_THRESHOLD` and ordered.
    pub fn effective_thresholds(&self) -> (f32, f32) {
        let low = self.low_threshold.max(MIN_THRESHOLD);
        (low, self.high_threshold.max(low))
    }
}

impl Effect for EdgeDetectionConfig {
    fn apply(&self, image: &RgbImage) -> ImageEffectResult<RgbImage> {
        if image.width() == 0 || image.height() == 0 {
            return Ok(image.clone());
        }

        // canny's hysteresis walks off the image border once it follows
        // zero-strength pixels, so thresholds must stay strictly positive.
        // At the floor every nonzero local gradient maximum is an edge.
        let (low, high) = self.effective_thresholds();
        let gray = image::imageops::grayscale(image);
        let edges = imageproc::edges::canny(&gray, low, high);

        Ok(RgbImage::from_fn(edges.width(), edges.height(), |x, y| {
            let v = edges.get_pixel(x, y)[0];
            Rgb([v, v, v])
        }))
    }
}

/// Sharpen effect configuration (3x3 convolution)
///
/// Kernel:
/// ```text
///  0  -1   0
/// -1   c  -1
///  0  -1   0
/// ```
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct SharpenConfig {
    #[derivative(Default(value = "6.0"))]
    center: f32,
}

impl SharpenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_intensity(intensity: Intensity) -> Self {
        Self::new().with_center(5.0 + intensity.value())
    }

    pub fn center(&self) -> f32 {
        self.center
    }

    pub fn kernel(&self) -> [f32; 9] {
        [
            0.0, -1.0, 0.0, //
            -1.0, self.center, -1.0, //
            0.0, -1.0, 0.0,
        ]
    }
}

/// Mirrors an out of range index without repeating the border pixel.
fn reflect_101(index: i64, len: i64) -> u32 {
    if len == 1 {
        return 0;
    }

    let index = if index < 0 { -index } else { index };
    let index = if index >= len { 2 * (len - 1) - index } else { index };
    index as u32
}

impl Effect for SharpenConfig {
    fn apply(&self, image: &RgbImage) -> ImageEffectResult<RgbImage> {
        let kernel = self.kernel();
        let (width, height) = (image.width() as i64, image.height() as i64);
        let mut result = image.clone();

        for y in 0..height {
            for x in 0..width {
                let mut sum = [0.0f32; 3];

                for ky in -1i64..=1 {
                    for kx in -1i64..=1 {
                        let weight = kernel[((ky + 1) * 3 + (kx + 1)) as usize];
                        if weight == 0.0 {
                            continue;
                        }

                        let px = reflect_101(x + kx, width);
                        let py = reflect_101(y + ky, height);
                        let pixel = image.get_pixel(px, py);

                        for (acc, value) in sum.iter_mut().zip(pixel.0) {
                            *acc += value as f32 * weight;
                        }
                    }
                }

                let pixel = result.get_pixel_mut(x as u32, y as u32);
                for (channel, acc) in pixel.0.iter_mut().zip(sum) {
                    *channel = acc.round().clamp(0.0, 255.0) as u8;
                }
            }
        }

        Ok(result)
    }
}
