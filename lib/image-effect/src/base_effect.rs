use crate::{
    Effect, ImageEffectError, ImageEffectResult, Intensity,
    colour_space::{extract_plane, hsv_to_rgb, replace_plane, rgb_to_hsv},
};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbImage;

const HSV_SATURATION: usize = 1;
const HSV_VALUE: usize = 2;

/// Brightness adjustment configuration (additive offset on the HSV value plane)
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct BrightnessConfig {
    #[derivative(Default(value = "30"))]
    offset: i32,
}

impl BrightnessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_intensity(intensity: Intensity) -> Self {
        Self::new().with_offset((30.0 * intensity.value()).round() as i32)
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }
}

impl Effect for BrightnessConfig {
    fn apply(&self, image: &RgbImage) -> ImageEffectResult<RgbImage> {
        let mut hsv = rgb_to_hsv(image);
        let mut value = extract_plane(&hsv, HSV_VALUE);

        for pixel in value.pixels_mut() {
            pixel[0] = (pixel[0] as i32 + self.offset).clamp(0, 255) as u8;
        }

        replace_plane(&mut hsv, HSV_VALUE, &value);
        Ok(hsv_to_rgb(&hsv))
    }
}

/// Contrast adjustment configuration (`dst = saturate(|src * alpha|)`)
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct ContrastConfig {
    #[derivative(Default(value = "2.0"))]
    alpha: f32,
}

impl ContrastConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_intensity(intensity: Intensity) -> Self {
        Self::new().with_alpha(1.0 + intensity.value())
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}

impl Effect for ContrastConfig {
    fn apply(&self, image: &RgbImage) -> ImageEffectResult<RgbImage> {
        let mut output = image.clone();

        for channel in output.iter_mut() {
            *channel = (*channel as f32 * self.alpha).abs().round().min(255.0) as u8;
        }

        Ok(output)
    }
}

/// Saturation adjustment configuration (scale on the HSV saturation plane)
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct SaturationConfig {
    #[derivative(Default(value = "1.0"))]
    scale: f32,
}

impl SaturationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_intensity(intensity: Intensity) -> Self {
        Self::new().with_scale(intensity.value())
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl Effect for SaturationConfig {
    fn apply(&self, image: &RgbImage) -> ImageEffectResult<RgbImage> {
        let mut hsv = rgb_to_hsv(image);
        let mut saturation = extract_plane(&hsv, HSV_SATURATION);

        for pixel in saturation.pixels_mut() {
            pixel[0] = (pixel[0] as f32 * self.scale).round().clamp(0.0, 255.0) as u8;
        }

        replace_plane(&mut hsv, HSV_SATURATION, &saturation);
        Ok(hsv_to_rgb(&hsv))
    }
}

/// Gamma correction configuration (lookup table `255 * (v / 255) ^ (1 / gamma)`)
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct GammaCorrectionConfig {
    #[derivative(Default(value = "1.0"))]
    gamma: f32,
}

impl GammaCorrectionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails for intensity 0, where the exponent `1 / gamma` is undefined.
    pub fn from_intensity(intensity: Intensity) -> ImageEffectResult<Self> {
        let config = Self::new().with_gamma(intensity.value());
        config.validate()?;
        Ok(config)
    }

    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    fn validate(&self) -> ImageEffectResult<()> {
        if self.gamma > 0.0 && self.gamma.is_finite() {
            Ok(())
        } else {
            Err(ImageEffectError::DegenerateParameter(format!(
                "gamma correction needs an intensity above 0, got {}",
                self.gamma
            )))
        }
    }

    pub fn lookup_table(&self) -> ImageEffectResult<[u8; 256]> {
        self.validate()?;

        let exponent = 1.0 / self.gamma as f64;
        let mut table = [0u8; 256];
        for (input, entry) in table.iter_mut().enumerate() {
            let normalized = input as f64 / 255.0;
            *entry = (normalized.powf(exponent) * 255.0).round().clamp(0.0, 255.0) as u8;
        }

        Ok(table)
    }
}

impl Effect for GammaCorrectionConfig {
    fn apply(&self, image: &RgbImage) -> ImageEffectResult<RgbImage> {
        let table = self.lookup_table()?;
        let mut output = image.clone();

        for channel in output.iter_mut() {
            *channel = table[*channel as usize];
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use image::Rgb;

    fn intensity(v: f32) -> Intensity {
        Intensity::new(v).unwrap()
    }

    fn gradient() -> RgbImage {
        RgbImage::from_fn(16, 16, |x, y| {
            Rgb([(x * 16) as u8, (y * 16) as u8, ((x + y) * 8) as u8])
        })
    }

    #[test]
    fn test_brightness_on_black() {
        let img = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
        let out = BrightnessConfig::from_intensity(intensity(1.0))
            .apply(&img)
            .unwrap();

        assert!(out.pixels().all(|p| *p == Rgb([30, 30, 30])));
    }

    #[test]
    fn test_brightness_offset() {
        assert_eq!(BrightnessConfig::from_intensity(intensity(0.0)).offset(), 0);
        assert_eq!(BrightnessConfig::from_intensity(intensity(2.5)).offset(), 75);
        assert_eq!(BrightnessConfig::from_intensity(intensity(5.0)).offset(), 150);
    }

    #[test]
    fn test_brightness_saturates_white() {
        let img = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        let out = BrightnessConfig::from_intensity(intensity(5.0))
            .apply(&img)
            .unwrap();

        assert!(out.pixels().all(|p| *p == Rgb([255, 255, 255])));
    }

    #[test]
    fn test_contrast_on_gray() {
        let img = RgbImage::from_pixel(10, 10, Rgb([128, 128, 128]));
        let out = ContrastConfig::from_intensity(intensity(1.0))
            .apply(&img)
            .unwrap();

        assert!(out.pixels().all(|p| *p == Rgb([255, 255, 255])));
    }

    #[test]
    fn test_contrast_scales_dark_values() {
        let img = RgbImage::from_pixel(2, 2, Rgb([10, 20, 40]));
        let out = ContrastConfig::from_intensity(intensity(0.5))
            .apply(&img)
            .unwrap();

        assert_eq!(out.get_pixel(0, 0), &Rgb([15, 30, 60]));
    }

    #[test]
    fn test_saturation_zero_desaturates() {
        let img = gradient();
        let out = SaturationConfig::from_intensity(intensity(0.0))
            .apply(&img)
            .unwrap();

        assert!(out.pixels().all(|p| p[0] == p[1] && p[1] == p[2]));
    }

    #[test]
    fn test_saturation_one_keeps_colour_close() {
        let img = gradient();
        let out = SaturationConfig::from_intensity(intensity(1.0))
            .apply(&img)
            .unwrap();

        for (a, b) in img.iter().zip(out.iter()) {
            assert!((*a as i32 - *b as i32).abs() <= 6);
        }
    }

    #[test]
    fn test_gamma_one_is_identity() {
        let img = RgbImage::from_fn(16, 16, |x, y| {
            let v = (y * 16 + x) as u8;
            Rgb([v, 255 - v, v / 2])
        });
        let out = GammaCorrectionConfig::from_intensity(intensity(1.0))
            .unwrap()
            .apply(&img)
            .unwrap();

        assert_eq!(out, img);
    }

    #[test]
    fn test_gamma_lookup_table() {
        let table = GammaCorrectionConfig::new()
            .with_gamma(2.0)
            .lookup_table()
            .unwrap();

        assert_eq!(table[0], 0);
        assert_eq!(table[255], 255);
        // sqrt(64 / 255) * 255 = 127.75
        assert_eq!(table[64], 128);
        assert!(table.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_gamma_zero_is_rejected() {
        let err = GammaCorrectionConfig::from_intensity(intensity(0.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateParameter);

        let img = RgbImage::new(2, 2);
        let err = GammaCorrectionConfig::new()
            .with_gamma(0.0)
            .apply(&img)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateParameter);
    }
}
