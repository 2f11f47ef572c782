//! Registry of the named operations, grouped by category.

use crate::{
    Effect, ImageEffect, ImageEffectError, ImageEffectResult, Intensity,
    base_effect::{BrightnessConfig, ContrastConfig, GammaCorrectionConfig, SaturationConfig},
    blur_effect::{GaussianBlurConfig, MedianBlurConfig},
    histogram_effect::HistogramEqualizationConfig,
    noise_effect::NoiseReductionConfig,
    stylized_effect::{EdgeDetectionConfig, SharpenConfig},
};
use image::RgbImage;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::{fmt, time::Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Filter,
    Enhancement,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[Category::Filter, Category::Enhancement]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Filter => "Filter",
            Category::Enhancement => "Enhancement",
        }
    }

    /// 1-based code shown in the text menu.
    pub fn menu_code(&self) -> u32 {
        match self {
            Category::Filter => 1,
            Category::Enhancement => 2,
        }
    }

    pub fn from_menu_code(code: u32) -> ImageEffectResult<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.menu_code() == code)
            .ok_or_else(|| {
                ImageEffectError::InvalidInput(format!(
                    "unknown category {code}, expected 1 (Filter) or 2 (Enhancement)"
                ))
            })
    }

    pub fn parse(input: &str) -> ImageEffectResult<Self> {
        let input = input.trim();
        match input.parse::<u32>() {
            Ok(code) => Self::from_menu_code(code),
            Err(_) => Err(ImageEffectError::InvalidInput(format!(
                "`{input}` is not a category number, expected 1 or 2"
            ))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Operation {
    GaussianBlur = 0,
    MedianBlur,
    Sharpen,
    EdgeDetection,
    NoiseReduction,
    BrightnessAdjustment,
    ContrastAdjustment,
    HistogramEqualization,
    SaturationAdjustment,
    GammaCorrection,
}

impl Operation {
    pub fn all() -> &'static [Operation] {
        &[
            Operation::GaussianBlur,
            Operation::MedianBlur,
            Operation::Sharpen,
            Operation::EdgeDetection,
            Operation::NoiseReduction,
            Operation::BrightnessAdjustment,
            Operation::ContrastAdjustment,
            Operation::HistogramEqualization,
            Operation::SaturationAdjustment,
            Operation::GammaCorrection,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::GaussianBlur => "Gaussian Blur",
            Operation::MedianBlur => "Median Blur",
            Operation::Sharpen => "Sharpen",
            Operation::EdgeDetection => "Edge Detection",
            Operation::NoiseReduction => "Noise Reduction",
            Operation::BrightnessAdjustment => "Brightness Adjustment",
            Operation::ContrastAdjustment => "Contrast Adjustment",
            Operation::HistogramEqualization => "Histogram Equalization",
            Operation::SaturationAdjustment => "Saturation Adjustment",
            Operation::GammaCorrection => "Gamma Correction",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Operation::GaussianBlur
            | Operation::MedianBlur
            | Operation::Sharpen
            | Operation::EdgeDetection
            | Operation::NoiseReduction => Category::Filter,

            Operation::BrightnessAdjustment
            | Operation::ContrastAdjustment
            | Operation::HistogramEqualization
            | Operation::SaturationAdjustment
            | Operation::GammaCorrection => Category::Enhancement,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|op| op.name().eq_ignore_ascii_case(name))
    }

    /// Builds the configured effect for `intensity`.
    pub fn effect(&self, intensity: Intensity) -> ImageEffectResult<ImageEffect> {
        let effect = match self {
            Operation::GaussianBlur => {
                ImageEffect::GaussianBlur(GaussianBlurConfig::from_intensity(intensity))
            }
            Operation::MedianBlur => {
                ImageEffect::MedianBlur(MedianBlurConfig::from_intensity(intensity))
            }
            Operation::Sharpen => ImageEffect::Sharpen(SharpenConfig::from_intensity(intensity)),
            Operation::EdgeDetection => {
                ImageEffect::EdgeDetection(EdgeDetectionConfig::from_intensity(intensity))
            }
            Operation::NoiseReduction => {
                ImageEffect::NoiseReduction(NoiseReductionConfig::from_intensity(intensity))
            }
            Operation::BrightnessAdjustment => {
                ImageEffect::Brightness(BrightnessConfig::from_intensity(intensity))
            }
            Operation::ContrastAdjustment => {
                ImageEffect::Contrast(ContrastConfig::from_intensity(intensity))
            }
            Operation::HistogramEqualization => ImageEffect::HistogramEqualization(
                HistogramEqualizationConfig::from_intensity(intensity),
            ),
            Operation::SaturationAdjustment => {
                ImageEffect::Saturation(SaturationConfig::from_intensity(intensity))
            }
            Operation::GammaCorrection => {
                ImageEffect::GammaCorrection(GammaCorrectionConfig::from_intensity(intensity)?)
            }
        };

        Ok(effect)
    }

    /// Human readable summary of the parameters derived from `intensity`.
    pub fn describe(&self, intensity: Intensity) -> String {
        match self.effect(intensity) {
            Ok(ImageEffect::GaussianBlur(c)) => format!("kernel {0}x{0}", c.kernel_size()),
            Ok(ImageEffect::MedianBlur(c)) => format!("kernel {0}x{0}", c.kernel_size()),
            Ok(ImageEffect::Sharpen(c)) => format!("center weight {}", c.center()),
            Ok(ImageEffect::EdgeDetection(c)) => {
                let (low, high) = c.thresholds();
                format!("thresholds {low}/{high}")
            }
            Ok(ImageEffect::NoiseReduction(c)) => format!("strength {}", c.strength()),
            Ok(ImageEffect::Brightness(c)) => format!("value {:+}", c.offset()),
            Ok(ImageEffect::Contrast(c)) => format!("scale x{}", c.alpha()),
            Ok(ImageEffect::HistogramEqualization(c)) => format!("{} pass(es)", c.passes()),
            Ok(ImageEffect::Saturation(c)) => format!("saturation x{}", c.scale()),
            Ok(ImageEffect::GammaCorrection(c)) => format!("gamma {}", c.gamma()),
            Err(e) => e.to_string(),
        }
    }

    /// Applies the operation to `image`, returning a new buffer.
    pub fn apply(&self, image: &RgbImage, intensity: Intensity) -> ImageEffectResult<RgbImage> {
        let effect = self.effect(intensity)?;
        let start = Instant::now();
        let output = effect.apply(image)?;

        log::debug!(
            "{} at intensity {} ({}) on {}x{} took {:.2?}",
            self.name(),
            intensity,
            self.describe(intensity),
            image.width(),
            image.height(),
            start.elapsed()
        );

        Ok(output)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated (category, operation, intensity) request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub category: Category,
    pub operation: Operation,
    pub intensity: Intensity,
}

impl Selection {
    pub fn new(
        category: Category,
        operation: Operation,
        intensity: Intensity,
    ) -> ImageEffectResult<Self> {
        if operation.category() != category {
            return Err(ImageEffectError::InvalidInput(format!(
                "{operation} is not a {category} operation"
            )));
        }

        Ok(Self {
            category,
            operation,
            intensity,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    filters: Vec<Operation>,
    enhancements: Vec<Operation>,
}

impl Catalog {
    /// Every built-in operation in menu order.
    pub fn standard() -> ImageEffectResult<Self> {
        let mut catalog = Self::default();
        for op in Operation::all() {
            catalog.register(*op)?;
        }
        Ok(catalog)
    }

    /// Adds `operation` to the end of its category. Registering the same
    /// operation twice is an error.
    pub fn register(&mut self, operation: Operation) -> ImageEffectResult<()> {
        let slot = match operation.category() {
            Category::Filter => &mut self.filters,
            Category::Enhancement => &mut self.enhancements,
        };

        if slot.contains(&operation) {
            return Err(ImageEffectError::Registration(format!(
                "{operation} is already registered"
            )));
        }

        slot.push(operation);
        Ok(())
    }

    pub fn operations(&self, category: Category) -> &[Operation] {
        match category {
            Category::Filter => &self.filters,
            Category::Enhancement => &self.enhancements,
        }
    }

    /// All operations, filters first.
    pub fn entries(&self) -> impl Iterator<Item = Operation> + '_ {
        self.filters.iter().chain(self.enhancements.iter()).copied()
    }

    pub fn len(&self) -> usize {
        self.filters.len() + self.enhancements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves a 1-based menu ordinal within `category`.
    pub fn by_ordinal(&self, category: Category, ordinal: usize) -> ImageEffectResult<Operation> {
        let operations = self.operations(category);

        ordinal
            .checked_sub(1)
            .and_then(|index| operations.get(index))
            .copied()
            .ok_or_else(|| {
                ImageEffectError::InvalidInput(format!(
                    "no {category} operation {ordinal}, choose between 1 and {}",
                    operations.len()
                ))
            })
    }

    pub fn parse_ordinal(&self, category: Category, input: &str) -> ImageEffectResult<Operation> {
        let input = input.trim();
        let ordinal = input.parse::<usize>().map_err(|_| {
            ImageEffectError::InvalidInput(format!(
                "`{input}` is not a number between 1 and {}",
                self.operations(category).len()
            ))
        })?;

        self.by_ordinal(category, ordinal)
    }

    /// Resolves an operation by display name (case-insensitive) within `category`.
    pub fn lookup(&self, category: Category, name: &str) -> ImageEffectResult<Operation> {
        Operation::from_name(name)
            .filter(|op| self.operations(category).contains(op))
            .ok_or_else(|| {
                ImageEffectError::InvalidInput(format!(
                    "no {category} operation named `{}`",
                    name.trim()
                ))
            })
    }

    /// Runs `selection` against `original`. The original is never modified.
    pub fn dispatch(
        &self,
        original: &RgbImage,
        selection: &Selection,
    ) -> ImageEffectResult<RgbImage> {
        if !self
            .operations(selection.category)
            .contains(&selection.operation)
        {
            return Err(ImageEffectError::InvalidInput(format!(
                "{} is not registered under {}",
                selection.operation, selection.category
            )));
        }

        selection.operation.apply(original, selection.intensity)
    }
}
