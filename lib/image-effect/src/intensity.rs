use crate::{ImageEffectError, ImageEffectResult};
use std::{fmt, str::FromStr};

/// User supplied strength of an operation, always within `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Intensity(f32);

impl Intensity {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 5.0;
    pub const DEFAULT: Intensity = Intensity(1.0);

    pub fn new(value: f32) -> ImageEffectResult<Self> {
        if value.is_nan() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ImageEffectError::InvalidInput(format!(
                "intensity must be a number between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            )));
        }

        Ok(Self(value))
    }

    /// Clamps `value` into range instead of rejecting it. NaN maps to the default.
    pub fn saturating(value: f32) -> Self {
        if value.is_nan() {
            Self::DEFAULT
        } else {
            Self(value.clamp(Self::MIN, Self::MAX))
        }
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Intensity {
    type Err = ImageEffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<f32>().map_err(|_| {
            ImageEffectError::InvalidInput(format!(
                "`{}` is not a number between {} and {}",
                s.trim(),
                Self::MIN,
                Self::MAX
            ))
        })?;

        Self::new(value)
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_range_bounds() {
        assert_eq!(Intensity::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Intensity::new(5.0).unwrap().value(), 5.0);
        assert!(Intensity::new(-0.1).is_err());
        assert!(Intensity::new(5.01).is_err());
        assert!(Intensity::new(f32::NAN).is_err());
        assert!(Intensity::new(f32::INFINITY).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!("2.5".parse::<Intensity>().unwrap().value(), 2.5);
        assert_eq!(" 3 \n".parse::<Intensity>().unwrap().value(), 3.0);

        let err = "abc".parse::<Intensity>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputValidationFailure);

        let err = "7".parse::<Intensity>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputValidationFailure);
    }

    #[test]
    fn test_saturating() {
        assert_eq!(Intensity::saturating(9.0).value(), 5.0);
        assert_eq!(Intensity::saturating(-1.0).value(), 0.0);
        assert_eq!(Intensity::saturating(f32::NAN), Intensity::DEFAULT);
    }
}
