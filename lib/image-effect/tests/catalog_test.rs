// cargo test -p image-effect --test catalog_test

use image::{Rgb, RgbImage};
use image_effect::{Catalog, Category, ErrorKind, Intensity, Operation, Selection};

fn sample_image() -> RgbImage {
    RgbImage::from_fn(24, 18, |x, y| {
        Rgb([
            (x * 10) as u8,
            (y * 14) as u8,
            if (x / 4 + y / 4) % 2 == 0 { 40 } else { 220 },
        ])
    })
}

fn intensities() -> impl Iterator<Item = Intensity> {
    [0.0, 0.1, 0.5, 1.0, 1.5, 2.0, 3.7, 5.0]
        .into_iter()
        .map(|v| Intensity::new(v).unwrap())
}

#[test]
fn test_every_operation_keeps_shape() {
    let img = sample_image();

    for op in Operation::all() {
        for intensity in intensities() {
            match op.apply(&img, intensity) {
                Ok(out) => assert_eq!(
                    out.dimensions(),
                    img.dimensions(),
                    "{op} at {intensity}"
                ),
                Err(e) => {
                    // The only refusal is gamma at zero
                    assert_eq!(*op, Operation::GammaCorrection);
                    assert_eq!(intensity.value(), 0.0);
                    assert_eq!(e.kind(), ErrorKind::DegenerateParameter);
                }
            }
        }
    }
}

#[test]
fn test_original_is_not_modified() {
    let catalog = Catalog::standard().unwrap();
    let img = sample_image();
    let copy = img.clone();

    for op in catalog.entries() {
        let selection = Selection::new(op.category(), op, Intensity::DEFAULT).unwrap();
        catalog.dispatch(&img, &selection).unwrap();
    }

    assert_eq!(img, copy);
}

#[test]
fn test_contrast_on_solid_gray() {
    let img = RgbImage::from_pixel(10, 10, Rgb([128, 128, 128]));
    let out = Operation::ContrastAdjustment
        .apply(&img, Intensity::new(1.0).unwrap())
        .unwrap();

    assert!(out.pixels().all(|p| *p == Rgb([255, 255, 255])));
}

#[test]
fn test_brightness_on_black() {
    let img = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
    let out = Operation::BrightnessAdjustment
        .apply(&img, Intensity::new(1.0).unwrap())
        .unwrap();

    assert!(out.pixels().all(|p| *p == Rgb([30, 30, 30])));
}

#[test]
fn test_value_adjustments_stay_in_range_on_white() {
    let img = RgbImage::from_pixel(8, 8, Rgb([255, 255, 255]));
    let max = Intensity::new(5.0).unwrap();

    for op in [
        Operation::BrightnessAdjustment,
        Operation::ContrastAdjustment,
        Operation::SaturationAdjustment,
    ] {
        let out = op.apply(&img, max).unwrap();
        assert!(out.pixels().all(|p| *p == Rgb([255, 255, 255])), "{op}");
    }
}

#[test]
fn test_gamma_identity_and_zero() {
    let img = sample_image();

    let out = Operation::GammaCorrection
        .apply(&img, Intensity::DEFAULT)
        .unwrap();
    assert_eq!(out, img);

    let err = Operation::GammaCorrection
        .apply(&img, Intensity::new(0.0).unwrap())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DegenerateParameter);
}

#[test]
fn test_filter_ordinal_out_of_range() {
    let catalog = Catalog::standard().unwrap();
    let err = catalog.parse_ordinal(Category::Filter, "9").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InputValidationFailure);
}

#[test]
fn test_edge_detection_zero_intensity() {
    let out = Operation::EdgeDetection
        .apply(&sample_image(), Intensity::new(0.0).unwrap())
        .unwrap();
    assert_eq!(out.dimensions(), (24, 18));
}

#[test]
fn test_edge_detection_zero_intensity_on_solid_gray() {
    let img = RgbImage::from_pixel(10, 10, Rgb([128, 128, 128]));
    let out = Operation::EdgeDetection
        .apply(&img, Intensity::new(0.0).unwrap())
        .unwrap();

    assert_eq!(out.dimensions(), (10, 10));
}

#[test]
fn test_every_operation_on_solid_gray() {
    let img = RgbImage::from_pixel(10, 10, Rgb([128, 128, 128]));

    for op in Operation::all() {
        for intensity in intensities().filter(|i| i.value() > 0.0) {
            let out = op.apply(&img, intensity).unwrap();
            assert_eq!(out.dimensions(), (10, 10), "{op} at {intensity}");
        }
    }
}
