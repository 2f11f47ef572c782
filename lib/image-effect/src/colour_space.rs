//! 8-bit colour space conversions.
//!
//! Converted images reuse `RgbImage` as a three-plane container:
//! HSV images hold `[H, S, V]` with H in `[0, 180)` (half degrees) and S, V
//! in `[0, 255]`; YUV images hold `[Y, U, V]` with BT.601 weights and the
//! chroma planes offset by 128.

use image::{GrayImage, Luma, Rgb, RgbImage};

fn round_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

pub fn rgb_to_hsv_pixel([r, g, b]: [u8; 3]) -> [u8; 3] {
    let (rf, gf, bf) = (r as f32, g as f32, b as f32);
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let saturation = if max == 0.0 { 0.0 } else { delta * 255.0 / max };

    let mut hue = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * (gf - bf) / delta
    } else if max == gf {
        120.0 + 60.0 * (bf - rf) / delta
    } else {
        240.0 + 60.0 * (rf - gf) / delta
    };

    if hue < 0.0 {
        hue += 360.0;
    }

    let hue = (hue / 2.0).round() as u32 % 180;
    [hue as u8, round_u8(saturation), max as u8]
}

pub fn hsv_to_rgb_pixel([h, s, v]: [u8; 3]) -> [u8; 3] {
    let value = v as f32;
    if s == 0 {
        return [v, v, v];
    }

    let saturation = s as f32 / 255.0;
    let hue = (h as f32 * 2.0) % 360.0 / 60.0;
    let sector = hue.floor();
    let fraction = hue - sector;

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * fraction);
    let t = value * (1.0 - saturation * (1.0 - fraction));

    let (r, g, b) = match sector as u32 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    [round_u8(r), round_u8(g), round_u8(b)]
}

pub fn rgb_to_yuv_pixel([r, g, b]: [u8; 3]) -> [u8; 3] {
    let (rf, gf, bf) = (r as f32, g as f32, b as f32);
    let y = 0.299 * rf + 0.587 * gf + 0.114 * bf;
    let u = 0.492 * (bf - y) + 128.0;
    let v = 0.877 * (rf - y) + 128.0;

    [round_u8(y), round_u8(u), round_u8(v)]
}

pub fn yuv_to_rgb_pixel([y, u, v]: [u8; 3]) -> [u8; 3] {
    let yf = y as f32;
    let uf = u as f32 - 128.0;
    let vf = v as f32 - 128.0;

    [
        round_u8(yf + 1.140 * vf),
        round_u8(yf - 0.395 * uf - 0.581 * vf),
        round_u8(yf + 2.032 * uf),
    ]
}

fn map_pixels(image: &RgbImage, f: impl Fn([u8; 3]) -> [u8; 3]) -> RgbImage {
    let mut output = image.clone();
    for pixel in output.pixels_mut() {
        *pixel = Rgb(f(pixel.0));
    }
    output
}

pub fn rgb_to_hsv(image: &RgbImage) -> RgbImage {
    map_pixels(image, rgb_to_hsv_pixel)
}

pub fn hsv_to_rgb(image: &RgbImage) -> RgbImage {
    map_pixels(image, hsv_to_rgb_pixel)
}

pub fn rgb_to_yuv(image: &RgbImage) -> RgbImage {
    map_pixels(image, rgb_to_yuv_pixel)
}

pub fn yuv_to_rgb(image: &RgbImage) -> RgbImage {
    map_pixels(image, yuv_to_rgb_pixel)
}

/// Copies one plane of a three-plane image out as a grayscale image.
pub fn extract_plane(image: &RgbImage, channel: usize) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([image.get_pixel(x, y)[channel]])
    })
}

/// Writes `plane` back into `channel` of `image`. Dimensions must match.
pub fn replace_plane(image: &mut RgbImage, channel: usize, plane: &GrayImage) {
    debug_assert_eq!(image.dimensions(), plane.dimensions());

    for (pixel, value) in image.pixels_mut().zip(plane.pixels()) {
        pixel[channel] = value[0];
    }
}
