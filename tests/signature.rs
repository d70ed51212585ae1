//! Validates mean-color signature computation over images and regions

use image::{Rgba, RgbaImage};
use quadmosaic::MosaicError;
use quadmosaic::color::ColorSignature;
use quadmosaic::spatial::Region;

fn solid(width: u32, height: u32, rgb: [u8; 3]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

#[test]
fn test_uniform_region_returns_exact_color() {
    for (width, height) in [(1, 1), (3, 7), (16, 16), (9, 40)] {
        let image = solid(width, height, [120, 7, 230]);
        let signature = match ColorSignature::of_image(&image) {
            Ok(signature) => signature,
            Err(error) => unreachable!("signature of a non-empty image failed: {error}"),
        };
        assert_eq!(
            signature,
            ColorSignature::new(120, 7, 230),
            "uniform {width}x{height} region must average to its own color"
        );
    }
}

#[test]
fn test_averaging_truncates_toward_zero() {
    // (0 + 255) / 2 = 127.5, truncated to 127 on every channel
    let mut image = RgbaImage::new(2, 1);
    image.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
    image.put_pixel(1, 0, Rgba([255, 255, 255, 255]));

    let signature = match ColorSignature::of_image(&image) {
        Ok(signature) => signature,
        Err(error) => unreachable!("signature of a 2x1 image failed: {error}"),
    };
    assert_eq!(signature, ColorSignature::new(127, 127, 127));
}

#[test]
fn test_empty_region_is_an_error() {
    let image = solid(4, 4, [10, 20, 30]);

    for region in [Region::new(0, 0, 0, 4), Region::new(0, 0, 4, 0)] {
        match ColorSignature::of_region(&image, region) {
            Err(MosaicError::EmptyRegion { .. }) => {}
            Ok(signature) => unreachable!("empty region produced a signature: {signature:?}"),
            Err(error) => unreachable!("empty region produced the wrong error: {error}"),
        }
    }

    match ColorSignature::of_image(&RgbaImage::new(0, 0)) {
        Err(MosaicError::EmptyRegion { .. }) => {}
        other => unreachable!("0x0 image must yield EmptyRegion, got {other:?}"),
    }
}

#[test]
fn test_region_past_image_bounds_is_an_error() {
    let image = solid(8, 8, [0, 0, 0]);

    match ColorSignature::of_region(&image, Region::new(4, 4, 8, 8)) {
        Err(MosaicError::RegionOutOfBounds { .. }) => {}
        other => unreachable!("out-of-bounds region must be rejected, got {other:?}"),
    }
}

#[test]
fn test_sub_region_averages_only_its_own_pixels() {
    // Left half red, right half blue; each half must average independently
    let mut image = RgbaImage::new(8, 4);
    for y in 0..4 {
        for x in 0..8 {
            let color = if x < 4 {
                Rgba([200, 0, 0, 255])
            } else {
                Rgba([0, 0, 200, 255])
            };
            image.put_pixel(x, y, color);
        }
    }

    let left = ColorSignature::of_region(&image, Region::new(0, 0, 4, 4));
    let right = ColorSignature::of_region(&image, Region::new(4, 0, 4, 4));

    assert_eq!(left.ok(), Some(ColorSignature::new(200, 0, 0)));
    assert_eq!(right.ok(), Some(ColorSignature::new(0, 0, 200)));
}

#[test]
fn test_alpha_never_participates_in_matching() {
    let opaque = RgbaImage::from_pixel(3, 3, Rgba([90, 60, 30, 255]));
    let translucent = RgbaImage::from_pixel(3, 3, Rgba([90, 60, 30, 17]));

    assert_eq!(
        ColorSignature::of_image(&opaque).ok(),
        ColorSignature::of_image(&translucent).ok(),
        "signatures must ignore the alpha channel"
    );
}

#[test]
fn test_distance_is_euclidean_in_rgb() {
    let black = ColorSignature::new(0, 0, 0);
    let grey = ColorSignature::new(5, 5, 5);
    let white = ColorSignature::new(255, 255, 255);

    let expected = (3.0_f64 * 25.0).sqrt();
    assert!((black.distance(grey) - expected).abs() < 1e-12);
    assert!((grey.distance(black) - expected).abs() < 1e-12, "symmetric");
    assert_eq!(black.distance(black), 0.0);
    assert!(black.distance(white) > black.distance(grey));
}
