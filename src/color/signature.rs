//! Mean-color signatures for regions and tiles
//!
//! A signature is the per-channel arithmetic mean of a pixel region using
//! integer truncating division, matching the reference behavior exactly so
//! composed output is reproducible bit for bit. Alpha never participates
//! in matching.

use crate::io::error::{MosaicError, Result};
use crate::spatial::Region;
use image::RgbaImage;

/// Mean RGB color of a pixel region, used for tile matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSignature {
    /// Mean red channel value
    pub red: u8,
    /// Mean green channel value
    pub green: u8,
    /// Mean blue channel value
    pub blue: u8,
}

impl ColorSignature {
    /// Create a signature from explicit channel means
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Compute the signature of an entire image
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyRegion`] if the image has no pixels
    pub fn of_image(image: &RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::of_region(image, Region::full(width, height))
    }

    /// Compute the signature of a rectangular region of an image
    ///
    /// Sums each channel over every pixel in the region, then divides by
    /// the pixel count with truncating division.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The region covers zero pixels ([`MosaicError::EmptyRegion`])
    /// - The region extends past the image bounds
    ///   ([`MosaicError::RegionOutOfBounds`])
    pub fn of_region(image: &RgbaImage, region: Region) -> Result<Self> {
        if region.is_empty() {
            return Err(MosaicError::EmptyRegion {
                width: region.width,
                height: region.height,
            });
        }

        let (image_width, image_height) = image.dimensions();
        let within_x = region.x.checked_add(region.width).is_some_and(|r| r <= image_width);
        let within_y = region.y.checked_add(region.height).is_some_and(|b| b <= image_height);
        if !within_x || !within_y {
            return Err(MosaicError::RegionOutOfBounds {
                region: (region.x, region.y, region.width, region.height),
                image_dimensions: (image_width, image_height),
            });
        }

        let mut red_sum: u64 = 0;
        let mut green_sum: u64 = 0;
        let mut blue_sum: u64 = 0;

        for y in region.y..region.y + region.height {
            for x in region.x..region.x + region.width {
                if let Some(pixel) = image.get_pixel_checked(x, y) {
                    let [red, green, blue, _alpha] = pixel.0;
                    red_sum += u64::from(red);
                    green_sum += u64::from(green);
                    blue_sum += u64::from(blue);
                }
            }
        }

        let count = region.pixel_count();
        Ok(Self {
            red: (red_sum / count) as u8,
            green: (green_sum / count) as u8,
            blue: (blue_sum / count) as u8,
        })
    }

    /// Euclidean distance to another signature in RGB space
    pub fn distance(self, other: Self) -> f64 {
        let delta_red = f64::from(self.red) - f64::from(other.red);
        let delta_green = f64::from(self.green) - f64::from(other.green);
        let delta_blue = f64::from(self.blue) - f64::from(other.blue);

        delta_red
            .mul_add(
                delta_red,
                delta_green.mul_add(delta_green, delta_blue * delta_blue),
            )
            .sqrt()
    }
}
