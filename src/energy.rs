// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given an image, calculate its energy map: the sum of the absolute
//! horizontal and vertical Sobel gradients of the image's luminance.
//! Pixels on the border are treated as if the outermost row or column
//! were repeated forever.

use crate::grid::{EnergyMap, Grid};
use image::{GenericImageView, GrayImage, ImageBuffer, Luma, Pixel, Primitive};
use itertools::iproduct;
use num_traits::ToPrimitive;

/// Pixel -> Luminance
///
/// The BT.601 weighting, rounded to a whole intensity the same way an
/// 8-bit grayscale conversion would be.
#[inline]
pub fn luminance<P, S>(pixel: &P) -> f64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let rgb = pixel.to_rgb();
    let channel = |c: S| c.to_f64().unwrap_or(0.0);
    (0.299 * channel(rgb[0]) + 0.587 * channel(rgb[1]) + 0.114 * channel(rgb[2])).round()
}

fn luminance_plane<I, P, S>(image: &I) -> Grid<f64>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    Grid::from_vec(
        width,
        height,
        iproduct!(0..height, 0..width)
            .map(|(y, x)| luminance(&image.get_pixel(x, y)))
            .collect(),
    )
}

/// Compute the energy of every pixel in an image.  This is generic on
/// the image type; colour images are reduced to luminance before the
/// gradients are taken.
pub fn calculate_energy<I, P, S>(image: &I) -> EnergyMap
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    assert!(
        width > 0 && height > 0,
        "cannot compute the energy of an empty {}x{} image",
        width,
        height
    );
    let (mw, mh) = (width - 1, height - 1);
    let luma = luminance_plane(image);

    let energy = iproduct!(0..height, 0..width)
        .map(|(y, x)| {
            let (left, right) = (x.saturating_sub(1), (x + 1).min(mw));
            let (up, down) = (y.saturating_sub(1), (y + 1).min(mh));
            let l = |x: u32, y: u32| luma[(x, y)];

            let gx = (l(right, up) + 2.0 * l(right, y) + l(right, down))
                - (l(left, up) + 2.0 * l(left, y) + l(left, down));
            let gy = (l(left, down) + 2.0 * l(x, down) + l(right, down))
                - (l(left, up) + 2.0 * l(x, up) + l(right, up));
            gx.abs() + gy.abs()
        })
        .collect();

    Grid::from_vec(width, height, energy)
}

/// Scale an energy map into a displayable grayscale image, with the
/// hottest pixel rendered white.
pub fn energy_to_image(energy: &EnergyMap) -> GrayImage {
    let factor = energy.iter().cloned().fold(0.0, f64::max) + 1e-9;
    ImageBuffer::from_fn(energy.width(), energy.height(), |x, y| {
        let scaled = (255.0 * energy[(x, y)] / factor).round();
        Luma([scaled.max(0.0).min(255.0) as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    // Three columns of gray at 0, 10 and 20, three rows tall.
    const RAMP_DATA: [u8; 9] = [0, 10, 20, 0, 10, 20, 0, 10, 20];
    const RAMP_ENERGY: [f64; 9] = [40.0, 80.0, 40.0, 40.0, 80.0, 40.0, 40.0, 80.0, 40.0];

    fn ramp() -> GrayImage {
        ImageBuffer::from_raw(3, 3, RAMP_DATA.to_vec()).unwrap()
    }

    #[test]
    fn luminance_uses_rounded_bt601_weights() {
        assert_eq!(luminance(&Rgb([255u8, 0, 0])), 76.0);
        assert_eq!(luminance(&Rgb([0u8, 255, 0])), 150.0);
        assert_eq!(luminance(&Rgb([0u8, 0, 255])), 29.0);
        assert_eq!(luminance(&Rgb([200u8, 200, 200])), 200.0);
        assert_eq!(luminance(&Luma([17u8])), 17.0);
    }

    #[test]
    fn horizontal_ramp_energy() {
        let energy = calculate_energy(&ramp());
        assert_eq!(energy.as_slice(), &RAMP_ENERGY);
    }

    #[test]
    fn vertical_gradients_follow_the_transpose() {
        let image = ramp();
        let flipped = ImageBuffer::from_fn(3, 3, |x, y| *image.get_pixel(y, x));
        let energy: EnergyMap = calculate_energy(&flipped);
        assert_eq!(energy, calculate_energy(&image).transpose());
    }

    #[test]
    fn single_bright_column() {
        let image = RgbImage::from_fn(4, 4, |x, _| {
            if x == 2 {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        });
        let energy = calculate_energy(&image);
        for y in 0..4 {
            assert_eq!(energy.row(y), &[0.0, 1020.0, 0.0, 1020.0]);
        }
    }

    #[test]
    fn uniform_image_has_no_energy() {
        let image = RgbImage::from_pixel(6, 5, Rgb([90, 120, 30]));
        let energy = calculate_energy(&image);
        assert!(energy.iter().all(|&e| e == 0.0));
    }

    #[test]
    fn energy_is_repeatable() {
        let image = RgbImage::from_fn(7, 5, |x, y| {
            Rgb([(x * 31) as u8, (y * 17) as u8, (x * y) as u8])
        });
        assert_eq!(calculate_energy(&image), calculate_energy(&image));
    }

    #[test]
    fn single_pixel_image() {
        let image = RgbImage::from_pixel(1, 1, Rgb([1, 2, 3]));
        assert_eq!(calculate_energy(&image).as_slice(), &[0.0]);
    }

    #[test]
    #[should_panic]
    fn empty_image_is_fatal() {
        calculate_energy(&RgbImage::new(0, 3));
    }

    #[test]
    fn energy_image_scales_to_white() {
        let energy = calculate_energy(&ramp());
        let shown = energy_to_image(&energy);
        assert_eq!(shown.get_pixel(1, 1)[0], 255);
        assert_eq!(shown.get_pixel(0, 1)[0], 127);

        let flat = energy_to_image(&Grid::new(2, 2));
        assert!(flat.pixels().all(|p| p[0] == 0));
    }
}
