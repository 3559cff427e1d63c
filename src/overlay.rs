// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Drawing seams for display.  Nothing here feeds back into the
//! search; the carver only hands these pictures to its caller.

use crate::seam::Seam;
use image::{GrayImage, ImageBuffer, Pixel, Rgb, RgbImage};

/// The colour a seam is painted in.  Pure, fully saturated red.
pub const SEAM_HIGHLIGHT: Rgb<u8> = Rgb([255, 0, 0]);

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// A copy of the image with every pixel of the seam painted in
/// `SEAM_HIGHLIGHT`.
pub fn overlay_seam(image: &RgbImage, seam: &Seam) -> RgbImage {
    let (width, height) = image.dimensions();
    assert_eq!(
        seam.len(),
        height as usize,
        "seam of length {} cannot be drawn on an image {} rows tall",
        seam.len(),
        height
    );
    let mut out = image.clone();
    for (y, &x) in seam.iter().enumerate() {
        assert!(x < width, "seam column {} outside a {} wide image", x, width);
        out.put_pixel(x, y as u32, SEAM_HIGHLIGHT);
    }
    out
}

/// Render a normalised energy image in colour, and paint white every
/// pixel that the overlay shows in the highlight colour.
pub fn mark_seam_on_energy(energy: &GrayImage, overlay: &RgbImage) -> RgbImage {
    assert_eq!(
        energy.dimensions(),
        overlay.dimensions(),
        "energy and overlay images differ in size"
    );
    let (width, height) = energy.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| {
        if *overlay.get_pixel(x, y) == SEAM_HIGHLIGHT {
            WHITE
        } else {
            energy.get_pixel(x, y).to_rgb()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn checker() -> RgbImage {
        RgbImage::from_fn(3, 3, |x, y| Rgb([(x * 10) as u8, (y * 10) as u8, 100]))
    }

    #[test]
    fn paints_only_the_seam() {
        let image = checker();
        let seam = Seam::from(vec![0, 1, 1]);
        let painted = overlay_seam(&image, &seam);
        for y in 0..3 {
            for x in 0..3 {
                let expected = if x == seam[y as usize] {
                    SEAM_HIGHLIGHT
                } else {
                    *image.get_pixel(x, y)
                };
                assert_eq!(*painted.get_pixel(x, y), expected);
            }
        }
        // The source is left alone.
        assert!(image.pixels().all(|p| p[2] == 100));
    }

    #[test]
    #[should_panic]
    fn short_seams_are_fatal() {
        overlay_seam(&checker(), &Seam::from(vec![0, 0]));
    }

    #[test]
    fn marks_highlighted_pixels_white() {
        let energy = GrayImage::from_pixel(3, 3, Luma([40]));
        let overlay = overlay_seam(&checker(), &Seam::from(vec![2, 2, 1]));
        let marked = mark_seam_on_energy(&energy, &overlay);
        assert_eq!(*marked.get_pixel(2, 0), WHITE);
        assert_eq!(*marked.get_pixel(1, 2), WHITE);
        assert_eq!(*marked.get_pixel(0, 0), Rgb([40, 40, 40]));
    }
}
