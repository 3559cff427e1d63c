// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image dimensional flipper
//!
//! A utility proxy for the ImageRS "Image" trait that maps the width
//! to the original height, and vice versa, as well as every x to y
//! and vice versa.
//!
//! Carving rows out of an image is the same problem as carving columns
//! out of its transpose, so the horizontal carver flips the image,
//! runs the vertical machinery, and flips every result back.

use image::{GenericImageView, ImageBuffer, Pixel, Primitive};

/// A read-only, zero-copy view of an image with its axes swapped.
pub struct Flipper<'a, I: GenericImageView> {
    image: &'a I,
}

impl<'a, I: GenericImageView> Flipper<'a, I> {
    pub fn new(image: &'a I) -> Self {
        Flipper { image }
    }
}

impl<'a, I: GenericImageView> GenericImageView for Flipper<'a, I> {
    type Pixel = I::Pixel;
    type InnerImageView = I;

    fn dimensions(&self) -> (u32, u32) {
        let (x, y) = self.image.dimensions();
        (y, x)
    }

    fn width(&self) -> u32 {
        self.image.height()
    }

    fn height(&self) -> u32 {
        self.image.width()
    }

    fn get_pixel(&self, x: u32, y: u32) -> I::Pixel {
        self.image.get_pixel(y, x)
    }

    fn inner(&self) -> &Self::InnerImageView {
        self.image
    }

    fn bounds(&self) -> (u32, u32, u32, u32) {
        let (x1, y1, x2, y2) = self.image.bounds();
        (y1, x1, y2, x2)
    }
}

/// Copy an image into a new buffer with its two spatial axes swapped.
/// The channels of each pixel are untouched.
pub fn transpose<I, P, S>(image: &I) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let flipped = Flipper::new(image);
    let (width, height) = flipped.dimensions();
    let mut scratch = ImageBuffer::new(width, height);
    flipped
        .pixels()
        .for_each(|(x, y, pixel)| scratch.put_pixel(x, y, pixel));
    scratch
}
