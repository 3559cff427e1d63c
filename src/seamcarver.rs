// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main functions
//!
//! Removing a seam, and the step-by-step carvers that repeat energy,
//! search, overlay and removal once per seam.  Each step hands back
//! everything a caller needs to animate the carve: the narrower image,
//! the energy map it was chosen from, and the seam drawn on the image
//! it was cut out of.
//!
//! There is only one implementation of the search.  Horizontal seams
//! are found by flipping the image, carving it vertically, and flipping
//! every result back.

use crate::energy::calculate_energy;
use crate::error::CarveError;
use crate::flipper::transpose;
use crate::grid::EnergyMap;
use crate::overlay::overlay_seam;
use crate::request::Direction;
use crate::seam::Seam;
use crate::seamfinder::{find_vertical_seam, CostMap};
use image::{GenericImageView, ImageBuffer, Pixel, Primitive, RgbImage};
use log::{debug, trace};
use std::iter::FusedIterator;

/// Remove one pixel from every row: the one the seam passes through.
/// The survivors to its right shift left to close the gap.
///
/// A seam that does not fit the image is a programming error, and
/// panics rather than produce a corrupt picture.
pub fn remove_vertical_seam<I, P, S>(image: &I, seam: &Seam) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    assert_eq!(
        seam.len(),
        height as usize,
        "seam of length {} cannot be removed from an image {} rows tall",
        seam.len(),
        height
    );
    let mut imgbuf = ImageBuffer::new(width.saturating_sub(1), height);
    for (y, &cut) in (0..height).zip(seam.iter()) {
        assert!(
            cut < width,
            "seam column {} in row {} is outside a {} wide image",
            cut,
            y,
            width
        );
        for x in (0..width).filter(|&x| x != cut) {
            let target = if x < cut { x } else { x - 1 };
            imgbuf.put_pixel(target, y, image.get_pixel(x, y));
        }
    }
    imgbuf
}

/// One step of a carve.
#[derive(Debug, Clone)]
pub struct CarveState {
    /// Counts from 1; the last state of a `k` seam carve is step `k`.
    pub step: u32,
    /// The image after this step's seam was removed.
    pub image: RgbImage,
    /// The energy of the image before the seam was removed.
    pub energy: EnergyMap,
    /// The image before the seam was removed, with the seam painted in
    /// `SEAM_HIGHLIGHT`.
    pub seam_overlay: RgbImage,
    /// The seam that was removed.  For horizontal carves this is in the
    /// flipped frame: entry `i` is the row taken out of column `i`.
    pub seam: Seam,
}

/// Removes `seams` vertical seams, one per call to `next()`.
///
/// The carver owns its working copy of the image; the caller gets
/// copies.  Once exhausted it stays exhausted; build a new one to carve
/// again.
#[derive(Debug, Clone)]
pub struct VerticalCarve {
    current: RgbImage,
    step: u32,
    seams: u32,
}

impl VerticalCarve {
    pub fn new(image: &RgbImage, seams: u32) -> Self {
        VerticalCarve {
            current: image.clone(),
            step: 0,
            seams,
        }
    }

    /// The working image as it stands after the latest step.
    pub fn image(&self) -> &RgbImage {
        &self.current
    }

    pub fn into_image(self) -> RgbImage {
        self.current
    }
}

impl Iterator for VerticalCarve {
    type Item = CarveState;

    fn next(&mut self) -> Option<CarveState> {
        if self.step >= self.seams {
            return None;
        }
        self.step += 1;

        let energy = calculate_energy(&self.current);
        let costs = CostMap::accumulate(&energy);
        let seam = costs.backtrack();
        let seam_overlay = overlay_seam(&self.current, &seam);
        self.current = remove_vertical_seam(&self.current, &seam);

        debug!(
            "seam {}/{}: cost {}, image now {}x{}",
            self.step,
            self.seams,
            costs.minimum_cost(),
            self.current.width(),
            self.current.height()
        );

        Some(CarveState {
            step: self.step,
            image: self.current.clone(),
            energy,
            seam_overlay,
            seam,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.seams - self.step) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for VerticalCarve {}

impl FusedIterator for VerticalCarve {}

/// Removes `seams` horizontal seams, one per call to `next()`, by
/// carving the transposed image vertically.
#[derive(Debug, Clone)]
pub struct HorizontalCarve {
    inner: VerticalCarve,
}

impl HorizontalCarve {
    pub fn new(image: &RgbImage, seams: u32) -> Self {
        HorizontalCarve {
            inner: VerticalCarve::new(&transpose(image), seams),
        }
    }

    pub fn into_image(self) -> RgbImage {
        transpose(&self.inner.into_image())
    }
}

impl Iterator for HorizontalCarve {
    type Item = CarveState;

    fn next(&mut self) -> Option<CarveState> {
        self.inner.next().map(|state| CarveState {
            step: state.step,
            image: transpose(&state.image),
            energy: state.energy.transpose(),
            seam_overlay: transpose(&state.seam_overlay),
            seam: state.seam,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for HorizontalCarve {}

impl FusedIterator for HorizontalCarve {}

/// Either carver, chosen at run time.
#[derive(Debug, Clone)]
pub enum CarveSteps {
    Vertical(VerticalCarve),
    Horizontal(HorizontalCarve),
}

impl Iterator for CarveSteps {
    type Item = CarveState;

    fn next(&mut self) -> Option<CarveState> {
        match self {
            CarveSteps::Vertical(carve) => carve.next(),
            CarveSteps::Horizontal(carve) => carve.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            CarveSteps::Vertical(carve) => carve.size_hint(),
            CarveSteps::Horizontal(carve) => carve.size_hint(),
        }
    }
}

impl ExactSizeIterator for CarveSteps {}

impl FusedIterator for CarveSteps {}

/// Build a step-by-step carver that removes `seams` seams in the given
/// direction.
pub fn carve_steps(image: &RgbImage, direction: Direction, seams: u32) -> CarveSteps {
    match direction {
        Direction::Vertical => CarveSteps::Vertical(VerticalCarve::new(image, seams)),
        Direction::Horizontal => CarveSteps::Horizontal(HorizontalCarve::new(image, seams)),
    }
}

/// Remove `seams` seams in one direction and return only the result.
pub fn seamcarve(image: &RgbImage, direction: Direction, seams: u32) -> RgbImage {
    match direction {
        Direction::Vertical => {
            let mut carve = VerticalCarve::new(image, seams);
            carve.by_ref().for_each(drop);
            carve.into_image()
        }
        Direction::Horizontal => {
            let mut carve = HorizontalCarve::new(image, seams);
            carve.by_ref().for_each(drop);
            carve.into_image()
        }
    }
}

fn carve_once(image: &RgbImage, direction: Direction) -> RgbImage {
    match direction {
        Direction::Vertical => {
            let seam = find_vertical_seam(&calculate_energy(image));
            remove_vertical_seam(image, &seam)
        }
        Direction::Horizontal => transpose(&carve_once(&transpose(image), Direction::Vertical)),
    }
}

/// Carves an image down to a target size in both dimensions.
pub struct SeamCarver<'a> {
    image: &'a RgbImage,
}

impl<'a> SeamCarver<'a> {
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a RgbImage) -> Self {
        Self { image }
    }

    // The entire energy map and cost grid are recalculated for every
    // seam.  Only the columns either side of the last seam actually
    // change.

    /// Given a desired new width and height, repeatedly carve seams out
    /// of the image, alternating between the two directions while both
    /// still need to shrink.
    pub fn carve(&self, new_width: u32, new_height: u32) -> Result<RgbImage, CarveError> {
        let (width, height) = self.image.dimensions();
        if width < new_width || height < new_height {
            return Err(CarveError::Upscale {
                width,
                height,
                new_width,
                new_height,
            });
        }
        if new_width == 0 || new_height == 0 {
            return Err(CarveError::EmptyTarget {
                new_width,
                new_height,
            });
        }

        let mut direction = Direction::Vertical;
        let mut scratch = self.image.clone();
        loop {
            let (width, height) = scratch.dimensions();
            let wanted = match (width > new_width, height > new_height) {
                (true, true) => direction,
                (true, false) => Direction::Vertical,
                (false, true) => Direction::Horizontal,
                (false, false) => break,
            };
            scratch = carve_once(&scratch, wanted);
            trace!("{} seam: {}x{}", wanted, scratch.width(), scratch.height());
            direction = wanted.turn();
        }
        Ok(scratch)
    }
}
