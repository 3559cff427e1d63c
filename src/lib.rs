// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Step-by-step seam carving
//!
//! Shrink an image one seam at a time, keeping every intermediate
//! energy map and seam so the carve can be watched as it happens.

pub mod energy;
pub use energy::{calculate_energy, energy_to_image, luminance};

pub mod error;
pub use error::CarveError;

pub mod flipper;
pub use flipper::{transpose, Flipper};

pub mod grid;
pub use grid::{EnergyMap, Grid};

pub mod overlay;
pub use overlay::{mark_seam_on_energy, overlay_seam, SEAM_HIGHLIGHT};

pub mod request;
pub use request::{max_seams, CarveRequest, Direction, SEAM_MARGIN};

pub mod seam;
pub use seam::Seam;

pub mod seamcarver;
pub use seamcarver::{
    carve_steps, remove_vertical_seam, seamcarve, CarveState, CarveSteps, HorizontalCarve,
    SeamCarver, VerticalCarve,
};

pub mod seamfinder;
pub use seamfinder::{find_vertical_seam, CostMap, Step};
