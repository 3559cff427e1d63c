// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Recoverable errors.  Invalid geometry handed to the carving core
//! itself is a programming error and panics instead.

use failure::Fail;

#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    #[fail(display = "cannot carve an empty {}x{} image", width, height)]
    EmptyImage { width: u32, height: u32 },

    #[fail(
        display = "cannot remove {} {} seams from an image {} pixels across; at most {} allowed",
        requested, direction, extent, allowed
    )]
    TooManySeams {
        direction: String,
        requested: u32,
        extent: u32,
        allowed: u32,
    },

    #[fail(
        display = "seamcarve cannot upscale an image from {}x{} to {}x{}",
        width, height, new_width, new_height
    )]
    Upscale {
        width: u32,
        height: u32,
        new_width: u32,
        new_height: u32,
    },

    #[fail(display = "cannot carve down to an empty {}x{} image", new_width, new_height)]
    EmptyTarget { new_width: u32, new_height: u32 },

    #[fail(
        display = "unknown carving direction {:?}; expected vertical or horizontal",
        _0
    )]
    UnknownDirection(String),
}
