// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! What the caller asks for: a direction and a number of seams.
//!
//! The carving core does not defend itself against requests that would
//! wear an image down to nothing.  Callers are expected to check a
//! request here first.

use crate::error::CarveError;
use std::fmt;
use std::str::FromStr;

/// How many pixels of the carved dimension a request must leave alone.
pub const SEAM_MARGIN: u32 = 5;

/// Which kind of seam to remove.  Vertical seams run top to bottom and
/// make the image narrower; horizontal seams run left to right and
/// make it shorter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Vertical,
    Horizontal,
}

impl Direction {
    /// The dimension this direction shrinks, out of (width, height).
    pub fn extent(self, (width, height): (u32, u32)) -> u32 {
        match self {
            Direction::Vertical => width,
            Direction::Horizontal => height,
        }
    }

    pub fn turn(self) -> Self {
        match self {
            Direction::Vertical => Direction::Horizontal,
            Direction::Horizontal => Direction::Vertical,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Vertical => write!(f, "vertical"),
            Direction::Horizontal => write!(f, "horizontal"),
        }
    }
}

impl FromStr for Direction {
    type Err = CarveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vertical" | "v" => Ok(Direction::Vertical),
            "horizontal" | "h" => Ok(Direction::Horizontal),
            _ => Err(CarveError::UnknownDirection(s.to_string())),
        }
    }
}

/// The largest number of seams that may be taken out of an image of
/// these dimensions in this direction.  Never less than one.
pub fn max_seams(direction: Direction, dimensions: (u32, u32)) -> u32 {
    direction
        .extent(dimensions)
        .saturating_sub(SEAM_MARGIN)
        .max(1)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CarveRequest {
    pub direction: Direction,
    pub seams: u32,
}

impl CarveRequest {
    pub fn new(direction: Direction, seams: u32) -> Self {
        CarveRequest { direction, seams }
    }

    /// Check the request against the image it will be applied to.
    pub fn validate(&self, (width, height): (u32, u32)) -> Result<(), CarveError> {
        if width == 0 || height == 0 {
            return Err(CarveError::EmptyImage { width, height });
        }
        let allowed = max_seams(self.direction, (width, height));
        if self.seams > allowed {
            return Err(CarveError::TooManySeams {
                direction: self.direction.to_string(),
                requested: self.seams,
                extent: self.direction.extent((width, height)),
                allowed,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_directions() {
        assert_eq!("vertical".parse(), Ok(Direction::Vertical));
        assert_eq!("H".parse(), Ok(Direction::Horizontal));
        assert_eq!(
            "diagonal".parse::<Direction>(),
            Err(CarveError::UnknownDirection("diagonal".to_string()))
        );
    }

    #[test]
    fn seam_limits_keep_a_margin() {
        assert_eq!(max_seams(Direction::Vertical, (100, 40)), 95);
        assert_eq!(max_seams(Direction::Horizontal, (100, 40)), 35);
        assert_eq!(max_seams(Direction::Vertical, (3, 40)), 1);
    }

    #[test]
    fn validates_requests() {
        assert!(CarveRequest::new(Direction::Vertical, 95).validate((100, 40)).is_ok());
        assert!(CarveRequest::new(Direction::Vertical, 0).validate((100, 40)).is_ok());
        assert_eq!(
            CarveRequest::new(Direction::Horizontal, 36).validate((100, 40)),
            Err(CarveError::TooManySeams {
                direction: "horizontal".to_string(),
                requested: 36,
                extent: 40,
                allowed: 35,
            })
        );
        assert_eq!(
            CarveRequest::new(Direction::Vertical, 1).validate((0, 10)),
            Err(CarveError::EmptyImage {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn turning_alternates() {
        assert_eq!(Direction::Vertical.turn(), Direction::Horizontal);
        assert_eq!(Direction::Vertical.turn().turn(), Direction::Vertical);
    }
}
