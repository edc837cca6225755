// Copyright 2026 the Escutcheon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// One of the nine compass anchors an object can be attached to.
///
/// Names follow the classic image-processing spelling (`NorthWest`,
/// `Center`, ...). North is the top edge of the canvas.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Gravity {
    /// Top-left corner.
    NorthWest,
    /// Middle of the top edge.
    #[default]
    North,
    /// Top-right corner.
    NorthEast,
    /// Middle of the left edge.
    West,
    /// Middle of the canvas.
    Center,
    /// Middle of the right edge.
    East,
    /// Bottom-left corner.
    SouthWest,
    /// Middle of the bottom edge.
    South,
    /// Bottom-right corner.
    SouthEast,
}

/// Position of an anchor along one axis, from the low end to the high end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    /// Coordinate of this anchor on an axis of length `extent`.
    pub(crate) fn position(self, extent: f64) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Middle => extent / 2.0,
            Self::End => extent,
        }
    }

    /// Center of an object of length `object` pinned to this anchor on an axis
    /// of length `extent`.
    pub(crate) fn pinned_center(self, object: f64, extent: f64) -> f64 {
        match self {
            Self::Start => object / 2.0,
            Self::Middle => extent / 2.0,
            Self::End => extent - object / 2.0,
        }
    }
}

impl Gravity {
    /// All gravities, row by row from the top-left.
    pub const ALL: [Self; 9] = [
        Self::NorthWest,
        Self::North,
        Self::NorthEast,
        Self::West,
        Self::Center,
        Self::East,
        Self::SouthWest,
        Self::South,
        Self::SouthEast,
    ];

    /// The canonical name of this gravity.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NorthWest => "NorthWest",
            Self::North => "North",
            Self::NorthEast => "NorthEast",
            Self::West => "West",
            Self::Center => "Center",
            Self::East => "East",
            Self::SouthWest => "SouthWest",
            Self::South => "South",
            Self::SouthEast => "SouthEast",
        }
    }

    /// Horizontal anchor, west to east.
    pub(crate) fn horizontal(self) -> Anchor {
        match self {
            Self::NorthWest | Self::West | Self::SouthWest => Anchor::Start,
            Self::North | Self::Center | Self::South => Anchor::Middle,
            Self::NorthEast | Self::East | Self::SouthEast => Anchor::End,
        }
    }

    /// Vertical anchor in a Y-up space, south to north.
    pub(crate) fn vertical(self) -> Anchor {
        match self {
            Self::SouthWest | Self::South | Self::SouthEast => Anchor::Start,
            Self::West | Self::Center | Self::East => Anchor::Middle,
            Self::NorthWest | Self::North | Self::NorthEast => Anchor::End,
        }
    }
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gravity {
    type Err = GravityError;

    /// Names are matched case-sensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|gravity| gravity.name() == s)
            .ok_or(GravityError)
    }
}

/// Error returned when a string names no [`Gravity`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GravityError;

impl fmt::Display for GravityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown gravity, expected one of ")?;
        for (i, gravity) in Gravity::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(gravity.name())?;
        }
        Ok(())
    }
}

impl core::error::Error for GravityError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for gravity in Gravity::ALL {
            assert_eq!(gravity.name().parse::<Gravity>(), Ok(gravity));
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert_eq!("northwest".parse::<Gravity>(), Err(GravityError));
        assert_eq!("CENTER".parse::<Gravity>(), Err(GravityError));
        assert_eq!("".parse::<Gravity>(), Err(GravityError));
    }

    #[test]
    fn default_is_north() {
        assert_eq!(Gravity::default(), Gravity::North);
    }

    #[test]
    fn anchors_follow_compass() {
        assert_eq!(Gravity::NorthEast.horizontal(), Anchor::End);
        assert_eq!(Gravity::NorthEast.vertical(), Anchor::End);
        assert_eq!(Gravity::SouthWest.horizontal(), Anchor::Start);
        assert_eq!(Gravity::SouthWest.vertical(), Anchor::Start);
        assert_eq!(Gravity::Center.horizontal(), Anchor::Middle);
        assert_eq!(Gravity::Center.vertical(), Anchor::Middle);
    }
}
