// Copyright 2026 the Escutcheon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry offsets such as `+10+5` or `-5%+0`.

use core::fmt;
use core::str::FromStr;

/// One axis of an [`Offset`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OffsetComponent {
    /// A displacement in canvas pixels.
    Pixels(f64),
    /// A displacement in percent of the canvas width.
    Percent(f64),
}

impl OffsetComponent {
    /// Resolve this component to pixels against a canvas of width `width`.
    pub fn resolve(self, width: f64) -> f64 {
        match self {
            Self::Pixels(px) => px,
            Self::Percent(pct) => width * pct / 100.0,
        }
    }
}

/// A displacement from a gravity anchor.
///
/// `x` grows to the east and `y` grows to the south, matching the usual
/// geometry-string convention.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Offset {
    /// Horizontal displacement.
    pub x: OffsetComponent,
    /// Vertical displacement, positive downwards.
    pub y: OffsetComponent,
}

impl Offset {
    /// Create an offset from its two components.
    pub const fn new(x: OffsetComponent, y: OffsetComponent) -> Self {
        Self { x, y }
    }

    /// A pixel offset.
    pub const fn pixels(x: f64, y: f64) -> Self {
        Self::new(OffsetComponent::Pixels(x), OffsetComponent::Pixels(y))
    }
}

impl FromStr for Offset {
    type Err = GeometryError;

    /// Parse a geometry string of the form `{+|-}N[%]{+|-}N[%]`.
    ///
    /// Both signs are required and `N` is one or more ASCII digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cursor = Cursor { src: s, pos: 0 };
        let x = cursor.component()?;
        let y = cursor.component()?;
        if cursor.pos != s.len() {
            return Err(GeometryError::new(cursor.pos, Expected::End));
        }
        Ok(Self { x, y })
    }
}

/// Writes the geometry string for this offset.
///
/// Geometry strings only hold whole numbers, so fractional components are
/// rounded to the nearest integer. The output of a finite offset always
/// parses back.
impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for component in [self.x, self.y] {
            match component {
                OffsetComponent::Pixels(v) => write!(f, "{v:+.0}")?,
                OffsetComponent::Percent(v) => write!(f, "{v:+.0}%")?,
            }
        }
        Ok(())
    }
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn component(&mut self) -> Result<OffsetComponent, GeometryError> {
        let negative = match self.peek() {
            Some(b'+') => false,
            Some(b'-') => true,
            _ => return Err(GeometryError::new(self.pos, Expected::Sign)),
        };
        self.pos += 1;

        let start = self.pos;
        let mut value = 0.0_f64;
        while let Some(digit @ b'0'..=b'9') = self.peek() {
            value = value * 10.0 + f64::from(digit - b'0');
            self.pos += 1;
        }
        if self.pos == start {
            return Err(GeometryError::new(self.pos, Expected::Digit));
        }
        if negative {
            value = -value;
        }

        if self.peek() == Some(b'%') {
            self.pos += 1;
            Ok(OffsetComponent::Percent(value))
        } else {
            Ok(OffsetComponent::Pixels(value))
        }
    }
}

/// What the geometry parser was looking for when it failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Expected {
    /// A `+` or `-` starting a component.
    Sign,
    /// A decimal digit after a sign.
    Digit,
    /// The end of the string after both components.
    End,
}

/// Error returned when a geometry string is malformed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GeometryError {
    position: usize,
    expected: Expected,
}

impl GeometryError {
    const fn new(position: usize, expected: Expected) -> Self {
        Self { position, expected }
    }

    /// Byte offset in the input where parsing stopped.
    pub fn position(&self) -> usize {
        self.position
    }

    /// What was expected at [`GeometryError::position`].
    pub fn expected(&self) -> Expected {
        self.expected
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.expected {
            Expected::Sign => "`+` or `-`",
            Expected::Digit => "a digit",
            Expected::End => "end of input",
        };
        write!(
            f,
            "invalid geometry: expected {what} at byte {}, format is {{+|-}}N[%]{{+|-}}N[%]",
            self.position
        )
    }
}

impl core::error::Error for GeometryError {}
