// Copyright 2026 the Escutcheon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::Content;

/// Horizontal padding between a shield edge and its text.
pub const HORIZONTAL_MARGIN: f64 = 5.5;
/// Horizontal gap between the label and message texts.
pub const HORIZONTAL_SPACING: f64 = 7.0;
/// Vertical padding above the font ascent and below the baseline area.
pub const VERTICAL_MARGIN: f64 = 5.0;
/// Corner radius of the shield background.
pub const CORNER_RADIUS: f64 = 3.0;

/// Typographic extent of a single line of text.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextExtent {
    /// Advance width of the line.
    pub width: f64,
    /// Height of the line above the baseline.
    pub height: f64,
}

/// Text measurement provided by a font backend.
///
/// Measurements are in the same units as the resulting [`ShieldDimensions`],
/// usually pixels at the font size in use.
pub trait TextMeasure {
    /// Error returned when a line cannot be measured.
    type Error;

    /// Font ascent, a positive distance above the baseline.
    fn ascent(&self) -> f64;

    /// Font descent, a positive distance below the baseline.
    fn descent(&self) -> f64;

    /// Measure a single line of text.
    fn measure(&self, text: &str) -> Result<TextExtent, Self::Error>;
}

impl<M: TextMeasure + ?Sized> TextMeasure for &M {
    type Error = M::Error;

    fn ascent(&self) -> f64 {
        (**self).ascent()
    }

    fn descent(&self) -> f64 {
        (**self).descent()
    }

    fn measure(&self, text: &str) -> Result<TextExtent, Self::Error> {
        (**self).measure(text)
    }
}

/// Pixel dimensions of a shield, derived from text metrics.
///
/// Besides the overall size this carries everything a renderer needs to fill
/// the two background bands and place both texts without measuring again.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShieldDimensions {
    /// Total shield width.
    pub width: f64,
    /// Total shield height.
    pub height: f64,
    /// Measured width of the label text.
    pub label_width: f64,
    /// Measured width of the message text, for two-band shields.
    pub message_width: Option<f64>,
    /// Distance of the text baseline above the bottom edge.
    pub baseline_offset: f64,
}

/// Compute shield dimensions for `content` using `measure`.
///
/// Measurement failures are returned unchanged.
pub fn layout<M: TextMeasure>(
    content: &Content,
    measure: &M,
) -> Result<ShieldDimensions, M::Error> {
    let label_width = measure.measure(content.label())?.width;
    let message_width = match content.message() {
        Some(message) => Some(measure.measure(message)?.width),
        None => None,
    };
    Ok(ShieldDimensions::from_widths(
        label_width,
        message_width,
        measure.ascent(),
        measure.descent(),
    ))
}

impl ShieldDimensions {
    /// Build dimensions from already measured text widths and font metrics.
    pub fn from_widths(
        label_width: f64,
        message_width: Option<f64>,
        ascent: f64,
        descent: f64,
    ) -> Self {
        let width = match message_width {
            Some(message_width) => {
                2.0 * HORIZONTAL_MARGIN + HORIZONTAL_SPACING + label_width + message_width
            }
            None => 2.0 * HORIZONTAL_MARGIN + label_width,
        };
        Self {
            width,
            height: ascent + 2.0 * VERTICAL_MARGIN,
            label_width,
            message_width,
            baseline_offset: VERTICAL_MARGIN + descent,
        }
    }

    /// Overall size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Width of the label background band.
    pub fn label_band_width(&self) -> f64 {
        let trailing = if self.message_width.is_some() {
            HORIZONTAL_SPACING / 2.0
        } else {
            HORIZONTAL_MARGIN
        };
        HORIZONTAL_MARGIN + self.label_width + trailing
    }

    /// Horizontal start of the message background band.
    pub fn message_band_x(&self) -> f64 {
        HORIZONTAL_MARGIN + self.label_width + HORIZONTAL_SPACING / 2.0
    }

    /// Width of the message background band, for two-band shields.
    pub fn message_band_width(&self) -> Option<f64> {
        self.message_width
            .map(|message_width| HORIZONTAL_MARGIN + message_width + HORIZONTAL_SPACING / 2.0)
    }

    /// The label band in top-left-origin shield coordinates.
    pub fn label_band(&self) -> Rect {
        Rect::new(0.0, 0.0, self.label_band_width(), self.height)
    }

    /// The message band in top-left-origin shield coordinates.
    pub fn message_band(&self) -> Option<Rect> {
        let x0 = self.message_band_x();
        self.message_band_width()
            .map(|width| Rect::new(x0, 0.0, x0 + width, self.height))
    }

    /// Baseline origin of the label text in top-left-origin shield coordinates.
    pub fn label_origin(&self) -> Point {
        Point::new(HORIZONTAL_MARGIN, self.baseline_y())
    }

    /// Baseline origin of the message text in top-left-origin shield
    /// coordinates, for two-band shields.
    pub fn message_origin(&self) -> Option<Point> {
        self.message_width.map(|_| {
            Point::new(
                HORIZONTAL_MARGIN + HORIZONTAL_SPACING + self.label_width,
                self.baseline_y(),
            )
        })
    }

    fn baseline_y(&self) -> f64 {
        self.height - self.baseline_offset
    }
}
