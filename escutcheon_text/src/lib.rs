// Copyright 2026 the Escutcheon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Escutcheon Text: font-backed measurement and outlines for shield text.
//!
//! [`Font`] wraps a TrueType/OpenType font at a fixed pixel size. It
//! implements [`TextMeasure`] so shields can be laid out with real metrics,
//! and [`TextOutline`] so renderers can fill the same text as paths.
//!
//! Text is laid out as a single line by summing glyph advances. There is no
//! shaping, kerning, or fallback: characters missing from the font use the
//! `.notdef` glyph.
//!
//! Outlines are produced in a top-left-origin, Y-down space so they can be
//! filled directly next to the rest of a shield.

#![no_std]

extern crate alloc;

use core::convert::Infallible;
use core::fmt;

use escutcheon_shield::{TextExtent, TextMeasure};
use kurbo::{BezPath, Point, Vec2};
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::raw::ReadError;
use skrifa::{FontRef, GlyphId, MetadataProvider};

/// Fraction of the font size used as an advance when a glyph reports none.
const FALLBACK_ADVANCE: f32 = 0.6;

/// Glyph outlines for a line of text.
pub trait TextOutline {
    /// Outline `text` as a single path with its baseline starting at
    /// `origin`, in Y-down coordinates.
    fn text_path(&self, text: &str, origin: Point) -> BezPath;
}

impl<T: TextOutline + ?Sized> TextOutline for &T {
    fn text_path(&self, text: &str, origin: Point) -> BezPath {
        (**self).text_path(text, origin)
    }
}

/// A font at a fixed pixel size.
#[derive(Clone)]
pub struct Font<'a> {
    font: FontRef<'a>,
    size: Size,
    size_px: f32,
    ascent: f64,
    descent: f64,
}

impl fmt::Debug for Font<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("size_px", &self.size_px)
            .field("ascent", &self.ascent)
            .field("descent", &self.descent)
            .finish_non_exhaustive()
    }
}

impl<'a> Font<'a> {
    /// Load the first font in `data` at `size_px` pixels per em.
    pub fn new(data: &'a [u8], size_px: f32) -> Result<Self, FontError> {
        Self::from_index(data, 0, size_px)
    }

    /// Load font number `index` of a collection at `size_px` pixels per em.
    pub fn from_index(data: &'a [u8], index: u32, size_px: f32) -> Result<Self, FontError> {
        if !(size_px.is_finite() && size_px > 0.0) {
            return Err(FontError::InvalidSize(size_px));
        }
        let font = FontRef::from_index(data, index).map_err(FontError::Unreadable)?;
        let size = Size::new(size_px);
        let metrics = font.metrics(size, LocationRef::default());
        Ok(Self {
            font,
            size,
            size_px,
            ascent: f64::from(metrics.ascent),
            // Descent is negative in font coordinates.
            descent: f64::from(-metrics.descent),
        })
    }

    /// Pixel size the font was loaded at.
    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    fn glyph_ids<'t>(&self, text: &'t str) -> impl Iterator<Item = GlyphId> + use<'a, 't> {
        let charmap = self.font.charmap();
        text.chars()
            .map(move |ch| charmap.map(ch).unwrap_or(GlyphId::NOTDEF))
    }

    /// Glyphs of `text` paired with their pen x position.
    fn positioned(&self, text: &str) -> impl Iterator<Item = (GlyphId, f32)> {
        let metrics = self.font.glyph_metrics(self.size, LocationRef::default());
        let fallback = self.size_px * FALLBACK_ADVANCE;
        let mut x = 0.0_f32;
        self.glyph_ids(text).map(move |gid| {
            let at = x;
            x += metrics.advance_width(gid).unwrap_or(fallback);
            (gid, at)
        })
    }
}

impl TextMeasure for Font<'_> {
    type Error = Infallible;

    fn ascent(&self) -> f64 {
        self.ascent
    }

    fn descent(&self) -> f64 {
        self.descent
    }

    fn measure(&self, text: &str) -> Result<TextExtent, Infallible> {
        let metrics = self.font.glyph_metrics(self.size, LocationRef::default());
        let fallback = self.size_px * FALLBACK_ADVANCE;
        let width: f32 = self
            .glyph_ids(text)
            .map(|gid| metrics.advance_width(gid).unwrap_or(fallback))
            .sum();
        Ok(TextExtent {
            width: f64::from(width),
            height: self.ascent,
        })
    }
}

impl TextOutline for Font<'_> {
    fn text_path(&self, text: &str, origin: Point) -> BezPath {
        let outlines = self.font.outline_glyphs();
        let mut path = BezPath::new();
        for (gid, x) in self.positioned(text) {
            let Some(glyph) = outlines.get(gid) else {
                continue;
            };
            let at = origin.to_vec2() + Vec2::new(f64::from(x), 0.0);
            // Glyphs that fail to draw are left out of the line.
            append_glyph(&mut path, at, |pen| {
                let settings = DrawSettings::unhinted(self.size, LocationRef::default());
                glyph.draw(settings, pen).is_ok()
            });
        }
        path
    }
}

/// Run `draw` against a scratch path and append its outline to `path` only
/// if it reports success.
fn append_glyph(
    path: &mut BezPath,
    origin: Vec2,
    draw: impl FnOnce(&mut FlipPen<'_>) -> bool,
) {
    let mut glyph = BezPath::new();
    let mut pen = FlipPen {
        path: &mut glyph,
        origin,
    };
    if draw(&mut pen) {
        path.extend(glyph.elements().iter().copied());
    }
}

/// Pen that appends Y-up glyph outlines to a Y-down path at `origin`.
struct FlipPen<'p> {
    path: &'p mut BezPath,
    origin: Vec2,
}

impl FlipPen<'_> {
    fn map(&self, x: f32, y: f32) -> Point {
        Point::new(
            self.origin.x + f64::from(x),
            self.origin.y - f64::from(y),
        )
    }
}

impl OutlinePen for FlipPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (p1, p) = (self.map(x1, y1), self.map(x, y));
        self.path.quad_to(p1, p);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (p1, p2, p) = (self.map(x1, y1), self.map(x2, y2), self.map(x, y));
        self.path.curve_to(p1, p2, p);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

/// Errors raised while loading a [`Font`].
#[derive(Clone, Debug)]
pub enum FontError {
    /// The data is not a readable font.
    Unreadable(ReadError),
    /// The requested pixel size is zero, negative, or not finite.
    InvalidSize(f32),
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable(err) => write!(f, "unreadable font data: {err}"),
            Self::InvalidSize(size) => write!(f, "invalid font size {size}"),
        }
    }
}

impl core::error::Error for FontError {}
