// Copyright 2026 the Escutcheon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Escutcheon Shield: badge-spec parsing and shield layout.
//!
//! A *shield* is a shields.io-style status badge: a label band and an
//! optional message band, each with white text, over a rounded rectangle
//! with a faint gloss gradient. This crate covers everything about a shield
//! that does not touch pixels:
//!
//! - [`Content`] parses the compact `label-message-color` badge spec.
//! - [`NamedColor`] resolves the nine shields.io colors and their aliases.
//! - [`layout`] turns content plus a [`TextMeasure`] into
//!   [`ShieldDimensions`].
//! - [`paint_shield`] lowers a laid-out shield onto any [`ShieldCanvas`].
//!
//! Fonts and rasterization are supplied by the caller through the two
//! traits, so everything here can be exercised without a rendering backend.
//!
//! ## Example
//!
//! ```rust
//! use core::convert::Infallible;
//! use escutcheon_shield::{Content, NamedColor, TextExtent, TextMeasure, layout};
//!
//! struct Fixed;
//!
//! impl TextMeasure for Fixed {
//!     type Error = Infallible;
//!     fn ascent(&self) -> f64 { 11.0 }
//!     fn descent(&self) -> f64 { 2.0 }
//!     fn measure(&self, text: &str) -> Result<TextExtent, Infallible> {
//!         Ok(TextExtent { width: 6.0 * text.len() as f64, height: 11.0 })
//!     }
//! }
//!
//! let content: Content = "build-passing-success".parse().unwrap();
//! assert_eq!(content.color(), NamedColor::BrightGreen);
//!
//! let dims = layout(&content, &Fixed).unwrap();
//! assert_eq!(dims.width, 2.0 * 5.5 + 7.0 + 30.0 + 42.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod content;
mod layout;
mod paint;

pub use color::NamedColor;
pub use content::{BadgeSpecError, Content};
pub use layout::{
    CORNER_RADIUS, HORIZONTAL_MARGIN, HORIZONTAL_SPACING, ShieldDimensions, TextExtent,
    TextMeasure, VERTICAL_MARGIN, layout,
};
pub use paint::{
    GLOSS_BOTTOM, GLOSS_TOP, ShieldCanvas, TEXT_COLOR, TEXT_SHADOW_COLOR, TEXT_SHADOW_OFFSET,
    paint_shield,
};
