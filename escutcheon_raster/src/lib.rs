// Copyright 2026 the Escutcheon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Escutcheon Raster: decorating PNG images with shields and badges.
//!
//! This crate glues the geometry crates to pixels:
//!
//! - [`read_png`]/[`decode_png`] and [`write_png`]/[`encode_png`] move
//!   images in and out of [`RgbaImage`], keeping track of whether the source
//!   had an alpha channel.
//! - [`grayscale`] desaturates an image in place.
//! - [`VelloCpuShieldCanvas`] renders shields with `vello_cpu`.
//! - [`compose`] runs the full pipeline described by [`ComposeOptions`]:
//!   grayscale, then the shield, then the badge artwork.
//!
//! Rendering is limited to images of at most 65535 pixels on each side.

mod canvas;
mod codec;
mod compose;
mod error;
mod filter;
mod image;

pub use canvas::VelloCpuShieldCanvas;
pub use codec::{decode_png, encode_png, read_png, write_png};
pub use compose::{ComposeOptions, ShieldOverlay, compose};
pub use error::RasterError;
pub use filter::grayscale;
pub use image::RgbaImage;
