// Copyright 2026 the Escutcheon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::RasterError;

/// An 8-bit RGBA image with straight (unpremultiplied) alpha.
///
/// `has_alpha` records whether the image came from a source with an alpha
/// channel; it decides whether alpha is written back out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    has_alpha: bool,
}

impl RgbaImage {
    /// Wrap an RGBA buffer of `width * height * 4` bytes.
    pub fn from_pixels(
        width: u32,
        height: u32,
        pixels: Vec<u8>,
        has_alpha: bool,
    ) -> Result<Self, RasterError> {
        let expected = byte_len(width, height);
        if pixels.len() != expected {
            return Err(RasterError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
            has_alpha,
        })
    }

    /// An image filled with a single RGBA color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4], has_alpha: bool) -> Self {
        let pixels = rgba.repeat(byte_len(width, height) / 4);
        Self {
            width,
            height,
            pixels,
            has_alpha,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the source of this image carried an alpha channel.
    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    /// Row-major RGBA bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the image, returning its RGBA bytes.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// The RGBA value at `(x, y)`, counted from the top-left corner.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let p = &self.pixels[i..i + 4];
        Some([p[0], p[1], p[2], p[3]])
    }
}

fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}
