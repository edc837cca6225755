// Copyright 2026 the Escutcheon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading, composing, or writing images.
#[derive(Debug, Error)]
pub enum RasterError {
    /// A file could not be opened or created.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The PNG stream is malformed.
    #[error("failed to decode PNG: {0}")]
    Decode(#[from] png::DecodingError),
    /// The PNG stream could not be written.
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] png::EncodingError),
    /// The decoded PNG uses a layout that cannot be expanded to RGBA.
    #[error("unsupported PNG pixel layout {0:?} {1:?}")]
    UnsupportedLayout(png::ColorType, png::BitDepth),
    /// The pixel buffer does not match the image dimensions.
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize {
        /// Bytes required for the dimensions.
        expected: usize,
        /// Bytes supplied.
        actual: usize,
    },
    /// The shield text could not be measured.
    #[error("failed to measure shield text: {0}")]
    Measure(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The image is too large for the CPU renderer.
    #[error("image is {width}x{height}, rendering supports at most {max}x{max}", max = u16::MAX)]
    TooLarge {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },
}

impl RasterError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
