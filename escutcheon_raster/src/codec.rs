// Copyright 2026 the Escutcheon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! PNG decoding and encoding.

use std::ffi::{OsStr, OsString};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use tracing::debug;

use crate::{RasterError, RgbaImage};

/// Decode a PNG stream into RGBA.
///
/// Palette, grayscale, and 16-bit images are expanded to 8-bit RGBA. The
/// result remembers whether the stream carried alpha, including alpha that
/// comes from a transparency chunk.
pub fn decode_png<R: Read>(reader: R) -> Result<RgbaImage, RasterError> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0_u8; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf)?;
    buf.truncate(frame.buffer_size());

    let (color, depth) = reader.output_color_type();
    if depth != BitDepth::Eight {
        return Err(RasterError::UnsupportedLayout(color, depth));
    }
    let (pixels, has_alpha) = match color {
        ColorType::Rgba => (buf, true),
        ColorType::Rgb => (
            buf.chunks_exact(3)
                .flat_map(|p| [p[0], p[1], p[2], u8::MAX])
                .collect(),
            false,
        ),
        ColorType::GrayscaleAlpha => (
            buf.chunks_exact(2)
                .flat_map(|p| [p[0], p[0], p[0], p[1]])
                .collect(),
            true,
        ),
        ColorType::Grayscale => (
            buf.iter().flat_map(|&v| [v, v, v, u8::MAX]).collect(),
            false,
        ),
        ColorType::Indexed => return Err(RasterError::UnsupportedLayout(color, depth)),
    };
    RgbaImage::from_pixels(frame.width, frame.height, pixels, has_alpha)
}

/// Encode `image` as an 8-bit PNG.
///
/// Images without alpha are written as RGB and their alpha bytes dropped.
pub fn encode_png<W: Write>(writer: W, image: &RgbaImage) -> Result<(), RasterError> {
    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_depth(BitDepth::Eight);
    let data: Vec<u8> = if image.has_alpha() {
        encoder.set_color(ColorType::Rgba);
        image.pixels().to_vec()
    } else {
        encoder.set_color(ColorType::Rgb);
        image
            .pixels()
            .chunks_exact(4)
            .flat_map(|p| [p[0], p[1], p[2]])
            .collect()
    };
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&data)?;
    writer.finish()?;
    Ok(())
}

/// Read and decode the PNG file at `path`.
pub fn read_png(path: &Path) -> Result<RgbaImage, RasterError> {
    let file = File::open(path).map_err(|e| RasterError::io(path, e))?;
    let image = decode_png(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        has_alpha = image.has_alpha(),
        "decoded image"
    );
    Ok(image)
}

/// Encode `image` and write it to `path`, replacing any existing file.
///
/// The image is written to a hidden file next to `path` and renamed over it
/// once it is complete, so a failed write leaves the old file untouched.
pub fn write_png(path: &Path, image: &RgbaImage) -> Result<(), RasterError> {
    let temp = temp_path(path);
    let result = File::create(&temp)
        .map_err(|e| RasterError::io(&temp, e))
        .and_then(|file| write_buffered(file, image, &temp))
        .and_then(|file| file.sync_all().map_err(|e| RasterError::io(&temp, e)))
        .and_then(|()| fs::rename(&temp, path).map_err(|e| RasterError::io(path, e)));
    if let Err(err) = result {
        if let Err(cleanup) = fs::remove_file(&temp) {
            debug!(path = %temp.display(), %cleanup, "temporary file not removed");
        }
        return Err(err);
    }
    debug!(path = %path.display(), "wrote image");
    Ok(())
}

/// `dir/name.png` becomes `dir/.name.png.escutcheon-tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or(OsStr::new("image")));
    name.push(".escutcheon-tmp");
    path.with_file_name(name)
}

/// Encode through a buffer and flush it, reporting write failures against
/// `path`.
fn write_buffered<W: Write>(inner: W, image: &RgbaImage, path: &Path) -> Result<W, RasterError> {
    let mut writer = BufWriter::new(inner);
    encode_png(&mut writer, image)?;
    writer.flush().map_err(|e| RasterError::io(path, e))?;
    writer
        .into_inner()
        .map_err(|e| RasterError::io(path, e.into_error()))
}
