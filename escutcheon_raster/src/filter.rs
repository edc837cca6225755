// Copyright 2026 the Escutcheon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::RgbaImage;

/// Convert `image` to grayscale in place, leaving alpha untouched.
///
/// Uses Rec. 601 luma weights.
pub fn grayscale(image: &mut RgbaImage) {
    for p in image.pixels_mut().chunks_exact_mut(4) {
        let luma = 0.299 * f32::from(p[0]) + 0.587 * f32::from(p[1]) + 0.114 * f32::from(p[2]);
        let v = luma.round().clamp(0.0, 255.0) as u8;
        p[0] = v;
        p[1] = v;
        p[2] = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_alpha_and_equalizes_channels() {
        let pixels = vec![255, 0, 0, 10, 0, 255, 0, 128, 0, 0, 255, 255];
        let mut image = RgbaImage::from_pixels(3, 1, pixels, true).unwrap();
        grayscale(&mut image);
        assert_eq!(
            image.pixels(),
            &[76, 76, 76, 10, 150, 150, 150, 128, 29, 29, 29, 255]
        );
    }

    #[test]
    fn white_and_black_are_fixed_points() {
        let mut image = RgbaImage::from_pixels(2, 1, vec![255, 255, 255, 0, 0, 0, 0, 77], true)
            .unwrap();
        grayscale(&mut image);
        assert_eq!(image.pixels(), &[255, 255, 255, 0, 0, 0, 0, 77]);
    }
}
