// Copyright 2026 the Escutcheon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::error::Error;

use escutcheon_gravity::{Gravity, Offset, object_center};
use escutcheon_shield::{Content, TextMeasure, layout, paint_shield};
use escutcheon_text::TextOutline;
use kurbo::{Affine, Rect, Size};
use peniko::{Blob, ImageAlphaType, ImageData, ImageFormat, ImageSampler};
use tracing::debug;
use vello_cpu::kurbo::Affine as CpuAffine;
use vello_cpu::{Image as CpuImage, ImageSource, Pixmap, RenderContext};

use crate::canvas::{VelloCpuShieldCanvas, rect_to_cpu};
use crate::{RasterError, RgbaImage, grayscale};

/// A shield to draw onto an image.
#[derive(Debug)]
pub struct ShieldOverlay<'a, F> {
    /// What the shield says.
    pub content: Content,
    /// Font used to measure and outline the shield text.
    pub font: &'a F,
    /// Shield width as a fraction of the image width.
    pub scale: f64,
    /// Anchor the shield is attached to.
    pub gravity: Gravity,
    /// Displacement from the anchor.
    pub offset: Option<Offset>,
}

/// Decorations applied by [`compose`], in the order listed.
#[derive(Debug)]
pub struct ComposeOptions<'a, F> {
    /// Convert the image to grayscale first.
    pub grayscale: bool,
    /// Shield drawn over the image.
    pub shield: Option<ShieldOverlay<'a, F>>,
    /// Badge artwork stretched over the whole image last.
    pub badge: Option<&'a RgbaImage>,
}

impl<F> Default for ComposeOptions<'_, F> {
    fn default() -> Self {
        Self {
            grayscale: false,
            shield: None,
            badge: None,
        }
    }
}

/// Apply `options` to `image`.
///
/// The result has the same size as `image` and keeps its alpha flag.
pub fn compose<F>(
    mut image: RgbaImage,
    options: &ComposeOptions<'_, F>,
) -> Result<RgbaImage, RasterError>
where
    F: TextMeasure + TextOutline,
    F::Error: Error + Send + Sync + 'static,
{
    if options.grayscale {
        grayscale(&mut image);
    }
    if options.shield.is_none() && options.badge.is_none() {
        return Ok(image);
    }

    let too_large = || RasterError::TooLarge {
        width: image.width(),
        height: image.height(),
    };
    let width = u16::try_from(image.width()).map_err(|_| too_large())?;
    let height = u16::try_from(image.height()).map_err(|_| too_large())?;
    let canvas = Size::new(f64::from(width), f64::from(height));
    let full = rect_to_cpu(Rect::from_origin_size((0.0, 0.0), canvas));

    let mut ctx = RenderContext::new(width, height);
    ctx.set_paint(image_paint(&image));
    ctx.fill_rect(&full);

    if let Some(shield) = &options.shield {
        draw_shield(&mut ctx, shield, canvas)?;
    }

    if let Some(badge) = options.badge {
        debug!(
            width = badge.width(),
            height = badge.height(),
            "stretching badge over image"
        );
        ctx.set_paint(image_paint(badge));
        ctx.set_paint_transform(CpuAffine::scale_non_uniform(
            canvas.width / f64::from(badge.width().max(1)),
            canvas.height / f64::from(badge.height().max(1)),
        ));
        ctx.fill_rect(&full);
        ctx.set_paint_transform(CpuAffine::IDENTITY);
    }

    let mut pixmap = Pixmap::new(width, height);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);
    let pixels = pixmap
        .take_unpremultiplied()
        .into_iter()
        .flat_map(|p| [p.r, p.g, p.b, p.a])
        .collect();
    RgbaImage::from_pixels(image.width(), image.height(), pixels, image.has_alpha())
}

fn draw_shield<F>(
    ctx: &mut RenderContext,
    shield: &ShieldOverlay<'_, F>,
    canvas: Size,
) -> Result<(), RasterError>
where
    F: TextMeasure + TextOutline,
    F::Error: Error + Send + Sync + 'static,
{
    let dims = layout(&shield.content, shield.font)
        .map_err(|e| RasterError::Measure(Box::new(e)))?;
    let scale = shield.scale * canvas.width / dims.width;
    let scaled = Size::new(dims.width * scale, dims.height * scale);
    let placed = object_center(shield.gravity, scaled, canvas, shield.offset);
    let rect = placed.to_y_down_rect(scaled, canvas);
    debug!(
        spec = %shield.content,
        scale,
        x = rect.x0,
        y = rect.y0,
        width = scaled.width,
        height = scaled.height,
        "placing shield"
    );

    let transform = Affine::translate((rect.x0, rect.y0)) * Affine::scale(scale);
    let mut painter = VelloCpuShieldCanvas::new(ctx, shield.font, transform);
    paint_shield(&mut painter, &shield.content, &dims);
    painter.finish();
    Ok(())
}

fn image_paint(image: &RgbaImage) -> CpuImage {
    let data = ImageData {
        data: Blob::from(image.pixels().to_vec()),
        format: ImageFormat::Rgba8,
        alpha_type: ImageAlphaType::Alpha,
        width: image.width(),
        height: image.height(),
    };
    CpuImage {
        image: ImageSource::from_peniko_image_data(&data),
        sampler: ImageSampler::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use escutcheon_shield::TextExtent;
    use kurbo::{BezPath, Point};

    /// Fixed-pitch font without glyph outlines.
    struct Blank;

    impl TextMeasure for Blank {
        type Error = Infallible;

        fn ascent(&self) -> f64 {
            8.0
        }

        fn descent(&self) -> f64 {
            2.0
        }

        fn measure(&self, text: &str) -> Result<TextExtent, Infallible> {
            Ok(TextExtent {
                width: 5.0 * text.chars().count() as f64,
                height: 8.0,
            })
        }
    }

    impl TextOutline for Blank {
        fn text_path(&self, _text: &str, _origin: Point) -> BezPath {
            BezPath::new()
        }
    }

    const WHITE: [u8; 4] = [255, 255, 255, 255];

    fn white(width: u32, height: u32) -> RgbaImage {
        RgbaImage::filled(width, height, WHITE, false)
    }

    fn shield(gravity: Gravity, scale: f64) -> ShieldOverlay<'static, Blank> {
        ShieldOverlay {
            content: Content::parse("ab-blue").unwrap(),
            font: &Blank,
            scale,
            gravity,
            offset: None,
        }
    }

    #[test]
    fn no_options_is_identity() {
        let image = white(4, 4);
        let out = compose::<Blank>(image.clone(), &ComposeOptions::default()).unwrap();
        assert_eq!(out, image);
    }

    #[test]
    fn full_width_shield_at_north_covers_the_top() {
        // "ab" is 10 wide, so the shield is 21x18 units; at scale 1 on a
        // 42-wide image it is scaled by 2 to 42x36.
        let options = ComposeOptions {
            shield: Some(shield(Gravity::North, 1.0)),
            ..ComposeOptions::default()
        };
        let out = compose(white(42, 60), &options).unwrap();

        let [r, g, b, a] = out.pixel(21, 18).unwrap();
        assert_eq!(a, 255);
        assert!(b > r && b > g, "expected blue shield, got {r} {g} {b}");
        assert_eq!(out.pixel(21, 50), Some(WHITE));
        assert!(!out.has_alpha());
    }

    #[test]
    fn south_east_shield_sits_in_the_corner() {
        let options = ComposeOptions {
            shield: Some(shield(Gravity::SouthEast, 0.5)),
            ..ComposeOptions::default()
        };
        // Scale 0.5 of 84 is 42 wide, 36 high.
        let out = compose(white(84, 84), &options).unwrap();
        let [r, g, b, _] = out.pixel(84 - 21, 84 - 18).unwrap();
        assert!(b > r && b > g, "expected blue shield, got {r} {g} {b}");
        assert_eq!(out.pixel(10, 10), Some(WHITE));
    }

    #[test]
    fn badge_is_stretched_over_the_image() {
        let mut badge_pixels = vec![0; 2 * 2 * 4];
        // Top-left quadrant opaque red, the rest transparent.
        badge_pixels[..4].copy_from_slice(&[255, 0, 0, 255]);
        let badge = RgbaImage::from_pixels(2, 2, badge_pixels, true).unwrap();
        let options = ComposeOptions::<Blank> {
            badge: Some(&badge),
            ..ComposeOptions::default()
        };
        let out = compose(white(20, 20), &options).unwrap();
        assert_eq!(out.pixel(2, 2), Some([255, 0, 0, 255]));
        assert_eq!(out.pixel(17, 17), Some(WHITE));
    }

    #[test]
    fn grayscale_runs_before_overlays() {
        let image = RgbaImage::filled(4, 4, [255, 0, 0, 255], true);
        let options = ComposeOptions::<Blank> {
            grayscale: true,
            ..ComposeOptions::default()
        };
        let out = compose(image, &options).unwrap();
        assert_eq!(out.pixel(0, 0), Some([76, 76, 76, 255]));
        assert!(out.has_alpha());
    }

    #[test]
    fn oversized_images_are_rejected() {
        let image = RgbaImage::filled(70_000, 1, WHITE, false);
        let options = ComposeOptions {
            shield: Some(shield(Gravity::Center, 1.0)),
            ..ComposeOptions::default()
        };
        assert!(matches!(
            compose(image, &options),
            Err(RasterError::TooLarge {
                width: 70_000,
                height: 1
            })
        ));
    }
}
