// Copyright 2026 the Escutcheon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use escutcheon_shield::ShieldCanvas;
use escutcheon_text::TextOutline;
use kurbo::{Affine, BezPath, PathEl, Point, Rect};
use peniko::{Color, ColorStop, Extend, Gradient, GradientKind, LinearGradientPosition};
use vello_cpu::RenderContext;
use vello_cpu::kurbo::{
    Affine as CpuAffine, BezPath as CpuBezPath, Point as CpuPoint, Rect as CpuRect, RoundedRect,
    Shape as _,
};

const CLIP_TOLERANCE: f64 = 0.1;

/// [`ShieldCanvas`] that draws into a `vello_cpu` render context.
///
/// Shield coordinates are mapped onto the context by a fixed transform, and
/// text is filled as glyph outlines provided by `T`.
pub struct VelloCpuShieldCanvas<'ctx, T> {
    ctx: &'ctx mut RenderContext,
    text: T,
    clips: usize,
}

impl<T> fmt::Debug for VelloCpuShieldCanvas<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VelloCpuShieldCanvas")
            .field("clips", &self.clips)
            .finish_non_exhaustive()
    }
}

impl<'ctx, T: TextOutline> VelloCpuShieldCanvas<'ctx, T> {
    /// Draw into `ctx` with shield space mapped through `transform`.
    pub fn new(ctx: &'ctx mut RenderContext, text: T, transform: Affine) -> Self {
        ctx.set_transform(affine_to_cpu(transform));
        Self {
            ctx,
            text,
            clips: 0,
        }
    }

    /// Pop any clips left open and restore the identity transform.
    pub fn finish(mut self) {
        while self.clips > 0 {
            self.pop_clip();
        }
        self.ctx.set_transform(CpuAffine::IDENTITY);
    }
}

impl<T: TextOutline> ShieldCanvas for VelloCpuShieldCanvas<'_, T> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_paint(color);
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    fn fill_linear_gradient(&mut self, rect: Rect, start: (Point, Color), end: (Point, Color)) {
        let kind = GradientKind::Linear(LinearGradientPosition::new(start.0, end.0));
        let stops = [
            ColorStop::from((0.0, start.1)),
            ColorStop::from((1.0, end.1)),
        ];
        self.ctx.set_paint(Gradient {
            kind,
            extend: Extend::Pad,
            stops: stops.as_slice().into(),
            ..Gradient::default()
        });
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    fn push_rounded_clip(&mut self, rect: Rect, radius: f64) {
        let clip = RoundedRect::from_rect(rect_to_cpu(rect), radius).to_path(CLIP_TOLERANCE);
        self.ctx.push_layer(Some(&clip), None, None, None, None);
        self.clips += 1;
    }

    fn pop_clip(&mut self) {
        if self.clips > 0 {
            self.ctx.pop_layer();
            self.clips -= 1;
        }
    }

    fn fill_text(&mut self, text: &str, origin: Point, color: Color) {
        let path = self.text.text_path(text, origin);
        if path.is_empty() {
            return;
        }
        self.ctx.set_paint(color);
        self.ctx.fill_path(&path_to_cpu(&path));
    }
}

pub(crate) fn affine_to_cpu(xf: Affine) -> CpuAffine {
    CpuAffine::new(xf.as_coeffs())
}

pub(crate) fn rect_to_cpu(r: Rect) -> CpuRect {
    CpuRect::new(r.x0, r.y0, r.x1, r.y1)
}

fn path_to_cpu(path: &BezPath) -> CpuBezPath {
    let pt = |p: Point| CpuPoint::new(p.x, p.y);
    let mut out = CpuBezPath::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p) => out.quad_to(pt(p1), pt(p)),
            PathEl::CurveTo(p1, p2, p) => out.curve_to(pt(p1), pt(p2), pt(p)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use escutcheon_shield::{Content, ShieldDimensions, paint_shield};
    use kurbo::Shape as _;
    use vello_cpu::Pixmap;

    /// Outlines every character as a full-height box above the baseline.
    struct Boxes;

    impl TextOutline for Boxes {
        fn text_path(&self, text: &str, origin: Point) -> BezPath {
            let mut path = BezPath::new();
            for (i, _) in text.chars().enumerate() {
                let x = origin.x + 4.0 * i as f64;
                path.extend(Rect::new(x, origin.y - 6.0, x + 3.0, origin.y).path_elements(0.1));
            }
            path
        }
    }

    fn render(width: u16, height: u16, draw: impl FnOnce(&mut RenderContext)) -> Vec<[u8; 4]> {
        let mut ctx = RenderContext::new(width, height);
        draw(&mut ctx);
        let mut pixmap = Pixmap::new(width, height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        pixmap
            .take_unpremultiplied()
            .into_iter()
            .map(|p| [p.r, p.g, p.b, p.a])
            .collect()
    }

    #[test]
    fn rect_fill_respects_transform() {
        let pixels = render(8, 8, |ctx| {
            let mut canvas =
                VelloCpuShieldCanvas::new(ctx, Boxes, Affine::translate((4.0, 4.0)));
            canvas.fill_rect(Rect::new(0.0, 0.0, 2.0, 2.0), Color::from_rgb8(255, 0, 0));
            canvas.finish();
        });
        assert_eq!(pixels[5 * 8 + 5], [255, 0, 0, 255]);
        assert_eq!(pixels[0], [0, 0, 0, 0]);
        assert_eq!(pixels[7 * 8 + 7], [0, 0, 0, 0]);
    }

    #[test]
    fn rounded_clip_cuts_corners() {
        let pixels = render(20, 20, |ctx| {
            let mut canvas = VelloCpuShieldCanvas::new(ctx, Boxes, Affine::IDENTITY);
            canvas.push_rounded_clip(Rect::new(0.0, 0.0, 20.0, 20.0), 8.0);
            canvas.fill_rect(Rect::new(0.0, 0.0, 20.0, 20.0), Color::from_rgb8(0, 0, 255));
            canvas.pop_clip();
            canvas.finish();
        });
        assert_eq!(pixels[0][3], 0, "corner should be clipped");
        assert_eq!(pixels[10 * 20 + 10], [0, 0, 255, 255]);
    }

    #[test]
    fn painted_shield_has_text_pixels() {
        let content = Content::parse("ab-red").unwrap();
        let dims = ShieldDimensions::from_widths(7.0, None, 8.0, 2.0);
        let width = dims.width.ceil() as u16;
        let height = dims.height.ceil() as u16;
        let pixels = render(width, height, |ctx| {
            let mut canvas = VelloCpuShieldCanvas::new(ctx, Boxes, Affine::IDENTITY);
            paint_shield(&mut canvas, &content, &dims);
            canvas.finish();
        });

        // Inside the first glyph box the white text covers the red band.
        let origin = dims.label_origin();
        let (x, y) = ((origin.x + 1.5) as usize, (origin.y - 3.0) as usize);
        let [r, g, b, a] = pixels[y * usize::from(width) + x];
        assert_eq!(a, 255);
        assert!(r > 240 && g > 240 && b > 240, "expected white text, got {r} {g} {b}");

        // The band next to the text keeps its red hue.
        let [r, g, b, _] = pixels[usize::from(width) + usize::from(width) - 3];
        assert!(r > g && r > b, "expected red band, got {r} {g} {b}");
    }
}
