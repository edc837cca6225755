// Copyright 2026 the Escutcheon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lowering a laid-out shield into canvas operations.

use kurbo::{Point, Rect, Vec2};
use peniko::Color;

use crate::{CORNER_RADIUS, Content, ShieldDimensions};

/// Minimal drawing surface a shield is painted onto.
///
/// Coordinates are in a top-left-origin, Y-down space whose unit is one
/// shield unit; implementations apply whatever transform places the shield
/// on the final image.
pub trait ShieldCanvas {
    /// Fill an axis-aligned rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill an axis-aligned rectangle with a two-stop linear gradient running
    /// from `start` to `end`.
    fn fill_linear_gradient(
        &mut self,
        rect: Rect,
        start: (Point, Color),
        end: (Point, Color),
    );

    /// Restrict subsequent drawing to a rounded rectangle.
    ///
    /// Every push is matched by a [`ShieldCanvas::pop_clip`].
    fn push_rounded_clip(&mut self, rect: Rect, radius: f64);

    /// Remove the most recently pushed clip.
    fn pop_clip(&mut self);

    /// Fill a single line of text whose baseline starts at `origin`.
    fn fill_text(&mut self, text: &str, origin: Point, color: Color);
}

/// Offset of the drop shadow drawn under each text.
pub const TEXT_SHADOW_OFFSET: Vec2 = Vec2::new(0.0, 1.0);

/// Color of the drop shadow drawn under each text.
pub const TEXT_SHADOW_COLOR: Color = Color::from_rgba8(0, 0, 0, 85);

/// Color of the shield texts.
pub const TEXT_COLOR: Color = Color::WHITE;

/// Top stop of the gloss gradient laid over both bands.
pub const GLOSS_TOP: Color = Color::from_rgba8(0xbb, 0xbb, 0xbb, 26);

/// Bottom stop of the gloss gradient laid over both bands.
pub const GLOSS_BOTTOM: Color = Color::from_rgba8(0, 0, 0, 26);

/// Paint `content`, laid out as `dims`, onto `canvas`.
pub fn paint_shield<C: ShieldCanvas + ?Sized>(
    canvas: &mut C,
    content: &Content,
    dims: &ShieldDimensions,
) {
    let bounds = Rect::from_origin_size(Point::ORIGIN, dims.size());

    canvas.push_rounded_clip(bounds, CORNER_RADIUS);
    canvas.fill_rect(dims.label_band(), content.label_background().color());
    if let Some(band) = dims.message_band() {
        canvas.fill_rect(band, content.message_background().color());
    }
    canvas.fill_linear_gradient(
        bounds,
        (Point::new(0.0, 0.0), GLOSS_TOP),
        (Point::new(0.0, dims.height), GLOSS_BOTTOM),
    );
    canvas.pop_clip();

    paint_text(canvas, content.label(), dims.label_origin());
    if let (Some(message), Some(origin)) = (content.message(), dims.message_origin()) {
        paint_text(canvas, message, origin);
    }
}

fn paint_text<C: ShieldCanvas + ?Sized>(canvas: &mut C, text: &str, origin: Point) {
    canvas.fill_text(text, origin + TEXT_SHADOW_OFFSET, TEXT_SHADOW_COLOR);
    canvas.fill_text(text, origin, TEXT_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NamedColor;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        Rect(Rect, Color),
        Gradient(Rect),
        PushClip(Rect),
        PopClip,
        Text(String, Point, Color),
    }

    /// Canvas that records every call for inspection.
    #[derive(Default)]
    struct RecordingCanvas {
        calls: Vec<Call>,
    }

    impl ShieldCanvas for RecordingCanvas {
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.calls.push(Call::Rect(rect, color));
        }

        fn fill_linear_gradient(
            &mut self,
            rect: Rect,
            _start: (Point, Color),
            _end: (Point, Color),
        ) {
            self.calls.push(Call::Gradient(rect));
        }

        fn push_rounded_clip(&mut self, rect: Rect, _radius: f64) {
            self.calls.push(Call::PushClip(rect));
        }

        fn pop_clip(&mut self) {
            self.calls.push(Call::PopClip);
        }

        fn fill_text(&mut self, text: &str, origin: Point, color: Color) {
            self.calls.push(Call::Text(text.to_string(), origin, color));
        }
    }

    #[test]
    fn single_band_sequence() {
        let content = Content::parse("docs-blue").unwrap();
        let dims = ShieldDimensions::from_widths(20.0, None, 10.0, 2.0);
        let mut canvas = RecordingCanvas::default();
        paint_shield(&mut canvas, &content, &dims);

        let bounds = Rect::new(0.0, 0.0, dims.width, dims.height);
        let origin = dims.label_origin();
        assert_eq!(
            canvas.calls,
            [
                Call::PushClip(bounds),
                Call::Rect(dims.label_band(), NamedColor::Blue.color()),
                Call::Gradient(bounds),
                Call::PopClip,
                Call::Text("docs".into(), origin + TEXT_SHADOW_OFFSET, TEXT_SHADOW_COLOR),
                Call::Text("docs".into(), origin, TEXT_COLOR),
            ]
        );
    }

    #[test]
    fn two_band_sequence_uses_grey_label() {
        let content = Content::parse("build-passing-success").unwrap();
        let dims = ShieldDimensions::from_widths(20.0, Some(30.0), 10.0, 2.0);
        let mut canvas = RecordingCanvas::default();
        paint_shield(&mut canvas, &content, &dims);

        assert_eq!(canvas.calls.len(), 9);
        assert_eq!(
            canvas.calls[1],
            Call::Rect(dims.label_band(), NamedColor::Grey.color())
        );
        assert_eq!(
            canvas.calls[2],
            Call::Rect(dims.message_band().unwrap(), NamedColor::BrightGreen.color())
        );
        let texts: Vec<_> = canvas
            .calls
            .iter()
            .filter_map(|call| match call {
                Call::Text(text, origin, color) if *color == TEXT_COLOR => {
                    Some((text.as_str(), *origin))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            [
                ("build", dims.label_origin()),
                ("passing", dims.message_origin().unwrap())
            ]
        );
    }

    #[test]
    fn clip_is_balanced() {
        let content = Content::parse("a-b-red").unwrap();
        let dims = ShieldDimensions::from_widths(1.0, Some(1.0), 1.0, 0.0);
        let mut canvas = RecordingCanvas::default();
        paint_shield(&mut canvas, &content, &dims);
        let pushes = canvas
            .calls
            .iter()
            .filter(|c| matches!(c, Call::PushClip(_)))
            .count();
        let pops = canvas.calls.iter().filter(|c| **c == Call::PopClip).count();
        assert_eq!(pushes, pops);
    }
}
