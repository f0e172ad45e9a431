//! SVG drawing surface for board artifacts.
//!
//! Implements the library's `Surface` boundary by accumulating `<line>` and
//! `<circle>` elements; `document()` wraps them into a standalone SVG file.

use linequiz::render::{Stroke, Surface};
use linequiz::Vec2;
use std::fmt::Write as _;

pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    /// The finished SVG document.
    pub fn document(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        self.body.clear();
    }

    fn segment(&mut self, from: Vec2<f64>, to: Vec2<f64>, stroke: Stroke) {
        // Infallible for String targets.
        let _ = writeln!(
            self.body,
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" \
             stroke=\"{}\" stroke-width=\"{}\"/>",
            from.x, from.y, to.x, to.y, stroke.color, stroke.width
        );
    }

    fn filled_circle(&mut self, center: Vec2<f64>, radius: f64, fill: &'static str, outline: Stroke) {
        let _ = writeln!(
            self.body,
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" \
             stroke=\"{}\" stroke-width=\"{}\"/>",
            center.x, center.y, radius, fill, outline.color, outline.width
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linequiz::prelude::*;

    #[test]
    fn board_document_contains_axes_ticks_and_line() {
        let vp = Viewport::new(ViewportCfg::default()).unwrap();
        let mut surface = SvgSurface::new(400.0, 400.0);
        draw_board(&mut surface, &vp, &Line::new(2, 1));
        let doc = surface.document();
        // 2 axes + 34 ticks + 1 graph line.
        assert_eq!(doc.matches("<line ").count(), 37);
        assert!(doc.contains("stroke=\"#007bff\""));
        assert!(doc.starts_with("<svg "));
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn marker_is_a_filled_circle_at_the_projection() {
        let vp = Viewport::new(ViewportCfg::default()).unwrap();
        let mut surface = SvgSurface::new(400.0, 400.0);
        draw_point_marker(&mut surface, &vp, GridPoint::new(0, 0));
        let doc = surface.document();
        assert!(doc.contains("<circle cx=\"200\" cy=\"200\" r=\"7\" fill=\"#ff4136\""));
    }

    #[test]
    fn clear_drops_prior_elements() {
        let vp = Viewport::new(ViewportCfg::default()).unwrap();
        let mut surface = SvgSurface::new(400.0, 400.0);
        draw_point_marker(&mut surface, &vp, GridPoint::new(1, 1));
        // draw_board starts with a clear, so the stale marker disappears.
        draw_board(&mut surface, &vp, &Line::new(1, 0));
        assert_eq!(surface.document().matches("<circle ").count(), 0);
    }
}
