//! Drawing-surface boundary and board scene routines.
//!
//! The surface itself (canvas, SVG, …) is an external collaborator; this
//! module only reduces a round to primitive calls, with every pixel position
//! coming from one `Viewport` so all elements stay consistent.
//!
//! Code cross-refs: `viewport::Viewport`, `quiz::{Line, GridPoint}`.

use crate::quiz::{GridPoint, Line};
use crate::viewport::Viewport;
use nalgebra::Vector2;

/// Axis and tick color.
pub const AXIS_COLOR: &str = "#333";
/// Graph line color.
pub const LINE_COLOR: &str = "#007bff";
/// Point marker fill.
pub const POINT_COLOR: &str = "#ff4136";
/// Point marker outline color.
pub const POINT_OUTLINE_COLOR: &str = "#222";

/// Tick half-length in pixels.
pub const TICK_HALF: f64 = 5.0;
/// Point marker radius in pixels.
pub const POINT_RADIUS: f64 = 7.0;

/// Stroke style for segment primitives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
}

pub const AXIS_STROKE: Stroke = Stroke {
    color: AXIS_COLOR,
    width: 1.0,
};
pub const LINE_STROKE: Stroke = Stroke {
    color: LINE_COLOR,
    width: 2.0,
};
pub const POINT_OUTLINE: Stroke = Stroke {
    color: POINT_OUTLINE_COLOR,
    width: 2.0,
};

/// Primitive drawing operations, parameterized by pixel coordinates.
pub trait Surface {
    fn clear(&mut self);
    fn segment(&mut self, from: Vector2<f64>, to: Vector2<f64>, stroke: Stroke);
    fn filled_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        fill: &'static str,
        outline: Stroke,
    );
}

/// Clear the surface, then draw axes, tick marks, and the line segment
/// spanning the full logical x range.
pub fn draw_board<S: Surface>(surface: &mut S, vp: &Viewport, line: &Line) {
    surface.clear();
    draw_axes(surface, vp);
    draw_graph_line(surface, vp, line);
}

fn draw_axes<S: Surface>(surface: &mut S, vp: &Viewport) {
    let cfg = vp.cfg();
    let center = vp.center();
    // Axis cross through the logical origin, spanning the padded area.
    surface.segment(
        Vector2::new(cfg.padding, center.y),
        Vector2::new(cfg.width - cfg.padding, center.y),
        AXIS_STROKE,
    );
    surface.segment(
        Vector2::new(center.x, cfg.padding),
        Vector2::new(center.x, cfg.height - cfg.padding),
        AXIS_STROKE,
    );
    // Unlabeled ticks at every integer grid position on both axes.
    for i in vp.grid_ticks() {
        let x = vp.map_x(f64::from(i));
        surface.segment(
            Vector2::new(x, center.y - TICK_HALF),
            Vector2::new(x, center.y + TICK_HALF),
            AXIS_STROKE,
        );
        let y = vp.map_y(f64::from(i));
        surface.segment(
            Vector2::new(center.x - TICK_HALF, y),
            Vector2::new(center.x + TICK_HALF, y),
            AXIS_STROKE,
        );
    }
}

fn draw_graph_line<S: Surface>(surface: &mut S, vp: &Viewport, line: &Line) {
    // Endpoints at the domain edges; the evaluated y may leave the grid and
    // projects out of the padded area unclamped.
    let extent = vp.cfg().extent;
    let m = f64::from(line.m);
    let b = f64::from(line.b);
    let from = vp.project(-extent, m * -extent + b);
    let to = vp.project(extent, m * extent + b);
    surface.segment(from, to, LINE_STROKE);
}

/// Reveal marker for the quiz point, drawn after the answer.
pub fn draw_point_marker<S: Surface>(surface: &mut S, vp: &Viewport, point: GridPoint) {
    surface.filled_circle(
        vp.project_point(point),
        POINT_RADIUS,
        POINT_COLOR,
        POINT_OUTLINE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::ViewportCfg;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        Segment(Vector2<f64>, Vector2<f64>, Stroke),
        Circle(Vector2<f64>, f64, &'static str, Stroke),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Surface for Recorder {
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }
        fn segment(&mut self, from: Vector2<f64>, to: Vector2<f64>, stroke: Stroke) {
            self.ops.push(Op::Segment(from, to, stroke));
        }
        fn filled_circle(
            &mut self,
            center: Vector2<f64>,
            radius: f64,
            fill: &'static str,
            outline: Stroke,
        ) {
            self.ops.push(Op::Circle(center, radius, fill, outline));
        }
    }

    fn default_viewport() -> Viewport {
        Viewport::new(ViewportCfg::default()).unwrap()
    }

    #[test]
    fn board_clears_then_draws_axes_ticks_and_line() {
        let vp = default_viewport();
        let mut surface = Recorder::default();
        draw_board(&mut surface, &vp, &Line::new(2, 1));
        // 1 clear + 2 axes + 17 ticks per axis + 1 graph line.
        assert_eq!(surface.ops.len(), 1 + 2 + 34 + 1);
        assert_eq!(surface.ops[0], Op::Clear);
        assert_eq!(
            surface.ops[1],
            Op::Segment(
                Vector2::new(40.0, 200.0),
                Vector2::new(360.0, 200.0),
                AXIS_STROKE
            )
        );
    }

    #[test]
    fn graph_line_endpoints_span_the_domain() {
        let vp = default_viewport();
        let mut surface = Recorder::default();
        // y = 2x + 1: endpoints (-8, -15) and (8, 17), both beyond the grid.
        draw_board(&mut surface, &vp, &Line::new(2, 1));
        match surface.ops.last() {
            Some(Op::Segment(from, to, stroke)) => {
                assert_eq!(*stroke, LINE_STROKE);
                assert_eq!(from.x, vp.map_x(-8.0));
                assert_eq!(from.y, vp.map_y(-15.0));
                assert_eq!(to.x, vp.map_x(8.0));
                assert_eq!(to.y, vp.map_y(17.0));
            }
            other => panic!("expected the graph line last, got {other:?}"),
        }
    }

    #[test]
    fn point_marker_lands_on_the_projection() {
        let vp = default_viewport();
        let mut surface = Recorder::default();
        draw_point_marker(&mut surface, &vp, GridPoint::new(3, 7));
        assert_eq!(
            surface.ops,
            vec![Op::Circle(
                vp.project(3.0, 7.0),
                POINT_RADIUS,
                POINT_COLOR,
                POINT_OUTLINE
            )]
        );
    }
}
