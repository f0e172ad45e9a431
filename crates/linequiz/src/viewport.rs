//! Logical grid → pixel viewport projection.
//!
//! Purpose
//! - Map the logical domain `[-extent, extent]` on each axis into a padded
//!   pixel rectangle, y inverted (logical up is the smaller pixel row), so
//!   every drawn element shares one consistent positioning.
//!
//! Model
//! - Plain affine maps, total over all finite reals: out-of-domain inputs
//!   land outside the padded area and are never clamped. A line evaluated at
//!   the domain edges can leave the grid vertically and must still project.
//!
//! Code cross-refs: `render::draw_board`, `quiz::GridPoint`.

use crate::quiz::GridPoint;
use nalgebra::Vector2;
use std::fmt;

/// Viewport configuration.
///
/// Defaults give a 400×400 board with a 40 px margin reserved for
/// axis decoration, over the `[-8,8]` logical domain.
#[derive(Clone, Copy, Debug)]
pub struct ViewportCfg {
    pub width: f64,
    pub height: f64,
    /// Margin on every side, in pixels.
    pub padding: f64,
    /// Logical half-range projected onto the padded area.
    pub extent: f64,
}

impl Default for ViewportCfg {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
            padding: 40.0,
            extent: 8.0,
        }
    }
}

/// Error type for viewport construction.
#[derive(Debug)]
pub enum ViewportError {
    InvalidParams { reason: String },
}

impl ViewportError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid viewport params: {reason}"),
        }
    }
}

impl std::error::Error for ViewportError {}

impl ViewportCfg {
    fn validate(&self) -> Result<(), ViewportError> {
        for (name, v) in [
            ("width", self.width),
            ("height", self.height),
            ("padding", self.padding),
            ("extent", self.extent),
        ] {
            if !v.is_finite() {
                return Err(ViewportError::invalid(format!("{name} must be finite")));
            }
        }
        if self.extent <= 0.0 {
            return Err(ViewportError::invalid("extent must be > 0"));
        }
        if self.padding < 0.0 {
            return Err(ViewportError::invalid("padding must be >= 0"));
        }
        if 2.0 * self.padding >= self.width || 2.0 * self.padding >= self.height {
            return Err(ViewportError::invalid(
                "padding must leave a nonempty drawing area",
            ));
        }
        Ok(())
    }
}

/// Validated projection from the logical domain onto the pixel viewport.
///
/// `map_x` is increasing and `map_y` decreasing, with the endpoints pinned:
/// `map_x(±extent)` hits the padded left/right edges and `map_y(±extent)`
/// the padded bottom/top edges.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    cfg: ViewportCfg,
}

impl Viewport {
    pub fn new(cfg: ViewportCfg) -> Result<Self, ViewportError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn cfg(&self) -> &ViewportCfg {
        &self.cfg
    }

    /// Logical x to pixel column.
    #[inline]
    pub fn map_x(&self, x: f64) -> f64 {
        let c = &self.cfg;
        c.padding + ((x + c.extent) / (2.0 * c.extent)) * (c.width - 2.0 * c.padding)
    }

    /// Logical y to pixel row (inverted).
    #[inline]
    pub fn map_y(&self, y: f64) -> f64 {
        let c = &self.cfg;
        c.height - c.padding - ((y + c.extent) / (2.0 * c.extent)) * (c.height - 2.0 * c.padding)
    }

    /// Project a logical coordinate pair into pixel space.
    #[inline]
    pub fn project(&self, x: f64, y: f64) -> Vector2<f64> {
        Vector2::new(self.map_x(x), self.map_y(y))
    }

    /// Project a lattice point.
    #[inline]
    pub fn project_point(&self, p: GridPoint) -> Vector2<f64> {
        self.project(f64::from(p.x), f64::from(p.y))
    }

    /// Pixel position of the logical origin (the axis crossing).
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        self.project(0.0, 0.0)
    }

    /// Integer tick positions along one axis, `-extent ..= extent`.
    pub fn grid_ticks(&self) -> impl Iterator<Item = i32> {
        let n = self.cfg.extent.floor() as i32;
        -n..=n
    }
}
