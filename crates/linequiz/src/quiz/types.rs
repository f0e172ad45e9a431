//! Quiz value types and the sampling configuration.
//!
//! - `Line`: integer-coefficient line `y = m*x + b` with an exact membership
//!   predicate.
//! - `GridPoint`: integer lattice point.
//! - `Round`: one line/point pairing plus its coin-flip outcome.
//! - `QuizCfg`: sampling ranges with the standard quiz defaults.

use std::fmt;

/// Line `y = m*x + b` with integer slope and intercept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    pub m: i32,
    pub b: i32,
}

impl Line {
    #[inline]
    pub fn new(m: i32, b: i32) -> Self {
        Self { m, b }
    }

    /// Exact evaluation of `m*x + b`.
    #[inline]
    pub fn y_at(&self, x: i32) -> i32 {
        self.m * x + self.b
    }

    /// Exact integer membership test; no tolerance is involved.
    #[inline]
    pub fn contains(&self, p: GridPoint) -> bool {
        p.y == self.y_at(p.x)
    }
}

impl fmt::Display for Line {
    /// Literal substitution, signs carried by the integers (`y = -2x + 3`,
    /// `y = 2x + -5`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {}x + {}", self.m, self.b)
    }
}

/// Integer lattice point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One quiz unit: a line, a point, and whether the point lies on the line.
///
/// `on_line` records the coin flip that drove point construction, so it is
/// authoritative; `line.contains(point)` agrees with it by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Round {
    pub line: Line,
    pub point: GridPoint,
    pub on_line: bool,
}

impl Round {
    /// The literal question text shown to the player.
    pub fn prompt(&self) -> String {
        format!("Is the point {} on the line {}?", self.point, self.line)
    }
}

/// Sampling configuration.
///
/// Defaults: points on the 17×17 grid `[-8,8]²`,
/// slopes in `{-2,-1,1,2}`, intercepts in `[-5,5]`.
#[derive(Clone, Copy, Debug)]
pub struct QuizCfg {
    /// Half-range of the logical grid; points are sampled in
    /// `[-grid_extent, grid_extent]` on both axes.
    pub grid_extent: i32,
    /// Slopes are uniform over the nonzero integers in `[-slope_max, slope_max]`.
    /// Zero is excluded on purpose (a horizontal line makes the question
    /// trivially about the intercept alone).
    pub slope_max: i32,
    /// Intercepts are uniform over `[-intercept_max, intercept_max]`.
    pub intercept_max: i32,
    /// Cap on off-line rejection draws before the deterministic fallback.
    pub max_off_line_attempts: u32,
}

impl Default for QuizCfg {
    fn default() -> Self {
        Self {
            grid_extent: 8,
            slope_max: 2,
            intercept_max: 5,
            max_off_line_attempts: 64,
        }
    }
}
