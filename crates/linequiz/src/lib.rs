//! Line-quiz core: randomized problems and viewport projection.
//!
//! One round of the quiz is a random line `y = m*x + b`, a random grid
//! point, and the (coin-flipped) fact of whether the point lies exactly on
//! the line. This crate owns that sampling logic, the logical-grid →
//! pixel-viewport projection, the drawing-surface boundary, and a small
//! session controller. Actual drawing and user input stay with the caller.

pub mod quiz;
pub mod render;
pub mod session;
pub mod viewport;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pixel-space vector used everywhere the viewport hands out coordinates.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::quiz::rand::{
        draw_line, draw_point, draw_round, GeneratorError, ReplayToken, RoundGenerator,
        RoundSample,
    };
    pub use crate::quiz::{GridPoint, Line, QuizCfg, Round};
    pub use crate::render::{draw_board, draw_point_marker, Stroke, Surface};
    pub use crate::session::{Answer, QuizSession};
    pub use crate::viewport::{Viewport, ViewportCfg, ViewportError};
    pub use nalgebra::Vector2 as Vec2;
}
