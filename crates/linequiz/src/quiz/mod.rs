//! Quiz problems: integer lines, grid points, and their sampling.
//!
//! Purpose
//! - Provide the one value type per concept (`Line`, `GridPoint`, `Round`)
//!   plus reproducible samplers that decide on-line/off-line status with a
//!   fair coin *before* drawing coordinates.
//! - Keep the API minimal: exact integer arithmetic, no tolerances.
//!
//! Code cross-refs: `viewport::Viewport` (projection), `session::QuizSession`
//! (round lifecycle).

pub mod rand;
mod types;

pub use types::{GridPoint, Line, QuizCfg, Round};

#[cfg(test)]
mod tests;
