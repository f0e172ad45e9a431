//! Random quiz rounds (fair-coin point placement + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for quiz rounds. Each round first
//!   flips a fair coin for the on-line/off-line outcome, then constructs a
//!   point honoring that outcome exactly.
//!
//! Model
//! - On-line points pick a grid `x` and evaluate the line; the resulting `y`
//!   may leave the grid and is accepted unclamped.
//! - Off-line points are rejection-sampled from the grid. The line meets at
//!   most one lattice point per column, so a draw hits it with probability
//!   at most 17/289; the loop is capped anyway, with a deterministic
//!   fallback that shifts off the intercept.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `QuizCfg`, `session::QuizSession`.

use super::{GridPoint, Line, QuizCfg, Round};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Error type for generator construction.
#[derive(Debug)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

impl QuizCfg {
    pub(crate) fn validate(&self) -> Result<(), GeneratorError> {
        if self.grid_extent < 1 {
            return Err(GeneratorError::invalid("grid_extent must be >= 1"));
        }
        if self.slope_max < 1 {
            return Err(GeneratorError::invalid("slope_max must be >= 1"));
        }
        if self.intercept_max < 0 {
            return Err(GeneratorError::invalid("intercept_max must be >= 0"));
        }
        // Keeps the off-line fallback point (0, b + 1) inside the grid.
        if self.intercept_max >= self.grid_extent {
            return Err(GeneratorError::invalid(
                "intercept_max must be smaller than grid_extent",
            ));
        }
        if self.max_off_line_attempts == 0 {
            return Err(GeneratorError::invalid("max_off_line_attempts must be > 0"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Sample a line: slope uniform over the nonzero integers in
/// `[-slope_max, slope_max]`, intercept uniform over
/// `[-intercept_max, intercept_max]`.
pub fn draw_line<R: Rng>(cfg: &QuizCfg, rng: &mut R) -> Line {
    // Draw from [-slope_max, slope_max - 1] and shift the non-negative half
    // up by one: uniform over the nonzero values, no rejection needed.
    let mut m = rng.gen_range(-cfg.slope_max..cfg.slope_max);
    if m >= 0 {
        m += 1;
    }
    let b = rng.gen_range(-cfg.intercept_max..=cfg.intercept_max);
    Line::new(m, b)
}

/// Sample a grid point, both coordinates independent and uniform over
/// `[-grid_extent, grid_extent]`. No relation to any line.
pub fn draw_point<R: Rng>(cfg: &QuizCfg, rng: &mut R) -> GridPoint {
    GridPoint::new(
        rng.gen_range(-cfg.grid_extent..=cfg.grid_extent),
        rng.gen_range(-cfg.grid_extent..=cfg.grid_extent),
    )
}

/// Sample a full round: line, fair coin, then a point honoring the coin.
pub fn draw_round<R: Rng>(cfg: &QuizCfg, rng: &mut R) -> Round {
    let line = draw_line(cfg, rng);
    let on_line = rng.gen_bool(0.5);
    let point = if on_line {
        // Pick a grid x and evaluate exactly; y may leave the grid.
        let x = rng.gen_range(-cfg.grid_extent..=cfg.grid_extent);
        GridPoint::new(x, line.y_at(x))
    } else {
        draw_off_line_point(cfg, &line, rng)
    };
    Round {
        line,
        point,
        on_line,
    }
}

fn draw_off_line_point<R: Rng>(cfg: &QuizCfg, line: &Line, rng: &mut R) -> GridPoint {
    for _ in 0..cfg.max_off_line_attempts {
        let p = draw_point(cfg, rng);
        if !line.contains(p) {
            return p;
        }
    }
    // Practically unreachable at the default cap (miss probability <= 17/289
    // per draw). Shifting one unit off the intercept stays in the grid
    // (validation requires intercept_max < grid_extent) and off the line.
    GridPoint::new(0, line.b + 1)
}

/// A single round plus replay metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSample {
    pub round: Round,
    pub replay: ReplayToken,
}

/// Reproducible round stream over a validated config.
///
/// `generate_next` advances an internal index; `regenerate` replays any
/// previously issued token without disturbing the stream.
pub struct RoundGenerator {
    cfg: QuizCfg,
    seed: u64,
    next_index: u64,
}

impl RoundGenerator {
    pub fn new(cfg: QuizCfg, seed: u64) -> Result<Self, GeneratorError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            seed,
            next_index: 0,
        })
    }

    pub fn cfg(&self) -> &QuizCfg {
        &self.cfg
    }

    pub fn generate_next(&mut self) -> RoundSample {
        let replay = ReplayToken {
            seed: self.seed,
            index: self.next_index,
        };
        self.next_index = self.next_index.wrapping_add(1);
        RoundSample {
            round: Self::sample_with_token(&self.cfg, replay),
            replay,
        }
    }

    pub fn regenerate(&self, replay: &ReplayToken) -> Round {
        Self::sample_with_token(&self.cfg, *replay)
    }

    fn sample_with_token(cfg: &QuizCfg, token: ReplayToken) -> Round {
        let mut rng = token.to_std_rng();
        draw_round(cfg, &mut rng)
    }
}
