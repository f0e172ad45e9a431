//! Round lifecycle controller.
//!
//! Owns the current round explicitly (no process-scope state) and exposes
//! the two entry points a UI layer needs: `start_round` and `answer`. The
//! answered round stays current so the driver can reveal the point; it is
//! discarded wholesale by the next `start_round`.

use crate::quiz::rand::{GeneratorError, ReplayToken, RoundGenerator};
use crate::quiz::{QuizCfg, Round};

/// Outcome of one answered round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Answer {
    /// Whether the player's yes/no matched the round.
    pub correct: bool,
    /// The ground truth the round was built with.
    pub on_line: bool,
}

impl Answer {
    /// The literal feedback text shown to the player.
    pub fn feedback(&self) -> &'static str {
        if self.correct {
            "Correct!"
        } else {
            "Incorrect."
        }
    }
}

/// Quiz driver state: a round generator plus the round in play.
pub struct QuizSession {
    gen: RoundGenerator,
    current: Option<(Round, ReplayToken)>,
}

impl QuizSession {
    pub fn new(cfg: QuizCfg, seed: u64) -> Result<Self, GeneratorError> {
        Ok(Self {
            gen: RoundGenerator::new(cfg, seed)?,
            current: None,
        })
    }

    /// Draw a fresh round, replacing any previous one wholesale.
    pub fn start_round(&mut self) -> &Round {
        let sample = self.gen.generate_next();
        let (round, _) = self.current.insert((sample.round, sample.replay));
        round
    }

    pub fn round(&self) -> Option<&Round> {
        self.current.as_ref().map(|(round, _)| round)
    }

    /// Replay token of the round in play, for artifact metadata.
    pub fn replay(&self) -> Option<ReplayToken> {
        self.current.as_ref().map(|(_, replay)| *replay)
    }

    pub fn prompt(&self) -> Option<String> {
        self.round().map(Round::prompt)
    }

    /// Score a yes/no answer against the round in play. `None` until the
    /// first round has started.
    pub fn answer(&self, says_on_line: bool) -> Option<Answer> {
        self.round().map(|round| Answer {
            correct: says_on_line == round.on_line,
            on_line: round.on_line,
        })
    }
}
