//! Reproducible probe: a handful of quiz rounds plus sampler timing.
//!
//! Purpose
//! - Eyeball the generated prompts for a fixed seed.
//! - Get a concrete figure for "how long does one round draw take?" instead
//!   of estimates.

use std::time::Instant;

use linequiz::quiz::rand::RoundGenerator;
use linequiz::quiz::QuizCfg;

fn main() {
    let mut gen = RoundGenerator::new(QuizCfg::default(), 2025).expect("default cfg is valid");

    for _ in 0..10 {
        let sample = gen.generate_next();
        println!(
            "index={} on_line={} {}",
            sample.replay.index,
            sample.round.on_line,
            sample.round.prompt()
        );
    }

    let n = 100_000u32;
    let start = Instant::now();
    let mut on_line = 0u32;
    for _ in 0..n {
        if gen.generate_next().round.on_line {
            on_line += 1;
        }
    }
    let elapsed = start.elapsed().as_secs_f64();
    println!("rounds={n} on_line={on_line}");
    println!("per_round_ns={:.1}", elapsed / f64::from(n) * 1e9);
}
