use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use linequiz::prelude::*;
use serde::Serialize;
use std::io::{self, BufRead, Write as _};
use std::thread;
use std::time::Duration;
use tracing_subscriber::fmt::SubscriberBuilder;

mod artifact;
mod svg;

use svg::SvgSurface;

#[derive(Parser)]
#[command(name = "linequiz")]
#[command(about = "Line-quiz driver: play rounds, render boards, dump samples")]
struct Cmd {
    /// RNG seed for the round stream
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Play rounds interactively on stdin/stdout
    Play {
        #[arg(long, default_value_t = 10)]
        rounds: u32,
        /// Pause before the next round starts
        #[arg(long, default_value_t = 1200)]
        delay_ms: u64,
    },
    /// Render one round's board as an SVG artifact with a JSON sidecar
    Render {
        /// Round index within the seed's stream
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: String,
        /// Also draw the point marker (spoils the answer)
        #[arg(long)]
        reveal: bool,
        #[arg(long, default_value_t = 400.0)]
        width: f64,
        #[arg(long, default_value_t = 400.0)]
        height: f64,
        #[arg(long, default_value_t = 40.0)]
        padding: f64,
    },
    /// Emit round records as JSON lines on stdout
    Sample {
        #[arg(long, default_value_t = 10)]
        count: u64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Play { rounds, delay_ms } => play(cmd.seed, rounds, delay_ms),
        Action::Render {
            index,
            out,
            reveal,
            width,
            height,
            padding,
        } => {
            let cfg = ViewportCfg {
                width,
                height,
                padding,
                ..ViewportCfg::default()
            };
            render(cmd.seed, index, &out, reveal, cfg)
        }
        Action::Sample { count } => sample(cmd.seed, count),
    }
}

fn play(seed: u64, rounds: u32, delay_ms: u64) -> Result<()> {
    tracing::info!(seed, rounds, "play");
    let mut session = QuizSession::new(QuizCfg::default(), seed)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut correct = 0u32;

    for played in 0..rounds {
        let round = *session.start_round();
        println!("{}", round.prompt());

        let says_on_line = loop {
            print!("[y/n] ");
            io::stdout().flush()?;
            match lines.next() {
                Some(line) => match line?.trim() {
                    "y" | "Y" | "yes" => break true,
                    "n" | "N" | "no" => break false,
                    _ => println!("Please answer y or n."),
                },
                // stdin closed: stop playing cleanly
                None => {
                    tracing::info!(played, correct, "stdin closed");
                    return Ok(());
                }
            }
        };

        let answer = session
            .answer(says_on_line)
            .context("round in play vanished")?;
        if answer.correct {
            correct += 1;
        }
        println!("{} The point was {}.", answer.feedback(), round.point);
        tracing::info!(
            index = played,
            on_line = round.on_line,
            correct = answer.correct,
            "round"
        );

        if played + 1 < rounds && delay_ms > 0 {
            thread::sleep(Duration::from_millis(delay_ms));
        }
    }

    println!("{correct}/{rounds} correct.");
    Ok(())
}

fn render(seed: u64, index: u64, out: &str, reveal: bool, cfg: ViewportCfg) -> Result<()> {
    tracing::info!(seed, index, out, reveal, "render");
    let generator = RoundGenerator::new(QuizCfg::default(), seed)?;
    let round = generator.regenerate(&ReplayToken { seed, index });

    let viewport = Viewport::new(cfg)?;
    let mut surface = SvgSurface::new(cfg.width, cfg.height);
    draw_board(&mut surface, &viewport, &round.line);
    if reveal {
        draw_point_marker(&mut surface, &viewport, round.point);
    }

    let meta = serde_json::json!({
        "replay": { "seed": seed, "index": index },
        "round": {
            "m": round.line.m,
            "b": round.line.b,
            "x": round.point.x,
            "y": round.point.y,
            "on_line": round.on_line,
        },
        "viewport": { "width": cfg.width, "height": cfg.height, "padding": cfg.padding },
        "outputs": [out],
    });
    let sidecar = artifact::write_with_meta(out, &surface.document(), meta)?;
    tracing::info!(sidecar = %sidecar.display(), "wrote artifact");
    Ok(())
}

#[derive(Serialize)]
struct RoundRecord {
    seed: u64,
    index: u64,
    m: i32,
    b: i32,
    x: i32,
    y: i32,
    on_line: bool,
    prompt: String,
}

fn sample(seed: u64, count: u64) -> Result<()> {
    tracing::info!(seed, count, "sample");
    let mut generator = RoundGenerator::new(QuizCfg::default(), seed)?;
    let mut out = io::stdout().lock();
    for _ in 0..count {
        let RoundSample { round, replay } = generator.generate_next();
        let record = RoundRecord {
            seed: replay.seed,
            index: replay.index,
            m: round.line.m,
            b: round.line.b,
            x: round.point.x,
            y: round.point.y,
            on_line: round.on_line,
            prompt: round.prompt(),
        };
        writeln!(out, "{}", serde_json::to_string(&record)?)?;
    }
    Ok(())
}
