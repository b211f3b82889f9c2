//! Number Rush headless runner
//!
//! Plays a seeded demo game with the autopilot at a fixed 60 Hz step and
//! prints the final world snapshot as JSON.
//!
//! Usage: `number-rush [--seed N] [--seconds S] [--tuning FILE]`

use anyhow::{Context, Result, bail};

use number_rush::consts::SIM_DT;
use number_rush::sim::{GameEvent, TickInput};
use number_rush::{ManualClock, Session, Tuning};

struct Args {
    seed: u64,
    seconds: f32,
    tuning: Option<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args { seed: 12345, seconds: 120.0, tuning: None };
    let mut it = std::env::args().skip(1);
    while let Some(flag) = it.next() {
        let mut value = || it.next().with_context(|| format!("missing value for {flag}"));
        match flag.as_str() {
            "--seed" => args.seed = value()?.parse().context("--seed expects an integer")?,
            "--seconds" => args.seconds = value()?.parse().context("--seconds expects a number")?,
            "--tuning" => args.tuning = Some(value()?),
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(args)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path).with_context(|| format!("loading tuning from {path}"))?,
        None => Tuning::default(),
    };

    log::info!("Number Rush (headless) starting: seed {}, {}s", args.seed, args.seconds);
    let mut session = Session::new(args.seed, tuning, ManualClock::new(0.0))?;
    let input = TickInput { idle_mode: true, ..Default::default() };

    let frames = (args.seconds / SIM_DT).ceil() as u64;
    let mut best = (0u64, 1u32);
    for _ in 0..frames {
        session.clock().advance(SIM_DT as f64);
        for event in session.step(&input) {
            match *event {
                GameEvent::ScoreChanged { .. } => {}
                GameEvent::GameOver { final_score, level } => {
                    if final_score > best.0 {
                        best = (final_score, level);
                    }
                    log::info!("Run ended: score {} on level {}", final_score, level);
                }
                other => log::debug!("{:?}", other),
            }
        }
    }

    let state = session.state();
    if state.score > best.0 {
        best = (state.score, state.level);
    }
    log::info!("Best run: score {} reaching level {}", best.0, best.1);

    let json = serde_json::to_string_pretty(&session.snapshot())?;
    println!("{json}");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
