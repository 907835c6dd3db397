//! Tap Survival headless entry point
//!
//! Runs autopilot sessions in real time on the monotonic driver. Rendering and
//! touch input live in the host app; this binary is for tuning and soak runs.
//!
//! Usage: `tap-survival [--config <tuning.json>] [--seed <n>] [--games <n>] [--json]`

use std::time::Instant;

use anyhow::{Context, Result, bail};

use tap_survival::sim::{GameEvent, GamePhase};
use tap_survival::{Command, Driver, Tuning};

struct Args {
    config: Option<String>,
    seed: Option<u64>,
    games: u32,
    json: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        config: None,
        seed: None,
        games: 1,
        json: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => args.config = Some(iter.next().context("--config needs a path")?),
            "--seed" => {
                let value = iter.next().context("--seed needs a value")?;
                args.seed = Some(value.parse().with_context(|| format!("bad seed {value:?}"))?);
            }
            "--games" => {
                let value = iter.next().context("--games needs a value")?;
                args.games = value
                    .parse()
                    .with_context(|| format!("bad game count {value:?}"))?;
            }
            "--json" => args.json = true,
            other => bail!("unknown argument {other:?}"),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;

    // A missing or broken tuning file falls back to defaults with a warning
    let tuning = match &args.config {
        Some(path) => Tuning::load(path),
        None => Tuning::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Tap Survival starting with seed: {}", seed);

    let mut driver = Driver::new(tuning, seed);
    driver.idle_mode = true;

    for game in 1..=args.games {
        if game > 1 {
            driver.push(Command::Restart);
        }
        driver.push(Command::Start);

        loop {
            driver.frame(Instant::now());

            for event in driver.drain_events() {
                if let GameEvent::GameOver { cause, score } = event {
                    println!("game {game}: score {score} ({cause:?})");
                }
            }
            if args.json {
                println!("{}", serde_json::to_string(&driver.snapshot())?);
            }
            if driver.state().phase == GamePhase::GameOver {
                break;
            }

            std::thread::sleep(driver.until_next_tick());
        }
    }

    Ok(())
}
