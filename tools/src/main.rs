//! walk-runner: headless runner for the forest random-walk simulation.
//!
//! Usage:
//!   walk-runner --width 10 --height 8 --seed 42
//!   walk-runner --axis --paced --rate 60
//!   walk-runner --width 10 --height 8 --json
//!
//! Dimensions missing from the command line are prompted for
//! interactively: integer in [2, 50], retry until valid.

use anyhow::Result;
use forestwalk_core::{
    config::{DIM_MAX, DIM_MIN},
    types::Coord,
    MovementPolicy, PacedSim, SimConfig, SimEngine, SimSnapshot, DEFAULT_STEP_RATE,
};
use std::env;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed: Option<u64> = flag_value(&args, "--seed");
    let axis = args.iter().any(|a| a == "--axis");
    let paced = args.iter().any(|a| a == "--paced");
    let json = args.iter().any(|a| a == "--json");
    let rate = parse_arg(&args, "--rate", DEFAULT_STEP_RATE);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let width = match flag_value(&args, "--width") {
        Some(w) => w,
        None => prompt_dimension(&mut input, "width")?,
    };
    let height = match flag_value(&args, "--height") {
        Some(h) => h,
        None => prompt_dimension(&mut input, "height")?,
    };

    let policy = if axis {
        MovementPolicy::AxisConstrained
    } else {
        MovementPolicy::Free
    };

    let mut config = SimConfig::new(width, height).with_policy(policy);
    if let Some(s) = seed {
        config = config.seeded(s);
    }
    // The [2, 50] contract is enforced here, at the input layer.
    config.validate()?;

    let engine = SimEngine::new(&config);
    let snapshot = if paced {
        PacedSim::new(engine)
            .steps_per_second(rate)
            .run(|frame| log::debug!("frame: {frame}"))?
    } else {
        let mut engine = engine;
        engine.start()?;
        engine.snapshot()
    };

    if json {
        println!("{}", snapshot.to_json()?);
    } else {
        print_summary(&config, &snapshot);
    }
    Ok(())
}

fn print_summary(config: &SimConfig, snapshot: &SimSnapshot) {
    println!("=== RUN SUMMARY ===");
    println!("  forest:    {}x{}", snapshot.width, snapshot.height);
    println!("  policy:    {:?}", config.policy);
    match config.seed {
        Some(s) => println!("  seed:      {s}"),
        None => println!("  seed:      (entropy)"),
    }
    println!("  steps:     {}", snapshot.steps);
    println!("  walker a:  {:?}", snapshot.walker_a);
    println!("  walker b:  {:?}", snapshot.walker_b);
    println!("  met:       {}", snapshot.met);
    println!();
    println!("{snapshot}");
}

/// Retry-until-valid dimension prompt.
fn prompt_dimension(input: &mut impl BufRead, name: &str) -> Result<Coord> {
    loop {
        print!("Please enter an integer value for {name} [{DIM_MIN}, {DIM_MAX}]: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("stdin closed while prompting for {name}");
        }
        match line.trim().parse::<Coord>() {
            Ok(value) if (DIM_MIN..=DIM_MAX).contains(&value) => return Ok(value),
            Ok(_) | Err(_) => {
                println!("Please enter an integer in [{DIM_MIN}, {DIM_MAX}]!");
            }
        }
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn flag_value<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
}
