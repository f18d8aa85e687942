//! Rampart -- a tower-defense bot speaking the host's line protocol.
//!
//! This binary reads the match config and turn frames from stdin and
//! writes one two-line submission per turn to stdout. Logs go to stderr.

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::{error, info, warn};

use rampart::config::StrategyConfig;
use rampart::engine::{Engine, Flow};

#[derive(Debug, Parser)]
#[command(name = "rampart", version)]
#[command(about = "Zone-tracking tower-defense bot")]
struct Args {
    /// Seed for every random choice; drawn from entropy when absent
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding strategy thresholds
    #[arg(long)]
    tuning: Option<PathBuf>,
}

/// Runs the main protocol loop, reading host lines from stdin and
/// writing submissions to stdout.
fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let strategy = match &args.tuning {
        Some(path) => match StrategyConfig::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                std::process::exit(2);
            }
        },
        None => StrategyConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("random seed: {}", seed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new(strategy, seed);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        match engine.handle_line(&line, &mut out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Finished) => break,
            Err(e) => warn!("{}", e),
        }
    }
}
