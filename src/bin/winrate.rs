use std::collections::HashMap;
use std::error::Error;
use std::process;
use std::time::Instant;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::warn;

use unobot::{
    Bot, DEFAULT_MAX_STEPS, Game, GameError, StandardShuffler, create_bot_from_spec,
    label_for_spec,
};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xC0FFEE_u64 << 32 | 0x5EED_u64;

#[derive(Parser, Debug)]
#[command(name = "winrate", about = "Run multiple matches and report per-bot win rates.")]
struct Args {
    /// Number of matches to simulate
    #[arg(short = 'g', long = "games", default_value_t = 200)]
    games: usize,

    /// Base RNG seed (deck + bot RNGs will be derived deterministically)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Score that ends a match
    #[arg(short = 't', long = "target-score", default_value_t = 500)]
    target_score: u32,

    /// Safety cap on turn steps per hand; stalled matches are not counted as a win
    #[arg(long = "max-steps", default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Player bot specs: e.g., heuristic random (2-10 total)
    bots: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let specs = if args.bots.is_empty() {
        vec![String::from("heuristic"), String::from("random")]
    } else {
        args.bots.clone()
    };
    let labels: Vec<String> = specs.iter().map(|spec| label_for_spec(spec)).collect();
    let mut wins: HashMap<String, usize> = HashMap::new();
    let mut seats: HashMap<String, usize> = HashMap::new();
    let mut stalled = 0usize;
    let started = Instant::now();

    let mut order_rng = StdRng::seed_from_u64(args.seed);
    for game_index in 0..args.games {
        let game_seed = args.seed.wrapping_add(game_index as u64);
        // Rotate seating so no bot profits from always sitting next to the dealer.
        let mut order: Vec<usize> = (0..specs.len()).collect();
        order.shuffle(&mut order_rng);

        let mut bots: Vec<Box<dyn Bot>> = Vec::with_capacity(specs.len());
        for (seat, &spec_index) in order.iter().enumerate() {
            bots.push(create_bot_from_spec(&specs[spec_index], seat, game_seed)?);
            *seats.entry(labels[spec_index].clone()).or_default() += 1;
        }
        let names: Vec<String> = order
            .iter()
            .map(|&spec_index| format!("{spec_index}:{}", labels[spec_index]))
            .collect();

        let mut shuffler = StandardShuffler::seeded(game_seed);
        let game = Game::builder(names)
            .target_score(args.target_score)
            .build(&mut shuffler)?;
        match game.play_to_end(&mut bots, &mut shuffler, args.max_steps) {
            Ok(finished) => {
                if let Some(winner) = finished.winner() {
                    let label = winner.split_once(':').map_or(winner, |(_, label)| label);
                    *wins.entry(label.to_string()).or_default() += 1;
                }
            }
            Err(GameError::StalledHand(steps)) => {
                warn!(game = game_index, steps, "match stalled");
                stalled += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }

    let mut unique = labels.clone();
    unique.sort();
    unique.dedup();
    println!(
        "Played {} matches in {:.2?} ({} stalled)",
        args.games,
        started.elapsed(),
        stalled
    );
    for label in unique {
        let won = wins.get(&label).copied().unwrap_or(0);
        let played = seats.get(&label).copied().unwrap_or(0);
        let rate = if played == 0 {
            0.0
        } else {
            100.0 * won as f64 / played as f64
        };
        println!("  {label:<12} {won:>6} wins / {played:>6} seats  ({rate:.1}%)");
    }
    Ok(())
}
