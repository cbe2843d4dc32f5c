use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;

use unobot::{
    Bot, DEFAULT_MAX_STEPS, Game, StandardShuffler, create_bot_from_spec, render_view, snapshot,
};

const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Play one UNO match between bots and/or humans.")]
struct Args {
    /// Seed for shuffling and random bots
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Score that ends the match
    #[arg(short = 't', long = "target-score", default_value_t = 500)]
    target_score: u32,

    /// Cards dealt to every player at the start of a hand
    #[arg(long = "cards-per-player", default_value_t = 7)]
    cards_per_player: usize,

    /// Safety cap on turn steps per hand
    #[arg(long = "max-steps", default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Show the table from the perspective of the player in turn before every step
    #[arg(long = "visualize")]
    visualize: bool,

    /// Write a binary checkpoint of the final match state
    #[arg(long = "save")]
    save: Option<PathBuf>,

    /// Player bot specs: human[:name], random[:seed], heuristic, first (2-10 total)
    bots: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let bot_specs = if args.bots.is_empty() {
        vec![String::from("human"), String::from("heuristic")]
    } else {
        args.bots.clone()
    };

    let mut bots: Vec<Box<dyn Bot>> = Vec::with_capacity(bot_specs.len());
    for (index, spec) in bot_specs.iter().enumerate() {
        bots.push(create_bot_from_spec(spec, index, args.seed)?);
    }
    let names: Vec<String> = bot_specs
        .iter()
        .enumerate()
        .map(|(index, spec)| format!("{index}:{spec}"))
        .collect();

    let mut shuffler = StandardShuffler::seeded(args.seed);
    let mut game = Game::builder(names)
        .target_score(args.target_score)
        .cards_per_player(args.cards_per_player)
        .build(&mut shuffler)?;

    println!("Starting UNO match with {} players.\n", bots.len());
    while !game.is_game_over() {
        if args.visualize {
            if let Some(hand) = game.current_hand() {
                if let Some(player) = hand.player_in_turn() {
                    println!("{}", render_view(&hand.view(player)?));
                }
            }
            game = game.play_hand(&mut bots, &mut shuffler)?;
        } else {
            game = game.play_out_hand(&mut bots, &mut shuffler, args.max_steps)?;
        }
    }

    println!("Final scores after {} hands:", game.hands().len());
    for (name, score) in game.scores() {
        println!("  {name}: {score}");
    }
    if let Some(winner) = game.winner() {
        println!("Winner: {winner}");
    }

    if let Some(path) = args.save {
        fs::write(&path, snapshot::encode(&game)?)?;
        info!(path = %path.display(), "saved final state");
    }
    Ok(())
}
