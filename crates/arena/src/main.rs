//! Arena CLI
//!
//! Run matches between engines on any of the supported games.

use arena::{MatchConfig, MatchRecord, MatchRunner, load_config};
use games_core::abalone::Abalone;
use games_core::martian::MartianChess;
use games_core::{Engine, Game};
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use std::env;
use std::path::{Path, PathBuf};

fn print_usage() {
    println!("Arena Match Runner");
    println!();
    println!("Usage:");
    println!("  arena <game> <engine1> <engine2> [--games N] [--depth D] [--config FILE] [--out FILE]");
    println!();
    println!("Games:");
    println!("  abalone       - Hexagonal push game");
    println!("  martian       - Orthogonal capture-scoring game");
    println!();
    println!("Engines:");
    println!("  minimax       - Alpha-beta with material eval");
    println!("  random        - Uniform random mover");
    println!();
    println!("Examples:");
    println!("  arena abalone minimax random --games 20 --depth 3");
    println!("  arena martian minimax minimax --config match.toml --out record.json");
}

fn create_engine<G: Game + Clone>(spec: &str) -> Box<dyn Engine<G>> {
    match spec.to_lowercase().as_str() {
        "minimax" | "mm" => Box::new(MinimaxEngine::new()),
        "random" | "rand" => Box::new(RandomEngine::new()),
        _ => {
            eprintln!("Unknown engine: {}", spec);
            Box::new(RandomEngine::new())
        }
    }
}

struct CliArgs {
    game: String,
    engine1: String,
    engine2: String,
    config: MatchConfig,
    out: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Option<CliArgs> {
    if args.len() < 3 {
        return None;
    }

    let game = args[0].to_lowercase();
    let engine1 = args[1].clone();
    let engine2 = args[2].clone();

    let mut config = MatchConfig::default();
    let mut out = None;

    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.num_games = args[i + 1].parse().unwrap_or(config.num_games);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    config.depth = args[i + 1].parse().unwrap_or(config.depth);
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    match load_config(Path::new(&args[i + 1])) {
                        Ok(loaded) => config = loaded,
                        Err(e) => eprintln!("Warning: {}", e),
                    }
                    i += 1;
                }
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    Some(CliArgs {
        game,
        engine1,
        engine2,
        config,
        out,
    })
}

fn run<G, F>(cli: &CliArgs, new_game: F)
where
    G: Game + Clone,
    F: Fn() -> G,
{
    println!(
        "=== Match: {} vs {} on {} ===",
        cli.engine1, cli.engine2, cli.game
    );
    println!(
        "Games: {}, Depth: {}",
        cli.config.num_games, cli.config.depth
    );
    println!();

    let mut engine1 = create_engine::<G>(&cli.engine1);
    let mut engine2 = create_engine::<G>(&cli.engine2);

    let runner = MatchRunner::new(cli.config.clone());
    let result = runner.run_match(new_game, engine1.as_mut(), engine2.as_mut());

    let record = MatchRecord::new(
        &cli.game,
        engine1.name(),
        engine2.name(),
        result,
        cli.config.clone(),
    );

    println!();
    record.print_report();

    if let Some(path) = &cli.out {
        if let Err(e) = record.save(path) {
            eprintln!("Warning: Failed to save record: {}", e);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() >= 2 && matches!(args[1].as_str(), "help" | "--help" | "-h") {
        print_usage();
        return;
    }

    let Some(cli) = parse_args(&args[1..]) else {
        print_usage();
        return;
    };

    match cli.game.as_str() {
        "abalone" => run(&cli, Abalone::startpos),
        "martian" => run(&cli, MartianChess::startpos),
        _ => {
            eprintln!("Unknown game: {}", cli.game);
            print_usage();
        }
    }
}
