//! Interactive play CLI
//!
//! Plays either game on the terminal with any mix of human and engine seats.

mod input;

use games_core::abalone::Abalone;
use games_core::martian::MartianChess;
use games_core::{Engine, Game, Player, Status, Verdict};
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use std::env;
use std::io::{self, BufRead, Write};

fn print_usage() {
    println!("Interactive game runner");
    println!();
    println!("Usage:");
    println!("  play <game> [player1] [player2]");
    println!();
    println!("Games:");
    println!("  abalone       - Hexagonal push game");
    println!("  martian       - Orthogonal capture-scoring game");
    println!();
    println!("Players (default: human vs minimax):");
    println!("  human         - Moves typed as row,col pairs");
    println!("  random        - Uniform random mover");
    println!("  minimax[:D]   - Alpha-beta search, optional depth (default 3)");
    println!();
    println!("Moves are whitespace-separated row,col pairs:");
    println!("  abalone: start end destination (labels printed on the board)");
    println!("  martian: from to");
    println!("Type 'quit' to stop.");
}

enum Seat<G: Game> {
    Human,
    Engine(Box<dyn Engine<G>>, u8),
}

fn create_seat<G: Game + Clone>(spec: &str) -> Option<Seat<G>> {
    let parts: Vec<&str> = spec.split(':').collect();
    match parts[0].to_lowercase().as_str() {
        "human" | "h" => Some(Seat::Human),
        "random" | "rand" => Some(Seat::Engine(Box::new(RandomEngine::new()), 1)),
        "minimax" | "mm" => {
            let depth = parts
                .get(1)
                .and_then(|d| d.parse::<u8>().ok())
                .unwrap_or(3)
                .clamp(1, 8);
            Some(Seat::Engine(Box::new(MinimaxEngine::new()), depth))
        }
        _ => {
            eprintln!("Unknown player: {}", spec);
            None
        }
    }
}

fn seat_label(p: Player) -> &'static str {
    match p {
        Player::One => "Player 1",
        Player::Two => "Player 2",
    }
}

/// Runs the game loop until the game ends or a seat resigns.
///
/// Human moves are accepted only after they parse, land on the board and
/// appear in the current legal-move list; anything else re-prompts.
fn play<G, P>(mut game: G, mut seats: [Seat<G>; 2], parse: P)
where
    G: Game,
    P: Fn(&str, &G) -> Result<G::Move, String>,
{
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    loop {
        println!("{}", game.board_string());

        if let Status::Over(verdict) = game.status() {
            match verdict {
                Verdict::Winner(p) => println!("{} wins!", seat_label(p)),
                Verdict::Draw => println!("Draw."),
            }
            return;
        }

        let turn = game.player_turn();
        let legal = game.possible_moves();

        let mv = match &mut seats[turn.idx()] {
            Seat::Human => loop {
                print!("{} move> ", seat_label(turn));
                stdout.flush().ok();
                let line = match lines.next() {
                    Some(Ok(l)) => l,
                    _ => return,
                };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "quit" || line == "exit" {
                    return;
                }
                match parse(line, &game) {
                    Ok(mv) if legal.contains(&mv) => break mv,
                    Ok(_) => eprintln!("That move is not legal here."),
                    Err(e) => eprintln!("Could not read move: {}", e),
                }
            },
            Seat::Engine(engine, depth) => {
                let report = engine.search(&game, *depth);
                match report.best_move {
                    Some(mv) => {
                        println!(
                            "{} ({}) plays {:?} (score {}, {} nodes)",
                            seat_label(turn),
                            engine.name(),
                            mv,
                            report.score,
                            report.nodes
                        );
                        mv
                    }
                    None => {
                        println!("{} has no move and resigns.", seat_label(turn));
                        return;
                    }
                }
            }
        };

        game.make_move(mv);
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || matches!(args[1].as_str(), "help" | "--help" | "-h") {
        print_usage();
        return;
    }

    let p1 = args.get(2).map(String::as_str).unwrap_or("human");
    let p2 = args.get(3).map(String::as_str).unwrap_or("minimax");

    match args[1].to_lowercase().as_str() {
        "abalone" => {
            let (Some(s1), Some(s2)) = (create_seat::<Abalone>(p1), create_seat(p2)) else {
                print_usage();
                return;
            };
            play(Abalone::startpos(), [s1, s2], input::parse_abalone_move);
        }
        "martian" => {
            let (Some(s1), Some(s2)) = (create_seat::<MartianChess>(p1), create_seat(p2)) else {
                print_usage();
                return;
            };
            play(MartianChess::startpos(), [s1, s2], |line, _| {
                input::parse_martian_move(line)
            });
        }
        _ => {
            eprintln!("Unknown game: {}", args[1]);
            print_usage();
        }
    }
}
