//! Random Move Engine
//!
//! A simple engine that selects moves uniformly at random from all legal
//! moves of any game. Useful for:
//! - Testing infrastructure and drivers
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation

use games_core::{Engine, Game, SearchReport};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

/// An engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves. It's the simplest possible engine
/// and serves as a baseline for testing.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl<G: Game> Engine<G> for RandomEngine {
    fn search(&mut self, game: &G, _depth: u8) -> SearchReport<G::Move> {
        self.nodes = 1;

        let moves = game.possible_moves();
        let best_move = moves.choose(&mut thread_rng()).copied();

        SearchReport {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
