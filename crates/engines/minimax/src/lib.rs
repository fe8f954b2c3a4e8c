//! Minimax Engine
//!
//! Negamax search with alpha-beta pruning over the shared `Game` contract,
//! using each game's own position score as the leaf evaluation.

mod search;

use games_core::{Engine, Game, SearchReport};

pub use search::{WIN_SCORE, pick_best_move};

/// Full-width alpha-beta engine for any [`Game`].
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl<G: Game + Clone> Engine<G> for MinimaxEngine {
    fn search(&mut self, game: &G, depth: u8) -> SearchReport<G::Move> {
        self.nodes = 0;

        let outcome = search::pick_best_move(game, depth, &mut self.nodes);

        SearchReport {
            best_move: outcome.map(|(mv, _)| mv),
            score: outcome.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
