pub mod abalone;
pub mod martian;
pub mod perft;
pub mod types;

pub use perft::perft;
pub use types::*;

// =============================================================================
// Game trait — the rule-engine contract shared by every variant
// =============================================================================

/// Capability interface implemented independently by each game variant.
///
/// A driver (search engine, match runner, interactive frontend) plays any
/// game through this surface without knowing its rules. `make_move` mutates
/// the state in place; there is no undo, so callers exploring alternatives
/// must clone the state before branching.
pub trait Game {
    /// Move value for this variant. Carries coordinates only; applying it to
    /// a state other than the one it was generated against is a caller bug.
    type Move: Copy + Eq + std::fmt::Debug;

    /// Every legal move for the side to move. Possibly empty; an empty list
    /// is a terminal signal, not an error. Order is not part of the contract.
    fn possible_moves(&self) -> Vec<Self::Move>;

    /// Apply a move produced by `possible_moves` on this exact state.
    /// Legality is not re-checked; submitting anything else corrupts the
    /// board.
    fn make_move(&mut self, mv: Self::Move);

    /// Terminal evaluation for the current state.
    fn status(&self) -> Status;

    /// Heuristic value of the position from `player`'s perspective; positive
    /// favors the queried player.
    fn score(&self, player: Player) -> i32;

    /// The player to move.
    fn player_turn(&self) -> Player;

    /// Human-readable rendering with a coordinate legend. Presentational
    /// only; never parsed back into state.
    fn board_string(&self) -> String;
}

// =============================================================================
// Engine trait — implemented by all search engines (minimax, random, etc.)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchReport<M> {
    /// The best move found (None if no legal moves)
    pub best_move: Option<M>,
    /// Evaluation from the side to move's perspective
    pub score: i32,
    /// Nominal search depth
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Trait that all engines must implement.
///
/// This allows swapping between full-width search, random baselines, and
/// anything else that can pick a move for a [`Game`].
pub trait Engine<G: Game>: Send {
    /// Search the position up to `depth` plies and report the best move.
    fn search(&mut self, game: &G, depth: u8) -> SearchReport<G::Move>;

    /// Returns the engine's name for display
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
