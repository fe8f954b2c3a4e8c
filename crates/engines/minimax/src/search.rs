//! Negamax search with alpha-beta pruning.
//!
//! The engines expose no undo, so every branch explores a cloned state;
//! sibling branches never see each other's mutations.

use games_core::{Game, Status, Verdict};

/// Score assigned to a position the side to move has already won.
pub const WIN_SCORE: i32 = 100_000;

/// Searches the position and returns the best move with its score.
///
/// Returns `None` when the side to move has no legal moves.
pub fn pick_best_move<G: Game + Clone>(
    game: &G,
    depth: u8,
    nodes: &mut u64,
) -> Option<(G::Move, i32)> {
    let moves = game.possible_moves();
    if moves.is_empty() {
        return None;
    }

    let mut best = moves[0];
    let mut best_score = i32::MIN + 1;

    for mv in moves {
        let mut child = game.clone();
        child.make_move(mv);
        *nodes += 1;

        let score = -negamax(&child, depth.saturating_sub(1), i32::MIN / 2, i32::MAX / 2, nodes);

        if score > best_score {
            best_score = score;
            best = mv;
        }
    }

    Some((best, best_score))
}

/// Recursive negamax, always scoring from the perspective of the side to
/// move at the node.
fn negamax<G: Game + Clone>(game: &G, depth: u8, mut alpha: i32, beta: i32, nodes: &mut u64) -> i32 {
    match game.status() {
        Status::Over(Verdict::Draw) => return 0,
        Status::Over(Verdict::Winner(p)) => {
            return if p == game.player_turn() {
                WIN_SCORE
            } else {
                -WIN_SCORE
            };
        }
        Status::InProgress => {}
    }

    if depth == 0 {
        return game.score(game.player_turn());
    }

    let moves = game.possible_moves();
    if moves.is_empty() {
        // Can happen in Martian Chess when the anti-oscillation rule
        // suppresses the only move; fall back to the static evaluation.
        return game.score(game.player_turn());
    }

    let mut best = i32::MIN + 1;
    for mv in moves {
        let mut child = game.clone();
        child.make_move(mv);
        *nodes += 1;

        let score = -negamax(&child, depth - 1, -beta, -alpha, nodes);

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
