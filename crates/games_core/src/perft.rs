use crate::Game;

/// Pure node count: the number of move sequences of length `depth` playable
/// from this position. Branches on cloned states because the engines provide
/// no undo; sibling branches must never share a mutated state.
pub fn perft<G: Game + Clone>(game: &G, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0u64;
    for mv in game.possible_moves() {
        let mut child = game.clone();
        child.make_move(mv);
        nodes += perft(&child, depth - 1);
    }
    nodes
}
