//! Abalone: hex-grid marble pushing.
//!
//! Two players of 14 marbles each take turns sliding lines of 1-3 marbles on
//! a hexagonal board. An in-line move may push a strictly shorter opposing
//! chain, possibly off the board; a player drops to 8 marbles and loses.

pub mod board;
pub mod movegen;

pub use board::{Abalone, AbaloneMove, Cell, ELIMINATION_THRESHOLD, HEX_DIRS, ROUND_CAP, SIZE};
pub use movegen::possible_moves;

use crate::types::{Player, Status};

impl crate::Game for Abalone {
    type Move = AbaloneMove;

    fn possible_moves(&self) -> Vec<AbaloneMove> {
        movegen::possible_moves(self)
    }

    fn make_move(&mut self, mv: AbaloneMove) {
        Abalone::make_move(self, mv);
    }

    fn status(&self) -> Status {
        Abalone::status(self)
    }

    fn score(&self, player: Player) -> i32 {
        Abalone::score(self, player)
    }

    fn player_turn(&self) -> Player {
        self.turn()
    }

    fn board_string(&self) -> String {
        Abalone::board_string(self)
    }
}
