//! Martian Chess: orthogonal-grid capture scoring.
//!
//! Played on an 8x4 board split by a canal. Pieces are unowned; each player
//! moves whatever sits in their half and scores the rank value of anything
//! they capture. The game ends when a half empties, when the point lead
//! exceeds all material left, or at the round cap.

pub mod board;
pub mod movegen;

pub use board::{COLS, MartianChess, MartianMove, ROUND_CAP, ROWS, Rank, home_rows, in_home, is_inside};
pub use movegen::possible_moves;

use crate::types::{Player, Status};

impl crate::Game for MartianChess {
    type Move = MartianMove;

    fn possible_moves(&self) -> Vec<MartianMove> {
        movegen::possible_moves(self)
    }

    fn make_move(&mut self, mv: MartianMove) {
        MartianChess::make_move(self, mv);
    }

    fn status(&self) -> Status {
        MartianChess::status(self)
    }

    fn score(&self, player: Player) -> i32 {
        MartianChess::score(self, player)
    }

    fn player_turn(&self) -> Player {
        self.turn()
    }

    fn board_string(&self) -> String {
        MartianChess::board_string(self)
    }
}
