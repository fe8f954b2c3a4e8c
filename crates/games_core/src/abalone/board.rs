use crate::types::{Player, Status, Verdict};

/// Side length of the square array the hexagonal board is embedded in.
pub const SIZE: usize = 9;

/// The six hex neighbor offsets in (row, col) space.
pub const HEX_DIRS: [(i8, i8); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// Losing threshold: a player with this many marbles or fewer has lost.
pub const ELIMINATION_THRESHOLD: u32 = 8;

/// Draw is declared once the round counter passes this cap.
pub const ROUND_CAP: u32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Array padding outside the hexagonal playing area.
    Void,
    Empty,
    Marble(Player),
}

impl Cell {
    fn glyph(self) -> char {
        match self {
            Cell::Void => ' ',
            Cell::Empty => '.',
            Cell::Marble(Player::One) => 'X',
            Cell::Marble(Player::Two) => 'O',
        }
    }
}

/// One Abalone ply.
///
/// `start` and `end` span the line of 1-3 own marbles that moves (equal for a
/// single marble); `to` is the cell the `start` marble moves to, which fixes
/// the movement direction. Start/end/to together distinguish in-line moves
/// (where `to - start` equals the line axis) from broadside steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbaloneMove {
    pub start: (i8, i8),
    pub end: (i8, i8),
    pub to: (i8, i8),
}

#[derive(Clone, Debug)]
pub struct Abalone {
    board: [[Cell; SIZE]; SIZE],
    turn: Player,
    round: u32,
}

impl Abalone {
    pub fn startpos() -> Self {
        Self::from_rows(
            [
                "    OO...",
                "   OO....",
                "  OOO....",
                " OOO....X",
                "OOO...XXX",
                "O....XXX ",
                "....XXX  ",
                "....XX   ",
                "...XX    ",
            ],
            Player::One,
            0,
        )
    }

    /// Build a position from nine rows of the rendering alphabet
    /// (` ` void, `.` empty, `X` player one, `O` player two).
    /// Used by tests and tools; panics on malformed input.
    pub fn from_rows(rows: [&str; SIZE], turn: Player, round: u32) -> Self {
        let mut board = [[Cell::Void; SIZE]; SIZE];
        for (r, row) in rows.iter().enumerate() {
            assert!(row.len() == SIZE, "Abalone row {} must have {} cells", r, SIZE);
            for (c, ch) in row.chars().enumerate() {
                board[r][c] = match ch {
                    ' ' => Cell::Void,
                    '.' => Cell::Empty,
                    'X' => Cell::Marble(Player::One),
                    'O' => Cell::Marble(Player::Two),
                    _ => panic!("Invalid cell char in Abalone board: {:?}", ch),
                };
            }
        }
        Abalone { board, turn, round }
    }

    /// Cell contents with off-array coordinates reading as `Void`, so the
    /// board edge and the hexagon padding behave identically.
    pub fn cell(&self, r: i8, c: i8) -> Cell {
        if (0..SIZE as i8).contains(&r) && (0..SIZE as i8).contains(&c) {
            self.board[r as usize][c as usize]
        } else {
            Cell::Void
        }
    }

    fn set(&mut self, r: i8, c: i8, cell: Cell) {
        self.board[r as usize][c as usize] = cell;
    }

    /// True iff the coordinates land on a playable cell of the hexagon.
    pub fn is_inside(&self, r: i8, c: i8) -> bool {
        self.cell(r, c) != Cell::Void
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Map the human-facing (row, col) labeling — rows along the lower-left
    /// edge, columns along the diagonal — onto array coordinates.
    pub fn to_internal(row: i8, col: i8) -> (i8, i8) {
        let r = SIZE as i8 - col - 1;
        let c = row + (SIZE as i8 / 2 - r);
        (r, c)
    }

    /// Inverse of [`to_internal`](Self::to_internal).
    pub fn to_human(r: i8, c: i8) -> (i8, i8) {
        let col = SIZE as i8 - r - 1;
        let row = c - (SIZE as i8 / 2 - r);
        (row, col)
    }

    fn dist_in_dir(&self, r: i8, c: i8, dr: i8, dc: i8) -> u32 {
        let (mut cr, mut cc) = (r, c);
        let mut dist = 0;
        while self.is_inside(cr, cc) {
            cr += dr;
            cc += dc;
            dist += 1;
        }
        dist
    }

    /// Minimum number of cells (start inclusive) to leave the board in any of
    /// the six directions. Measures centrality for heuristics.
    pub fn edge_distance(&self, r: i8, c: i8) -> u32 {
        HEX_DIRS
            .iter()
            .map(|&(dr, dc)| self.dist_in_dir(r, c, dr, dc))
            .min()
            .expect("direction table is non-empty")
    }

    pub fn marbles(&self, p: Player) -> u32 {
        let mut n = 0;
        for row in &self.board {
            for &cell in row {
                if cell == Cell::Marble(p) {
                    n += 1;
                }
            }
        }
        n
    }

    /// Apply a generator-produced move. Walks the moving line off the board
    /// into a buffer, re-places it one step along the movement direction, and
    /// resolves any displaced opposing marble (relocated past its own chain,
    /// or eliminated if the scan leaves the board).
    pub fn make_move(&mut self, mv: AbaloneMove) {
        self.round += 1;

        let line_dr = (mv.end.0 - mv.start.0).signum();
        let line_dc = (mv.end.1 - mv.start.1).signum();

        let mut moving = Vec::with_capacity(3);
        let (mut cr, mut cc) = mv.start;
        loop {
            moving.push(self.cell(cr, cc));
            self.set(cr, cc, Cell::Empty);
            if (cr, cc) == mv.end {
                break;
            }
            cr += line_dr;
            cc += line_dc;
        }

        let displaced = self.cell(mv.to.0, mv.to.1);
        let (mut cr, mut cc) = mv.to;
        for marble in moving {
            self.set(cr, cc, marble);
            cr += line_dr;
            cc += line_dc;
        }

        self.turn = self.turn.other();

        if let Cell::Marble(owner) = displaced {
            // A push: carry the displaced marble along the push direction to
            // the first cell past the opposing chain. Leaving the playable
            // region eliminates it.
            let push_dr = (mv.to.0 - mv.start.0).signum();
            let push_dc = (mv.to.1 - mv.start.1).signum();
            let (mut cr, mut cc) = (mv.to.0 + push_dr, mv.to.1 + push_dc);
            while matches!(self.cell(cr, cc), Cell::Marble(_)) {
                cr += push_dr;
                cc += push_dc;
            }
            if self.cell(cr, cc) == Cell::Empty {
                self.set(cr, cc, Cell::Marble(owner));
            }
        }
    }

    /// Terminal evaluation: round cap, then stalemate, then the marble
    /// elimination threshold.
    pub fn status(&self) -> Status {
        if self.round > ROUND_CAP {
            return Status::Over(Verdict::Draw);
        }
        if super::movegen::possible_moves(self).is_empty() {
            return Status::Over(Verdict::Draw);
        }
        if self.marbles(Player::One) <= ELIMINATION_THRESHOLD {
            return Status::Over(Verdict::Winner(Player::Two));
        }
        if self.marbles(Player::Two) <= ELIMINATION_THRESHOLD {
            return Status::Over(Verdict::Winner(Player::One));
        }
        Status::InProgress
    }

    /// Material differential from `p`'s perspective.
    pub fn score(&self, p: Player) -> i32 {
        self.marbles(p) as i32 - self.marbles(p.other()) as i32
    }

    /// Render the hexagon the way it sits in play: diagonals of the array
    /// become rows, with the human row labels down the left edge and the
    /// wrapped column labels on the lower-right.
    pub fn board_string(&self) -> String {
        let mut s = String::from("----------------------\n");
        let mut row_label = 0;

        let mut start_row = 0usize;
        let mut buffer = 0usize;
        while self.board[start_row][0] == Cell::Void {
            start_row += 1;
            buffer += 1;
        }
        while start_row < SIZE {
            for _ in 0..buffer {
                s.push(' ');
            }
            buffer = buffer.saturating_sub(1);
            s.push_str(&format!("{} ", row_label));
            row_label += 1;
            let (mut cr, mut cc) = (start_row as i8, 0i8);
            while cr >= 0 && cc < SIZE as i8 {
                s.push(self.board[cr as usize][cc as usize].glyph());
                s.push(' ');
                cr -= 1;
                cc += 1;
            }
            start_row += 1;
            s.push('\n');
        }

        let mut start_col = 1usize;
        let mut buffer = 1usize;
        while self.board[SIZE - 1][start_col] != Cell::Void {
            for _ in 0..buffer {
                s.push(' ');
            }
            buffer += 1;
            s.push_str(&format!("{} ", row_label));
            row_label += 1;
            let (mut cr, mut cc) = ((SIZE - 1) as i8, start_col as i8);
            while cr >= 0 && cc < SIZE as i8 {
                s.push(self.board[cr as usize][cc as usize].glyph());
                s.push(' ');
                cr -= 1;
                cc += 1;
            }
            s.push_str(&format!("{}", SIZE - start_col));
            start_col += 1;
            s.push('\n');
        }

        s.push_str("       0 1 2 3 4\n");
        s.push_str("--------------------\n");
        s
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
