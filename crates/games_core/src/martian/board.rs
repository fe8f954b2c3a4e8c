use crate::types::{Player, Status, Verdict};

pub const ROWS: usize = 8;
pub const COLS: usize = 4;

/// Winner is decided by points once the round counter passes this cap.
pub const ROUND_CAP: u32 = 500;

/// Piece ranks, worth their point value when captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rank {
    Pawn,
    Drone,
    Queen,
}

impl Rank {
    pub fn value(self) -> i32 {
        match self {
            Rank::Pawn => 1,
            Rank::Drone => 2,
            Rank::Queen => 3,
        }
    }

    fn glyph(self) -> char {
        match self {
            Rank::Pawn => 'P',
            Rank::Drone => 'D',
            Rank::Queen => 'Q',
        }
    }
}

/// One Martian Chess ply: a single piece relocation, a capture when the
/// destination is occupied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MartianMove {
    pub from: (i8, i8),
    pub to: (i8, i8),
}

/// Pieces carry no color: each player controls whatever currently sits in
/// their half of the board (Player One rows 4-7, Player Two rows 0-3), and a
/// piece moved across the canal belongs to the opponent from then on.
#[derive(Clone, Debug)]
pub struct MartianChess {
    board: [[Option<Rank>; COLS]; ROWS],
    turn: Player,
    points: [i32; 2],
    last_move: Option<MartianMove>,
    round: u32,
}

/// The rows making up `p`'s half of the board.
pub fn home_rows(p: Player) -> std::ops::Range<i8> {
    match p {
        Player::One => 4..ROWS as i8,
        Player::Two => 0..ROWS as i8 / 2,
    }
}

pub fn in_home(p: Player, row: i8) -> bool {
    home_rows(p).contains(&row)
}

pub fn is_inside(r: i8, c: i8) -> bool {
    (0..ROWS as i8).contains(&r) && (0..COLS as i8).contains(&c)
}

impl MartianChess {
    pub fn startpos() -> Self {
        Self::from_rows(
            ["QQD.", "QDP.", "DPP.", "....", "....", ".PPD", ".PDQ", ".DQQ"],
            Player::One,
            [0, 0],
            0,
        )
    }

    /// Build a position from eight rows of the rendering alphabet
    /// (`.` empty, `P`/`D`/`Q` pieces). Used by tests and tools; panics on
    /// malformed input.
    pub fn from_rows(rows: [&str; ROWS], turn: Player, points: [i32; 2], round: u32) -> Self {
        let mut board = [[None; COLS]; ROWS];
        for (r, row) in rows.iter().enumerate() {
            assert!(row.len() == COLS, "Martian Chess row {} must have {} cells", r, COLS);
            for (c, ch) in row.chars().enumerate() {
                board[r][c] = match ch {
                    '.' => None,
                    'P' => Some(Rank::Pawn),
                    'D' => Some(Rank::Drone),
                    'Q' => Some(Rank::Queen),
                    _ => panic!("Invalid cell char in Martian Chess board: {:?}", ch),
                };
            }
        }
        MartianChess {
            board,
            turn,
            points,
            last_move: None,
            round,
        }
    }

    pub fn piece_at(&self, r: i8, c: i8) -> Option<Rank> {
        self.board[r as usize][c as usize]
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn points(&self, p: Player) -> i32 {
        self.points[p.idx()]
    }

    pub fn last_move(&self) -> Option<MartianMove> {
        self.last_move
    }

    /// Apply a generator-produced move: credit the mover with the captured
    /// rank's value (if any), relocate the piece, and remember the move so
    /// the next ply can suppress its exact inverse.
    pub fn make_move(&mut self, mv: MartianMove) {
        self.round += 1;
        if let Some(captured) = self.piece_at(mv.to.0, mv.to.1) {
            self.points[self.turn.idx()] += captured.value();
        }
        self.board[mv.to.0 as usize][mv.to.1 as usize] =
            self.board[mv.from.0 as usize][mv.from.1 as usize];
        self.board[mv.from.0 as usize][mv.from.1 as usize] = None;
        self.turn = self.turn.other();
        self.last_move = Some(mv);
    }

    fn decide_by_points(&self) -> Status {
        let (p1, p2) = (self.points[0], self.points[1]);
        if p1 == p2 {
            Status::Over(Verdict::Draw)
        } else if p1 > p2 {
            Status::Over(Verdict::Winner(Player::One))
        } else {
            Status::Over(Verdict::Winner(Player::Two))
        }
    }

    /// Terminal evaluation: the round cap, then a point lead no remaining
    /// material can overturn, then an emptied half. All three decide by
    /// points.
    pub fn status(&self) -> Status {
        if self.round > ROUND_CAP {
            return self.decide_by_points();
        }

        let mut points_left = 0;
        let mut one_alive = false;
        let mut two_alive = false;
        for r in 0..ROWS as i8 {
            for c in 0..COLS as i8 {
                if let Some(rank) = self.piece_at(r, c) {
                    points_left += rank.value();
                    if in_home(Player::One, r) {
                        one_alive = true;
                    } else {
                        two_alive = true;
                    }
                }
            }
        }

        let difference = (self.points[0] - self.points[1]).abs();
        if difference > points_left {
            // Mathematically decided: the trailing side cannot catch up even
            // by capturing everything still on the board.
            return self.decide_by_points();
        }
        if one_alive && two_alive {
            Status::InProgress
        } else {
            self.decide_by_points()
        }
    }

    /// Point differential from `p`'s perspective.
    pub fn score(&self, p: Player) -> i32 {
        self.points[p.idx()] - self.points[p.other().idx()]
    }

    pub fn board_string(&self) -> String {
        let mut s = String::from("---------\n");
        s.push_str("  0 1 2 3\n");
        for (r, row) in self.board.iter().enumerate() {
            s.push_str(&format!("{} ", r));
            for cell in row {
                s.push(cell.map_or('.', Rank::glyph));
                s.push(' ');
            }
            s.push('\n');
        }
        s.push_str("  0 1 2 3\n");
        s.push_str(&format!("P1: {} P2: {}\n", self.points[0], self.points[1]));
        s.push_str("---------");
        s
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
