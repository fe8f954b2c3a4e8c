use super::board::{COLS, MartianChess, MartianMove, Rank, home_rows, in_home, is_inside};
use crate::types::Player;

const DIAG: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ORTHO: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const QUEEN: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// All legal moves for the side to move, minus the exact inverse of the
/// previous ply (the anti-oscillation rule — nothing deeper than one move of
/// memory is checked).
pub fn possible_moves(g: &MartianChess) -> Vec<MartianMove> {
    let mover = g.turn();
    let mut moves = Vec::with_capacity(32);
    for r in home_rows(mover) {
        for c in 0..COLS as i8 {
            match g.piece_at(r, c) {
                Some(Rank::Pawn) => {
                    for (dr, dc) in DIAG {
                        pawn_moves(g, mover, r, c, dr, dc, &mut moves);
                    }
                }
                Some(Rank::Drone) => {
                    for (dr, dc) in ORTHO {
                        drone_moves(g, mover, r, c, dr, dc, &mut moves);
                    }
                }
                Some(Rank::Queen) => {
                    for (dr, dc) in QUEEN {
                        queen_moves(g, mover, r, c, dr, dc, &mut moves);
                    }
                }
                None => {}
            }
        }
    }

    if let Some(last) = g.last_move() {
        moves.retain(|m| !(m.from == last.to && m.to == last.from));
    }
    moves
}

/// Occupied destinations are legal only outside the mover's half: captures
/// never land in the mover's own rows. (Every piece outside the mover's half
/// is the opponent's, ownership being positional.)
fn dest_ok(g: &MartianChess, mover: Player, r: i8, c: i8) -> bool {
    g.piece_at(r, c).is_none() || !in_home(mover, r)
}

/// One step along a diagonal.
fn pawn_moves(
    g: &MartianChess,
    mover: Player,
    r: i8,
    c: i8,
    dr: i8,
    dc: i8,
    out: &mut Vec<MartianMove>,
) {
    let (er, ec) = (r + dr, c + dc);
    if is_inside(er, ec) && dest_ok(g, mover, er, ec) {
        out.push(MartianMove {
            from: (r, c),
            to: (er, ec),
        });
    }
}

/// One step along an orthogonal, or two when the first cell is empty.
fn drone_moves(
    g: &MartianChess,
    mover: Player,
    r: i8,
    c: i8,
    dr: i8,
    dc: i8,
    out: &mut Vec<MartianMove>,
) {
    let (er, ec) = (r + dr, c + dc);
    if !is_inside(er, ec) {
        return;
    }
    if dest_ok(g, mover, er, ec) {
        out.push(MartianMove {
            from: (r, c),
            to: (er, ec),
        });
    }
    if g.piece_at(er, ec).is_none() {
        let (er2, ec2) = (r + 2 * dr, c + 2 * dc);
        if is_inside(er2, ec2) && dest_ok(g, mover, er2, ec2) {
            out.push(MartianMove {
                from: (r, c),
                to: (er2, ec2),
            });
        }
    }
}

/// Slides through empties in all eight directions; may land on the first
/// obstruction when it sits outside the mover's half.
fn queen_moves(
    g: &MartianChess,
    mover: Player,
    r: i8,
    c: i8,
    dr: i8,
    dc: i8,
    out: &mut Vec<MartianMove>,
) {
    let (mut er, mut ec) = (r + dr, c + dc);
    while is_inside(er, ec) && g.piece_at(er, ec).is_none() {
        out.push(MartianMove {
            from: (r, c),
            to: (er, ec),
        });
        er += dr;
        ec += dc;
    }
    if is_inside(er, ec) && !in_home(mover, er) {
        out.push(MartianMove {
            from: (r, c),
            to: (er, ec),
        });
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
