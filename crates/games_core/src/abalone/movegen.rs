use super::board::{Abalone, AbaloneMove, Cell, HEX_DIRS, SIZE};

/// Steps a direction component through the cycle -1 -> 0 -> 1 -> -1.
/// Applying it to both components of a hex direction yields the next
/// direction considered a lateral axis for broadside moves; applying it
/// twice yields the other one.
fn cycle(d: i8) -> i8 {
    if d + 1 >= 2 { -1 } else { d + 1 }
}

/// All legal moves for the side to move. Pure function of the position.
pub fn possible_moves(g: &Abalone) -> Vec<AbaloneMove> {
    let me = Cell::Marble(g.turn());
    let mut out = Vec::with_capacity(64);
    for r in 0..SIZE as i8 {
        for c in 0..SIZE as i8 {
            if g.cell(r, c) != me {
                continue;
            }
            for &(dr, dc) in &HEX_DIRS {
                inline_moves(g, r, c, dr, dc, &mut out);
            }
            for &(dr, dc) in &HEX_DIRS {
                broadside_moves(g, r, c, dr, dc, &mut out);
            }
        }
    }
    out
}

/// In-line moves with (r, c) as the lead marble and (dr, dc) the direction
/// of travel: simple slides into an empty cell, and pushes of a shorter
/// opposing chain. One move is emitted per legal trailing-line length.
fn inline_moves(g: &Abalone, r: i8, c: i8, dr: i8, dc: i8, out: &mut Vec<AbaloneMove>) {
    let me = Cell::Marble(g.turn());
    let foe = Cell::Marble(g.turn().other());

    let ahead = g.cell(r + dr, c + dc);
    if ahead != Cell::Empty && ahead != foe {
        return;
    }

    // Own marbles lined up directly behind the lead.
    let mut backing: i8 = 0;
    let (mut cr, mut cc) = (r - dr, c - dc);
    while g.cell(cr, cc) == me {
        backing += 1;
        cr -= dr;
        cc -= dc;
    }

    // Opposing chain directly ahead.
    let mut attacking: i8 = 0;
    let (mut cr, mut cc) = (r + dr, c + dc);
    while g.cell(cr, cc) == foe {
        attacking += 1;
        cr += dr;
        cc += dc;
    }
    // An own marble right behind the opposing chain pins it in place.
    if g.cell(cr, cc) == me {
        return;
    }

    // A push needs strictly more marbles than it displaces, and at most
    // three may move, so only two trailing marbles ever count.
    let mut p = backing.min(2);
    while p >= attacking {
        out.push(AbaloneMove {
            start: (r, c),
            end: (r - p * dr, c - p * dc),
            to: (r + dr, c + dc),
        });
        p -= 1;
    }
}

/// Broadside (side-step) moves of a 2- or 3-marble line anchored at (r, c),
/// travelling one cell along (dr, dc). The line extends along each of the two
/// lateral axes for that direction, and every swept cell must be empty —
/// broadside moves never push.
fn broadside_moves(g: &Abalone, r: i8, c: i8, dr: i8, dc: i8, out: &mut Vec<AbaloneMove>) {
    let me = Cell::Marble(g.turn());
    if g.cell(r + dr, c + dc) != Cell::Empty {
        return;
    }

    let (mut br, mut bc) = (cycle(dr), cycle(dc));
    for _ in 0..2 {
        if g.cell(r + br, c + bc) == me && g.cell(r + br + dr, c + bc + dc) == Cell::Empty {
            out.push(AbaloneMove {
                start: (r, c),
                end: (r + br, c + bc),
                to: (r + dr, c + dc),
            });
            if g.cell(r + 2 * br, c + 2 * bc) == me
                && g.cell(r + 2 * br + dr, c + 2 * bc + dc) == Cell::Empty
            {
                out.push(AbaloneMove {
                    start: (r, c),
                    end: (r + 2 * br, c + 2 * bc),
                    to: (r + dr, c + dc),
                });
            }
        }
        br = cycle(br);
        bc = cycle(bc);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
