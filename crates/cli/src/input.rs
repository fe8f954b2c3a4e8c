//! Parsing of human coordinate input.
//!
//! Moves are typed as whitespace-separated "row,col" pairs. Abalone takes
//! three pairs (chain start, chain end, destination of the start marble) in
//! the human labeling printed next to the board; Martian Chess takes two
//! (from, to) in plain array coordinates.

use games_core::abalone::{Abalone, AbaloneMove};
use games_core::martian::{self, MartianMove};

/// Parses a single "row,col" pair.
pub fn parse_pair(s: &str) -> Result<(i8, i8), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected row,col but got '{}'", s))?;
    let row: i8 = row
        .trim()
        .parse()
        .map_err(|_| format!("bad row in '{}'", s))?;
    let col: i8 = col
        .trim()
        .parse()
        .map_err(|_| format!("bad col in '{}'", s))?;
    Ok((row, col))
}

fn pairs(line: &str, want: usize) -> Result<Vec<(i8, i8)>, String> {
    let parsed: Result<Vec<_>, _> = line.split_whitespace().map(parse_pair).collect();
    let parsed = parsed?;
    if parsed.len() != want {
        return Err(format!(
            "expected {} coordinate pairs, got {}",
            want,
            parsed.len()
        ));
    }
    Ok(parsed)
}

/// Parses an Abalone move from human coordinates, checking every cell lands
/// on the playable hexagon before a move is built from it.
pub fn parse_abalone_move(line: &str, game: &Abalone) -> Result<AbaloneMove, String> {
    let spots = pairs(line, 3)?;
    let mut internal = [(0i8, 0i8); 3];
    for (i, &(row, col)) in spots.iter().enumerate() {
        let (r, c) = Abalone::to_internal(row, col);
        if !game.is_inside(r, c) {
            return Err(format!("{},{} is off the board", row, col));
        }
        internal[i] = (r, c);
    }
    Ok(AbaloneMove {
        start: internal[0],
        end: internal[1],
        to: internal[2],
    })
}

/// Parses a Martian Chess move, checking both squares are on the board.
pub fn parse_martian_move(line: &str) -> Result<MartianMove, String> {
    let spots = pairs(line, 2)?;
    for &(r, c) in &spots {
        if !martian::is_inside(r, c) {
            return Err(format!("{},{} is off the board", r, c));
        }
    }
    Ok(MartianMove {
        from: spots[0],
        to: spots[1],
    })
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;
