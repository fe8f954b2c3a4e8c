use super::*;
use crate::types::Player;

fn board(rows: [&str; SIZE]) -> Abalone {
    Abalone::from_rows(rows, Player::One, 0)
}

const EMPTY: [&str; SIZE] = [
    "    .....",
    "   ......",
    "  .......",
    " ........",
    ".........",
    "........ ",
    ".......  ",
    "......   ",
    ".....    ",
];

fn with_cells(cells: &[((usize, usize), char)]) -> Abalone {
    let mut rows: Vec<String> = EMPTY.iter().map(|r| r.to_string()).collect();
    for &((r, c), ch) in cells {
        rows[r].replace_range(c..c + 1, &ch.to_string());
    }
    let refs: Vec<&str> = rows.iter().map(|r| r.as_str()).collect();
    Abalone::from_rows(refs.try_into().expect("nine rows"), Player::One, 0)
}

#[test]
fn lone_marble_slides_in_all_six_directions() {
    let g = with_cells(&[((4, 4), 'X')]);
    let moves = possible_moves(&g);
    assert_eq!(moves.len(), 6);
    for mv in &moves {
        assert_eq!(mv.start, (4, 4));
        assert_eq!(mv.end, (4, 4));
    }
    for (dr, dc) in HEX_DIRS {
        assert!(
            moves.iter().any(|m| m.to == (4i8 + dr, 4i8 + dc)),
            "missing slide toward ({}, {})",
            dr,
            dc
        );
    }
}

#[test]
fn pair_generates_inline_and_broadside_moves() {
    let g = with_cells(&[((4, 4), 'X'), ((4, 5), 'X')]);
    let moves = possible_moves(&g);

    // Two-marble in-line slide along the pair's own axis.
    assert!(moves.contains(&AbaloneMove {
        start: (4, 4),
        end: (4, 5),
        to: (4, 3),
    }));
    assert!(moves.contains(&AbaloneMove {
        start: (4, 5),
        end: (4, 4),
        to: (4, 6),
    }));

    // All four lateral directions show up as broadside moves, each generated
    // from one end of the pair.
    assert!(moves.contains(&AbaloneMove {
        start: (4, 4),
        end: (4, 5),
        to: (3, 4),
    }));
    assert!(moves.contains(&AbaloneMove {
        start: (4, 4),
        end: (4, 5),
        to: (5, 3),
    }));
    assert!(moves.contains(&AbaloneMove {
        start: (4, 5),
        end: (4, 4),
        to: (3, 6),
    }));
    assert!(moves.contains(&AbaloneMove {
        start: (4, 5),
        end: (4, 4),
        to: (5, 5),
    }));

    // 5 slide directions per marble (one blocked by the partner), plus the
    // extra tail-length variant along the shared axis, plus 4 broadsides.
    assert_eq!(moves.len(), 16);
}

#[test]
fn two_against_one_push_is_offered() {
    let g = with_cells(&[((4, 3), 'X'), ((4, 4), 'X'), ((4, 5), 'O')]);
    let moves = possible_moves(&g);
    assert!(moves.contains(&AbaloneMove {
        start: (4, 4),
        end: (4, 3),
        to: (4, 5),
    }));
    // A lone marble never pushes.
    assert!(!moves.contains(&AbaloneMove {
        start: (4, 4),
        end: (4, 4),
        to: (4, 5),
    }));
}

#[test]
fn equal_chains_cannot_push() {
    let g = with_cells(&[((4, 3), 'X'), ((4, 4), 'X'), ((4, 5), 'O'), ((4, 6), 'O')]);
    let moves = possible_moves(&g);
    assert!(!moves.iter().any(|m| m.to == (4, 5)));
}

#[test]
fn three_against_two_push_is_offered() {
    let g = with_cells(&[
        ((4, 2), 'X'),
        ((4, 3), 'X'),
        ((4, 4), 'X'),
        ((4, 5), 'O'),
        ((4, 6), 'O'),
    ]);
    let moves = possible_moves(&g);
    assert!(moves.contains(&AbaloneMove {
        start: (4, 4),
        end: (4, 2),
        to: (4, 5),
    }));
    // Two attackers cannot push two defenders.
    assert!(!moves.contains(&AbaloneMove {
        start: (4, 4),
        end: (4, 3),
        to: (4, 5),
    }));
}

#[test]
fn push_blocked_by_marble_behind_the_chain() {
    // An own marble directly behind the opposing chain pins everything.
    let g = with_cells(&[((4, 3), 'X'), ((4, 4), 'X'), ((4, 5), 'O'), ((4, 6), 'X')]);
    let moves = possible_moves(&g);
    assert!(!moves.iter().any(|m| m.to == (4, 5)));
}

#[test]
fn push_off_the_board_edge_is_offered() {
    let g = with_cells(&[((4, 6), 'X'), ((4, 7), 'X'), ((4, 8), 'O')]);
    let moves = possible_moves(&g);
    assert!(moves.contains(&AbaloneMove {
        start: (4, 7),
        end: (4, 6),
        to: (4, 8),
    }));
}

#[test]
fn broadside_requires_every_destination_empty() {
    // Lead marble's lateral destination blocked.
    let g = with_cells(&[((4, 4), 'X'), ((4, 5), 'X'), ((3, 4), 'O')]);
    let moves = possible_moves(&g);
    assert!(!moves.contains(&AbaloneMove {
        start: (4, 4),
        end: (4, 5),
        to: (3, 4),
    }));

    // Partner marble's lateral destination blocked; the pair must not step
    // up even though the lead's own destination is free.
    let g = with_cells(&[((4, 4), 'X'), ((4, 5), 'X'), ((3, 5), 'O')]);
    let moves = possible_moves(&g);
    assert!(!moves.contains(&AbaloneMove {
        start: (4, 4),
        end: (4, 5),
        to: (3, 4),
    }));
}

#[test]
fn broadside_never_pushes() {
    // A full opposing pair alongside: no lateral capture exists, and the
    // unbacked in-line attempts fail the majority rule, so nothing may
    // target the occupied cells at all.
    let g = with_cells(&[((4, 4), 'X'), ((4, 5), 'X'), ((3, 4), 'O'), ((3, 5), 'O')]);
    let moves = possible_moves(&g);
    assert!(!moves.iter().any(|m| m.to == (3, 4) || m.to == (3, 5)));
}

#[test]
fn all_generated_coordinates_are_playable() {
    let g = board([
        "    OO...",
        "   OO....",
        "  OOO....",
        " OOO....X",
        "OOO...XXX",
        "O....XXX ",
        "....XXX  ",
        "....XX   ",
        "...XX    ",
    ]);
    for mv in possible_moves(&g) {
        assert!(g.is_inside(mv.start.0, mv.start.1), "{:?}", mv);
        assert!(g.is_inside(mv.end.0, mv.end.1), "{:?}", mv);
        assert!(g.is_inside(mv.to.0, mv.to.1), "{:?}", mv);
    }
}
