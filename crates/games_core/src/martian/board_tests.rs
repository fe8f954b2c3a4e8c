use super::*;
use crate::martian::movegen::possible_moves;
use crate::types::{Player, Status, Verdict};

#[test]
fn startpos_layout_and_counters() {
    let g = MartianChess::startpos();
    assert_eq!(g.turn(), Player::One);
    assert_eq!(g.round(), 0);
    assert_eq!(g.points(Player::One), 0);
    assert_eq!(g.points(Player::Two), 0);
    assert_eq!(g.piece_at(0, 0), Some(Rank::Queen));
    assert_eq!(g.piece_at(2, 0), Some(Rank::Drone));
    assert_eq!(g.piece_at(5, 1), Some(Rank::Pawn));
    assert_eq!(g.piece_at(7, 3), Some(Rank::Queen));
    assert_eq!(g.piece_at(3, 3), None);
    assert_eq!(g.status(), Status::InProgress);
}

#[test]
fn capture_awards_the_captured_rank_value() {
    let mut g = MartianChess::from_rows(
        ["....", "....", "....", "..Q.", ".P..", "....", "....", "..D."],
        Player::One,
        [0, 0],
        0,
    );
    let mv = MartianMove {
        from: (4, 1),
        to: (3, 2),
    };
    assert!(possible_moves(&g).contains(&mv));
    g.make_move(mv);
    assert_eq!(g.points(Player::One), 3);
    assert_eq!(g.points(Player::Two), 0);
    assert_eq!(g.piece_at(3, 2), Some(Rank::Pawn));
    assert_eq!(g.piece_at(4, 1), None);
    assert_eq!(g.turn(), Player::Two);
    assert_eq!(g.round(), 1);
    assert_eq!(g.last_move(), Some(mv));
    assert_eq!(g.score(Player::One), 3);
    assert_eq!(g.score(Player::Two), -3);
}

#[test]
fn quiet_moves_leave_the_points_alone() {
    let mut g = MartianChess::startpos();
    g.make_move(MartianMove {
        from: (5, 3),
        to: (3, 3),
    });
    assert_eq!(g.points(Player::One), 0);
    assert_eq!(g.points(Player::Two), 0);
}

#[test]
fn crossing_the_canal_hands_the_piece_to_the_opponent() {
    let mut g = MartianChess::startpos();
    g.make_move(MartianMove {
        from: (5, 3),
        to: (3, 3),
    });
    // The drone now sits in Two's half, and Two may move it.
    assert!(
        possible_moves(&g)
            .iter()
            .any(|m| m.from == (3, 3))
    );
}

#[test]
fn unreachable_point_lead_ends_the_game_early() {
    let g = MartianChess::from_rows(
        ["....", ".P..", "....", "....", "....", "....", "..P.", "...."],
        Player::Two,
        [10, 0],
        40,
    );
    // Two pawns remain, worth 2 points in total, against a 10 point lead.
    assert_eq!(g.status(), Status::Over(Verdict::Winner(Player::One)));
}

#[test]
fn close_scores_with_material_left_keep_playing() {
    let g = MartianChess::from_rows(
        ["....", ".P..", "....", "....", "....", "....", "..Q.", "...."],
        Player::One,
        [2, 1],
        40,
    );
    assert_eq!(g.status(), Status::InProgress);
}

#[test]
fn emptied_half_decides_by_points() {
    let g = MartianChess::from_rows(
        ["....", "....", "....", "....", "....", ".PPD", ".PDQ", ".DQQ"],
        Player::Two,
        [0, 2],
        40,
    );
    assert_eq!(g.status(), Status::Over(Verdict::Winner(Player::Two)));

    let g = MartianChess::from_rows(
        ["....", "....", "....", "....", "....", ".PPD", ".PDQ", ".DQQ"],
        Player::Two,
        [2, 2],
        40,
    );
    assert_eq!(g.status(), Status::Over(Verdict::Draw));
}

#[test]
fn round_cap_decides_by_points() {
    let rows = ["Q...", "....", "....", "....", "....", "....", "....", "...Q"];
    let g = MartianChess::from_rows(rows, Player::One, [1, 1], ROUND_CAP + 1);
    assert_eq!(g.status(), Status::Over(Verdict::Draw));

    let g = MartianChess::from_rows(rows, Player::One, [2, 1], ROUND_CAP + 1);
    assert_eq!(g.status(), Status::Over(Verdict::Winner(Player::One)));

    let g = MartianChess::from_rows(rows, Player::One, [1, 2], ROUND_CAP + 1);
    assert_eq!(g.status(), Status::Over(Verdict::Winner(Player::Two)));
}

#[test]
fn board_string_shows_grid_and_points() {
    let g = MartianChess::startpos();
    let expected = "---------\n\
                    \u{20} 0 1 2 3\n\
                    0 Q Q D . \n\
                    1 Q D P . \n\
                    2 D P P . \n\
                    3 . . . . \n\
                    4 . . . . \n\
                    5 . P P D \n\
                    6 . P D Q \n\
                    7 . D Q Q \n\
                    \u{20} 0 1 2 3\n\
                    P1: 0 P2: 0\n\
                    ---------";
    assert_eq!(g.board_string(), expected);
}
