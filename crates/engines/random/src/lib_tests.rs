use super::*;
use games_core::abalone::Abalone;
use games_core::martian::MartianChess;

#[test]
fn picks_a_legal_move_for_either_game() {
    let mut engine = RandomEngine::new();

    let g = Abalone::startpos();
    let report = engine.search(&g, 1);
    let mv = report.best_move.expect("start position has moves");
    assert!(g.possible_moves().contains(&mv));

    let g = MartianChess::startpos();
    let report = engine.search(&g, 1);
    let mv = report.best_move.expect("start position has moves");
    assert!(g.possible_moves().contains(&mv));
}

#[test]
fn reports_no_move_when_none_exist() {
    // A board with no marbles for the side to move is a stalemate.
    let g = Abalone::from_rows(
        [
            "    OO...",
            "   OO....",
            "  OOO....",
            " OO......",
            ".........",
            ".........",
            ".........",
            "......   ",
            ".....    ",
        ],
        games_core::Player::One,
        0,
    );
    let mut engine = RandomEngine::new();
    let report = engine.search(&g, 1);
    assert!(report.best_move.is_none());
}
