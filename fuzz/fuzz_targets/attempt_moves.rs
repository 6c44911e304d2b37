#![no_main]
use chess_rules::chess::core::{Color, Square};
use chess_rules::chess::game::{Game, MoveOutcome};
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

// Every byte pair is a candidate move given as two square indices; pairs with
// an index outside the board are skipped.
fuzz_target!(|data: &[u8]| {
    let mut game = Game::new();
    for pair in data.chunks_exact(2) {
        let (Ok(from), Ok(to)) = (Square::try_from(pair[0]), Square::try_from(pair[1]))
        else {
            continue;
        };
        let before = game.board_snapshot();
        let active = game.active_color();
        let history = game.history().len();
        match game.attempt_move(from, to) {
            MoveOutcome::Committed { snapshot, active_color, .. } => {
                assert_eq!(snapshot, game.board_snapshot());
                assert_eq!(active_color, !active);
                assert_eq!(game.history().len(), history + 1);
                assert!(!game.board().in_check(active));
            },
            MoveOutcome::Rejected(_) => {
                assert_eq!(game.board_snapshot(), before);
                assert_eq!(game.active_color(), active);
                assert_eq!(game.history().len(), history);
            },
        }
        for color in [Color::White, Color::Black] {
            assert!(game.board().king_square(color).is_some());
        }
        assert!(!game.board().kings_adjacent());
    }
});
