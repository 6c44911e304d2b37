use chess_rules::chess::board::Board;
use chess_rules::chess::core::{CastleSide, Color, Direction, Piece, PieceKind, Square};
use chess_rules::chess::rules;
use pretty_assertions::assert_eq;

const KINDS: [PieceKind; 6] = [
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Pawn,
];

fn piece(symbol: char) -> Piece {
    Piece::try_from(symbol).expect("valid piece symbol")
}

fn reachable(piece: Piece, from: Square, board: &Board) -> Vec<Square> {
    Square::iter()
        .filter(|to| rules::legal(piece, from, *to, board))
        .collect()
}

#[test]
fn own_pieces_are_never_captured() {
    for color in [Color::White, Color::Black] {
        for kind in KINDS {
            let mover = Piece::new(color, kind);
            for from in Square::iter() {
                let mut board = Board::empty();
                for to in Square::iter().filter(|to| *to != from) {
                    board.put(to, Piece::new(color, PieceKind::Knight));
                }
                assert!(reachable(mover, from, &board).is_empty(), "{mover} on {from}");
            }
        }
    }
}

#[test]
fn sliders_stop_at_first_occupant() {
    for symbol in ['R', 'B', 'Q', 'r', 'b', 'q'] {
        let slider = piece(symbol);
        let from = Square::D4;
        for direction in [
            Direction::Up,
            Direction::UpRight,
            Direction::Right,
            Direction::DownRight,
            Direction::Down,
            Direction::DownLeft,
            Direction::Left,
            Direction::UpLeft,
        ] {
            let ray: Vec<Square> =
                std::iter::successors(from.shift(direction), |square| square.shift(direction))
                    .collect();
            let on_line = rules::legal(slider, from, ray[0], &Board::empty());
            for (blocker, blocked_at) in ray.iter().enumerate() {
                let mut board = Board::empty();
                board.put(*blocked_at, Piece::new(!slider.color, PieceKind::Pawn));
                for (distance, target) in ray.iter().enumerate() {
                    assert_eq!(
                        rules::legal(slider, from, *target, &board),
                        on_line && distance <= blocker,
                        "{slider} {from}->{target}, blocker on {blocked_at}"
                    );
                }
            }
        }
    }
}

#[test]
fn jumpers_ignore_surrounding_pieces() {
    let mut crowded = Board::empty();
    for square in [
        Square::C3,
        Square::C4,
        Square::C5,
        Square::D3,
        Square::D5,
        Square::E3,
        Square::E4,
        Square::E5,
    ] {
        crowded.put(square, piece('p'));
    }
    for symbol in ['N', 'n'] {
        assert_eq!(
            reachable(piece(symbol), Square::D4, &crowded),
            reachable(piece(symbol), Square::D4, &Board::empty())
        );
    }
    // The king captures the neighbours instead of moving to empty squares.
    assert_eq!(
        reachable(piece('K'), Square::D4, &crowded),
        reachable(piece('K'), Square::D4, &Board::empty())
    );
    assert!(reachable(piece('k'), Square::D4, &crowded).is_empty());
}

#[test]
fn pawn_advances() {
    for (pawn, start, one, two) in [
        (piece('P'), Square::C2, Square::C3, Square::C4),
        (piece('p'), Square::F7, Square::F6, Square::F5),
    ] {
        let mut board = Board::empty();
        assert_eq!(reachable(pawn, start, &board), {
            let mut expected = vec![one, two];
            expected.sort();
            expected
        });
        board.put(two, piece('N'));
        assert_eq!(reachable(pawn, start, &board), vec![one]);
        board.clear(two);
        board.put(one, piece('n'));
        assert!(reachable(pawn, start, &board).is_empty());
    }
}

#[test]
fn pawn_diagonals_need_opponent() {
    let mut board = Board::empty();
    assert!(!rules::legal(piece('P'), Square::D4, Square::C5, &board));
    assert!(!rules::legal(piece('P'), Square::D4, Square::E5, &board));
    board.put(Square::C5, piece('b'));
    board.put(Square::E5, piece('B'));
    assert!(rules::legal(piece('P'), Square::D4, Square::C5, &board));
    assert!(!rules::legal(piece('P'), Square::D4, Square::E5, &board));
    assert!(!rules::legal(piece('p'), Square::D6, Square::C5, &board));
    assert!(rules::legal(piece('p'), Square::D6, Square::E5, &board));
}

#[test]
fn rank_check_and_interposition() {
    for interposed in "KQRBNPqrbnp".chars() {
        let mut board = Board::empty();
        board.put(Square::B3, piece('R'));
        board.put(Square::G3, piece('k'));
        board.put(Square::A1, piece('K'));
        assert!(board.in_check(Color::Black));
        board.put(Square::E3, piece(interposed));
        // A White rook or queen on e3 gives check itself.
        assert_eq!(
            board.in_check(Color::Black),
            matches!(interposed, 'Q' | 'R'),
            "{interposed} on e3"
        );
        board.put(Square::F3, piece('n'));
        assert!(!board.in_check(Color::Black), "{interposed} on e3, knight on f3");
    }
}

#[test]
fn castling_rights() {
    let mut board = Board::starting();
    assert!(board.can_castle(Color::White, CastleSide::Kingside));
    play(&mut board, Square::G1, Square::F3);
    play(&mut board, Square::G8, Square::F6);
    assert!(board.can_castle(Color::White, CastleSide::Kingside));
    play(&mut board, Square::H1, Square::G1);
    assert!(!board.can_castle(Color::White, CastleSide::Kingside));
    assert!(board.can_castle(Color::White, CastleSide::Queenside));
    assert!(board.can_castle(Color::Black, CastleSide::Kingside));
}

#[test]
fn promotion_always_queens() {
    for (pawn, from, to) in [
        (piece('P'), Square::A7, Square::A8),
        (piece('P'), Square::H7, Square::H8),
        (piece('p'), Square::C2, Square::C1),
        (piece('p'), Square::E2, Square::E1),
    ] {
        let mut board = Board::empty();
        board.put(from, pawn);
        assert!(rules::legal(pawn, from, to, &board));
        board.apply_pawn_move(from, to);
        assert_eq!(
            board.occupant_at(to),
            Some(Piece::new(pawn.color, PieceKind::Queen))
        );
        assert!(board.is_empty(from));
    }
}

#[test]
fn apply_then_inverse() {
    let mut board = Board::starting();
    board.apply_move(Square::E2, Square::E4);
    board.apply_move(Square::D7, Square::D5);
    let before = board.snapshot();
    let captured = board.occupant_at(Square::D5);
    board.apply_move(Square::E4, Square::D5);
    assert_ne!(board.snapshot(), before);
    board.apply_move(Square::D5, Square::E4);
    if let Some(captured) = captured {
        board.put(Square::D5, captured);
    }
    assert_eq!(board.snapshot(), before);
}

fn play(board: &mut Board, from: Square, to: Square) {
    let record = board.describe_move(from, to).expect("origin is occupied");
    board.apply(&record);
    board.record_move(record);
}
