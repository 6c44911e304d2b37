//! Movement rules of the pieces.
//!
//! Each rule answers "assuming this piece stands on `from`, may it go to `to`"
//! by looking at the movement pattern and the squares in between. Rules borrow
//! the [`Board`] immutably and ignore whose turn it is and whether the move
//! leaves the own king in check: that is decided by [`crate::chess::game`].

use std::iter;

use crate::chess::board::Board;
use crate::chess::core::{Color, Direction, Piece, PieceKind, Square};

/// Returns `true` if `piece` standing on `from` can move to `to` according to
/// its movement pattern, ignoring checks.
///
/// Capturing a piece of the same color is never legal.
///
/// ```
/// use chess_rules::chess::board::Board;
/// use chess_rules::chess::core::{Color, Piece, PieceKind, Square};
/// use chess_rules::chess::rules;
///
/// let board = Board::starting();
/// let knight = Piece::new(Color::White, PieceKind::Knight);
/// assert!(rules::legal(knight, Square::G1, Square::F3, &board));
/// assert!(!rules::legal(knight, Square::G1, Square::E2, &board));
/// ```
#[must_use]
pub fn legal(piece: Piece, from: Square, to: Square, board: &Board) -> bool {
    if from == to {
        return false;
    }
    if board
        .occupant_at(to)
        .is_some_and(|target| target.color == piece.color)
    {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => pawn_move(piece.color, from, to, board),
        kind => reaches(kind, from, to, board),
    }
}

/// Returns `true` if `piece` standing on `from` attacks `target`, i.e. would
/// capture a piece placed there.
///
/// This differs from [`legal`] only for pawns, which attack both forward
/// diagonals regardless of what stands there and never attack straight ahead.
/// The color of the occupant of `target` is not considered.
#[must_use]
pub fn attacks(piece: Piece, from: Square, target: Square, board: &Board) -> bool {
    if from == target {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => {
            let (d_row, d_column) = from.delta(target);
            d_row == forward(piece.color) && d_column.abs() == 1
        },
        kind => reaches(kind, from, target, board),
    }
}

/// Movement pattern of every piece except the pawn, whose moves and captures
/// differ.
fn reaches(kind: PieceKind, from: Square, to: Square, board: &Board) -> bool {
    match kind {
        PieceKind::King => king_move(from, to),
        PieceKind::Queen => bishop_move(from, to, board) || rook_move(from, to, board),
        PieceKind::Rook => rook_move(from, to, board),
        PieceKind::Bishop => bishop_move(from, to, board),
        PieceKind::Knight => knight_move(from, to),
        PieceKind::Pawn => unreachable!("pawns are handled separately"),
    }
}

/// Row step of a pawn push.
const fn forward(color: Color) -> i8 {
    color.push_direction().delta().0
}

fn pawn_move(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let step = forward(color);
    let (d_row, d_column) = from.delta(to);
    match d_column.abs() {
        // Pushes never capture.
        0 if d_row == step => board.is_empty(to),
        0 if d_row == 2 * step => {
            from.row() == color.pawns_starting()
                && from.shift(color.push_direction()).is_some_and(|middle| board.is_empty(middle))
                && board.is_empty(to)
        },
        1 if d_row == step => board
            .occupant_at(to)
            .is_some_and(|target| target.color != color),
        _ => false,
    }
}

fn knight_move(from: Square, to: Square) -> bool {
    let (d_row, d_column) = from.delta(to);
    matches!((d_row.abs(), d_column.abs()), (1, 2) | (2, 1))
}

fn bishop_move(from: Square, to: Square, board: &Board) -> bool {
    let (d_row, d_column) = from.delta(to);
    d_row != 0 && d_row.abs() == d_column.abs() && path_is_clear(from, to, board)
}

fn rook_move(from: Square, to: Square, board: &Board) -> bool {
    let (d_row, d_column) = from.delta(to);
    (d_row == 0) != (d_column == 0) && path_is_clear(from, to, board)
}

fn king_move(from: Square, to: Square) -> bool {
    let (d_row, d_column) = from.delta(to);
    d_row.abs().max(d_column.abs()) == 1
}

/// Returns `true` if `from` and `to` are on one line and every square strictly
/// between them is empty.
fn path_is_clear(from: Square, to: Square, board: &Board) -> bool {
    let Some(direction) = Direction::between(from, to) else {
        return false;
    };
    iter::successors(from.shift(direction), |square| square.shift(direction))
        .take_while(|square| *square != to)
        .all(|square| board.is_empty(square))
}
