//! Square-centric ("mailbox") board: every square stores its occupant directly,
//! which makes "what stands on this square" a single lookup. The board also
//! keeps the history of committed moves, which decides castling rights.
//!
//! The board is mechanical: it relocates pieces as told and answers queries.
//! Deciding whether a move is allowed is the job of [`crate::chess::rules`] and
//! [`crate::chess::game`].

use std::fmt;

use itertools::Itertools;

use crate::chess::core::{
    CastleSide,
    Color,
    MoveFlags,
    MoveRecord,
    Piece,
    PieceKind,
    Square,
    BOARD_SIZE,
    BOARD_WIDTH,
};
use crate::chess::rules;

/// Read-only copy of the board contents indexed by `[row][column]`.
pub type Grid = [[Option<Piece>; BOARD_WIDTH as usize]; BOARD_WIDTH as usize];

/// Pieces of the back rank from column 0 to column 7.
const BACKRANK_PIECES: [PieceKind; BOARD_WIDTH as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8×8 grid of occupants and the list of moves played on it.
#[derive(Clone)]
pub struct Board {
    squares: [Option<Piece>; BOARD_SIZE as usize],
    history: Vec<MoveRecord>,
}

impl Board {
    /// Creates the starting position of the standard chess variant.
    ///
    /// ```
    /// use chess_rules::chess::board::Board;
    /// use chess_rules::chess::core::{Color, Piece, PieceKind, Square};
    ///
    /// let board = Board::starting();
    /// assert_eq!(
    ///     board.occupant_at(Square::E1),
    ///     Some(Piece::new(Color::White, PieceKind::King))
    /// );
    /// assert_eq!(board.occupant_at(Square::E4), None);
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (column, kind) in (0..BOARD_WIDTH).zip(BACKRANK_PIECES) {
            for color in [Color::White, Color::Black] {
                board.put(Square::at(color.backrank(), column), Piece::new(color, kind));
                board.put(
                    Square::at(color.pawns_starting(), column),
                    Piece::new(color, PieceKind::Pawn),
                );
            }
        }
        board
    }

    /// Creates a board without pieces. Used to stage positions.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            squares: [None; BOARD_SIZE as usize],
            history: Vec::new(),
        }
    }

    /// Places `piece` on `square`, replacing the previous occupant.
    pub fn put(&mut self, square: Square, piece: Piece) {
        self.squares[square.index()] = Some(piece);
    }

    #[allow(missing_docs)]
    pub fn clear(&mut self, square: Square) {
        self.squares[square.index()] = None;
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn occupant_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn is_empty(&self, square: Square) -> bool {
        self.occupant_at(square).is_none()
    }

    /// Iterates over the squares occupied by `color` and the pieces on them.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |square| match self.occupant_at(square) {
            Some(piece) if piece.color == color => Some((square, piece)),
            _ => None,
        })
    }

    /// Locates the king of given color.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        Square::iter().find(|square| self.occupant_at(*square) == Some(king))
    }

    /// Moves whatever stands on `from` to `to` and empties `from`. No legality
    /// checks are performed.
    pub fn apply_move(&mut self, from: Square, to: Square) {
        let piece = self.squares[from.index()].take();
        self.squares[to.index()] = piece;
    }

    /// Same as [`Board::apply_move`], but a pawn landing on its promotion row
    /// becomes a queen of the same color.
    pub fn apply_pawn_move(&mut self, from: Square, to: Square) {
        self.apply_move(from, to);
        if let Some(piece) = self.occupant_at(to) {
            if piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row() {
                self.put(to, Piece::new(piece.color, PieceKind::Queen));
            }
        }
    }

    /// Same as [`Board::apply_move`], but a castling pattern of the king of
    /// `color` also relocates the corresponding rook.
    pub fn apply_king_move(&mut self, from: Square, to: Square, color: Color) {
        if let Some(side) = CastleSide::of_king_move(color, from, to) {
            self.apply_move(side.rook_home(color), side.rook_destination(color));
        }
        self.apply_move(from, to);
    }

    /// Applies a move with the primitive matching the moving piece.
    pub fn apply(&mut self, record: &MoveRecord) {
        match record.piece.kind {
            PieceKind::Pawn => self.apply_pawn_move(record.from, record.to),
            PieceKind::King => self.apply_king_move(record.from, record.to, record.piece.color),
            _ => self.apply_move(record.from, record.to),
        }
    }

    /// Reverts [`Board::apply`]: puts the moved piece back on its origin as it
    /// was (a promoted queen turns back into a pawn), restores the captured
    /// piece and returns the castled rook home.
    pub fn unapply(&mut self, record: &MoveRecord) {
        self.put(record.from, record.piece);
        self.squares[record.to.index()] = record.captured;
        if let Some(side) = record.castle_side() {
            let color = record.piece.color;
            self.apply_move(side.rook_destination(color), side.rook_home(color));
        }
    }

    /// Describes moving the occupant of `from` to `to` in the current
    /// position. Returns `None` if `from` is empty.
    #[must_use]
    pub fn describe_move(&self, from: Square, to: Square) -> Option<MoveRecord> {
        let piece = self.occupant_at(from)?;
        let captured = self.occupant_at(to);
        let mut flags = MoveFlags::empty();
        if captured.is_some() {
            flags |= MoveFlags::CAPTURE;
        }
        match piece.kind {
            PieceKind::Pawn => {
                if from.delta(to).0.abs() == 2 {
                    flags |= MoveFlags::DOUBLE_PAWN_PUSH;
                }
                if to.row() == piece.color.promotion_row() {
                    flags |= MoveFlags::PROMOTION;
                }
            },
            PieceKind::King => match CastleSide::of_king_move(piece.color, from, to) {
                Some(CastleSide::Kingside) => flags |= MoveFlags::KINGSIDE_CASTLE,
                Some(CastleSide::Queenside) => flags |= MoveFlags::QUEENSIDE_CASTLE,
                None => {},
            },
            _ => {},
        }
        Some(MoveRecord {
            from,
            to,
            piece,
            captured,
            flags,
        })
    }

    /// Appends a committed move to the history.
    pub fn record_move(&mut self, record: MoveRecord) {
        self.history.push(record);
    }

    /// Moves committed so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Checks the history only: castling to `side` is possible unless a
    /// recorded move started or ended on the king's or that rook's home
    /// square. Board clearance and attacked squares are not considered here.
    #[must_use]
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        let (king, rook) = (color.king_home(), side.rook_home(color));
        !self
            .history
            .iter()
            .any(|record| record.touches(king) || record.touches(rook))
    }

    /// Returns `true` if all squares strictly between the king's and the
    /// castling rook's home squares are empty.
    #[must_use]
    pub fn castling_path_clear(&self, color: Color, side: CastleSide) -> bool {
        let (king, rook) = (color.king_home(), side.rook_home(color));
        let (low, high) = if king.column() < rook.column() {
            (king.column(), rook.column())
        } else {
            (rook.column(), king.column())
        };
        (low + 1..high).all(|column| self.is_empty(Square::at(color.backrank(), column)))
    }

    /// Returns `true` if any non-king piece of color `by` attacks `target`.
    #[must_use]
    pub fn is_attacked(&self, target: Square, by: Color) -> bool {
        self.pieces(by)
            .filter(|(_, piece)| piece.kind != PieceKind::King)
            .any(|(square, piece)| rules::attacks(piece, square, target, self))
    }

    /// Returns `true` if the king of given color is attacked by an opposing
    /// piece. Kings are not considered attackers.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_attacked(king, color.opponent()),
            None => false,
        }
    }

    /// Returns `true` if the two kings stand on neighbouring squares.
    #[must_use]
    pub fn kings_adjacent(&self) -> bool {
        match (
            self.king_square(Color::White),
            self.king_square(Color::Black),
        ) {
            (Some(white), Some(black)) => {
                let (d_row, d_column) = white.delta(black);
                d_row.abs() <= 1 && d_column.abs() <= 1
            },
            _ => false,
        }
    }

    /// Copies the grid for a one-shot legality probe. The history is not
    /// copied.
    #[must_use]
    pub const fn clone_for_simulation(&self) -> Self {
        Self {
            squares: self.squares,
            history: Vec::new(),
        }
    }

    /// Copies the board contents into a `[row][column]` grid.
    #[must_use]
    pub fn snapshot(&self) -> Grid {
        let mut grid = [[None; BOARD_WIDTH as usize]; BOARD_WIDTH as usize];
        for square in Square::iter() {
            grid[square.row() as usize][square.column() as usize] = self.occupant_at(square);
        }
        grid
    }

    /// Renders the board as text, one row per line, with rank and file labels.
    /// Pieces are drawn as letters or, if `figurines` is set, as Unicode chess
    /// symbols.
    #[must_use]
    pub fn render(&self, figurines: bool) -> String {
        let mut output = String::new();
        for row in 0..BOARD_WIDTH {
            let cells = (0..BOARD_WIDTH)
                .map(|column| match self.occupant_at(Square::at(row, column)) {
                    Some(piece) if figurines => piece.figurine(),
                    Some(piece) => piece.symbol(),
                    None => '.',
                })
                .join(" ");
            output.push_str(&format!("{} {cells}\n", BOARD_WIDTH - row));
        }
        output.push_str("  a b c d e f g h");
        output
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{self}")?;
        writeln!(f, "Moves: {}", self.history.iter().join(" "))?;
        Ok(())
    }
}
