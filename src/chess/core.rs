//! Chess primitives commonly used within [`crate::chess`].

use std::fmt::{self, Write};
use std::ops::Not;

use anyhow::bail;
use itertools::Itertools;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// Column of the king's home square for both players.
const KING_HOME_COLUMN: u8 = 4;

/// Board squares in the order the board is printed: row 0 is the top of the
/// grid (Black's back rank, rank 8) and row 7 is the bottom (White's back rank,
/// rank 1). Columns go from left to right, column 0 being file `a`.
///
/// ```
/// use chess_rules::chess::core::Square;
///
/// assert_eq!(Square::A8 as u8, 0);
/// assert_eq!(Square::H8 as u8, 7);
/// assert_eq!(Square::A1 as u8, 8 * 7);
/// assert_eq!(Square::H1 as u8, 63);
/// assert_eq!((Square::E2.row(), Square::E2.column()), (6, 4));
/// ```
///
/// A square can only be obtained from a named constant or through the fallible
/// constructors, so coordinates outside the board are unrepresentable.
///
/// ```
/// use chess_rules::chess::core::Square;
///
/// assert_eq!(Square::from_coordinates(7, 4).unwrap(), Square::E1);
/// assert!(Square::from_coordinates(8, 0).is_err());
/// assert_eq!(std::mem::size_of::<Option<Square>>(), 1);
/// ```
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[rustfmt::skip]
#[allow(missing_docs)]
pub enum Square {
    A8, B8, C8, D8, E8, F8, G8, H8, // Row 0
    A7, B7, C7, D7, E7, F7, G7, H7, // Row 1
    A6, B6, C6, D6, E6, F6, G6, H6, // Row 2
    A5, B5, C5, D5, E5, F5, G5, H5, // Row 3
    A4, B4, C4, D4, E4, F4, G4, H4, // Row 4
    A3, B3, C3, D3, E3, F3, G3, H3, // Row 5
    A2, B2, C2, D2, E2, F2, G2, H2, // Row 6
    A1, B1, C1, D1, E1, F1, G1, H1, // Row 7
}

impl Square {
    #[rustfmt::skip]
    const ALL: [Self; BOARD_SIZE as usize] = [
        Self::A8, Self::B8, Self::C8, Self::D8, Self::E8, Self::F8, Self::G8, Self::H8,
        Self::A7, Self::B7, Self::C7, Self::D7, Self::E7, Self::F7, Self::G7, Self::H7,
        Self::A6, Self::B6, Self::C6, Self::D6, Self::E6, Self::F6, Self::G6, Self::H6,
        Self::A5, Self::B5, Self::C5, Self::D5, Self::E5, Self::F5, Self::G5, Self::H5,
        Self::A4, Self::B4, Self::C4, Self::D4, Self::E4, Self::F4, Self::G4, Self::H4,
        Self::A3, Self::B3, Self::C3, Self::D3, Self::E3, Self::F3, Self::G3, Self::H3,
        Self::A2, Self::B2, Self::C2, Self::D2, Self::E2, Self::F2, Self::G2, Self::H2,
        Self::A1, Self::B1, Self::C1, Self::D1, Self::E1, Self::F1, Self::G1, Self::H1,
    ];

    /// Iterates over all squares row by row, starting from [`Square::A8`].
    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// Connects row and column to form a full square.
    ///
    /// # Errors
    ///
    /// If either coordinate is outside 0..[`BOARD_WIDTH`] range.
    pub fn from_coordinates(row: u8, column: u8) -> anyhow::Result<Self> {
        if row >= BOARD_WIDTH || column >= BOARD_WIDTH {
            bail!("square coordinates should be within 0..BOARD_WIDTH, got ({row}, {column})");
        }
        Ok(Self::at(row, column))
    }

    /// Infallible version of [`Square::from_coordinates`] for coordinates
    /// that are known to be on the board.
    pub(crate) const fn at(row: u8, column: u8) -> Self {
        debug_assert!(row < BOARD_WIDTH && column < BOARD_WIDTH);
        Self::ALL[(row * BOARD_WIDTH + column) as usize]
    }

    /// Returns the row (0 at the top of the grid, 7 at the bottom).
    #[must_use]
    pub const fn row(self) -> u8 {
        self as u8 / BOARD_WIDTH
    }

    /// Returns the column (0 for file `a`, 7 for file `h`).
    #[must_use]
    pub const fn column(self) -> u8 {
        self as u8 % BOARD_WIDTH
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Row and column difference between `self` and `other`, i.e.
    /// `other - self`.
    #[must_use]
    pub const fn delta(self, other: Self) -> (i8, i8) {
        (
            other.row() as i8 - self.row() as i8,
            other.column() as i8 - self.column() as i8,
        )
    }

    /// Returns the square `d_row` rows and `d_column` columns away or `None`
    /// if that falls off the board.
    #[must_use]
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<Self> {
        let row = self.row().checked_add_signed(d_row)?;
        let column = self.column().checked_add_signed(d_column)?;
        Self::from_coordinates(row, column).ok()
    }

    /// Returns the neighbouring square in given direction.
    #[must_use]
    pub fn shift(self, direction: Direction) -> Option<Self> {
        let (d_row, d_column) = direction.delta();
        self.offset(d_row, d_column)
    }
}

impl TryFrom<u8> for Square {
    type Error = anyhow::Error;

    /// Creates a square given its index in the printed order (A8 is 0).
    ///
    /// # Errors
    ///
    /// If given square index is outside 0..[`BOARD_SIZE`] range.
    fn try_from(square_index: u8) -> anyhow::Result<Self> {
        match Self::ALL.get(usize::from(square_index)) {
            Some(square) => Ok(*square),
            None => bail!("square index should be in 0..BOARD_SIZE, got {square_index}"),
        }
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    /// Parses a square in algebraic notation, e.g. "e2".
    fn try_from(square: &str) -> anyhow::Result<Self> {
        let (file, rank) = match square.chars().collect_tuple() {
            Some((file, rank)) => (file, rank),
            None => bail!(
                "square should be two-char, got {square} with {} chars",
                square.chars().count()
            ),
        };
        let column = match file {
            'a'..='h' => file as u8 - b'a',
            _ => bail!("file should be within 'a'..='h', got '{file}'"),
        };
        let row = match rank {
            '1'..='8' => b'8' - rank as u8,
            _ => bail!("rank should be within '1'..='8', got '{rank}'"),
        };
        Ok(Self::at(row, column))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char((b'a' + self.column()) as char)?;
        f.write_char((b'8' - self.row()) as char)
    }
}

/// Directions on the printed grid. "Up" moves towards row 0, which is the
/// direction White pawns advance in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    Right,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    /// Row and column change of a single step.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::UpLeft => (-1, -1),
            Self::Up => (-1, 0),
            Self::UpRight => (-1, 1),
            Self::Right => (0, 1),
            Self::Left => (0, -1),
            Self::DownLeft => (1, -1),
            Self::Down => (1, 0),
            Self::DownRight => (1, 1),
        }
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn opposite(self) -> Self {
        match self {
            Self::UpLeft => Self::DownRight,
            Self::Up => Self::Down,
            Self::UpRight => Self::DownLeft,
            Self::Right => Self::Left,
            Self::Left => Self::Right,
            Self::DownLeft => Self::UpRight,
            Self::Down => Self::Up,
            Self::DownRight => Self::UpLeft,
        }
    }

    /// Direction of the straight line (row, column or diagonal) leading from
    /// `from` to `to`. Returns `None` if the squares are equal or not aligned.
    #[must_use]
    pub fn between(from: Square, to: Square) -> Option<Self> {
        let (d_row, d_column) = from.delta(to);
        if !(d_row == 0 || d_column == 0 || d_row.abs() == d_column.abs()) {
            return None;
        }
        match (d_row.signum(), d_column.signum()) {
            (-1, -1) => Some(Self::UpLeft),
            (-1, 0) => Some(Self::Up),
            (-1, 1) => Some(Self::UpRight),
            (0, 1) => Some(Self::Right),
            (0, -1) => Some(Self::Left),
            (1, -1) => Some(Self::DownLeft),
            (1, 0) => Some(Self::Down),
            (1, 1) => Some(Self::DownRight),
            _ => None,
        }
    }
}

/// A standard game of chess is played between two players: White (having the
/// advantage of the first turn) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row of the player's back rank.
    #[must_use]
    pub const fn backrank(self) -> u8 {
        match self {
            Self::White => BOARD_WIDTH - 1,
            Self::Black => 0,
        }
    }

    /// Row the player's pawns start on and may push two squares from.
    #[must_use]
    pub const fn pawns_starting(self) -> u8 {
        match self {
            Self::White => BOARD_WIDTH - 2,
            Self::Black => 1,
        }
    }

    /// Row where the player's pawns get promoted: the opponent's back rank.
    #[must_use]
    pub const fn promotion_row(self) -> u8 {
        self.opponent().backrank()
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn push_direction(self) -> Direction {
        match self {
            Self::White => Direction::Up,
            Self::Black => Direction::Down,
        }
    }

    /// Home square of the player's king.
    #[must_use]
    pub const fn king_home(self) -> Square {
        Square::at(self.backrank(), KING_HOME_COLUMN)
    }
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl TryFrom<&str> for Color {
    type Error = anyhow::Error;

    fn try_from(color: &str) -> anyhow::Result<Self> {
        match color {
            "w" => Ok(Self::White),
            "b" => Ok(Self::Black),
            _ => bail!("color should be 'w' or 'b', got '{color}'"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::White => 'w',
            Self::Black => 'b',
        })
    }
}

/// Standard [chess pieces].
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::King => 'k',
            Self::Queen => 'q',
            Self::Rook => 'r',
            Self::Bishop => 'b',
            Self::Knight => 'n',
            Self::Pawn => 'p',
        })
    }
}

/// Represents a specific piece owned by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    #[allow(missing_docs)]
    pub color: Color,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

impl Piece {
    #[must_use]
    #[allow(missing_docs)]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Conventional letter: uppercase for White, lowercase for Black.
    #[must_use]
    pub const fn symbol(self) -> char {
        let symbol = match self.kind {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        };
        match self.color {
            Color::White => symbol.to_ascii_uppercase(),
            Color::Black => symbol,
        }
    }

    /// Unicode chess symbol of the piece.
    #[must_use]
    pub const fn figurine(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = anyhow::Error;

    fn try_from(symbol: char) -> anyhow::Result<Self> {
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match symbol.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'p' => PieceKind::Pawn,
            _ => bail!("piece symbol should be within \"KQRBNPkqrbnp\", got '{symbol}'"),
        };
        Ok(Self::new(color, kind))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol())
    }
}

/// The two ways to [castle]. In both cases the king leaves column 4 of its
/// back rank:
///
/// - Kingside (O-O): the king ends up on column 6 and the column 7 rook on
///   column 5.
/// - Queenside (O-O-O): the king ends up on column 2 and the column 0 rook on
///   column 3.
///
/// [castle]: https://www.chessprogramming.org/Castling
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    const fn king_destination_column(self) -> u8 {
        match self {
            Self::Kingside => 6,
            Self::Queenside => 2,
        }
    }

    const fn rook_home_column(self) -> u8 {
        match self {
            Self::Kingside => 7,
            Self::Queenside => 0,
        }
    }

    const fn rook_destination_column(self) -> u8 {
        match self {
            Self::Kingside => 5,
            Self::Queenside => 3,
        }
    }

    /// Square the king lands on.
    #[must_use]
    pub const fn king_destination(self, color: Color) -> Square {
        Square::at(color.backrank(), self.king_destination_column())
    }

    /// Square the castling rook starts on.
    #[must_use]
    pub const fn rook_home(self, color: Color) -> Square {
        Square::at(color.backrank(), self.rook_home_column())
    }

    /// Square the castling rook lands on. This is also the square the king
    /// passes over.
    #[must_use]
    pub const fn rook_destination(self, color: Color) -> Square {
        Square::at(color.backrank(), self.rook_destination_column())
    }

    /// Recognizes the king's castling pattern: two columns sideways from its
    /// home square along the back rank.
    #[must_use]
    pub fn of_king_move(color: Color, from: Square, to: Square) -> Option<Self> {
        if from != color.king_home() {
            return None;
        }
        [Self::Kingside, Self::Queenside]
            .into_iter()
            .find(|side| side.king_destination(color) == to)
    }
}

bitflags::bitflags! {
    /// More information about a committed move, stored in [`MoveRecord`].
    ///
    /// Castling is a king move: `from` and `to` of the record correspond to
    /// the king, the rook relocation is implied by the castle flag.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MoveFlags: u8 {
        /// Pawn advancement by 2 squares from its starting row.
        const DOUBLE_PAWN_PUSH = 0b0000_0001;
        /// Short castle or O-O.
        const KINGSIDE_CASTLE = 0b0000_0010;
        /// Long castle or O-O-O.
        const QUEENSIDE_CASTLE = 0b0000_0100;
        /// Moves that change the material balance.
        const CAPTURE = 0b0000_1000;
        /// Pawn move to the opponent's back rank; the pawn becomes a queen.
        const PROMOTION = 0b0001_0000;
    }
}

/// A move as entered by the player: origin and destination squares. The
/// notation matches UCI without the promotion suffix, since pawns are always
/// promoted to a queen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    #[allow(missing_docs)]
    pub from: Square,
    #[allow(missing_docs)]
    pub to: Square,
}

impl Move {
    #[must_use]
    #[allow(missing_docs)]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Parses a move written as two squares, e.g. "e2e4". A trailing "q"
    /// (queen promotion) is accepted and ignored.
    ///
    /// # Errors
    ///
    /// If the input is not two valid squares.
    pub fn from_uci(input: &str) -> anyhow::Result<Self> {
        let input = input.strip_suffix('q').unwrap_or(input);
        if input.len() != 4 || !input.is_ascii() {
            bail!("move should be two squares, e.g. \"e2e4\", got \"{input}\"");
        }
        let (from, to) = input.split_at(2);
        Ok(Self::new(from.try_into()?, to.try_into()?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Committed move as stored in the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    #[allow(missing_docs)]
    pub from: Square,
    #[allow(missing_docs)]
    pub to: Square,
    /// Piece that moved, as it stood on `from` (a promoted pawn is recorded as
    /// a pawn).
    pub piece: Piece,
    #[allow(missing_docs)]
    pub captured: Option<Piece>,
    #[allow(missing_docs)]
    pub flags: MoveFlags,
}

impl MoveRecord {
    #[must_use]
    #[allow(missing_docs)]
    pub fn castle_side(&self) -> Option<CastleSide> {
        if self.flags.contains(MoveFlags::KINGSIDE_CASTLE) {
            Some(CastleSide::Kingside)
        } else if self.flags.contains(MoveFlags::QUEENSIDE_CASTLE) {
            Some(CastleSide::Queenside)
        } else {
            None
        }
    }

    /// Returns `true` if the record touches `square` as origin or destination.
    #[must_use]
    pub fn touches(&self, square: Square) -> bool {
        self.from == square || self.to == square
    }
}

impl From<MoveRecord> for Move {
    fn from(record: MoveRecord) -> Self {
        Self::new(record.from, record.to)
    }
}

impl fmt::Display for MoveRecord {
    /// Serializes the move in UCI format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if self.flags.contains(MoveFlags::PROMOTION) {
            write!(f, "{}", PieceKind::Queen)?;
        }
        Ok(())
    }
}
