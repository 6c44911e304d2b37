//! Turn and move controller: the single entry point that validates a candidate
//! move against the turn, the piece rules, castling constraints and king
//! safety, then commits it and passes the turn.

use std::fmt;

use arrayvec::ArrayVec;
use tracing::{debug, enabled, info, trace, Level};

use crate::chess::board::{Board, Grid};
use crate::chess::core::{CastleSide, Color, Move, MoveRecord, Piece, PieceKind, Square};
use crate::chess::rules;

/// Upper bound on the number of legal moves in any reachable position (the
/// known maximum is 218).
pub const MAX_MOVES: usize = 256;

/// Legal moves of the side to move.
pub type MoveList = ArrayVec<Move, MAX_MOVES>;

/// Reason a candidate move was not committed. Whatever the reason, a rejected
/// move leaves the game untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// There is no piece on the origin square.
    #[error("no piece on the origin square")]
    EmptyOrigin,
    /// The piece on the origin square belongs to the side not on move.
    #[error("it is the other side's turn")]
    WrongTurn,
    /// The piece does not move this way or its path is blocked.
    #[error("the piece cannot move there")]
    IllegalMove,
    /// King move of the castling pattern that does not satisfy castling
    /// requirements.
    #[error("castling is not allowed")]
    CastlingNotAllowed,
    /// The move would leave the own king in check.
    #[error("the move leaves the king in check")]
    ExposesKing,
    /// Checkmate or stalemate has been reached.
    #[error("the game is over")]
    GameOver,
}

/// Result of [`Game::attempt_move`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied; the board and the side to move after it are
    /// attached for the caller to redraw.
    Committed {
        #[allow(missing_docs)]
        record: MoveRecord,
        #[allow(missing_docs)]
        snapshot: Grid,
        #[allow(missing_docs)]
        active_color: Color,
    },
    #[allow(missing_docs)]
    Rejected(Rejection),
}

impl MoveOutcome {
    #[must_use]
    #[allow(missing_docs)]
    pub const fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}

/// State of the game from the perspective of the side to move, which is the
/// color each variant carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum GameStatus {
    Ongoing,
    Check(Color),
    Checkmate(Color),
    Stalemate(Color),
}

impl GameStatus {
    /// Checkmate and stalemate end the game.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Checkmate(_) | Self::Stalemate(_))
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ongoing => write!(f, "ongoing"),
            Self::Check(color) => write!(f, "check {color}"),
            Self::Checkmate(color) => write!(f, "checkmate {color}"),
            Self::Stalemate(color) => write!(f, "stalemate {color}"),
        }
    }
}

/// A game in progress: the board and the side to move. White moves first and
/// the turn alternates after every committed move.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    active: Color,
}

impl Game {
    /// Starts a game from the standard position.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::starting(), Color::White)
    }

    /// Continues from a staged position. The board history is kept, so
    /// castling rights follow from it.
    #[must_use]
    pub const fn with_board(board: Board, active: Color) -> Self {
        Self { board, active }
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Copy of the board contents for rendering.
    #[must_use]
    pub fn board_snapshot(&self) -> Grid {
        self.board.snapshot()
    }

    /// The side to move.
    #[must_use]
    pub const fn active_color(&self) -> Color {
        self.active
    }

    /// Moves committed so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        self.board.history()
    }

    /// Returns `true` if `square` holds a piece of the side to move.
    #[must_use]
    pub fn check_turn(&self, square: Square) -> bool {
        self.board
            .occupant_at(square)
            .is_some_and(|piece| piece.color == self.active)
    }

    /// Validates moving the piece on `from` to `to` and commits it if it is
    /// legal. A rejected move changes nothing.
    ///
    /// ```
    /// use chess_rules::chess::core::{Color, Square};
    /// use chess_rules::chess::game::{Game, MoveOutcome, Rejection};
    ///
    /// let mut game = Game::new();
    /// assert_eq!(
    ///     game.attempt_move(Square::E7, Square::E5),
    ///     MoveOutcome::Rejected(Rejection::WrongTurn)
    /// );
    /// assert!(game.attempt_move(Square::E2, Square::E4).is_committed());
    /// assert_eq!(game.active_color(), Color::Black);
    /// ```
    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        let verdict = if self.has_legal_move() {
            self.validate(from, to)
        } else {
            Err(Rejection::GameOver)
        };
        match verdict {
            Ok(record) => {
                self.commit(record);
                MoveOutcome::Committed {
                    record,
                    snapshot: self.board.snapshot(),
                    active_color: self.active,
                }
            },
            Err(rejection) => {
                trace!(%from, %to, %rejection, "move rejected");
                MoveOutcome::Rejected(rejection)
            },
        }
    }

    /// Derives the status from whether the side to move is in check and
    /// whether it has any legal move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match (self.board.in_check(self.active), self.has_legal_move()) {
            (false, true) => GameStatus::Ongoing,
            (true, true) => GameStatus::Check(self.active),
            (true, false) => GameStatus::Checkmate(self.active),
            (false, false) => GameStatus::Stalemate(self.active),
        }
    }

    /// Enumerates every move [`Game::attempt_move`] would accept, ordered by
    /// origin and then destination square.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for (from, _) in self.board.pieces(self.active) {
            for to in Square::iter() {
                if self.validate(from, to).is_ok() {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }

    fn has_legal_move(&self) -> bool {
        self.board
            .pieces(self.active)
            .any(|(from, _)| Square::iter().any(|to| self.validate(from, to).is_ok()))
    }

    fn validate(&self, from: Square, to: Square) -> Result<MoveRecord, Rejection> {
        let record = self
            .board
            .describe_move(from, to)
            .ok_or(Rejection::EmptyOrigin)?;
        let piece = record.piece;
        if piece.color != self.active {
            return Err(Rejection::WrongTurn);
        }
        match record.castle_side() {
            Some(side) => self.validate_castling(piece.color, side)?,
            None => {
                if !rules::legal(piece, from, to, &self.board) {
                    return Err(Rejection::IllegalMove);
                }
            },
        }
        let mut future = self.board.clone_for_simulation();
        future.apply(&record);
        if future.in_check(piece.color) || future.kings_adjacent() {
            return Err(Rejection::ExposesKing);
        }
        Ok(record)
    }

    /// Everything except the safety of the king's destination, which is
    /// checked like for any other move.
    fn validate_castling(&self, color: Color, side: CastleSide) -> Result<(), Rejection> {
        let rook = Piece::new(color, PieceKind::Rook);
        if !self.board.can_castle(color, side)
            || self.board.occupant_at(side.rook_home(color)) != Some(rook)
            || !self.board.castling_path_clear(color, side)
            || self.board.in_check(color)
        {
            return Err(Rejection::CastlingNotAllowed);
        }
        let mut passing = self.board.clone_for_simulation();
        passing.apply_move(color.king_home(), side.rook_destination(color));
        if passing.in_check(color) || passing.kings_adjacent() {
            return Err(Rejection::CastlingNotAllowed);
        }
        Ok(())
    }

    fn commit(&mut self, record: MoveRecord) {
        self.board.apply(&record);
        self.board.record_move(record);
        self.active = !self.active;
        debug!(%record, flags = ?record.flags, "move committed");
        if enabled!(Level::INFO) {
            let status = self.status();
            if status.is_over() {
                info!(%status, moves = self.board.history().len(), "game over");
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
