//! Errors used throughout the chess engine.
//!
//! This module defines the canonical error type returned by game logic,
//! notation parsing, and move application. The enum `ChessErrors` is used as
//! the single error type across the crate to simplify propagation and
//! matching. Each variant carries contextual information where appropriate to
//! aid diagnostics and user-facing error messages.
//!
//! Usage guidelines:
//! - Notation and external-move variants (`InvalidMoveChar`,
//!   `InvalidMoveString`, `SquareOffBoard`, `EmptySourceSquare`) are
//!   recoverable: the caller rejected a bad input and no state was mutated.
//! - Stack variants (`NothingToUndo`, `CaptureStackUnderflow`) indicate a
//!   caller bug or corrupted history and are not expected during normal
//!   operation.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Square;

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A square index failed the 0x88 on-board test.
    ///
    /// Payload: the offending index.
    SquareOffBoard(Square),

    /// An externally supplied move named a source square with no piece on it.
    ///
    /// Payload: the empty source square.
    EmptySourceSquare(Square),

    /// Attempted to place a piece on a square that is already occupied.
    ///
    /// Payload: the occupied square.
    SquareOccupied(Square),

    /// A side's piece collection is full; no further pieces can be added.
    PieceSetFull,

    /// A single character in a move string was invalid (bad piece letter,
    /// file outside `a..h`, or rank outside `1..8`).
    ///
    /// Payload: the offending character.
    InvalidMoveChar(char),

    /// A move string had the wrong overall shape (not 5 or 6 characters).
    ///
    /// Payload: the original string for diagnostics.
    InvalidMoveString(String),

    /// `undo_move` was called with an empty move history.
    NothingToUndo,

    /// The capture stack was empty while undoing a move flagged as a capture.
    /// Indicates corrupted history bookkeeping.
    CaptureStackUnderflow,
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::SquareOffBoard(square) => {
                write!(f, "square index {square} is off the board")
            }
            ChessErrors::EmptySourceSquare(square) => {
                write!(f, "no piece on source square {square}")
            }
            ChessErrors::SquareOccupied(square) => {
                write!(f, "square {square} is already occupied")
            }
            ChessErrors::PieceSetFull => write!(f, "piece collection is full"),
            ChessErrors::InvalidMoveChar(c) => write!(f, "invalid character '{c}' in move string"),
            ChessErrors::InvalidMoveString(s) => write!(f, "invalid move string '{s}'"),
            ChessErrors::NothingToUndo => write!(f, "move history is empty, nothing to undo"),
            ChessErrors::CaptureStackUnderflow => {
                write!(f, "capture stack empty while undoing a capture")
            }
        }
    }
}

impl Error for ChessErrors {}
