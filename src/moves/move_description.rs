//! Move record shared by generation, application, and search.

use crate::game_state::chess_types::Square;
use crate::game_state::piece_set::PieceId;

/// One half-move: which piece moves, from where, to where.
///
/// The two flags are advisory when a move comes out of the generator and
/// authoritative once the move has been applied: application re-derives both
/// from the board before pushing the move onto history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
    pub is_capture: bool,
    pub is_promotion: bool,
}

impl ChessMove {
    #[inline]
    pub fn new(piece: PieceId, from: Square, to: Square) -> Self {
        Self {
            piece,
            from,
            to,
            is_capture: false,
            is_promotion: false,
        }
    }

    #[inline]
    pub fn with_flags(piece: PieceId, from: Square, to: Square, is_capture: bool) -> Self {
        Self {
            piece,
            from,
            to,
            is_capture,
            is_promotion: false,
        }
    }
}
