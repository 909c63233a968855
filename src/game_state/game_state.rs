//! Core incremental board state representation.
//!
//! `GameState` is the central model for the engine. It stores the 0x88 board
//! array, both per-side piece arenas, and the history stacks used by
//! make/unmake style workflows and higher-level engine systems. Board slots
//! hold [`PieceId`] handles; the arenas are the sole owners of piece
//! lifetime.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::{is_on_board, Color, PieceKind, Square, BOARD_SIZE};
use crate::game_state::piece_set::{Piece, PieceId, PieceSet};
use crate::moves::move_description::ChessMove;

/// The sixteen pieces each side starts with, in arena insertion order.
const STARTING_KINDS: [PieceKind; 16] = [
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Starting squares for the light pieces: the pawn rank, then the back rank.
const STARTING_SQUARES_LIGHT: [Square; 16] = [
    16, 17, 18, 19, 20, 21, 22, 23, // pawns
    0, 1, 2, 3, 4, 5, 6, 7, // rook, knight, bishop, queen, king, bishop, knight, rook
];

/// Starting squares for the dark pieces, mirrored across the board.
const STARTING_SQUARES_DARK: [Square; 16] = [
    96, 97, 98, 99, 100, 101, 102, 103, // pawns
    112, 113, 114, 115, 116, 117, 118, 119,
];

/// Incremental game state mutated in place by move application and search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// 0x88 board: square index to piece handle, `None` for empty slots.
    pub board: [Option<PieceId>; BOARD_SIZE],

    pub light_pieces: PieceSet,
    pub dark_pieces: PieceSet,

    /// Applied moves, most recent last. Pushed and popped by move
    /// application only.
    pub move_history: Vec<ChessMove>,

    /// Captured pieces parallel to the capture-flagged entries of
    /// `move_history`, most recent last.
    pub captured_stack: Vec<PieceId>,
}

impl GameState {
    /// An empty board with no pieces. Used for synthetic positions in tests
    /// and diagnostics.
    pub fn empty() -> Self {
        Self {
            board: [None; BOARD_SIZE],
            light_pieces: PieceSet::new(),
            dark_pieces: PieceSet::new(),
            move_history: Vec::new(),
            captured_stack: Vec::new(),
        }
    }

    /// The standard starting position.
    pub fn new_game() -> Self {
        let mut game = Self::empty();
        for (kind, square) in STARTING_KINDS.iter().zip(STARTING_SQUARES_LIGHT) {
            game.add_piece(*kind, Color::Light, square)
                .expect("starting setup must be valid");
        }
        for (kind, square) in STARTING_KINDS.iter().zip(STARTING_SQUARES_DARK) {
            game.add_piece(*kind, Color::Dark, square)
                .expect("starting setup must be valid");
        }
        game
    }

    /// Creates a piece in its owner's arena and places it on the board.
    ///
    /// Fails when the square is off the board, already occupied, or the
    /// arena is full; the state is left unchanged on failure.
    pub fn add_piece(
        &mut self,
        kind: PieceKind,
        color: Color,
        square: Square,
    ) -> Result<PieceId, ChessErrors> {
        if !is_on_board(square) {
            return Err(ChessErrors::SquareOffBoard(square));
        }
        if self.board[square as usize].is_some() {
            return Err(ChessErrors::SquareOccupied(square));
        }

        let piece = Piece {
            kind,
            color,
            square,
            move_count: 0,
            captured: false,
        };
        let slot = self.side_mut(color).add(piece)?;
        let id = PieceId { color, slot };
        self.board[square as usize] = Some(id);
        Ok(id)
    }

    #[inline]
    pub fn side(&self, color: Color) -> &PieceSet {
        match color {
            Color::Light => &self.light_pieces,
            Color::Dark => &self.dark_pieces,
        }
    }

    #[inline]
    pub fn side_mut(&mut self, color: Color) -> &mut PieceSet {
        match color {
            Color::Light => &mut self.light_pieces,
            Color::Dark => &mut self.dark_pieces,
        }
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        self.side(id.color).get(id.slot)
    }

    #[inline]
    pub fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        self.side_mut(id.color).get_mut(id.slot)
    }

    /// Looks up the board slot for a square. Off-board indices read as empty
    /// rather than panicking, so callers can probe delta targets directly.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<PieceId> {
        if !is_on_board(square) {
            return None;
        }
        self.board[square as usize]
    }

    /// Total half-moves applied so far (search-applied moves included).
    #[inline]
    pub fn moves_played(&self) -> usize {
        self.move_history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::square_at;

    #[test]
    fn new_game_places_all_pieces_consistently() {
        let game = GameState::new_game();

        assert_eq!(game.light_pieces.len(), 16);
        assert_eq!(game.dark_pieces.len(), 16);

        // Every non-captured piece's stored square matches its board slot.
        for color in [Color::Light, Color::Dark] {
            for (slot, piece) in game.side(color).iter() {
                let id = game.board[piece.square as usize].expect("slot should be filled");
                assert_eq!(id, PieceId { color, slot });
            }
        }

        // Spot-check the back ranks.
        let light_queen = game.piece_at(square_at(3, 0)).expect("d1 occupied");
        assert_eq!(game.piece(light_queen).kind, PieceKind::Queen);
        let light_king = game.piece_at(square_at(4, 0)).expect("e1 occupied");
        assert_eq!(game.piece(light_king).kind, PieceKind::King);
        let dark_rook = game.piece_at(square_at(7, 7)).expect("h8 occupied");
        assert_eq!(game.piece(dark_rook).kind, PieceKind::Rook);
        assert_eq!(game.piece(dark_rook).color, Color::Dark);
    }

    #[test]
    fn add_piece_rejects_bad_squares() {
        let mut game = GameState::empty();
        assert_eq!(
            game.add_piece(PieceKind::King, Color::Light, 8),
            Err(ChessErrors::SquareOffBoard(8))
        );

        game.add_piece(PieceKind::King, Color::Light, 4)
            .expect("e1 should be free");
        assert_eq!(
            game.add_piece(PieceKind::Queen, Color::Light, 4),
            Err(ChessErrors::SquareOccupied(4))
        );
    }
}
