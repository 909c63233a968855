//! Pseudo-legal move enumeration per piece geometry.
//!
//! Generates moves that are legal by piece-movement rules alone; no check
//! detection is attempted, so a generated move may leave the mover's own
//! king attacked. En passant is likewise not generated here; it is resolved
//! at application time from the move history.
//!
//! Generation is deterministic given a fixed delta-table iteration order,
//! which search reproducibility and the tests rely on.

use crate::game_state::chess_types::{is_on_board, Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::game_state::piece_set::PieceId;
use crate::moves::move_description::ChessMove;
use crate::moves::piece_deltas::DeltaTables;

/// Enumerates pseudo-legal moves using per-color delta tables supplied at
/// construction.
#[derive(Debug, Clone)]
pub struct MoveGenerator {
    deltas: DeltaTables,
}

impl MoveGenerator {
    pub fn new() -> Self {
        Self::with_tables(DeltaTables::standard())
    }

    pub fn with_tables(deltas: DeltaTables) -> Self {
        Self { deltas }
    }

    /// Generates all pseudo-legal moves for one side, iterating that side's
    /// arena in insertion order and skipping captured pieces.
    pub fn generate_for_side(&self, game: &GameState, color: Color) -> Vec<ChessMove> {
        let mut moves = Vec::new();
        for (slot, piece) in game.side(color).iter() {
            if !piece.captured {
                self.generate_for_piece_into(game, PieceId { color, slot }, &mut moves);
            }
        }
        moves
    }

    /// Generates all pseudo-legal moves for exactly one piece.
    pub fn generate_for_piece(&self, game: &GameState, id: PieceId) -> Vec<ChessMove> {
        let mut moves = Vec::new();
        self.generate_for_piece_into(game, id, &mut moves);
        moves
    }

    fn generate_for_piece_into(&self, game: &GameState, id: PieceId, out: &mut Vec<ChessMove>) {
        let piece = game.piece(id);
        let deltas = self.deltas.for_color(piece.color);

        match piece.kind {
            PieceKind::Pawn => self.generate_pawn(game, id, &deltas.pawn, out),
            PieceKind::Knight => self.generate_stepping(game, id, &deltas.knight, out),
            PieceKind::King => self.generate_stepping(game, id, &deltas.king, out),
            PieceKind::Bishop => self.generate_sliding(game, id, &deltas.bishop, out),
            PieceKind::Rook => self.generate_sliding(game, id, &deltas.rook, out),
            PieceKind::Queen => self.generate_sliding(game, id, &deltas.queen, out),
        }
    }

    /// Knight / king: one fixed step per delta. Empty target yields a quiet
    /// move, an enemy target yields a capture, an own-piece target is
    /// skipped.
    fn generate_stepping(
        &self,
        game: &GameState,
        id: PieceId,
        deltas: &[i16],
        out: &mut Vec<ChessMove>,
    ) {
        let piece = game.piece(id);
        for delta in deltas {
            let target = piece.square + delta;
            if !is_on_board(target) {
                continue;
            }
            match game.piece_at(target) {
                None => out.push(ChessMove::new(id, piece.square, target)),
                Some(occupant) => {
                    if game.piece(occupant).color != piece.color {
                        out.push(ChessMove::with_flags(id, piece.square, target, true));
                    }
                }
            }
        }
    }

    /// Bishop / rook / queen: walk each direction until the board edge or
    /// the first occupied square. The blocker ends the walk regardless of
    /// ownership; it is captured only when it belongs to the enemy.
    fn generate_sliding(
        &self,
        game: &GameState,
        id: PieceId,
        deltas: &[i16],
        out: &mut Vec<ChessMove>,
    ) {
        let piece = game.piece(id);
        for delta in deltas {
            let mut target = piece.square + delta;
            while is_on_board(target) {
                match game.piece_at(target) {
                    None => out.push(ChessMove::new(id, piece.square, target)),
                    Some(occupant) => {
                        if game.piece(occupant).color != piece.color {
                            out.push(ChessMove::with_flags(id, piece.square, target, true));
                        }
                        break;
                    }
                }
                target += delta;
            }
        }
    }

    /// Pawn: forward-one onto an empty square, two independent diagonal
    /// attacks onto enemy pieces, and forward-two for a never-moved pawn
    /// when both the intervening and destination squares are empty. Moves
    /// whose forward continuation would step off the board are flagged as
    /// promotion candidates.
    fn generate_pawn(
        &self,
        game: &GameState,
        id: PieceId,
        deltas: &[i16; 4],
        out: &mut Vec<ChessMove>,
    ) {
        let piece = game.piece(id);
        let start = piece.square;
        let first = out.len();

        // Forward one square.
        let up_one = start + deltas[0];
        if is_on_board(up_one) && game.piece_at(up_one).is_none() {
            out.push(ChessMove::new(id, start, up_one));
        }

        // Diagonal attacks.
        for attack in [deltas[1], deltas[2]] {
            let target = start + attack;
            if !is_on_board(target) {
                continue;
            }
            if let Some(occupant) = game.piece_at(target) {
                if game.piece(occupant).color != piece.color {
                    out.push(ChessMove::with_flags(id, start, target, true));
                }
            }
        }

        // Forward two squares on the pawn's first move. Both the jumped-over
        // square and the destination must be empty.
        let up_two = start + deltas[3];
        if piece.move_count == 0
            && is_on_board(up_one)
            && game.piece_at(up_one).is_none()
            && is_on_board(up_two)
            && game.piece_at(up_two).is_none()
        {
            out.push(ChessMove::new(id, start, up_two));
        }

        // Flag promotion candidates: any move whose forward continuation
        // leaves the board ends on this pawn's final rank.
        for mv in &mut out[first..] {
            if !is_on_board(mv.to + deltas[0]) {
                mv.is_promotion = true;
            }
        }
    }
}

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::new()
    }
}
