//! Move application and reversal on the shared position.
//!
//! `apply_move` and `undo_move` mutate the one `GameState` in place, never
//! through copies, so that search can afford a strict make-undo per
//! candidate.
//! Application is authoritative for the capture and promotion flags: the
//! generator's flags are advisory and both are re-derived from the board
//! here before the move is pushed onto history.
//!
//! Trust model: internally generated moves are applied without any legality
//! re-check; a generation defect would corrupt state silently rather than
//! surface as an error. Externally supplied move strings go through
//! [`apply_notation`], which validates both squares and the source occupancy
//! and fails without mutating anything.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::{file_of, is_on_board, rank_of, square_at, Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::game_state::piece_set::PieceId;
use crate::moves::move_description::ChessMove;
use crate::utils::algebraic::parse_move_string;

/// Applies one move to the position.
///
/// For non-pawn pieces: an enemy piece on the target square is flagged
/// captured and pushed onto the capture stack, then the mover is relocated
/// and its move count incremented.
///
/// Pawn moves get special handling because a pawn's capture geometry differs
/// from its forward geometry:
/// - a move is a capture attempt iff the source and target files differ;
/// - en passant is checked before ordinary diagonal capture, and when it
///   applies the *adjacent* enemy pawn is captured, not the (empty) target;
/// - a pawn arriving on its final rank is promoted to a queen
///   unconditionally.
pub fn apply_move(game: &mut GameState, mv: ChessMove) {
    let mover = *game.piece(mv.piece);
    let mut resolved = mv;
    resolved.is_capture = false;
    resolved.is_promotion = false;

    if mover.kind == PieceKind::Pawn && file_of(mv.from) != file_of(mv.to) {
        // Diagonal pawn move: en passant first, then ordinary capture.
        if let Some(victim) = en_passant_victim(game, &mv, mover.color) {
            capture_piece(game, victim);
            resolved.is_capture = true;
        } else if let Some(occupant) = game.piece_at(mv.to) {
            if game.piece(occupant).color != mover.color {
                capture_piece(game, occupant);
                resolved.is_capture = true;
            }
        }
    } else if let Some(occupant) = game.piece_at(mv.to) {
        if game.piece(occupant).color != mover.color {
            capture_piece(game, occupant);
            resolved.is_capture = true;
        }
    }

    // Relocate the mover.
    game.board[mv.to as usize] = Some(mv.piece);
    game.board[mv.from as usize] = None;
    {
        let piece = game.piece_mut(mv.piece);
        piece.square = mv.to;
        piece.move_count += 1;
    }

    // Promotion: the pawn's forward continuation from the target steps off
    // the board, so the target is its final rank.
    if mover.kind == PieceKind::Pawn && !is_on_board(mv.to + mover.color.forward()) {
        game.piece_mut(mv.piece).kind = PieceKind::Queen;
        resolved.is_promotion = true;
    }

    game.move_history.push(resolved);
}

/// Reverses the most recent move, restoring the board, the mover's square
/// and move count, any captured piece, and both history stacks to their
/// exact pre-move values.
pub fn undo_move(game: &mut GameState) -> Result<ChessMove, ChessErrors> {
    let mv = game.move_history.pop().ok_or(ChessErrors::NothingToUndo)?;

    game.board[mv.to as usize] = None;
    game.board[mv.from as usize] = Some(mv.piece);
    {
        let piece = game.piece_mut(mv.piece);
        piece.square = mv.from;
        piece.move_count -= 1;
        if mv.is_promotion {
            // The pre-promotion kind is always pawn by construction.
            piece.kind = PieceKind::Pawn;
        }
    }

    if mv.is_capture {
        let victim = game
            .captured_stack
            .pop()
            .ok_or(ChessErrors::CaptureStackUnderflow)?;
        game.piece_mut(victim).captured = false;
        // The victim's own stored square also covers en passant, where the
        // captured pawn never stood on the move's target square.
        let square = game.piece(victim).square;
        game.board[square as usize] = Some(victim);
    }

    Ok(mv)
}

/// Applies an externally supplied move string.
///
/// This is the application boundary for collaborators (network client,
/// human entry): both squares must pass the on-board test and the source
/// square must hold a piece, otherwise the call fails with no mutation. No
/// further legality check is performed beyond that.
pub fn apply_notation(game: &mut GameState, text: &str) -> Result<(), ChessErrors> {
    let parsed = parse_move_string(text)?;
    if !is_on_board(parsed.from) {
        return Err(ChessErrors::SquareOffBoard(parsed.from));
    }
    if !is_on_board(parsed.to) {
        return Err(ChessErrors::SquareOffBoard(parsed.to));
    }
    let piece = game
        .piece_at(parsed.from)
        .ok_or(ChessErrors::EmptySourceSquare(parsed.from))?;
    apply_move(game, ChessMove::new(piece, parsed.from, parsed.to));
    Ok(())
}

/// Flags a piece captured, clears its board slot, and records it on the
/// capture stack. The piece stays in its owner's arena for undo and
/// evaluation.
fn capture_piece(game: &mut GameState, victim: PieceId) {
    let square = game.piece(victim).square;
    game.board[square as usize] = None;
    game.piece_mut(victim).captured = true;
    game.captured_stack.push(victim);
}

/// En passant applies only when the moving pawn is advancing from its fifth
/// rank to its sixth, an enemy pawn stands beside it on the target file, and
/// the immediately preceding history entry was that pawn completing a
/// two-square advance. The condition is the same for both colors, mirrored
/// through the rank numbers.
fn en_passant_victim(game: &GameState, mv: &ChessMove, color: Color) -> Option<PieceId> {
    let (fifth_rank, sixth_rank) = match color {
        Color::Light => (4, 5),
        Color::Dark => (3, 2),
    };
    if rank_of(mv.from) != fifth_rank || rank_of(mv.to) != sixth_rank {
        return None;
    }

    let beside = square_at(file_of(mv.to), fifth_rank);
    let victim_id = game.piece_at(beside)?;
    let victim = game.piece(victim_id);
    if victim.color == color || victim.kind != PieceKind::Pawn {
        return None;
    }

    let last = game.move_history.last()?;
    if last.piece != victim_id || (last.to - last.from).abs() != 32 {
        return None;
    }

    Some(victim_id)
}
