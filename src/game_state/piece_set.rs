//! Per-side piece arena.
//!
//! Pieces are created once at setup and never deallocated: a captured piece
//! is flagged and removed from the board array but stays in its owner's
//! arena so that undo and evaluation can still reach it. Board slots store
//! [`PieceId`] handles into these arenas rather than owning references.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Upper bound on pieces per side (16 starters plus headroom for synthetic
/// test positions).
pub const MAX_PIECES_PER_SIDE: usize = 32;

/// A chess piece: kind, owner, current square, and make/unmake bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    pub move_count: u16,
    pub captured: bool,
}

/// Stable handle to a piece in one side's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceId {
    pub color: Color,
    pub slot: u8,
}

/// One side's pieces, in insertion order. Insertion order is the initial
/// setup order and stays stable for the whole game, which makes move
/// generation deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceSet {
    pieces: Vec<Piece>,
}

impl PieceSet {
    pub fn new() -> Self {
        Self {
            pieces: Vec::with_capacity(MAX_PIECES_PER_SIDE),
        }
    }

    /// Adds a piece and returns its slot. Fails once the arena is full.
    pub fn add(&mut self, piece: Piece) -> Result<u8, ChessErrors> {
        if self.pieces.len() >= MAX_PIECES_PER_SIDE {
            return Err(ChessErrors::PieceSetFull);
        }
        let slot = self.pieces.len() as u8;
        self.pieces.push(piece);
        Ok(slot)
    }

    #[inline]
    pub fn get(&self, slot: u8) -> &Piece {
        &self.pieces[slot as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, slot: u8) -> &mut Piece {
        &mut self.pieces[slot as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Iterates `(slot, piece)` pairs in insertion order, captured included.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(slot, piece)| (slot as u8, piece))
    }
}
