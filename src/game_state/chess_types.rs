//! Core scalar types for the 0x88 board representation.

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Vertical delta for this side's pawn advance on the 0x88 board.
    #[inline]
    pub const fn forward(self) -> i16 {
        match self {
            Color::Light => 16,
            Color::Dark => -16,
        }
    }
}

/// Piece kind (color is represented separately on the piece record).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    King,
    Bishop,
    Rook,
    Queen,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::King => 2,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 4,
            PieceKind::Queen => 5,
        }
    }
}

/// Board square index in the padded 16-file-wide encoding (`rank * 16 + file`).
///
/// Signed so that directional delta arithmetic stays uniform near the board
/// edges; only values in `0..128` that pass [`is_on_board`] name real squares.
pub type Square = i16;

/// Number of slots in the padded board array.
pub const BOARD_SIZE: usize = 128;

/// A square is on the board iff its index has neither 0x88 bit set.
#[inline]
pub const fn is_on_board(square: Square) -> bool {
    square >= 0 && square < 128 && (square & 0x88) == 0
}

#[inline]
pub const fn square_at(file: Square, rank: Square) -> Square {
    rank * 16 + file
}

#[inline]
pub const fn file_of(square: Square) -> Square {
    square & 0x0F
}

#[inline]
pub const fn rank_of(square: Square) -> Square {
    square >> 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_board_test_matches_0x88_layout() {
        // a1, h1, a8, h8
        for square in [0, 7, 112, 119] {
            assert!(is_on_board(square), "square {square} should be on board");
        }
        // Padding columns, negative deltas, and past-the-end indices.
        for square in [8, 15, 120, 127, -1, -16, 128, 152] {
            assert!(!is_on_board(square), "square {square} should be off board");
        }
    }

    #[test]
    fn file_and_rank_round_trip() {
        for rank in 0..8 {
            for file in 0..8 {
                let square = square_at(file, rank);
                assert!(is_on_board(square));
                assert_eq!(file_of(square), file);
                assert_eq!(rank_of(square), rank);
            }
        }
    }
}
