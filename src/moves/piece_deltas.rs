//! Square-index delta tables for each piece geometry.
//!
//! On the 16-file-wide board a vertical step is ±16 and the diagonals are
//! ±15/±17, uniformly across the whole board. The light and dark tables are
//! direction-mirrored so "forward" always means toward the opposing side.
//! The tables are immutable data handed to the move generator at
//! construction rather than process-wide state.

use crate::game_state::chess_types::Color;

/// Deltas for one side, indexed by piece geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDeltas {
    /// Pawn: forward one, attack-left, attack-right, forward two.
    pub pawn: [i16; 4],
    pub knight: [i16; 8],
    pub king: [i16; 8],
    pub bishop: [i16; 4],
    pub rook: [i16; 4],
    pub queen: [i16; 8],
}

/// Both sides' delta tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeltaTables {
    pub light: PieceDeltas,
    pub dark: PieceDeltas,
}

impl DeltaTables {
    /// Standard chess geometry.
    pub const fn standard() -> Self {
        Self {
            light: PieceDeltas {
                pawn: [16, 15, 17, 32],
                knight: [31, 33, 18, -14, 14, -18, -33, -31],
                king: [16, -16, -1, 1, 15, 17, -17, -15],
                bishop: [15, 17, -17, -15],
                rook: [16, -16, -1, 1],
                queen: [16, -16, -1, 1, 15, 17, -17, -15],
            },
            dark: PieceDeltas {
                pawn: [-16, -15, -17, -32],
                knight: [-31, -33, -18, 14, -14, 18, 33, 31],
                king: [-16, 16, 1, -1, -15, -17, 17, 15],
                bishop: [-15, -17, 17, 15],
                rook: [-16, 16, 1, -1],
                queen: [-16, 16, 1, -1, -15, -17, 17, 15],
            },
        }
    }

    #[inline]
    pub fn for_color(&self, color: Color) -> &PieceDeltas {
        match color {
            Color::Light => &self.light,
            Color::Dark => &self.dark,
        }
    }
}

impl Default for DeltaTables {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_tables_mirror_light_tables() {
        let tables = DeltaTables::standard();
        for (light, dark) in tables.light.pawn.iter().zip(tables.dark.pawn) {
            assert_eq!(*light, -dark);
        }
        for (light, dark) in tables.light.queen.iter().zip(tables.dark.queen) {
            assert_eq!(*light, -dark);
        }
        for (light, dark) in tables.light.knight.iter().zip(tables.dark.knight) {
            assert_eq!(*light, -dark);
        }
    }
}
