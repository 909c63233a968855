//! Static position scoring.
//!
//! Scores are always from the light side's perspective: positive favors
//! light, negative favors dark. The standard scorer combines a material
//! difference with an early-game mobility nudge that rewards pieces which
//! have already moved while the game is young. Only non-captured pieces
//! contribute.

use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;

/// Material values indexed by `PieceKind::index()`:
/// pawn, knight, king, bishop, rook, queen.
///
/// The king is priced high enough that no material swing can ever make his
/// loss look like a trade.
pub const MATERIAL_VALUES: [i32; 6] = [100, 300, 1_000_000, 325, 500, 900];

/// A pawn's moves start counting toward activity after its second move.
const PAWN_ACTIVITY_MIN_MOVES: u16 = 2;
/// Pawn activity is rewarded only below this many half-moves played.
const PAWN_ACTIVITY_PHASE: usize = 10;
/// Minor/major piece activity is rewarded only below this many half-moves.
const PIECE_ACTIVITY_PHASE: usize = 15;

const PAWN_ACTIVITY_BONUS: i32 = 10;
const PIECE_ACTIVITY_BONUS: i32 = 15;

pub trait BoardScorer {
    fn score(&self, game: &GameState) -> i32;
}

/// Material difference plus early-game mobility bonus.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl BoardScorer for StandardScorer {
    fn score(&self, game: &GameState) -> i32 {
        side_score(game, Color::Light) - side_score(game, Color::Dark)
    }
}

fn side_score(game: &GameState, color: Color) -> i32 {
    let moves_played = game.moves_played();
    let mut material = 0i32;
    let mut activity = 0i32;

    for (_, piece) in game.side(color).iter() {
        if piece.captured {
            continue;
        }

        material += MATERIAL_VALUES[piece.kind.index()];

        if piece.kind == PieceKind::Pawn
            && piece.move_count >= PAWN_ACTIVITY_MIN_MOVES
            && moves_played < PAWN_ACTIVITY_PHASE
        {
            activity += PAWN_ACTIVITY_BONUS * i32::from(piece.move_count);
        }

        if piece.kind != PieceKind::Pawn
            && piece.kind != PieceKind::King
            && moves_played < PIECE_ACTIVITY_PHASE
        {
            activity += PIECE_ACTIVITY_BONUS * i32::from(piece.move_count);
        }
    }

    material + activity
}

/// Per-square value tables indexed by `PieceKind::index()` then by 0x88
/// square, with rows running from the top of the board (dark's back rank)
/// down. Present as data only; the scorer does not consult them yet,
/// pending a product decision on their integration.
pub const POSITION_VALUES: [[i32; 128]; 6] = [
    // Pawn
    [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        50, 50, 50, 50, 50, 50, 50, 50, 0, 0, 0, 0, 0, 0, 0, 0, //
        10, 10, 20, 30, 30, 20, 10, 10, 0, 0, 0, 0, 0, 0, 0, 0, //
        5, 5, 10, 25, 25, 10, 5, 5, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 20, 20, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        5, -5, -10, 0, 0, -10, -5, 5, 0, 0, 0, 0, 0, 0, 0, 0, //
        5, 10, 10, -20, -20, 10, 10, 5, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
    // Knight
    [
        -50, -40, -30, -30, -30, -30, -40, -50, 0, 0, 0, 0, 0, 0, 0, 0, //
        -40, -20, 0, 0, 0, 0, -20, -40, 0, 0, 0, 0, 0, 0, 0, 0, //
        -30, 0, 10, 15, 15, 10, 0, -30, 0, 0, 0, 0, 0, 0, 0, 0, //
        -30, 5, 15, 20, 20, 15, 5, -30, 0, 0, 0, 0, 0, 0, 0, 0, //
        -30, 0, 15, 20, 20, 15, 0, -30, 0, 0, 0, 0, 0, 0, 0, 0, //
        -30, 5, 10, 15, 15, 10, 5, -30, 0, 0, 0, 0, 0, 0, 0, 0, //
        -40, -20, 0, 5, 5, 0, -20, -40, 0, 0, 0, 0, 0, 0, 0, 0, //
        -50, -40, -30, -30, -30, -30, -40, -50, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
    // King
    [
        -30, -40, -40, -50, -50, -40, -40, -30, 0, 0, 0, 0, 0, 0, 0, 0, //
        -30, -40, -40, -50, -50, -40, -40, -30, 0, 0, 0, 0, 0, 0, 0, 0, //
        -30, -40, -40, -50, -50, -40, -40, -30, 0, 0, 0, 0, 0, 0, 0, 0, //
        -30, -40, -40, -50, -50, -40, -40, -30, 0, 0, 0, 0, 0, 0, 0, 0, //
        -20, -30, -30, -40, -40, -30, -30, -20, 0, 0, 0, 0, 0, 0, 0, 0, //
        -10, -20, -20, -20, -20, -20, -20, -10, 0, 0, 0, 0, 0, 0, 0, 0, //
        20, 20, 0, 0, 0, 0, 20, 20, 0, 0, 0, 0, 0, 0, 0, 0, //
        20, 30, 10, 0, 0, 10, 30, 20, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
    // Bishop
    [
        -20, -10, -10, -10, -10, -10, -10, -20, 0, 0, 0, 0, 0, 0, 0, 0, //
        -10, 0, 0, 0, 0, 0, 0, -10, 0, 0, 0, 0, 0, 0, 0, 0, //
        -10, 0, 5, 10, 10, 5, 0, -10, 0, 0, 0, 0, 0, 0, 0, 0, //
        -10, 5, 5, 10, 10, 5, 5, -10, 0, 0, 0, 0, 0, 0, 0, 0, //
        -10, 0, 10, 10, 10, 10, 0, -10, 0, 0, 0, 0, 0, 0, 0, 0, //
        -10, 10, 10, 10, 10, 10, 10, -10, 0, 0, 0, 0, 0, 0, 0, 0, //
        -10, 5, 0, 0, 0, 0, 5, -10, 0, 0, 0, 0, 0, 0, 0, 0, //
        -20, -10, -10, -10, -10, -10, -10, -20, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
    // Rook
    [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        5, 10, 10, 10, 10, 10, 10, 5, 0, 0, 0, 0, 0, 0, 0, 0, //
        -5, 0, 0, 0, 0, 0, 0, -5, 0, 0, 0, 0, 0, 0, 0, 0, //
        -5, 0, 0, 0, 0, 0, 0, -5, 0, 0, 0, 0, 0, 0, 0, 0, //
        -5, 0, 0, 0, 0, 0, 0, -5, 0, 0, 0, 0, 0, 0, 0, 0, //
        -5, 0, 0, 0, 0, 0, 0, -5, 0, 0, 0, 0, 0, 0, 0, 0, //
        -5, 0, 0, 0, 0, 0, 0, -5, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
    // Queen
    [
        -20, -10, -10, -5, -5, -10, -10, -20, 0, 0, 0, 0, 0, 0, 0, 0, //
        -10, 0, 0, 0, 0, 0, 0, -10, 0, 0, 0, 0, 0, 0, 0, 0, //
        -10, 0, 5, 5, 5, 5, 0, -10, 0, 0, 0, 0, 0, 0, 0, 0, //
        -5, 0, 5, 5, 5, 5, 0, -5, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 5, 5, 5, 5, 0, -5, 0, 0, 0, 0, 0, 0, 0, 0, //
        -10, 5, 5, 5, 5, 5, 0, -10, 0, 0, 0, 0, 0, 0, 0, 0, //
        -10, 0, 5, 0, 0, 0, 0, -10, 0, 0, 0, 0, 0, 0, 0, 0, //
        -20, -10, -10, -5, -5, -10, -10, -20, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::square_at;
    use crate::move_generation::apply_move::apply_move;
    use crate::moves::move_description::ChessMove;

    #[test]
    fn starting_position_scores_zero() {
        let game = GameState::new_game();
        assert_eq!(StandardScorer.score(&game), 0);
    }

    #[test]
    fn captured_pieces_do_not_count() {
        let mut game = GameState::empty();
        game.add_piece(PieceKind::Rook, Color::Light, square_at(0, 0))
            .expect("a1 free");
        let victim = game
            .add_piece(PieceKind::Rook, Color::Dark, square_at(0, 7))
            .expect("a8 free");

        assert_eq!(StandardScorer.score(&game), 0);

        game.piece_mut(victim).captured = true;
        game.board[square_at(0, 7) as usize] = None;
        assert_eq!(StandardScorer.score(&game), MATERIAL_VALUES[PieceKind::Rook.index()]);
    }

    #[test]
    fn early_piece_activity_earns_a_bonus() {
        let mut game = GameState::empty();
        let knight = game
            .add_piece(PieceKind::Knight, Color::Light, square_at(1, 0))
            .expect("b1 free");

        let baseline = StandardScorer.score(&game);
        apply_move(&mut game, ChessMove::new(knight, square_at(1, 0), square_at(2, 2)));
        apply_move(&mut game, ChessMove::new(knight, square_at(2, 2), square_at(1, 0)));

        // Two knight moves, well inside the opening phase.
        assert_eq!(StandardScorer.score(&game), baseline + 2 * 15);
    }

    #[test]
    fn activity_bonus_expires_after_the_opening() {
        let mut game = GameState::empty();
        let knight = game
            .add_piece(PieceKind::Knight, Color::Light, square_at(1, 0))
            .expect("b1 free");

        // Shuffle until the half-move count leaves the opening phase.
        for _ in 0..8 {
            apply_move(&mut game, ChessMove::new(knight, square_at(1, 0), square_at(2, 2)));
            apply_move(&mut game, ChessMove::new(knight, square_at(2, 2), square_at(1, 0)));
        }
        assert!(game.moves_played() >= 15);
        assert_eq!(
            StandardScorer.score(&game),
            MATERIAL_VALUES[PieceKind::Knight.index()]
        );
    }

    #[test]
    fn pawn_activity_needs_two_moves_and_a_young_game() {
        let mut game = GameState::empty();
        let pawn = game
            .add_piece(PieceKind::Pawn, Color::Light, square_at(4, 1))
            .expect("e2 free");

        apply_move(&mut game, ChessMove::new(pawn, square_at(4, 1), square_at(4, 3)));
        assert_eq!(
            StandardScorer.score(&game),
            MATERIAL_VALUES[PieceKind::Pawn.index()],
            "one pawn move earns nothing"
        );

        apply_move(&mut game, ChessMove::new(pawn, square_at(4, 3), square_at(4, 4)));
        assert_eq!(
            StandardScorer.score(&game),
            MATERIAL_VALUES[PieceKind::Pawn.index()] + 2 * 10
        );
    }

    #[test]
    fn position_tables_pad_the_off_board_columns_with_zero() {
        for table in &POSITION_VALUES {
            for (square, value) in table.iter().enumerate() {
                if (square & 0x88) != 0 {
                    assert_eq!(*value, 0, "padding square {square} must be zero");
                }
            }
        }
    }
}
