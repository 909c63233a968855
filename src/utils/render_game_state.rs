//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the 0x88 board array for
//! debugging, tests, and diagnostics in text environments.

use crate::game_state::chess_types::{square_at, Color, PieceKind, Square};
use crate::game_state::game_state::GameState;

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..8 {
            match piece_on_square(game_state, square_at(file, rank)) {
                Some(ch) => out.push(ch),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_on_square(game_state: &GameState, square: Square) -> Option<char> {
    let id = game_state.piece_at(square)?;
    let piece = game_state.piece(id);
    Some(piece_to_unicode(piece.color, piece.kind))
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::apply_move::apply_notation;

    #[test]
    fn start_position_renders_both_back_ranks() {
        let rendered = render_game_state(&GameState::new_game());

        assert!(rendered.starts_with("  a b c d e f g h\n"));
        assert!(rendered.contains("8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8"));
        assert!(rendered.contains("1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1"));
        assert!(rendered.contains("4 · · · · · · · · 4"));
    }

    #[test]
    fn rendering_tracks_applied_moves() {
        let mut game = GameState::new_game();
        apply_notation(&mut game, "Pe2e4").expect("move should apply");

        let rendered = render_game_state(&game);
        assert!(rendered.contains("4 · · · · ♙ · · · 4"));
        assert!(rendered.contains("2 ♙ ♙ ♙ ♙ · ♙ ♙ ♙ 2"));
    }
}
