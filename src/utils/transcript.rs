//! Plain-text game transcripts for history interchange.
//!
//! Serializes a move history to a dated, numbered move list in the engine's
//! coordinate notation. Moves are rendered by replaying them from the
//! initial position, so piece letters reflect each mover's kind at the time
//! the move was played (a promoted pawn's earlier moves still read as pawn
//! moves).

use chrono::Local;

use crate::game_state::game_state::GameState;
use crate::move_generation::apply_move::apply_move;
use crate::moves::move_description::ChessMove;
use crate::utils::algebraic::move_to_notation;

pub fn write_transcript(
    initial_state: &GameState,
    move_history: &[ChessMove],
    result: &str,
) -> String {
    write_transcript_dated(
        initial_state,
        move_history,
        result,
        &Local::now().format("%Y.%m.%d").to_string(),
    )
}

/// Same as [`write_transcript`] but with an explicit date string, so tests
/// and replays stay reproducible.
pub fn write_transcript_dated(
    initial_state: &GameState,
    move_history: &[ChessMove],
    result: &str,
    date: &str,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("[Date \"{}\"]\n", date));
    out.push_str(&format!("[Result \"{}\"]\n", result));
    out.push('\n');

    let mut state = initial_state.clone();
    let mut movetext_parts = Vec::<String>::with_capacity(move_history.len() + 1);
    for (ply, mv) in move_history.iter().enumerate() {
        let notation = move_to_notation(&state, mv);
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, notation));
        } else {
            movetext_parts.push(notation);
        }
        apply_move(&mut state, *mv);
    }

    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}
