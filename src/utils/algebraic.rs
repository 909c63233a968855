//! Move-notation conversions.
//!
//! The wire format consumed from and produced to collaborators is a
//! five-character string `<Piece><SrcFile><SrcRank><DstFile><DstRank>`, with
//! an optional sixth character naming the promotion piece. Files `a..h` map
//! to 0–7, ranks `1..8` map to 0–7, and a square index is `rank * 16 + file`.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::{file_of, rank_of, square_at, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_description::ChessMove;

/// A move string decoded into board coordinates.
///
/// The promotion character is captured by presence only (string length six);
/// it is not validated against the piece actually promoted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedMove {
    pub piece: PieceKind,
    pub from: Square,
    pub to: Square,
    pub promotion: Option<char>,
}

/// Decode a move string such as `"Pe2e4"` or `"Pb7b8Q"`.
pub fn parse_move_string(text: &str) -> Result<ParsedMove, ChessErrors> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != 5 && chars.len() != 6 {
        return Err(ChessErrors::InvalidMoveString(text.to_owned()));
    }

    let piece = piece_from_letter(chars[0])?;
    let from = square_at(file_from_char(chars[1])?, rank_from_char(chars[2])?);
    let to = square_at(file_from_char(chars[3])?, rank_from_char(chars[4])?);
    let promotion = chars.get(5).copied();

    Ok(ParsedMove {
        piece,
        from,
        to,
        promotion,
    })
}

/// Encode a move on the current position. Must be called before the move is
/// applied, while the moving piece still has its pre-move kind.
pub fn move_to_notation(game: &GameState, mv: &ChessMove) -> String {
    let kind = game.piece(mv.piece).kind;
    let mut out = String::with_capacity(6);
    out.push(piece_letter(kind));
    out.push_str(&square_to_coords(mv.from));
    out.push_str(&square_to_coords(mv.to));
    if mv.is_promotion {
        out.push(piece_letter(PieceKind::Queen));
    }
    out
}

/// Render a square index as file-letter plus rank-digit, e.g. `"e4"`.
pub fn square_to_coords(square: Square) -> String {
    let file = char::from(b'a' + file_of(square) as u8);
    let rank = char::from(b'1' + rank_of(square) as u8);
    format!("{file}{rank}")
}

pub fn piece_letter(kind: PieceKind) -> char {
    match kind {
        PieceKind::Pawn => 'P',
        PieceKind::Knight => 'N',
        PieceKind::King => 'K',
        PieceKind::Bishop => 'B',
        PieceKind::Rook => 'R',
        PieceKind::Queen => 'Q',
    }
}

pub fn piece_from_letter(c: char) -> Result<PieceKind, ChessErrors> {
    match c {
        'P' => Ok(PieceKind::Pawn),
        'N' => Ok(PieceKind::Knight),
        'K' => Ok(PieceKind::King),
        'B' => Ok(PieceKind::Bishop),
        'R' => Ok(PieceKind::Rook),
        'Q' => Ok(PieceKind::Queen),
        _ => Err(ChessErrors::InvalidMoveChar(c)),
    }
}

fn file_from_char(c: char) -> Result<Square, ChessErrors> {
    if ('a'..='h').contains(&c) {
        Ok((c as u8 - b'a') as Square)
    } else {
        Err(ChessErrors::InvalidMoveChar(c))
    }
}

fn rank_from_char(c: char) -> Result<Square, ChessErrors> {
    if ('1'..='8').contains(&c) {
        Ok((c as u8 - b'1') as Square)
    } else {
        Err(ChessErrors::InvalidMoveChar(c))
    }
}
