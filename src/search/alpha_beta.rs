//! Depth- and time-bounded alpha-beta minimax.
//!
//! Two mutually recursive procedures walk the game tree: `maximize` when it
//! is light's turn and `minimize` when it is dark's. Both operate on one
//! scratch position owned exclusively by the search for its whole duration,
//! with a strict make-undo per candidate move; no board copies are made
//! inside the tree.
//!
//! Cancellation is cooperative: each call checks the elapsed wall clock at
//! entry before doing any work. A move loop that has already been entered
//! finishes applying, recursing into, and undoing its current candidate
//! before the next entry check can cut the search off, so overshooting the
//! budget by roughly one subtree is expected behavior.

use std::time::{Duration, Instant};

use crate::errors::ChessErrors;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::apply_move::{apply_move, undo_move};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_description::ChessMove;
use crate::search::board_scoring::BoardScorer;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Maximum ply depth; a node at `depth > depth_limit` is a leaf.
    pub depth_limit: u8,
    /// Wall-clock budget in whole seconds, converted to the engine's
    /// internal time unit at search entry.
    pub time_budget_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_limit: 4,
            time_budget_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<ChessMove>,
    pub score: i32,
    pub nodes: u64,
}

/// Searches for the best move for `side` on the given position.
///
/// The position is cloned once into a scratch copy; the caller's state is
/// never touched. A side with zero pseudo-legal moves yields `None` and the
/// untouched sentinel extreme as its score; there is no checkmate or
/// stalemate detection in this engine, so callers must treat that as a
/// design limitation rather than a verified terminal result.
pub fn find_next_move<S: BoardScorer>(
    game: &GameState,
    side: Color,
    generator: &MoveGenerator,
    scorer: &S,
    config: SearchConfig,
) -> Result<SearchResult, ChessErrors> {
    let mut search = AlphaBetaSearch {
        game: game.clone(),
        generator,
        scorer,
        depth_limit: config.depth_limit,
        time_budget: Duration::from_secs(config.time_budget_secs),
        started_at: Instant::now(),
        best_move: None,
        nodes: 0,
    };

    let score = match side {
        Color::Light => search.maximize(i32::MIN, i32::MAX, 0)?,
        Color::Dark => search.minimize(i32::MIN, i32::MAX, 0)?,
    };

    Ok(SearchResult {
        best_move: search.best_move,
        score,
        nodes: search.nodes,
    })
}

struct AlphaBetaSearch<'a, S: BoardScorer> {
    /// Scratch position, exclusively owned by this search.
    game: GameState,
    generator: &'a MoveGenerator,
    scorer: &'a S,
    depth_limit: u8,
    time_budget: Duration,
    started_at: Instant,
    /// Provisional answer, recorded only at `depth == 0`.
    best_move: Option<ChessMove>,
    nodes: u64,
}

impl<S: BoardScorer> AlphaBetaSearch<'_, S> {
    fn out_of_budget(&self, depth: u8) -> bool {
        self.started_at.elapsed() > self.time_budget || depth > self.depth_limit
    }

    /// Light to move: raise alpha, prune once the running best reaches beta.
    fn maximize(&mut self, mut alpha: i32, beta: i32, depth: u8) -> Result<i32, ChessErrors> {
        self.nodes += 1;
        if self.out_of_budget(depth) {
            return Ok(self.scorer.score(&self.game));
        }

        let moves = self.generator.generate_for_side(&self.game, Color::Light);
        let mut current_best = i32::MIN;

        for mv in moves {
            apply_move(&mut self.game, mv);
            let value = self.minimize(alpha, beta, depth + 1)?;
            undo_move(&mut self.game)?;

            current_best = current_best.max(value);

            // Dark has already seen something better elsewhere; prune.
            if current_best >= beta {
                return Ok(current_best);
            }

            if current_best > alpha {
                alpha = current_best;
                if depth == 0 {
                    self.best_move = Some(mv);
                }
            }
        }

        Ok(current_best)
    }

    /// Dark to move: lower beta, prune once the running best drops to alpha.
    fn minimize(&mut self, alpha: i32, mut beta: i32, depth: u8) -> Result<i32, ChessErrors> {
        self.nodes += 1;
        if self.out_of_budget(depth) {
            return Ok(self.scorer.score(&self.game));
        }

        let moves = self.generator.generate_for_side(&self.game, Color::Dark);
        let mut current_min = i32::MAX;

        for mv in moves {
            apply_move(&mut self.game, mv);
            let value = self.maximize(alpha, beta, depth + 1)?;
            undo_move(&mut self.game)?;

            current_min = current_min.min(value);

            // Light has already seen something better elsewhere; prune.
            if current_min <= alpha {
                return Ok(current_min);
            }

            if current_min < beta {
                beta = current_min;
                if depth == 0 {
                    self.best_move = Some(mv);
                }
            }
        }

        Ok(current_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{square_at, PieceKind};
    use crate::search::board_scoring::StandardScorer;

    /// Plain exhaustive minimax with the same depth semantics but no
    /// pruning, used to pin alpha-beta's correctness.
    fn exhaustive(
        game: &mut GameState,
        generator: &MoveGenerator,
        scorer: &StandardScorer,
        side: Color,
        depth: u8,
        depth_limit: u8,
    ) -> i32 {
        if depth > depth_limit {
            return scorer.score(game);
        }
        let moves = generator.generate_for_side(game, side);
        let mut best = match side {
            Color::Light => i32::MIN,
            Color::Dark => i32::MAX,
        };
        for mv in moves {
            apply_move(game, mv);
            let value = exhaustive(game, generator, scorer, side.opposite(), depth + 1, depth_limit);
            undo_move(game).expect("history should not be empty");
            best = match side {
                Color::Light => best.max(value),
                Color::Dark => best.min(value),
            };
        }
        best
    }

    fn reduced_position() -> GameState {
        let mut game = GameState::empty();
        game.add_piece(PieceKind::King, Color::Light, square_at(4, 0))
            .expect("e1 free");
        game.add_piece(PieceKind::Rook, Color::Light, square_at(0, 0))
            .expect("a1 free");
        game.add_piece(PieceKind::Pawn, Color::Light, square_at(1, 1))
            .expect("b2 free");
        game.add_piece(PieceKind::King, Color::Dark, square_at(4, 7))
            .expect("e8 free");
        game.add_piece(PieceKind::Knight, Color::Dark, square_at(2, 5))
            .expect("c6 free");
        game.add_piece(PieceKind::Pawn, Color::Dark, square_at(3, 6))
            .expect("d7 free");
        game
    }

    #[test]
    fn alpha_beta_matches_exhaustive_minimax() {
        let generator = MoveGenerator::new();
        let scorer = StandardScorer;

        for depth_limit in 0..3 {
            for side in [Color::Light, Color::Dark] {
                let game = reduced_position();
                let mut scratch = game.clone();
                let expected =
                    exhaustive(&mut scratch, &generator, &scorer, side, 0, depth_limit);

                let result = find_next_move(
                    &game,
                    side,
                    &generator,
                    &scorer,
                    SearchConfig {
                        depth_limit,
                        time_budget_secs: 3600,
                    },
                )
                .expect("search should run");

                assert_eq!(
                    result.score, expected,
                    "pruned and exhaustive scores diverge at depth {depth_limit} for {side:?}"
                );
            }
        }
    }

    #[test]
    fn search_finds_the_winning_capture_for_light() {
        let mut game = GameState::empty();
        game.add_piece(PieceKind::King, Color::Light, square_at(7, 0))
            .expect("h1 free");
        game.add_piece(PieceKind::Queen, Color::Light, square_at(3, 0))
            .expect("d1 free");
        game.add_piece(PieceKind::King, Color::Dark, square_at(7, 7))
            .expect("h8 free");
        game.add_piece(PieceKind::Queen, Color::Dark, square_at(3, 7))
            .expect("d8 free");

        let result = find_next_move(
            &game,
            Color::Light,
            &MoveGenerator::new(),
            &StandardScorer,
            SearchConfig {
                depth_limit: 1,
                time_budget_secs: 3600,
            },
        )
        .expect("search should run");

        let best = result.best_move.expect("a best move should exist");
        assert_eq!(best.to, square_at(3, 7), "the undefended queen hangs");
        assert!(result.score >= 900 - 100, "score should reflect the win");
    }

    #[test]
    fn search_finds_the_winning_capture_for_dark() {
        let mut game = GameState::empty();
        // The light king sits on g1, off every line from a8; with the king
        // out of reach the hanging rook is the best the queen can take.
        game.add_piece(PieceKind::King, Color::Light, square_at(6, 0))
            .expect("g1 free");
        game.add_piece(PieceKind::Rook, Color::Light, square_at(0, 3))
            .expect("a4 free");
        game.add_piece(PieceKind::King, Color::Dark, square_at(7, 7))
            .expect("h8 free");
        game.add_piece(PieceKind::Queen, Color::Dark, square_at(0, 7))
            .expect("a8 free");

        let result = find_next_move(
            &game,
            Color::Dark,
            &MoveGenerator::new(),
            &StandardScorer,
            SearchConfig {
                depth_limit: 1,
                time_budget_secs: 3600,
            },
        )
        .expect("search should run");

        let best = result.best_move.expect("a best move should exist");
        assert_eq!(best.to, square_at(0, 3), "the undefended rook hangs");
        assert!(result.score <= -(500 - 100));
    }

    #[test]
    fn an_exposed_king_is_captured_over_any_material() {
        // No check detection means the king is just the most valuable
        // target: with the long diagonal open, taking him on h1 beats
        // taking the hanging rook.
        let mut game = GameState::empty();
        game.add_piece(PieceKind::King, Color::Light, square_at(7, 0))
            .expect("h1 free");
        game.add_piece(PieceKind::Rook, Color::Light, square_at(0, 3))
            .expect("a4 free");
        game.add_piece(PieceKind::King, Color::Dark, square_at(7, 7))
            .expect("h8 free");
        game.add_piece(PieceKind::Queen, Color::Dark, square_at(0, 7))
            .expect("a8 free");

        let result = find_next_move(
            &game,
            Color::Dark,
            &MoveGenerator::new(),
            &StandardScorer,
            SearchConfig {
                depth_limit: 1,
                time_budget_secs: 3600,
            },
        )
        .expect("search should run");

        let best = result.best_move.expect("a best move should exist");
        assert_eq!(best.to, square_at(7, 0), "the king outprices the rook");
        assert!(result.score <= -900_000);
    }

    #[test]
    fn search_leaves_the_callers_position_untouched() {
        let game = GameState::new_game();
        let before = game.clone();

        find_next_move(
            &game,
            Color::Light,
            &MoveGenerator::new(),
            &StandardScorer,
            SearchConfig {
                depth_limit: 2,
                time_budget_secs: 3600,
            },
        )
        .expect("search should run");

        assert_eq!(game, before);
    }

    #[test]
    fn side_with_no_pieces_reports_no_move() {
        let mut game = GameState::empty();
        game.add_piece(PieceKind::King, Color::Light, square_at(4, 0))
            .expect("e1 free");

        let result = find_next_move(
            &game,
            Color::Dark,
            &MoveGenerator::new(),
            &StandardScorer,
            SearchConfig {
                depth_limit: 2,
                time_budget_secs: 3600,
            },
        )
        .expect("search should run");

        assert_eq!(result.best_move, None);
        assert_eq!(result.score, i32::MAX, "the sentinel extreme is untouched");
    }
}
