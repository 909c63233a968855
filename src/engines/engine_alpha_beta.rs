//! Fixed-depth alpha-beta engine.
//!
//! Wraps the core minimax search with material-plus-activity scoring and a
//! wall-clock budget. This is the default playing strength.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::alpha_beta::{find_next_move, SearchConfig};
use crate::search::board_scoring::StandardScorer;
use crate::utils::algebraic::move_to_notation;

pub struct AlphaBetaEngine {
    default_depth: u8,
    default_movetime_s: u64,
    move_generator: MoveGenerator,
    scorer: StandardScorer,
}

impl AlphaBetaEngine {
    pub fn new(default_depth: u8) -> Self {
        Self {
            default_depth,
            default_movetime_s: SearchConfig::default().time_budget_secs,
            move_generator: MoveGenerator::new(),
            scorer: StandardScorer,
        }
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default().depth_limit)
    }
}

impl Engine for AlphaBetaEngine {
    fn name(&self) -> &str {
        "QuinceChess AlphaBeta"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        side: Color,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        // Honor explicit depth limits first; otherwise fall back to the
        // configured difficulty depth for this engine instance.
        let depth = params.depth.unwrap_or(self.default_depth).max(1);
        let movetime_s = params.movetime_s.unwrap_or(self.default_movetime_s);

        let result = find_next_move(
            game_state,
            side,
            &self.move_generator,
            &self.scorer,
            SearchConfig {
                depth_limit: depth,
                time_budget_secs: movetime_s,
            },
        )
        .map_err(|e| e.to_string())?;

        let mut out = EngineOutput::default();
        // Notation needs the pre-move board to read the mover's kind, so it
        // is rendered before anyone applies the move.
        out.best_move = result
            .best_move
            .map(|mv| move_to_notation(game_state, &mv));

        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {}",
            depth, result.score, result.nodes
        ));
        out.info_lines.push(format!(
            "info string alpha_beta_engine default_depth {}",
            self.default_depth
        ));
        if let Some(s) = params.movetime_s {
            out.info_lines
                .push(format!("info string alpha_beta_engine movetime_s {}", s));
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::AlphaBetaEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;

    #[test]
    fn alpha_beta_engine_honors_go_depth_override() {
        let game = GameState::new_game();
        let mut engine = AlphaBetaEngine::new(5);
        let params = GoParams {
            depth: Some(1),
            ..GoParams::default()
        };

        let out = engine
            .choose_move(&game, Color::Light, &params)
            .expect("engine should choose a move");
        let joined = out.info_lines.join("\n");

        assert!(
            joined.contains("info depth 1"),
            "expected depth-1 search info"
        );
        let best = out.best_move.expect("a move should be chosen");
        assert!(
            best.len() == 5 || best.len() == 6,
            "notation should be five or six characters, got {best:?}"
        );
    }

    #[test]
    fn alpha_beta_engine_returns_no_move_for_a_bare_board_side() {
        let mut game = GameState::empty();
        game.add_piece(
            crate::game_state::chess_types::PieceKind::King,
            Color::Light,
            4,
        )
        .expect("e1 should be free");

        let mut engine = AlphaBetaEngine::default();
        let out = engine
            .choose_move(&game, Color::Dark, &GoParams::default())
            .expect("engine should run");
        assert!(out.best_move.is_none());
    }
}
