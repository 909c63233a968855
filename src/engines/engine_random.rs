//! Random-move engine.
//!
//! Selects uniformly from the side's pseudo-legal moves and is primarily
//! used for diagnostics, integration testing, and low-strength gameplay.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenerator;
use crate::utils::algebraic::move_to_notation;

pub struct RandomEngine {
    move_generator: MoveGenerator,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: MoveGenerator::new(),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "QuinceChess Random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        side: Color,
        _params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let moves = self.move_generator.generate_for_side(game_state, side);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine pseudo_legal_moves {}",
            moves.len()
        ));

        if moves.is_empty() {
            out.best_move = None;
            return Ok(out);
        }

        let mut rng = rand::rng();
        let picked = moves
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose a random move")?;

        out.best_move = Some(move_to_notation(game_state, picked));
        Ok(out)
    }
}
