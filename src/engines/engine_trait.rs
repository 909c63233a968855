//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.
//! The position carries no side-to-move field, so callers pass the side
//! explicitly alongside the state.

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    pub depth: Option<u8>,
    pub movetime_s: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// Selected move in coordinate notation, `None` when the side has no
    /// pseudo-legal moves.
    pub best_move: Option<String>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        game_state: &GameState,
        side: Color,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
