//! Crate root module declarations for the Quince Chess engine project.
//!
//! This file exposes all top-level subsystems (game state, move generation
//! and application, search, engines, and utility helpers) so binaries,
//! tests, and external tooling can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_types;
    pub mod game_state;
    pub mod piece_set;
}

pub mod moves {
    pub mod move_description;
    pub mod piece_deltas;
}

pub mod move_generation {
    pub mod apply_move;
    pub mod move_generator;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
}

pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
    pub mod transcript;
}
