//! Chess rules: primitives, piece movement, board state and the turn
//! controller.

pub mod board;
pub mod core;
pub mod game;
pub mod rules;
