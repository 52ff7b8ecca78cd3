//! Chess vocabulary shared by the notation: squares, pieces, moves and the
//! board interface providing the rules.

pub mod board;
pub mod core;
pub mod game;
pub mod moves;
