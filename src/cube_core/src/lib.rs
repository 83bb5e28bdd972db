#![warn(clippy::pedantic)]
#![allow(clippy::missing_panics_doc)]
//! Permutation and orientation algebra of the 3x3x3 cube, and its projection
//! onto an unfolded sticker layout.

pub mod algorithm;
pub mod facelet;
pub mod layout;
pub mod moves;
pub mod state;

pub use algorithm::{Algorithm, MalformedAlgorithm, tokenize};
pub use facelet::{Color, Corner, Edge, Face, GridPos};
pub use layout::{Facelet, Layout};
pub use moves::{Direction, Move, MoveTable, build_move_table, moves};
pub use state::{CubeState, StateError};

/// The scramble shown by the demo.
pub const DEMO_SCRAMBLE: &str = "B U2 B D2 B2 L2 U2 B2 R' B2 L' B2 D' B L2 U2 L2 F";

/// Apply `algorithm` to `state`.
///
/// # Errors
///
/// If `algorithm` is not valid move notation.
pub fn apply(state: &CubeState, algorithm: &str) -> Result<CubeState, MalformedAlgorithm> {
    let algorithm: Algorithm = algorithm.parse()?;
    Ok(state.apply_algorithm(&algorithm))
}
