//! Move notation: `R U R' U'`, `F2 B2`, and so on.

use std::{fmt, ops::Deref, str::FromStr};

use itertools::Itertools;
use log::trace;
use thiserror::Error;

use crate::{
    facelet::Face,
    moves::{Direction, Move},
    state::CubeState,
};

/// The input could not be read as a sequence of moves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed algorithm string: unexpected {found:?} at byte {offset}")]
pub struct MalformedAlgorithm {
    /// Byte offset of the offending character in the input.
    pub offset: usize,
    pub found: char,
}

/// Split move notation into moves.
///
/// A move is a face letter optionally followed by `'` or `2`. Spaces are
/// skipped and may be left out entirely, so `"RUR'U'"` and `"R U R' U'"` read
/// the same. Any other whitespace is malformed.
///
/// # Errors
///
/// On the first character that does not fit, including a modifier with no face
/// letter in front of it.
pub fn tokenize(input: &str) -> Result<Vec<Move>, MalformedAlgorithm> {
    let mut moves = vec![];
    let mut chars = input
        .char_indices()
        .filter(|&(_, c)| c != ' ')
        .peekable();

    while let Some((offset, found)) = chars.next() {
        let face = Face::from_letter(found).ok_or(MalformedAlgorithm { offset, found })?;
        let direction = match chars.peek() {
            Some((_, '\'')) => Direction::Prime,
            Some((_, '2')) => Direction::Double,
            _ => Direction::Normal,
        };
        if direction != Direction::Normal {
            chars.next();
        }

        let move_ = Move::new(face, direction);
        trace!(target: "tokenizer", "Read move {move_} at byte {offset}");
        moves.push(move_);
    }

    Ok(moves)
}

/// An ordered sequence of moves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Algorithm(Vec<Move>);

impl Algorithm {
    #[must_use]
    pub fn new(moves: Vec<Move>) -> Self {
        Algorithm(moves)
    }

    /// The algorithm that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Algorithm(self.iter().rev().copied().map(Move::inverse).collect())
    }

    /// The state reached by applying this algorithm to the solved cube.
    #[must_use]
    pub fn state(&self) -> CubeState {
        CubeState::identity().apply_algorithm(self)
    }

}

impl Deref for Algorithm {
    type Target = [Move];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Algorithm {
    type Err = MalformedAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        tokenize(s).map(Algorithm)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().join(" "))
    }
}
