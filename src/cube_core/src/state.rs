//! The cube state and its group operation.
//!
//! A state is a pair of orbits, one for the corners and one for the edges.
//! Each orbit records, per physical slot, which piece sits there and how far
//! that piece is twisted. Composing `a` with `b` applies `b`'s relabeling on
//! top of `a`:
//!
//! ```text
//! c.permutation[i] = a.permutation[b.permutation[i]]
//! c.orientation[i] = a.orientation[b.permutation[i]] + b.orientation[i]  (mod M)
//! ```

use std::fmt;

use itertools::Itertools;
use thiserror::Error;

use crate::{
    algorithm::Algorithm,
    facelet::{CORNER_COUNT, Corner, EDGE_COUNT, Edge},
    moves::Move,
};

/// Corners have three orientations.
pub const CORNER_ORIENTATIONS: u8 = 3;
/// Edges have two orientations.
pub const EDGE_ORIENTATIONS: u8 = 2;

/// The largest order of any element of the 3x3 cube group.
pub const MAX_ORDER: u16 = 1260;

/// One set of interchangeable pieces: `N` slots whose orientations are taken
/// mod `M`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orbit<const N: usize, const M: u8> {
    permutation: [u8; N],
    orientation: [u8; N],
}

pub type CornerOrbit = Orbit<CORNER_COUNT, CORNER_ORIENTATIONS>;
pub type EdgeOrbit = Orbit<EDGE_COUNT, EDGE_ORIENTATIONS>;

impl<const N: usize, const M: u8> Orbit<N, M> {
    // N is at most 12
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn identity() -> Self {
        Orbit {
            permutation: std::array::from_fn(|i| i as u8),
            orientation: [0; N],
        }
    }

    /// Build an orbit without checking that `permutation` is a bijection or
    /// that the orientations are reduced.
    #[must_use]
    pub fn new_unchecked(permutation: [u8; N], orientation: [u8; N]) -> Self {
        Orbit {
            permutation,
            orientation,
        }
    }

    /// Build an orbit from a cycle of slots. The piece in `cycle[k]` moves to
    /// `cycle[k + 1]` and `twist[k]` is the orientation delta recorded at
    /// `cycle[k]`. Slots outside the cycle are left alone.
    #[must_use]
    pub fn from_cycle<const K: usize>(cycle: [u8; K], twist: [u8; K]) -> Self {
        let mut orbit = Self::identity();
        for (k, &slot) in cycle.iter().enumerate() {
            let destination = usize::from(cycle[(k + 1) % K]);
            orbit.permutation[destination] = slot;
            orbit.orientation[usize::from(slot)] = twist[k] % M;
        }
        orbit
    }

    /// Check the orbit and build it.
    ///
    /// # Errors
    ///
    /// If an orientation is not below `M`, an identity is out of range, or an
    /// identity appears twice.
    pub fn try_new(permutation: [u8; N], orientation: [u8; N]) -> Result<Self, StateError> {
        let mut covered = [false; N];
        for (slot, (&piece, &twist)) in permutation.iter().zip(&orientation).enumerate() {
            if twist >= M {
                return Err(StateError::InvalidOrientation {
                    slot,
                    modulus: M,
                    actual: twist,
                });
            }
            match covered.get_mut(usize::from(piece)) {
                Some(true) => return Err(StateError::NotABijection { slot, piece }),
                Some(seen) => *seen = true,
                None => {
                    return Err(StateError::PermutationOutOfRange {
                        slot,
                        piece_count: N,
                        actual: piece,
                    });
                }
            }
        }
        Ok(Self::new_unchecked(permutation, orientation))
    }

    /// Apply `other` on top of `self`.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        let mut permutation = [0; N];
        let mut orientation = [0; N];
        for i in 0..N {
            let from = usize::from(other.permutation[i]);
            permutation[i] = self.permutation[from];
            orientation[i] = (self.orientation[from] % M + other.orientation[i] % M) % M;
        }
        Orbit {
            permutation,
            orientation,
        }
    }

    // N is at most 12
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut permutation = [0; N];
        let mut orientation = [0; N];
        for (i, (&piece, &twist)) in self.permutation.iter().zip(&self.orientation).enumerate() {
            permutation[usize::from(piece)] = i as u8;
            orientation[usize::from(piece)] = (M - twist % M) % M;
        }
        Orbit {
            permutation,
            orientation,
        }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Whether the permutation is a bijection and every orientation is
    /// reduced.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Self::try_new(self.permutation, self.orientation).is_ok()
    }

    #[must_use]
    pub fn permutation(&self) -> &[u8; N] {
        &self.permutation
    }

    #[must_use]
    pub fn orientation(&self) -> &[u8; N] {
        &self.orientation
    }
}

impl<const N: usize, const M: u8> fmt::Debug for Orbit<N, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.permutation
                .iter()
                .zip(&self.orientation)
                .map(|(piece, twist)| format!("{piece}:{twist}"))
                .join(" ")
        )
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StateError {
    #[error("Invalid orientation at slot {slot}, expected a value below {modulus} but got {actual}")]
    InvalidOrientation { slot: usize, modulus: u8, actual: u8 },
    #[error(
        "Permutation out of range at slot {slot}, expected a value below {piece_count} but got {actual}"
    )]
    PermutationOutOfRange {
        slot: usize,
        piece_count: usize,
        actual: u8,
    },
    #[error("Piece {piece} appears more than once, repeated at slot {slot}")]
    NotABijection { slot: usize, piece: u8 },
}

/// A configuration of the 3x3 cube. Centers never move and are not stored.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CubeState {
    corners: CornerOrbit,
    edges: EdgeOrbit,
}

impl Default for CubeState {
    fn default() -> Self {
        Self::identity()
    }
}

impl CubeState {
    /// The solved cube.
    #[must_use]
    pub fn identity() -> Self {
        CubeState {
            corners: Orbit::identity(),
            edges: Orbit::identity(),
        }
    }

    #[must_use]
    pub fn from_orbits(corners: CornerOrbit, edges: EdgeOrbit) -> Self {
        CubeState { corners, edges }
    }

    /// Build a state from the four raw arrays without any validation. A
    /// non-bijective permutation here produces meaningless projections.
    #[must_use]
    pub fn new_unchecked(
        corner_permutation: [u8; CORNER_COUNT],
        corner_orientation: [u8; CORNER_COUNT],
        edge_permutation: [u8; EDGE_COUNT],
        edge_orientation: [u8; EDGE_COUNT],
    ) -> Self {
        CubeState {
            corners: Orbit::new_unchecked(corner_permutation, corner_orientation),
            edges: Orbit::new_unchecked(edge_permutation, edge_orientation),
        }
    }

    /// Build a state from the four raw arrays.
    ///
    /// # Errors
    ///
    /// If either orbit is not a bijection with reduced orientations. See
    /// `StateError`.
    pub fn try_new(
        corner_permutation: [u8; CORNER_COUNT],
        corner_orientation: [u8; CORNER_COUNT],
        edge_permutation: [u8; EDGE_COUNT],
        edge_orientation: [u8; EDGE_COUNT],
    ) -> Result<Self, StateError> {
        Ok(CubeState {
            corners: Orbit::try_new(corner_permutation, corner_orientation)?,
            edges: Orbit::try_new(edge_permutation, edge_orientation)?,
        })
    }

    /// Apply `other` on top of `self`, returning a new state.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        CubeState {
            corners: self.corners.compose(&other.corners),
            edges: self.edges.compose(&other.edges),
        }
    }

    #[must_use]
    pub fn inverse(&self) -> Self {
        CubeState {
            corners: self.corners.inverse(),
            edges: self.edges.inverse(),
        }
    }

    #[must_use]
    pub fn apply_move(&self, move_: Move) -> Self {
        self.compose(move_.state())
    }

    /// Fold the algorithm's moves left to right over `self`.
    #[must_use]
    pub fn apply_algorithm(&self, algorithm: &Algorithm) -> Self {
        algorithm
            .iter()
            .fold(*self, |state, &move_| state.apply_move(move_))
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.corners.is_identity() && self.edges.is_identity()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.corners.is_valid() && self.edges.is_valid()
    }

    /// The smallest `n >= 1` such that composing `self` with itself `n` times
    /// gives the solved cube. `None` for states that are not group elements.
    #[must_use]
    pub fn order(&self) -> Option<u16> {
        let mut power = *self;
        for n in 1..=MAX_ORDER {
            if power.is_solved() {
                return Some(n);
            }
            power = power.compose(self);
        }
        None
    }

    #[must_use]
    pub fn corner_permutation(&self) -> [u8; CORNER_COUNT] {
        self.corners.permutation
    }

    #[must_use]
    pub fn corner_orientation(&self) -> [u8; CORNER_COUNT] {
        self.corners.orientation
    }

    #[must_use]
    pub fn edge_permutation(&self) -> [u8; EDGE_COUNT] {
        self.edges.permutation
    }

    #[must_use]
    pub fn edge_orientation(&self) -> [u8; EDGE_COUNT] {
        self.edges.orientation
    }

    /// The corner piece in `slot` and its twist. Only meaningful for valid
    /// states.
    ///
    /// # Panics
    ///
    /// If the identity stored at `slot` is out of range.
    #[must_use]
    pub fn corner_at(&self, slot: Corner) -> (Corner, u8) {
        let i = slot as usize;
        (
            Corner::ALL[usize::from(self.corners.permutation[i])],
            self.corners.orientation[i],
        )
    }

    /// The edge piece in `slot` and its flip. Only meaningful for valid
    /// states.
    ///
    /// # Panics
    ///
    /// If the identity stored at `slot` is out of range.
    #[must_use]
    pub fn edge_at(&self, slot: Edge) -> (Edge, u8) {
        let i = slot as usize;
        (
            Edge::ALL[usize::from(self.edges.permutation[i])],
            self.edges.orientation[i],
        )
    }
}
