//! The eighteen face turns and the table of states they map to.
//!
//! Only the six clockwise quarter turns are written down, each as one corner
//! 4-cycle and one edge 4-cycle. Double and counterclockwise turns are the
//! second and third powers of those.

use std::{fmt, sync::LazyLock};

use log::debug;

use crate::{
    facelet::{Corner, Edge, Face},
    state::{CornerOrbit, CubeState, EdgeOrbit},
};

/// How far a face is turned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// A clockwise quarter turn.
    Normal,
    /// A counterclockwise quarter turn.
    Prime,
    /// A half turn.
    Double,
}

impl Direction {
    pub const ALL: [Self; 3] = [Direction::Normal, Direction::Prime, Direction::Double];

    /// How many clockwise quarter turns this direction amounts to.
    #[must_use]
    pub fn quarter_turns(self) -> usize {
        match self {
            Direction::Normal => 1,
            Direction::Double => 2,
            Direction::Prime => 3,
        }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Direction::Normal => Direction::Prime,
            Direction::Prime => Direction::Normal,
            Direction::Double => Direction::Double,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Normal => write!(f, ""),
            Direction::Prime => write!(f, "'"),
            Direction::Double => write!(f, "2"),
        }
    }
}

/// A face turned in a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

impl Move {
    /// Every move, grouped by face.
    pub const ALL: [Self; 18] = {
        let mut moves = [Move::new(Face::U, Direction::Normal); 18];
        let mut i = 0;
        while i < 18 {
            moves[i] = Move::new(Face::ALL[i / 3], Direction::ALL[i % 3]);
            i += 1;
        }
        moves
    };

    #[must_use]
    pub const fn new(face: Face, direction: Direction) -> Self {
        Move { face, direction }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        Move {
            face: self.face,
            direction: self.direction.inverse(),
        }
    }

    /// Position of this move in `Move::ALL`.
    #[must_use]
    pub fn index(self) -> usize {
        let direction = match self.direction {
            Direction::Normal => 0,
            Direction::Prime => 1,
            Direction::Double => 2,
        };
        self.face as usize * 3 + direction
    }

    /// The state this move produces when applied to the solved cube.
    #[must_use]
    pub fn state(self) -> &'static CubeState {
        MOVE_TABLE.get(self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.direction)
    }
}

/// The clockwise quarter turn of one face, written as the 4-cycles it
/// induces. The piece in `cycle[k]` moves to `cycle[k + 1]`; the delta at
/// index `k` is recorded at slot `cycle[k]`.
struct QuarterTurn {
    corner_cycle: [Corner; 4],
    corner_twist: [u8; 4],
    edge_cycle: [Edge; 4],
    edge_flip: [u8; 4],
}

impl QuarterTurn {
    fn state(&self) -> CubeState {
        CubeState::from_orbits(
            CornerOrbit::from_cycle(self.corner_cycle.map(|c| c as u8), self.corner_twist),
            EdgeOrbit::from_cycle(self.edge_cycle.map(|e| e as u8), self.edge_flip),
        )
    }
}

/// Quarter turn definitions indexed by `Face`. Corner twists around each
/// cycle sum to zero mod 3; edges only flip on F and B.
const QUARTER_TURNS: [QuarterTurn; 6] = {
    use Corner::*;
    use Edge::*;
    [
        // U
        QuarterTurn {
            corner_cycle: [ULB, UBR, URF, UFL],
            corner_twist: [0, 0, 0, 0],
            edge_cycle: [UB, UR, UF, UL],
            edge_flip: [0, 0, 0, 0],
        },
        // B
        QuarterTurn {
            corner_cycle: [ULB, DBL, DRB, UBR],
            corner_twist: [1, 2, 1, 2],
            edge_cycle: [UB, BL, DB, BR],
            edge_flip: [1, 1, 1, 1],
        },
        // R
        QuarterTurn {
            corner_cycle: [UBR, DRB, DFR, URF],
            corner_twist: [1, 2, 1, 2],
            edge_cycle: [UR, BR, DR, FR],
            edge_flip: [0, 0, 0, 0],
        },
        // F
        QuarterTurn {
            corner_cycle: [URF, DFR, DLF, UFL],
            corner_twist: [1, 2, 1, 2],
            edge_cycle: [UF, FR, DF, FL],
            edge_flip: [1, 1, 1, 1],
        },
        // L
        QuarterTurn {
            corner_cycle: [ULB, UFL, DLF, DBL],
            corner_twist: [2, 1, 2, 1],
            edge_cycle: [UL, FL, DL, BL],
            edge_flip: [0, 0, 0, 0],
        },
        // D
        QuarterTurn {
            corner_cycle: [DBL, DLF, DFR, DRB],
            corner_twist: [0, 0, 0, 0],
            edge_cycle: [DB, DL, DF, DR],
            edge_flip: [0, 0, 0, 0],
        },
    ]
};

/// The state of every move, indexed by `Move::index`.
#[derive(Debug, Clone)]
pub struct MoveTable {
    states: [CubeState; 18],
}

static MOVE_TABLE: LazyLock<MoveTable> = LazyLock::new(build_move_table);

/// The shared move table, built on first use.
pub fn moves() -> &'static MoveTable {
    &MOVE_TABLE
}

/// Build the table from the quarter turn definitions: the double turn is the
/// quarter turn composed with itself and the prime turn is the double turn
/// composed with the quarter turn once more.
#[must_use]
pub fn build_move_table() -> MoveTable {
    let mut states = [CubeState::identity(); 18];
    for (face, quarter_turn) in Face::ALL.into_iter().zip(&QUARTER_TURNS) {
        let normal = quarter_turn.state();
        for direction in Direction::ALL {
            states[Move::new(face, direction).index()] = (1..direction.quarter_turns())
                .fold(normal, |power, _| power.compose(&normal));
        }
    }
    debug!(target: "move_table", "Built move table: moves={}", states.len());
    MoveTable { states }
}

impl MoveTable {
    #[must_use]
    pub fn get(&self, move_: Move) -> &CubeState {
        &self.states[move_.index()]
    }

    /// Look a move up by its notation, e.g. `"R'"`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<(Move, &CubeState)> {
        self.iter().find(|(move_, _)| move_.to_string() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Move, &CubeState)> {
        Move::ALL.into_iter().zip(&self.states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_indices_match_all() {
        for (i, move_) in Move::ALL.into_iter().enumerate() {
            assert_eq!(move_.index(), i);
        }
    }

    #[test]
    fn names() {
        let names = Move::ALL.map(|move_| move_.to_string());
        assert_eq!(&names[..6], ["U", "U'", "U2", "B", "B'", "B2"]);
        assert_eq!(
            Move::new(Face::R, Direction::Prime).inverse().to_string(),
            "R"
        );
    }

    #[test]
    fn quarter_turns_match_the_reference_tables() {
        let r = moves().get(Move::new(Face::R, Direction::Normal));
        assert_eq!(r.corner_permutation(), [0, 2, 6, 3, 4, 1, 5, 7]);
        assert_eq!(r.corner_orientation(), [0, 1, 2, 0, 0, 2, 1, 0]);
        assert_eq!(
            r.edge_permutation(),
            [0, 6, 2, 3, 4, 1, 9, 7, 8, 5, 10, 11]
        );
        assert_eq!(r.edge_orientation(), [0; 12]);

        let f = moves().get(Move::new(Face::F, Direction::Normal));
        assert_eq!(f.corner_permutation(), [0, 1, 3, 7, 4, 5, 2, 6]);
        assert_eq!(f.corner_orientation(), [0, 0, 1, 2, 0, 0, 2, 1]);
        assert_eq!(
            f.edge_permutation(),
            [0, 1, 7, 3, 4, 5, 2, 10, 8, 9, 6, 11]
        );
        assert_eq!(f.edge_orientation(), [0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 1, 0]);
    }

    #[test]
    fn twists_sum_to_zero() {
        for quarter_turn in &QUARTER_TURNS {
            let twist: u8 = quarter_turn.corner_twist.iter().sum();
            assert_eq!(twist % 3, 0);
            let flip: u8 = quarter_turn.edge_flip.iter().sum();
            assert_eq!(flip % 2, 0);
        }
    }

    #[test]
    fn powers_follow_quarter_turn_counts() {
        for face in Face::ALL {
            let quarter = Move::new(face, Direction::Normal).state();
            for direction in Direction::ALL {
                let mut power = CubeState::identity();
                for _ in 0..direction.quarter_turns() {
                    power = power.compose(quarter);
                }
                assert_eq!(&power, Move::new(face, direction).state());
            }
        }
        assert_eq!(Direction::Prime.quarter_turns(), 3);
        assert_eq!(Direction::Double.quarter_turns(), 2);
    }

    #[test]
    fn find_by_name() {
        let (move_, state) = moves().find("B2").unwrap();
        assert_eq!(move_, Move::new(Face::B, Direction::Double));
        assert_eq!(state, move_.state());
        assert!(moves().find("B3").is_none());
        assert_eq!(moves().iter().count(), 18);
    }
}
