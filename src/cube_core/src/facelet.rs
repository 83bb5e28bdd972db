//! Static tables: faces, sticker colors, piece identities and the facelet
//! slots every piece slot is drawn into.
//!
//! Facelet slots are numbered row-major over the unfolded grid:
//!
//! ```text
//!       0  1  2
//!       3  4  5
//!       6  7  8
//!  9 10 11 12 13 14 15 16 17 18 19 20
//! 21 22 23 24 25 26 27 28 29 30 31 32
//! 33 34 35 36 37 38 39 40 41 42 43 44
//!      45 46 47
//!      48 49 50
//!      51 52 53
//! ```

use std::fmt;

/// Number of visible stickers.
pub const FACELET_COUNT: usize = 54;
/// Number of corner slots (and corner identities).
pub const CORNER_COUNT: usize = 8;
/// Number of edge slots (and edge identities).
pub const EDGE_COUNT: usize = 12;

/// A face of the cube, in the order the centers are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    U,
    B,
    R,
    F,
    L,
    D,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, B, R, F, L, D];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The sticker color of this face's center.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Face::U => Color::White,
            Face::B => Color::Blue,
            Face::R => Color::Red,
            Face::F => Color::Green,
            Face::L => Color::Orange,
            Face::D => Color::Yellow,
        }
    }

    /// The facelet slot holding this face's center.
    #[must_use]
    pub fn center_slot(self) -> usize {
        CENTER_SLOTS[self as usize]
    }

    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'U' => Some(Face::U),
            'B' => Some(Face::B),
            'R' => Some(Face::R),
            'F' => Some(Face::F),
            'L' => Some(Face::L),
            'D' => Some(Face::D),
            _ => None,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Sticker colors. Each color is rendered with a one letter label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Blue,
    Red,
    Green,
    Orange,
    Yellow,
}

impl Color {
    pub const ALL: [Self; 6] = [
        Color::White,
        Color::Blue,
        Color::Red,
        Color::Green,
        Color::Orange,
        Color::Yellow,
    ];

    #[must_use]
    pub fn label(self) -> char {
        match self {
            Color::White => 'w',
            Color::Blue => 'b',
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Orange => 'o',
            Color::Yellow => 'y',
        }
    }

    #[must_use]
    pub fn from_label(label: char) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.label() == label)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Corner identities, listed in slot order. The identity of a corner is the
/// set of faces its stickers show when solved; the first face is the one its
/// orientation is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Corner {
    ULB,
    UBR,
    URF,
    UFL,
    DBL,
    DRB,
    DFR,
    DLF,
}

impl Corner {
    pub const ALL: [Self; CORNER_COUNT] = {
        use Corner::*;
        let v = [ULB, UBR, URF, UFL, DBL, DRB, DFR, DLF];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The three face letters of this corner, in sticker order.
    #[must_use]
    pub fn faces(self) -> [Face; 3] {
        use Face::*;
        match self {
            Corner::ULB => [U, L, B],
            Corner::UBR => [U, B, R],
            Corner::URF => [U, R, F],
            Corner::UFL => [U, F, L],
            Corner::DBL => [D, B, L],
            Corner::DRB => [D, R, B],
            Corner::DFR => [D, F, R],
            Corner::DLF => [D, L, F],
        }
    }

    /// The facelet slots this corner slot is drawn into, matching the order
    /// of `faces`.
    #[must_use]
    pub fn facelet_slots(self) -> [usize; 3] {
        CORNER_SLOTS[self as usize]
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Edge identities, listed in slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Edge {
    UB,
    UR,
    UF,
    UL,
    BL,
    BR,
    FR,
    FL,
    DB,
    DR,
    DF,
    DL,
}

impl Edge {
    pub const ALL: [Self; EDGE_COUNT] = {
        use Edge::*;
        let v = [UB, UR, UF, UL, BL, BR, FR, FL, DB, DR, DF, DL];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub fn faces(self) -> [Face; 2] {
        use Face::*;
        match self {
            Edge::UB => [U, B],
            Edge::UR => [U, R],
            Edge::UF => [U, F],
            Edge::UL => [U, L],
            Edge::BL => [B, L],
            Edge::BR => [B, R],
            Edge::FR => [F, R],
            Edge::FL => [F, L],
            Edge::DB => [D, B],
            Edge::DR => [D, R],
            Edge::DF => [D, F],
            Edge::DL => [D, L],
        }
    }

    #[must_use]
    pub fn facelet_slots(self) -> [usize; 2] {
        EDGE_SLOTS[self as usize]
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Facelet slots of each edge slot.
pub const EDGE_SLOTS: [[usize; 2]; EDGE_COUNT] = [
    [13, 7],
    [26, 27],
    [37, 46],
    [24, 23],
    [3, 10],
    [5, 16],
    [50, 40],
    [48, 34],
    [19, 1],
    [30, 29],
    [43, 52],
    [32, 21],
];

/// Facelet slots of each corner slot.
pub const CORNER_SLOTS: [[usize; 3]; CORNER_COUNT] = [
    [12, 11, 6],
    [14, 8, 15],
    [38, 39, 47],
    [36, 45, 35],
    [20, 0, 9],
    [18, 17, 2],
    [42, 53, 41],
    [44, 33, 51],
];

/// Facelet slots of the centers, indexed by `Face`.
pub const CENTER_SLOTS: [usize; 6] = [25, 4, 28, 49, 22, 31];

/// Width of the unfolded grid in cells.
pub const GRID_WIDTH: u8 = 12;
/// Height of the unfolded grid in cells.
pub const GRID_HEIGHT: u8 = 9;

/// A cell of the unfolded grid. `x` grows to the right, `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: u8,
    pub y: u8,
}

impl GridPos {
    /// The grid cell of a facelet slot.
    ///
    /// # Panics
    ///
    /// If `slot` is not below `FACELET_COUNT`.
    // Coordinates never exceed the grid size, so the casts cannot truncate
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn of_slot(slot: usize) -> Self {
        assert!(slot < FACELET_COUNT, "facelet slot {slot} out of range");
        let (x, y) = match slot {
            0..9 => (3 + slot % 3, slot / 3),
            9..45 => ((slot - 9) % 12, 3 + (slot - 9) / 12),
            _ => (3 + (slot - 45) % 3, 6 + (slot - 45) / 3),
        };
        GridPos {
            x: x as u8,
            y: y as u8,
        }
    }
}
