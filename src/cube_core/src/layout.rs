//! Projection of a cube state onto the unfolded 54 sticker grid.

use crate::{
    facelet::{Color, Corner, Edge, FACELET_COUNT, Face, GridPos},
    state::CubeState,
};

/// One drawn sticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facelet {
    /// Position in the order stickers were emitted: centers, then edges, then
    /// corners.
    pub index: usize,
    /// Facelet slot, see `facelet` for the numbering.
    pub slot: usize,
    pub position: GridPos,
    pub color: Color,
}

/// The 54 stickers of one cube state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    facelets: Vec<Facelet>,
}

/// Rotate a piece's face labels by its orientation: the last `k` labels move
/// to the front.
fn rotate<const N: usize>(mut faces: [Face; N], k: u8) -> [Face; N] {
    faces.rotate_right(usize::from(k) % N);
    faces
}

impl Layout {
    /// Project `state` onto the grid.
    #[must_use]
    pub fn project(state: &CubeState) -> Self {
        let mut facelets = Vec::with_capacity(FACELET_COUNT);
        let mut push = |slot: usize, color: Color| {
            facelets.push(Facelet {
                index: facelets.len(),
                slot,
                position: GridPos::of_slot(slot),
                color,
            });
        };

        for face in Face::ALL {
            push(face.center_slot(), face.color());
        }

        for slot in Edge::ALL {
            let (piece, flip) = state.edge_at(slot);
            for (face, facelet_slot) in rotate(piece.faces(), flip)
                .into_iter()
                .zip(slot.facelet_slots())
            {
                push(facelet_slot, face.color());
            }
        }

        for slot in Corner::ALL {
            let (piece, twist) = state.corner_at(slot);
            for (face, facelet_slot) in rotate(piece.faces(), twist)
                .into_iter()
                .zip(slot.facelet_slots())
            {
                push(facelet_slot, face.color());
            }
        }

        Layout { facelets }
    }

    /// Stickers in emission order.
    #[must_use]
    pub fn facelets(&self) -> &[Facelet] {
        &self.facelets
    }

    /// Sticker colors indexed by facelet slot.
    #[must_use]
    pub fn colors_by_slot(&self) -> [Color; FACELET_COUNT] {
        let mut colors = [Color::White; FACELET_COUNT];
        for facelet in &self.facelets {
            colors[facelet.slot] = facelet.color;
        }
        colors
    }

    /// The color labels of all stickers in slot order, e.g. `bbbbbbbbbooo...`
    /// for the solved cube.
    #[must_use]
    pub fn facelet_string(&self) -> String {
        self.colors_by_slot().into_iter().map(Color::label).collect()
    }
}
