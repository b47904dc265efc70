//! The boundary-adjacent rings of a grid.

use std::fmt;

use blife_core::CellPos;

/// One of the four grid edges.
///
/// Each edge owns a *ring*: the line of interior cells exactly one cell
/// in from the border on that side, spanning the full interior. The top
/// ring is row `1`, the bottom ring row `height - 2`, the left ring
/// column `1` and the right ring column `width - 2`. Corner cells such as
/// `(1, 1)` belong to two rings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Row `1`.
    Top,
    /// Row `height - 2`.
    Bottom,
    /// Column `1`.
    Left,
    /// Column `width - 2`.
    Right,
}

impl Edge {
    /// All four edges, in scan order.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// Positions along this edge's ring, in increasing column (top and
    /// bottom) or row (left and right) order.
    ///
    /// Grids narrower or shorter than 3 cells have no interior, and
    /// therefore an empty ring.
    pub fn ring(self, width: usize, height: usize) -> impl Iterator<Item = CellPos> {
        let has_interior = width >= 3 && height >= 3;
        let (line, span) = if has_interior {
            match self {
                Edge::Top => (1, 1..width - 1),
                Edge::Bottom => (height - 2, 1..width - 1),
                Edge::Left => (1, 1..height - 1),
                Edge::Right => (width - 2, 1..height - 1),
            }
        } else {
            (0, 0..0)
        };
        span.map(move |i| match self {
            Edge::Top | Edge::Bottom => CellPos::new(line, i),
            Edge::Left | Edge::Right => CellPos::new(i, line),
        })
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
        };
        f.write_str(name)
    }
}
