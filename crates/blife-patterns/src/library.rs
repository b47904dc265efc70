//! The built-in pattern library.

use blife_core::CellPos;

/// A named shape, as `(row, col)` offsets from its bounding box's
/// top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Lower-case name, unique within [`LIBRARY`].
    pub name: &'static str,
    /// One-line description.
    pub summary: &'static str,
    /// Live cells relative to the top-left corner.
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Look up a library pattern by name, ignoring ASCII case.
    ///
    /// `_` and `-` are interchangeable, so `T_TETROMINO` finds
    /// `t-tetromino`.
    pub fn find(name: &str) -> Option<&'static Pattern> {
        let wanted = name.replace('_', "-");
        LIBRARY
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(&wanted))
    }

    /// `(rows, cols)` of the bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(rows, cols), &(r, c)| (rows.max(r + 1), cols.max(c + 1)))
    }

    /// Absolute positions with the top-left corner at `origin`, sorted
    /// row-major.
    pub fn place(&self, origin: CellPos) -> Vec<CellPos> {
        let mut cells: Vec<CellPos> = self
            .cells
            .iter()
            .map(|&(r, c)| CellPos::new(origin.row + r, origin.col + c))
            .collect();
        cells.sort();
        cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.len()
    }
}

/// Every built-in pattern, in the order `blife list` shows them.
pub const LIBRARY: &[Pattern] = &[
    Pattern {
        name: "block",
        summary: "2x2 still life",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "blinker",
        summary: "period 2 oscillator",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "toad",
        summary: "period 2 oscillator",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        summary: "period 2 oscillator",
        cells: &[(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "glider",
        summary: "period 4 spaceship moving south-east",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "t-tetromino",
        summary: "grows into four blinkers",
        cells: &[(0, 0), (1, 0), (1, 1), (2, 0)],
    },
    Pattern {
        name: "r-pentomino",
        summary: "methuselah, stabilises after 1103 generations",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "lwss",
        summary: "lightweight spaceship moving west",
        cells: &[
            (0, 1),
            (0, 4),
            (1, 0),
            (2, 0),
            (2, 4),
            (3, 0),
            (3, 1),
            (3, 2),
            (3, 3),
        ],
    },
    Pattern {
        name: "pulsar",
        summary: "period 3 oscillator",
        cells: &[
            (0, 2),
            (0, 3),
            (0, 4),
            (0, 8),
            (0, 9),
            (0, 10),
            (2, 0),
            (2, 5),
            (2, 7),
            (2, 12),
            (3, 0),
            (3, 5),
            (3, 7),
            (3, 12),
            (4, 0),
            (4, 5),
            (4, 7),
            (4, 12),
            (5, 2),
            (5, 3),
            (5, 4),
            (5, 8),
            (5, 9),
            (5, 10),
            (7, 2),
            (7, 3),
            (7, 4),
            (7, 8),
            (7, 9),
            (7, 10),
            (8, 0),
            (8, 5),
            (8, 7),
            (8, 12),
            (9, 0),
            (9, 5),
            (9, 7),
            (9, 12),
            (10, 0),
            (10, 5),
            (10, 7),
            (10, 12),
            (12, 2),
            (12, 3),
            (12, 4),
            (12, 8),
            (12, 9),
            (12, 10),
        ],
    },
];
