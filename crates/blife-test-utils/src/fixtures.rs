//! Seeds shared by engine, codec and CLI tests.
//!
//! Coordinates are absolute `(row, col)` positions for the grid sizes
//! named on each constant.

/// T-tetromino centred in a 12x12 grid. Reaches generation 10 without
/// touching the ring; in 11x11 it overflows at generation 9.
pub const T_TETROMINO_12: [(usize, usize); 4] = [(5, 6), (6, 6), (7, 6), (6, 7)];

/// Live cells of [`T_TETROMINO_12`] after 10 generations.
pub const T_TETROMINO_12_GEN10: [(usize, usize); 12] = [
    (2, 6),
    (3, 6),
    (4, 6),
    (6, 2),
    (6, 3),
    (6, 4),
    (6, 8),
    (6, 9),
    (6, 10),
    (8, 6),
    (9, 6),
    (10, 6),
];

/// South-east glider in a 10x10 grid. Overflows at generation 16.
pub const GLIDER_10: [(usize, usize); 5] = [(2, 4), (3, 4), (4, 4), (4, 3), (3, 2)];

/// Live cells of [`GLIDER_10`] at generation 16: the seed moved by (+4, +4).
pub const GLIDER_10_GEN16: [(usize, usize); 5] = [(6, 8), (7, 6), (7, 8), (8, 7), (8, 8)];

/// Live cells of [`GLIDER_10`] at generation 15.
pub const GLIDER_10_GEN15: [(usize, usize); 5] = [(6, 6), (6, 8), (7, 7), (7, 8), (8, 7)];

/// T-tetromino in a 7x7 grid. Overflows at generation 2.
pub const T_TETROMINO_7: [(usize, usize); 4] = [(2, 2), (2, 3), (2, 4), (3, 3)];

/// Live cells of [`T_TETROMINO_7`] at generation 2.
pub const T_TETROMINO_7_GEN2: [(usize, usize); 6] =
    [(1, 2), (1, 3), (1, 4), (3, 2), (3, 4), (4, 3)];

/// Live cells of [`T_TETROMINO_7`] at generation 1.
pub const T_TETROMINO_7_GEN1: [(usize, usize); 7] =
    [(1, 3), (2, 2), (2, 3), (2, 4), (3, 2), (3, 3), (3, 4)];

/// Block still life in a 6x6 grid.
pub const BLOCK_6: [(usize, usize); 4] = [(2, 2), (2, 3), (3, 2), (3, 3)];
