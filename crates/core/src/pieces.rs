//! Pieces module - tetromino shape table
//!
//! Every (kind, rotation) pair maps to a small square bitmap: 4x4 for I,
//! 2x2 for O and 3x3 for the rest. Rotations go clockwise from North and are
//! laid out so that rotating in place keeps the piece near its origin.
//! There are no wall kicks: a rotation either fits where it is or is rejected.

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to the piece origin, as (row, col)
pub type MinoOffset = (i8, i8);

/// Square occupancy bitmap. Bit `c` of `rows[r]` is set when (r, c) is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    rows: [u8; 4],
}

impl Shape {
    /// Build a bitmap from row-major ASCII art where `#` marks a filled cell.
    const fn parse(size: u8, art: &[u8]) -> Shape {
        let mut rows = [0u8; 4];
        let mut i = 0;
        while i < art.len() {
            if art[i] == b'#' {
                let r = i / size as usize;
                let c = i % size as usize;
                rows[r] |= 1 << c;
            }
            i += 1;
        }
        Shape { size, rows }
    }

    /// Side length of the bounding box
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the cell at (row, col) inside the bounding box is filled
    pub fn is_filled(&self, row: u8, col: u8) -> bool {
        row < self.size && col < self.size && self.rows[row as usize] & (1 << col) != 0
    }

    /// Filled cells as (row, col) offsets, top to bottom then left to right
    pub fn cells(&self) -> [MinoOffset; 4] {
        let mut out = [(0, 0); 4];
        let mut n = 0;
        for r in 0..self.size {
            for c in 0..self.size {
                if n < out.len() && self.is_filled(r, c) {
                    out[n] = (r as i8, c as i8);
                    n += 1;
                }
            }
        }
        out
    }

    /// Number of filled cells
    pub fn count(&self) -> u32 {
        self.rows.iter().map(|r| r.count_ones()).sum()
    }
}

const O_SHAPE: Shape = Shape::parse(2, b"####");

/// Shapes indexed by `[kind.index()][rotation.index()]`
static SHAPES: [[Shape; 4]; 7] = [
    // I
    [
        Shape::parse(4, b"....####........"),
        Shape::parse(4, b"..#...#...#...#."),
        Shape::parse(4, b"........####...."),
        Shape::parse(4, b".#...#...#...#.."),
    ],
    // O
    [O_SHAPE, O_SHAPE, O_SHAPE, O_SHAPE],
    // T
    [
        Shape::parse(3, b".#.###..."),
        Shape::parse(3, b".#..##.#."),
        Shape::parse(3, b"...###.#."),
        Shape::parse(3, b".#.##..#."),
    ],
    // S
    [
        Shape::parse(3, b".####...."),
        Shape::parse(3, b".#..##..#"),
        Shape::parse(3, b"....####."),
        Shape::parse(3, b"#..##..#."),
    ],
    // Z
    [
        Shape::parse(3, b"##..##..."),
        Shape::parse(3, b"..#.##.#."),
        Shape::parse(3, b"...##..##"),
        Shape::parse(3, b".#.##.#.."),
    ],
    // J
    [
        Shape::parse(3, b"#..###..."),
        Shape::parse(3, b".##.#..#."),
        Shape::parse(3, b"...###..#"),
        Shape::parse(3, b".#..#.##."),
    ],
    // L
    [
        Shape::parse(3, b"..####..."),
        Shape::parse(3, b".#..#..##"),
        Shape::parse(3, b"...####.."),
        Shape::parse(3, b"##..#..#."),
    ],
];

/// Look up the bitmap for a piece kind and rotation
pub fn shape(kind: PieceKind, rotation: Rotation) -> &'static Shape {
    &SHAPES[kind.index()][rotation.index()]
}

/// Filled cells for a piece kind and rotation, as (row, col) offsets
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> [MinoOffset; 4] {
    shape(kind, rotation).cells()
}
