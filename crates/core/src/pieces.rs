//! Pieces module - tetromino bitmaps and rotation table
//!
//! Every orientation of every tetromino is a 4-row bitmap already laid out in
//! board columns (bit 7 = column 0), drawn bottom-aligned inside its box
//! around columns 2-5. A piece on the board is one of these bitmaps plus an
//! `(x, y)` offset of the box's top-left corner.
//!
//! The 19 orientations live in one catalog. Rotating a piece is a lookup in
//! the index-aligned [`ROTATED`] table; nothing compares bitmap contents.
//! Symmetric pieces simply have fewer entries (O has one, I/S/Z two).

use crate::types::PieceKind;

/// Rows of one piece orientation, top row first
pub type ShapeRows = [u8; 4];

/// Index into [`SHAPES`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(u8);

/// Number of distinct orientations across all seven kinds
pub const SHAPE_COUNT: usize = 19;

/// Orientation catalog
pub const SHAPES: [ShapeRows; SHAPE_COUNT] = [
    // 0-1: I
    [0, 0, 0, 0b0011_1100],
    [0b0001_0000, 0b0001_0000, 0b0001_0000, 0b0001_0000],
    // 2: O
    [0, 0, 0b0001_1000, 0b0001_1000],
    // 3-6: T (up, right, down, left)
    [0, 0, 0b0001_0000, 0b0011_1000],
    [0, 0b0001_0000, 0b0001_1000, 0b0001_0000],
    [0, 0, 0b0011_1000, 0b0001_0000],
    [0, 0b0001_0000, 0b0011_0000, 0b0001_0000],
    // 7-8: S
    [0, 0, 0b0001_1000, 0b0011_0000],
    [0, 0b0010_0000, 0b0011_0000, 0b0001_0000],
    // 9-10: Z
    [0, 0, 0b0011_0000, 0b0001_1000],
    [0, 0b0000_1000, 0b0001_1000, 0b0001_0000],
    // 11-14: J
    [0, 0, 0b0010_0000, 0b0011_1000],
    [0, 0b0001_1000, 0b0001_0000, 0b0001_0000],
    [0, 0, 0b0011_1000, 0b0000_1000],
    [0, 0b0001_0000, 0b0001_0000, 0b0011_0000],
    // 15-18: L
    [0, 0, 0b0000_1000, 0b0011_1000],
    [0, 0b0001_0000, 0b0001_0000, 0b0001_1000],
    [0, 0, 0b0011_1000, 0b0010_0000],
    [0, 0b0011_0000, 0b0001_0000, 0b0001_0000],
];

/// `ROTATED[i]` is the catalog index of shape `i` turned a quarter clockwise
pub const ROTATED: [u8; SHAPE_COUNT] = [
    1, 0, // I
    2, // O
    4, 5, 6, 3, // T
    8, 7, // S
    10, 9, // Z
    12, 13, 14, 11, // J
    16, 17, 18, 15, // L
];

/// Kind owning each catalog entry
const SHAPE_KINDS: [PieceKind; SHAPE_COUNT] = [
    PieceKind::I,
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::T,
    PieceKind::T,
    PieceKind::T,
    PieceKind::S,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::Z,
    PieceKind::J,
    PieceKind::J,
    PieceKind::J,
    PieceKind::J,
    PieceKind::L,
    PieceKind::L,
    PieceKind::L,
    PieceKind::L,
];

impl ShapeId {
    /// Spawn orientation of a kind
    pub fn spawn(kind: PieceKind) -> Self {
        let idx = match kind {
            PieceKind::I => 0,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 7,
            PieceKind::Z => 9,
            PieceKind::J => 11,
            PieceKind::L => 15,
        };
        Self(idx)
    }

    /// Look up a catalog index; `None` past the end of the catalog
    pub fn from_index(idx: usize) -> Option<Self> {
        if idx < SHAPE_COUNT {
            Some(Self(idx as u8))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn rows(self) -> ShapeRows {
        SHAPES[self.index()]
    }

    pub fn kind(self) -> PieceKind {
        SHAPE_KINDS[self.index()]
    }

    /// The orientation a quarter turn clockwise from this one
    pub fn rotated(self) -> Self {
        Self(ROTATED[self.index()])
    }
}
