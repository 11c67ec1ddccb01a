//! Pieces module - piece templates and the closed-form rotation map
//!
//! Every piece is a single 16-cell pattern describing rotation 0 inside a 4x4 box.
//! The other three rotations are not stored: [`pattern_index`] maps a local cell
//! of a rotated piece back onto the rotation-0 pattern.

use crate::types::{PieceKind, Rotation, PIECE_BOX};

/// Offset of a single mino relative to the piece anchor (top-left of the 4x4 box)
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

/// Rotation-0 templates, indexed by shape id. Row-major, `X` marks a filled cell.
const TEMPLATES: [&[u8; 16]; 7] = [
    b"..X...X...X...X.", // I
    b"..X..XX...X.....", // T
    b".....XX..XX.....", // O
    b"..X..XX..X......", // S
    b".X...XX...X.....", // Z
    b".X...X...XX.....", // J
    b"..X...X..XX.....", // L
];

/// Map a local cell of a rotated piece to its index in the rotation-0 pattern.
///
/// `x` and `y` must lie in `[0, 4)`; every result is then in `[0, 16)`.
#[inline(always)]
pub fn pattern_index(rotation: Rotation, x: u8, y: u8) -> usize {
    debug_assert!(x < PIECE_BOX && y < PIECE_BOX);
    let (x, y) = (x as usize, y as usize);
    match rotation {
        Rotation::North => y * 4 + x,
        Rotation::East => 12 + y - 4 * x,
        Rotation::South => 15 - 4 * y - x,
        Rotation::West => 3 - y + 4 * x,
    }
}

/// Whether local cell `(x, y)` of `kind` at `rotation` is filled.
///
/// Cells outside the 4x4 box are never filled.
pub fn occupied(kind: PieceKind, rotation: Rotation, x: u8, y: u8) -> bool {
    if x >= PIECE_BOX || y >= PIECE_BOX {
        return false;
    }
    TEMPLATES[kind.id() as usize][pattern_index(rotation, x, y)] == b'X'
}

/// Get the filled cells (mino offsets) for a piece kind and rotation.
///
/// Offsets come out in row-major scan order of the rotated box.
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let mut shape = [(0, 0); 4];
    let mut n = 0usize;
    for y in 0..PIECE_BOX {
        for x in 0..PIECE_BOX {
            if occupied(kind, rotation, x, y) {
                debug_assert!(n < 4, "template for {:?} has more than 4 cells", kind);
                shape[n] = (x as i8, y as i8);
                n += 1;
            }
        }
    }
    debug_assert_eq!(n, 4, "template for {:?} must have 4 cells", kind);
    shape
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[test]
    fn test_pattern_index_stays_in_box() {
        for r in ROTATIONS {
            let mut seen = [false; 16];
            for y in 0..4 {
                for x in 0..4 {
                    let i = pattern_index(r, x, y);
                    assert!(i < 16);
                    seen[i] = true;
                }
            }
            // Each rotation is a permutation of the 16 cells.
            assert!(seen.iter().all(|s| *s), "{:?} is not a permutation", r);
        }
    }

    #[test]
    fn test_o_piece_rotations_are_identical() {
        let north = get_shape(PieceKind::O, Rotation::North);
        for r in ROTATIONS {
            assert_eq!(get_shape(PieceKind::O, r), north);
        }
        assert_eq!(north, [(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_i_piece_east_is_horizontal() {
        // Rotation 0 is the vertical bar in column 2; one clockwise turn lays it on row 2.
        assert_eq!(
            get_shape(PieceKind::I, Rotation::North),
            [(2, 0), (2, 1), (2, 2), (2, 3)]
        );
        assert_eq!(
            get_shape(PieceKind::I, Rotation::East),
            [(0, 2), (1, 2), (2, 2), (3, 2)]
        );
    }

    #[test]
    fn test_out_of_box_is_empty() {
        assert!(!occupied(PieceKind::I, Rotation::North, 4, 0));
        assert!(!occupied(PieceKind::I, Rotation::North, 2, 4));
    }
}
