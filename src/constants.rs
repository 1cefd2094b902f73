use crate::moves::Move::{self, *};

// Phase 1 coordinates
pub const N_TWIST: usize = 2187; // 3^7 possible corner orientations
pub const N_FLIP: usize = 2048; // 2^11 possible edge orientations
pub const N_SLICE: usize = 495; // 12 choose 4 positions of the FR, FL, BL and BR edges

// Phase 2 coordinates
pub const N_CORNERS: usize = 40320; // 8! corner permutations
pub const N_UD_EDGES: usize = 40320; // 8! permutations of the edges in the U-face and D-face
pub const N_PERM_4: usize = 24; // 4! permutations of the FR, FL, BL and BR edges

pub const N_MOVE: usize = 18; // number of possible face moves

/// Upper bound for the length of a solution found by the two phase search.
pub const MAX_LENGTH: usize = 29;

/// Goal value of every coordinate.
pub const SOLVED: u16 = 0;

/// Pruning table entry for a coordinate pair never reached from the goal.
pub const UNREACHED: u8 = 0xff;

#[rustfmt::skip]
pub const ALL_MOVES: [Move; N_MOVE] = [
    U, U2, U3,
    R, R2, R3,
    F, F2, F3,
    D, D2, D3,
    L, L2, L3,
    B, B2, B3,
];

/// Moves which keep a cube inside the phase 2 subgroup <U, D, R2, F2, L2, B2>.
pub const PHASE2_MOVES: [Move; 10] = [U, U2, U3, R2, F2, D, D2, D3, L2, B2];
