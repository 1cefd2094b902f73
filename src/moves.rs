use std::{fmt, path::Path, str::FromStr};

use log::debug;
use serde::{Deserialize, Serialize};

use self::Move::*;
use crate::constants::*;
use crate::coord::Coord;
use crate::cubie::{self, Corner::*, CubieCube, Edge::*};
use crate::facelet::{Color, ALL_COLORS};
use crate::{error::Error, load_or_build};

/// Layer moves, Up, Right, Front, Down, Left, Back.
///
/// $ clockwise, $2 double, $3 counter-clockwise.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Move {
    U, U2, U3,
    R, R2, R3,
    F, F2, F3,
    D, D2, D3,
    L, L2, L3,
    B, B2, B3,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            U3 => write!(f, "U'"),
            D3 => write!(f, "D'"),
            R3 => write!(f, "R'"),
            L3 => write!(f, "L'"),
            F3 => write!(f, "F'"),
            B3 => write!(f, "B'"),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl FromStr for Move {
    type Err = Error;

    /// Parse a move token. `U'` and `U3` both denote the counter-clockwise quarter turn.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face = match chars.next() {
            Some('U') => Color::U,
            Some('R') => Color::R,
            Some('F') => Color::F,
            Some('D') => Color::D,
            Some('L') => Color::L,
            Some('B') => Color::B,
            _ => return Err(Error::InvalidMove(s.to_string())),
        };
        let power = match chars.as_str() {
            "" => 1,
            "2" => 2,
            "'" | "3" => 3,
            _ => return Err(Error::InvalidMove(s.to_string())),
        };
        Ok(Move::new(face, power))
    }
}

impl Move {
    /// The move turning `face` clockwise `power` times, 1 <= power <= 3.
    pub fn new(face: Color, power: u8) -> Self {
        ALL_MOVES[3 * face as usize + (power as usize + 2) % 3]
    }

    pub fn face(self) -> Color {
        ALL_COLORS[self as usize / 3]
    }

    /// Number of clockwise quarter turns, 1, 2 or 3.
    pub fn power(self) -> u8 {
        (self as usize % 3 + 1) as u8
    }

    pub fn inverse(self) -> Self {
        Move::new(self.face(), 4 - self.power())
    }

    pub fn is_same_face(self, other: Move) -> bool {
        self.face() == other.face()
    }

    /// True for the face pairs U/D, R/L and F/B.
    pub fn is_opposite_face(self, other: Move) -> bool {
        self.face() as usize % 3 == other.face() as usize % 3 && !self.is_same_face(other)
    }

    /// Two consecutive moves are redundant if they turn the same face or two opposite faces.
    pub fn is_redundant_after(self, prev: Move) -> bool {
        self.face() as usize % 3 == prev.face() as usize % 3
    }
}

/// The basic six cube moves described by permutations and changes in orientation.
///
/// U_MOVE
pub const U_MOVE: CubieCube = CubieCube {
    cp: [UBR, URF, UFL, ULB, DFR, DLF, DBL, DRB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UB, UR, UF, UL, DR, DF, DL, DB, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// R_MOVE
pub const R_MOVE: CubieCube = CubieCube {
    cp: [DFR, UFL, ULB, URF, DRB, DLF, DBL, UBR], // permutation of the corners
    co: [2, 0, 0, 1, 1, 0, 0, 2],                 // changes of the orientations of the corners
    ep: [FR, UF, UL, UB, BR, DF, DL, DB, DR, FL, BL, UR], // permutation of the edges
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],     // changes of the orientations of the edges
};

/// F_MOVE
pub const F_MOVE: CubieCube = CubieCube {
    cp: [UFL, DLF, ULB, UBR, URF, DFR, DBL, DRB],
    co: [1, 2, 0, 0, 2, 1, 0, 0],
    ep: [UR, FL, UL, UB, DR, FR, DL, DB, UF, DF, BL, BR],
    eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
};

/// D_MOVE
pub const D_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, ULB, UBR, DLF, DBL, DRB, DFR],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UR, UF, UL, UB, DF, DL, DB, DR, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// L_MOVE
pub const L_MOVE: CubieCube = CubieCube {
    cp: [URF, ULB, DBL, UBR, DFR, UFL, DLF, DRB],
    co: [0, 1, 2, 0, 0, 2, 1, 0],
    ep: [UR, UF, BL, UB, DR, DF, FL, DB, FR, UL, DL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// B_MOVE
pub const B_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, UBR, DRB, DFR, DLF, ULB, DBL],
    co: [0, 0, 1, 2, 0, 0, 2, 1],
    ep: [UR, UF, UL, BR, DR, DF, DL, BL, FR, FL, UB, DB],
    eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
};

/// Move tables for all six coordinates.
///
/// `table[N_MOVE * value + m]` is the coordinate value after applying move m to a cube with coordinate value.
/// All 18 moves are tabulated, also for the phase 2 coordinates.
pub struct MoveTables {
    pub twist_move: Vec<u16>,
    pub flip_move: Vec<u16>,
    pub slice_move: Vec<u16>,
    pub corners_move: Vec<u16>,
    pub ud_edges_move: Vec<u16>,
    pub slice_perm_move: Vec<u16>,
}

impl Default for MoveTables {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveTables {
    pub fn new() -> Self {
        Self {
            twist_move: move_table(Coord::Twist),
            flip_move: move_table(Coord::Flip),
            slice_move: move_table(Coord::Slice),
            corners_move: move_table(Coord::Corners),
            ud_edges_move: move_table(Coord::UdEdges),
            slice_perm_move: move_table(Coord::SlicePerm),
        }
    }

    /// Load the tables from `dir`, creating and storing the missing ones.
    pub fn load_or_create<P: AsRef<Path>>(dir: P) -> Result<Self, Error> {
        let dir = dir.as_ref();
        let load = |coord: Coord| {
            load_or_build(
                dir,
                &format!("move_{}", coord.name()),
                coord.size() * N_MOVE,
                || move_table(coord),
            )
        };
        Ok(Self {
            twist_move: load(Coord::Twist)?,
            flip_move: load(Coord::Flip)?,
            slice_move: load(Coord::Slice)?,
            corners_move: load(Coord::Corners)?,
            ud_edges_move: load(Coord::UdEdges)?,
            slice_perm_move: load(Coord::SlicePerm)?,
        })
    }

    pub fn table(&self, coord: Coord) -> &[u16] {
        match coord {
            Coord::Twist => &self.twist_move,
            Coord::Flip => &self.flip_move,
            Coord::Slice => &self.slice_move,
            Coord::Corners => &self.corners_move,
            Coord::UdEdges => &self.ud_edges_move,
            Coord::SlicePerm => &self.slice_perm_move,
        }
    }

    /// The value of `coord` after applying move `m` to a cube with coordinate `value`.
    #[inline]
    pub fn apply(&self, coord: Coord, value: u16, m: Move) -> u16 {
        self.table(coord)[N_MOVE * value as usize + m as usize]
    }
}

/// Build the move table of a coordinate.
///
/// For every value the representative cube is turned four times around each face. The first three
/// turns give the entries for $, $2 and $3, the fourth restores the cube.
pub fn move_table(coord: Coord) -> Vec<u16> {
    let bmc = cubie::basic_move_cubes();
    let mut table = vec![0; coord.size() * N_MOVE];
    for i in 0..coord.size() {
        let mut a = coord.decode(i as u16);
        for j in ALL_COLORS {
            for k in 0..3 {
                coord.multiply(&mut a, bmc[j as usize]);
                table[N_MOVE * i + 3 * j as usize + k] = coord.encode(&a);
            }
            coord.multiply(&mut a, bmc[j as usize]);
        }
    }
    debug!("created {} move table ({} entries)", coord.name(), table.len());
    table
}
