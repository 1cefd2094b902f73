use std::fmt;

use crate::cubie::{CubieCube, ALL_CORNERS, ALL_EDGES};
use crate::error::Error;

use self::Facelet::*;

/// The names of the facelet positions of the cube.
///
/// ```text
///              |************|
///              |*U1**U2**U3*|
///              |************|
///              |*U4**U5**U6*|
///              |************|
///              |*U7**U8**U9*|
///              |************|
/// |************|************|************|************|
/// |*L1**L2**L3*|*F1**F2**F3*|*R1**R2**R3*|*B1**B2**B3*|
/// |************|************|************|************|
/// |*L4**L5**L6*|*F4**F5**F6*|*R4**R5**R6*|*B4**B5**B6*|
/// |************|************|************|************|
/// |*L7**L8**L9*|*F7**F8**F9*|*R7**R8**R9*|*B7**B8**B9*|
/// |************|************|************|************|
///              |************|
///              |*D1**D2**D3*|
///              |************|
///              |*D4**D5**D6*|
///              |************|
///              |*D7**D8**D9*|
///              |************|
/// ```
///
/// A facelet string lists the facelets in the order U1..U9, R1..R9, F1..F9, D1..D9, L1..L9, B1..B9.
#[rustfmt::skip]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Facelet {
    U1, U2, U3, U4, U5, U6, U7, U8, U9,
    R1, R2, R3, R4, R5, R6, R7, R8, R9,
    F1, F2, F3, F4, F5, F6, F7, F8, F9,
    D1, D2, D3, D4, D5, D6, D7, D8, D9,
    L1, L2, L3, L4, L5, L6, L7, L8, L9,
    B1, B2, B3, B4, B5, B6, B7, B8, B9,
}

/// The face a facelet belongs to in the solved cube, named by the face's center.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Color {
    U,
    R,
    F,
    D,
    L,
    B,
}

pub const ALL_COLORS: [Color; 6] = [Color::U, Color::R, Color::F, Color::D, Color::L, Color::B];

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TryFrom<char> for Color {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'U' => Ok(Color::U),
            'R' => Ok(Color::R),
            'F' => Ok(Color::F),
            'D' => Ok(Color::D),
            'L' => Ok(Color::L),
            'B' => Ok(Color::B),
            _ => Err(Error::InvalidFaceletString),
        }
    }
}

/// Map the corner positions to facelet positions.
pub const CORNER_FACELET: [[Facelet; 3]; 8] = [
    [U9, R1, F3],
    [U7, F1, L3],
    [U1, L1, B3],
    [U3, B1, R3],
    [D3, F9, R7],
    [D1, L9, F7],
    [D7, B9, L7],
    [D9, R9, B7],
];

/// Map the edge positions to facelet positions.
pub const EDGE_FACELET: [[Facelet; 2]; 12] = [
    [U6, R2],
    [U8, F2],
    [U4, L2],
    [U2, B2],
    [D6, R8],
    [D2, F8],
    [D4, L8],
    [D8, B8],
    [F6, R4],
    [F4, L6],
    [B6, L4],
    [B4, R6],
];

/// Map the corner positions to facelet colors.
pub const CORNER_COLOR: [[Color; 3]; 8] = [
    [Color::U, Color::R, Color::F],
    [Color::U, Color::F, Color::L],
    [Color::U, Color::L, Color::B],
    [Color::U, Color::B, Color::R],
    [Color::D, Color::F, Color::R],
    [Color::D, Color::L, Color::F],
    [Color::D, Color::B, Color::L],
    [Color::D, Color::R, Color::B],
];

/// Map the edge positions to facelet colors.
pub const EDGE_COLOR: [[Color; 2]; 12] = [
    [Color::U, Color::R],
    [Color::U, Color::F],
    [Color::U, Color::L],
    [Color::U, Color::B],
    [Color::D, Color::R],
    [Color::D, Color::F],
    [Color::D, Color::L],
    [Color::D, Color::B],
    [Color::F, Color::R],
    [Color::F, Color::L],
    [Color::B, Color::L],
    [Color::B, Color::R],
];

/// Cube on the facelet level.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FaceCube {
    pub f: [Color; 54],
}

impl Default for FaceCube {
    fn default() -> Self {
        let mut f = [Color::U; 54];
        for (i, facelet) in f.iter_mut().enumerate() {
            *facelet = ALL_COLORS[i / 9];
        }
        Self { f }
    }
}

impl fmt::Display for FaceCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.f {
            write!(f, "{}", color)?;
        }
        Ok(())
    }
}

impl TryFrom<&str> for FaceCube {
    type Error = Error;

    /// Parse a facelet string like `UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB`.
    fn try_from(cube_string: &str) -> Result<Self, Self::Error> {
        let chars: Vec<char> = cube_string.chars().collect();
        if chars.len() != 54 {
            return Err(Error::InvalidLength(chars.len()));
        }
        let mut f = [Color::U; 54];
        let mut count = [0usize; 6];
        for (i, c) in chars.into_iter().enumerate() {
            f[i] = Color::try_from(c)?;
            count[f[i] as usize] += 1;
        }
        for (color, n) in ALL_COLORS.iter().zip(count) {
            if n != 9 {
                return Err(Error::InvalidColorCount(color.to_string().remove(0), n));
            }
        }
        Ok(Self { f })
    }
}

impl From<&CubieCube> for FaceCube {
    /// Return a facelet representation of the cube.
    fn from(cc: &CubieCube) -> Self {
        let mut fc = FaceCube::default();
        for (i, corner) in cc.cp.iter().enumerate() {
            let ori = cc.co[i] as usize;
            for k in 0..3 {
                fc.f[CORNER_FACELET[i][(k + ori) % 3] as usize] = CORNER_COLOR[*corner as usize][k];
            }
        }
        for (i, edge) in cc.ep.iter().enumerate() {
            let ori = cc.eo[i] as usize;
            for k in 0..2 {
                fc.f[EDGE_FACELET[i][(k + ori) % 2] as usize] = EDGE_COLOR[*edge as usize][k];
            }
        }
        fc
    }
}

impl TryFrom<&FaceCube> for CubieCube {
    type Error = Error;

    /// Identify the cubies from the facelet colors.
    ///
    /// The orientation of a corner is the index of its U or D colored facelet. An edge has
    /// orientation 0 if its colors appear in the canonical order and 1 if they are swapped.
    fn try_from(fc: &FaceCube) -> Result<Self, Self::Error> {
        let mut cc = CubieCube::default();

        for i in 0..8 {
            let fac = CORNER_FACELET[i];
            let ori = (0..3)
                .find(|&o| matches!(fc.f[fac[o] as usize], Color::U | Color::D))
                .ok_or(Error::InvalidCorner(i))?;
            let col1 = fc.f[fac[(ori + 1) % 3] as usize];
            let col2 = fc.f[fac[(ori + 2) % 3] as usize];
            let j = (0..8)
                .find(|&j| col1 == CORNER_COLOR[j][1] && col2 == CORNER_COLOR[j][2])
                .ok_or(Error::InvalidCorner(i))?;
            cc.cp[i] = ALL_CORNERS[j];
            cc.co[i] = ori as u8;
        }

        for i in 0..12 {
            let col0 = fc.f[EDGE_FACELET[i][0] as usize];
            let col1 = fc.f[EDGE_FACELET[i][1] as usize];
            let (j, ori) = (0..12)
                .find_map(|j| {
                    if col0 == EDGE_COLOR[j][0] && col1 == EDGE_COLOR[j][1] {
                        Some((j, 0))
                    } else if col0 == EDGE_COLOR[j][1] && col1 == EDGE_COLOR[j][0] {
                        Some((j, 1))
                    } else {
                        None
                    }
                })
                .ok_or(Error::InvalidEdge(i))?;
            cc.ep[i] = ALL_EDGES[j];
            cc.eo[i] = ori;
        }
        Ok(cc)
    }
}
