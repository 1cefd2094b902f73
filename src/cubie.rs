use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use self::{Corner::*, Edge::*};
use crate::error::Error;
use crate::moves::{Move, B_MOVE, D_MOVE, F_MOVE, L_MOVE, R_MOVE, U_MOVE};

/// The names of the corner positions of the cube. Corner URF e.g. has an U(p), a R(ight) and a F(ront) facelet.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Corner {
    URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB,
}

/// The names of the edge positions of the cube. Edge UR e.g. has an U(p) and R(ight) facelet.
#[rustfmt::skip]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Edge {
    UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR,
}

pub const ALL_CORNERS: [Corner; 8] = [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB];
pub const ALL_EDGES: [Edge; 12] = [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR];

const SLICE_EDGES: [Edge; 4] = [FR, FL, BL, BR];
const UD_EDGES: [Edge; 8] = [UR, UF, UL, UB, DR, DF, DL, DB];

/// Binomial coefficient, 0 when k > n.
fn c_nk(n: usize, k: usize) -> u16 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut s: usize = 1;
    for i in 0..k {
        s = s * (n - i) / (i + 1);
    }
    s as u16
}

/// Index of a permutation in the factorial number system, 0 for the identity.
fn permutation_to_index<T: PartialOrd>(perm: &[T]) -> u16 {
    let mut index = 0;
    for j in (1..perm.len()).rev() {
        let s = perm[..j].iter().filter(|p| **p > perm[j]).count();
        index = j * (index + s);
    }
    index as u16
}

/// Inverse of [permutation_to_index]: arrange `items` (given in solved order) into `perm`.
fn index_to_permutation<T: Copy>(index: u16, items: &[T], perm: &mut [T]) {
    let n = items.len();
    let mut index = index as usize;
    let mut coeffs = vec![0; n - 1];
    for i in 1..n {
        coeffs[i - 1] = index % (i + 1);
        index /= i + 1;
    }
    let mut items = items.to_vec();
    for i in (0..n - 1).rev() {
        perm[i + 1] = items.remove(i + 1 - coeffs[i]);
    }
    perm[0] = items[0];
}

/// Parity of a permutation, true if odd.
fn parity<T: PartialOrd>(perm: &[T]) -> bool {
    let mut s = 0;
    for i in (1..perm.len()).rev() {
        s += perm[..i].iter().filter(|p| **p > perm[i]).count();
    }
    s % 2 == 1
}

/// Represent a cube on the cubie level with 8 corner cubies, 12 edge cubies and the cubie orientations.
///
/// `cp[i]` is the corner occupying corner position i, `co[i]` its twist (0, 1 or 2).
/// `ep[i]` is the edge occupying edge position i, `eo[i]` its flip (0 or 1).
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct CubieCube {
    pub cp: [Corner; 8],
    pub co: [u8; 8],
    pub ep: [Edge; 12],
    pub eo: [u8; 12],
}

impl Default for CubieCube {
    fn default() -> Self {
        Self {
            cp: ALL_CORNERS,
            co: [0; 8],
            ep: ALL_EDGES,
            eo: [0; 12],
        }
    }
}

impl fmt::Display for CubieCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..8 {
            write!(f, "({:?},{})", self.cp[i], self.co[i])?;
        }
        writeln!(f)?;
        for i in 0..12 {
            write!(f, "({:?},{})", self.ep[i], self.eo[i])?;
        }
        Ok(())
    }
}

impl From<&[Move]> for CubieCube {
    /// The cube reached by applying the moves to a solved cube.
    fn from(moves: &[Move]) -> Self {
        let mut cc = CubieCube::default();
        cc.multiply_moves(moves);
        cc
    }
}

impl From<&Vec<Move>> for CubieCube {
    fn from(moves: &Vec<Move>) -> Self {
        CubieCube::from(moves.as_slice())
    }
}

/// The six basic face turns as cubie cubes, in the order U, R, F, D, L, B.
pub fn basic_move_cubes() -> [CubieCube; 6] {
    [U_MOVE, R_MOVE, F_MOVE, D_MOVE, L_MOVE, B_MOVE]
}

impl CubieCube {
    /// Multiply this cubie cube with another cubie cube b, restricted to the corners.
    ///
    /// The corner at position i afterwards is the corner this cube had at position b.cp[i],
    /// twisted additionally by b.co[i].
    pub fn corner_multiply(&mut self, b: CubieCube) {
        let mut cp = [URF; 8];
        let mut co = [0; 8];
        for i in 0..8 {
            let from = b.cp[i] as usize;
            cp[i] = self.cp[from];
            co[i] = (self.co[from] + b.co[i]) % 3;
        }
        self.cp = cp;
        self.co = co;
    }

    /// Multiply this cubie cube with another cubie cube b, restricted to the edges.
    pub fn edge_multiply(&mut self, b: CubieCube) {
        let mut ep = [UR; 12];
        let mut eo = [0; 12];
        for i in 0..12 {
            let from = b.ep[i] as usize;
            ep[i] = self.ep[from];
            eo[i] = (self.eo[from] + b.eo[i]) % 2;
        }
        self.ep = ep;
        self.eo = eo;
    }

    /// Multiply this cubie cube with another cubie cube b.
    pub fn multiply(&mut self, b: CubieCube) {
        self.corner_multiply(b);
        self.edge_multiply(b);
    }

    /// Apply a move: the face's quarter turn, repeated `power` times.
    pub fn multiply_move(&mut self, m: Move) {
        let bmc = basic_move_cubes()[m.face() as usize];
        for _ in 0..m.power() {
            self.multiply(bmc);
        }
    }

    /// Apply a sequence of moves in place.
    pub fn multiply_moves(&mut self, moves: &[Move]) {
        for &m in moves {
            self.multiply_move(m);
        }
    }

    pub fn apply_move(&self, m: Move) -> Self {
        let mut cc = *self;
        cc.multiply_move(m);
        cc
    }

    /// Return the cube reached by applying the moves to this cube.
    pub fn apply_moves(&self, moves: &[Move]) -> Self {
        let mut cc = *self;
        cc.multiply_moves(moves);
        cc
    }

    /// The inverse cube, `cc * cc.inverse() == identity`.
    pub fn inverse(&self) -> Self {
        let mut inv = CubieCube::default();
        for (i, e) in self.ep.iter().enumerate() {
            inv.ep[*e as usize] = ALL_EDGES[i];
        }
        for i in 0..12 {
            inv.eo[i] = self.eo[inv.ep[i] as usize];
        }
        for (i, c) in self.cp.iter().enumerate() {
            inv.cp[*c as usize] = ALL_CORNERS[i];
        }
        for i in 0..8 {
            inv.co[i] = (3 - self.co[inv.cp[i] as usize]) % 3;
        }
        inv
    }

    pub fn is_solved(&self) -> bool {
        *self == CubieCube::default()
    }

    /// Twist coordinate: the orientations of the corners URF..DBL in base 3, 0 <= twist < 2187.
    ///
    /// The orientation of DRB follows from the others.
    pub fn twist(&self) -> u16 {
        self.co[..7]
            .iter()
            .fold(0, |acc, &co| 3 * acc + co as u16)
    }

    /// A solved cube with the given twist coordinate.
    pub fn from_twist(twist: u16) -> Self {
        let mut cc = CubieCube::default();
        let mut twist = twist;
        let mut total = 0;
        for i in (0..7).rev() {
            cc.co[i] = (twist % 3) as u8;
            total += cc.co[i];
            twist /= 3;
        }
        cc.co[7] = (3 - total % 3) % 3;
        cc
    }

    /// Flip coordinate: the orientations of the edges UR..BL in base 2, 0 <= flip < 2048.
    ///
    /// The orientation of BR follows from the others.
    pub fn flip(&self) -> u16 {
        self.eo[..11]
            .iter()
            .fold(0, |acc, &eo| 2 * acc + eo as u16)
    }

    /// A solved cube with the given flip coordinate.
    pub fn from_flip(flip: u16) -> Self {
        let mut cc = CubieCube::default();
        let mut flip = flip;
        let mut total = 0;
        for i in (0..11).rev() {
            cc.eo[i] = (flip % 2) as u8;
            total += cc.eo[i];
            flip /= 2;
        }
        cc.eo[11] = total % 2;
        cc
    }

    /// Slice coordinate: which 4 of the 12 edge positions hold the FR, FL, BL and BR edges,
    /// 0 <= slice < 495. 0 when they are all in the UD-slice.
    pub fn slice(&self) -> u16 {
        let mut slice = 0;
        let mut seen = 0;
        for (i, e) in self.ep.iter().enumerate() {
            if SLICE_EDGES.contains(e) {
                seen += 1;
            } else if seen >= 1 {
                slice += c_nk(i, seen - 1);
            }
        }
        slice
    }

    /// A cube with the given slice coordinate. The slice edges appear in the order FR, FL, BL, BR
    /// and the other edges fill the remaining positions in the order UR..DB.
    pub fn from_slice(slice: u16) -> Self {
        let mut cc = CubieCube::default();
        let mut slice = slice as i32;
        let mut occupied = [false; 12];
        let mut seen = 4;
        for i in (0..12).rev() {
            if seen == 0 {
                break;
            }
            let c = c_nk(i, seen - 1) as i32;
            if slice - c < 0 {
                seen -= 1;
                cc.ep[i] = SLICE_EDGES[seen];
                occupied[i] = true;
            } else {
                slice -= c;
            }
        }
        let mut others = UD_EDGES.iter();
        for i in 0..12 {
            if !occupied[i] {
                if let Some(e) = others.next() {
                    cc.ep[i] = *e;
                }
            }
        }
        cc
    }

    /// Corners coordinate: the permutation of the 8 corners, 0 <= corners < 40320.
    pub fn corners(&self) -> u16 {
        permutation_to_index(&self.cp)
    }

    /// A solved cube with the given corners coordinate.
    pub fn from_corners(corners: u16) -> Self {
        let mut cc = CubieCube::default();
        index_to_permutation(corners, &ALL_CORNERS, &mut cc.cp);
        cc
    }

    /// UD edges coordinate: the permutation of the edges in the positions UR..DB,
    /// 0 <= ud_edges < 40320. Only meaningful in phase 2.
    pub fn ud_edges(&self) -> u16 {
        permutation_to_index(&self.ep[..8])
    }

    /// A solved cube with the given ud_edges coordinate.
    pub fn from_ud_edges(ud_edges: u16) -> Self {
        let mut cc = CubieCube::default();
        index_to_permutation(ud_edges, &UD_EDGES, &mut cc.ep[..8]);
        cc
    }

    /// Slice permutation coordinate: the permutation of the edges in the positions FR..BR,
    /// 0 <= slice_perm < 24. Only meaningful in phase 2.
    pub fn slice_perm(&self) -> u16 {
        permutation_to_index(&self.ep[8..])
    }

    /// A solved cube with the given slice_perm coordinate.
    pub fn from_slice_perm(slice_perm: u16) -> Self {
        let mut cc = CubieCube::default();
        index_to_permutation(slice_perm, &SLICE_EDGES, &mut cc.ep[8..]);
        cc
    }

    /// Parity of the corner permutation, true if odd.
    pub fn corner_parity(&self) -> bool {
        parity(&self.cp)
    }

    /// Parity of the edge permutation, true if odd. Equals the corner parity for a solvable cube.
    pub fn edge_parity(&self) -> bool {
        parity(&self.ep)
    }

    /// Check if the cubie cube is a solvable cube.
    pub fn validate(&self) -> Result<(), Error> {
        let mut edge_count = [0; 12];
        for e in self.ep {
            edge_count[e as usize] += 1;
        }
        if edge_count.iter().any(|&n| n != 1) {
            return Err(Error::DuplicateEdge);
        }
        if self.eo.iter().map(|&o| o as u32).sum::<u32>() % 2 != 0 {
            return Err(Error::EdgeFlip);
        }

        let mut corner_count = [0; 8];
        for c in self.cp {
            corner_count[c as usize] += 1;
        }
        if corner_count.iter().any(|&n| n != 1) {
            return Err(Error::DuplicateCorner);
        }
        if self.co.iter().map(|&o| o as u32).sum::<u32>() % 3 != 0 {
            return Err(Error::CornerTwist);
        }

        if self.edge_parity() != self.corner_parity() {
            return Err(Error::Parity);
        }
        Ok(())
    }

    pub fn is_solvable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Generate a random solvable cube.
    pub fn randomize(&mut self) {
        let mut rng = rand::thread_rng();
        self.ep.shuffle(&mut rng);
        self.cp.shuffle(&mut rng);
        if self.edge_parity() != self.corner_parity() {
            self.ep.swap(0, 1);
        }
        let mut flips = 0;
        for i in 0..11 {
            self.eo[i] = rng.gen_range(0..2);
            flips += self.eo[i];
        }
        self.eo[11] = flips % 2;
        let mut twists = 0;
        for i in 0..7 {
            self.co[i] = rng.gen_range(0..3);
            twists += self.co[i];
        }
        self.co[7] = (3 - twists % 3) % 3;
    }
}
