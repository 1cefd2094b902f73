use std::path::Path;

use log::debug;

use crate::constants::*;
use crate::coord::{Coord, CoordCube};
use crate::error::Error;
use crate::load_or_build;
use crate::moves::{Move, MoveTables};

/// The pruning tables cut the search tree during the search.
///
/// Each table stores, for every pair of coordinate values, the exact number of moves needed to bring
/// both coordinates to 0 at the same time. The index of the pair (a, b) is `a * b.size() + b`.
/// The larger of the two phase 1 (or phase 2) entries is a lower bound for the remaining moves.
pub struct PruningTables {
    /// slice x twist, phase 1, all 18 moves.
    pub slice_twist_prun: Vec<u8>,
    /// slice x flip, phase 1, all 18 moves.
    pub slice_flip_prun: Vec<u8>,
    /// slice_perm x corners, phase 2 moves only.
    pub slice_perm_corners_prun: Vec<u8>,
    /// slice_perm x ud_edges, phase 2 moves only.
    pub slice_perm_ud_edges_prun: Vec<u8>,
}

impl PruningTables {
    pub fn new(mt: &MoveTables) -> Self {
        Self {
            slice_twist_prun: create_prun_table(mt, Coord::Slice, Coord::Twist, &ALL_MOVES),
            slice_flip_prun: create_prun_table(mt, Coord::Slice, Coord::Flip, &ALL_MOVES),
            slice_perm_corners_prun: create_prun_table(
                mt,
                Coord::SlicePerm,
                Coord::Corners,
                &PHASE2_MOVES,
            ),
            slice_perm_ud_edges_prun: create_prun_table(
                mt,
                Coord::SlicePerm,
                Coord::UdEdges,
                &PHASE2_MOVES,
            ),
        }
    }

    /// Load the tables from `dir`, creating and storing the missing ones.
    pub fn load_or_create<P: AsRef<Path>>(dir: P, mt: &MoveTables) -> Result<Self, Error> {
        let dir = dir.as_ref();
        let load = |a: Coord, b: Coord, moves: &[Move]| {
            load_or_build(
                dir,
                &format!("prun_{}_{}", a.name(), b.name()),
                a.size() * b.size(),
                || create_prun_table(mt, a, b, moves),
            )
        };
        Ok(Self {
            slice_twist_prun: load(Coord::Slice, Coord::Twist, &ALL_MOVES)?,
            slice_flip_prun: load(Coord::Slice, Coord::Flip, &ALL_MOVES)?,
            slice_perm_corners_prun: load(Coord::SlicePerm, Coord::Corners, &PHASE2_MOVES)?,
            slice_perm_ud_edges_prun: load(Coord::SlicePerm, Coord::UdEdges, &PHASE2_MOVES)?,
        })
    }

    #[inline]
    pub fn get_slice_twist_depth(&self, slice: u16, twist: u16) -> u8 {
        self.slice_twist_prun[N_TWIST * slice as usize + twist as usize]
    }

    #[inline]
    pub fn get_slice_flip_depth(&self, slice: u16, flip: u16) -> u8 {
        self.slice_flip_prun[N_FLIP * slice as usize + flip as usize]
    }

    #[inline]
    pub fn get_slice_perm_corners_depth(&self, slice_perm: u16, corners: u16) -> u8 {
        self.slice_perm_corners_prun[N_CORNERS * slice_perm as usize + corners as usize]
    }

    #[inline]
    pub fn get_slice_perm_ud_edges_depth(&self, slice_perm: u16, ud_edges: u16) -> u8 {
        self.slice_perm_ud_edges_prun[N_UD_EDGES * slice_perm as usize + ud_edges as usize]
    }

    /// Lower bound for the number of moves to reach the phase 2 subgroup, 0 exactly in the subgroup.
    pub fn phase1_depth(&self, twist: u16, flip: u16, slice: u16) -> u8 {
        self.get_slice_twist_depth(slice, twist)
            .max(self.get_slice_flip_depth(slice, flip))
    }

    /// Lower bound for the number of phase 2 moves to solve a phase 2 cube, 0 exactly when solved.
    pub fn phase2_depth(&self, corners: u16, ud_edges: u16, slice_perm: u16) -> u8 {
        self.get_slice_perm_corners_depth(slice_perm, corners)
            .max(self.get_slice_perm_ud_edges_depth(slice_perm, ud_edges))
    }

    pub fn phase1_depth_of(&self, co: &CoordCube) -> u8 {
        self.phase1_depth(co.twist, co.flip, co.slice)
    }

    pub fn phase2_depth_of(&self, co: &CoordCube) -> u8 {
        self.phase2_depth(co.corners, co.ud_edges, co.slice_perm)
    }
}

/// Breadth first search from the goal (0, 0) over the pairs of coordinates a and b.
///
/// Every pair reachable with `moves` gets its distance to the goal. Pairs that are never reached
/// keep the value [UNREACHED].
pub fn create_prun_table(mt: &MoveTables, a: Coord, b: Coord, moves: &[Move]) -> Vec<u8> {
    let n_b = b.size();
    let total = a.size() * n_b;
    let a_move = mt.table(a);
    let b_move = mt.table(b);

    let mut table = vec![UNREACHED; total];
    table[0] = 0;
    let mut frontier = vec![0usize];
    let mut done = 1;
    let mut depth = 0;
    while !frontier.is_empty() {
        let mut next = Vec::new();
        for &idx in &frontier {
            let (va, vb) = (idx / n_b, idx % n_b);
            for &m in moves {
                let idx1 = n_b * a_move[N_MOVE * va + m as usize] as usize
                    + b_move[N_MOVE * vb + m as usize] as usize;
                if table[idx1] == UNREACHED {
                    table[idx1] = depth + 1;
                    next.push(idx1);
                }
            }
        }
        depth += 1;
        done += next.len();
        frontier = next;
        debug!(
            "{}_{} pruning table depth: {} done: {}/{}",
            a.name(),
            b.name(),
            depth,
            done,
            total
        );
    }
    table
}

/// Number of entries per distance, the last element belongs to the largest distance.
pub fn depth_distribution(table: &[u8]) -> Vec<usize> {
    let max = table
        .iter()
        .filter(|&&d| d != UNREACHED)
        .max()
        .copied()
        .unwrap_or(0);
    let mut counts = vec![0; max as usize + 1];
    for &d in table.iter().filter(|&&d| d != UNREACHED) {
        counts[d as usize] += 1;
    }
    counts
}
