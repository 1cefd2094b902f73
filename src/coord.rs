use std::fmt;

use crate::constants::*;
use crate::cubie::CubieCube;
use crate::moves::{Move, MoveTables};

/// The six coordinates of the two phase algorithm.
///
/// Phase 1 brings twist, flip and slice to 0. Phase 2 then solves corners, ud_edges and slice_perm
/// using only moves of the subgroup <U, D, R2, F2, L2, B2>.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Coord {
    Twist,
    Flip,
    Slice,
    Corners,
    UdEdges,
    SlicePerm,
}

impl Coord {
    pub const ALL: [Coord; 6] = [
        Coord::Twist,
        Coord::Flip,
        Coord::Slice,
        Coord::Corners,
        Coord::UdEdges,
        Coord::SlicePerm,
    ];

    /// Number of values of the coordinate.
    pub fn size(self) -> usize {
        match self {
            Coord::Twist => N_TWIST,
            Coord::Flip => N_FLIP,
            Coord::Slice => N_SLICE,
            Coord::Corners => N_CORNERS,
            Coord::UdEdges => N_UD_EDGES,
            Coord::SlicePerm => N_PERM_4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Coord::Twist => "twist",
            Coord::Flip => "flip",
            Coord::Slice => "slice",
            Coord::Corners => "corners",
            Coord::UdEdges => "ud_edges",
            Coord::SlicePerm => "slice_perm",
        }
    }

    pub fn encode(self, cc: &CubieCube) -> u16 {
        match self {
            Coord::Twist => cc.twist(),
            Coord::Flip => cc.flip(),
            Coord::Slice => cc.slice(),
            Coord::Corners => cc.corners(),
            Coord::UdEdges => cc.ud_edges(),
            Coord::SlicePerm => cc.slice_perm(),
        }
    }

    /// A representative cube with the given coordinate value, the other cubies are solved.
    pub fn decode(self, value: u16) -> CubieCube {
        match self {
            Coord::Twist => CubieCube::from_twist(value),
            Coord::Flip => CubieCube::from_flip(value),
            Coord::Slice => CubieCube::from_slice(value),
            Coord::Corners => CubieCube::from_corners(value),
            Coord::UdEdges => CubieCube::from_ud_edges(value),
            Coord::SlicePerm => CubieCube::from_slice_perm(value),
        }
    }

    /// Corner coordinates only need the corner part of a product, edge coordinates the edge part.
    pub fn multiply(self, cc: &mut CubieCube, b: CubieCube) {
        match self {
            Coord::Twist | Coord::Corners => cc.corner_multiply(b),
            Coord::Flip | Coord::Slice | Coord::UdEdges | Coord::SlicePerm => cc.edge_multiply(b),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Represent a cube on the coordinate level.
///
/// In phase 1 a state is described by twist, flip and slice. ud_edges and slice_perm are only
/// meaningful once the cube is in the phase 2 subgroup.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct CoordCube {
    pub twist: u16,
    pub flip: u16,
    pub slice: u16,
    pub corners: u16,
    pub ud_edges: u16,
    pub slice_perm: u16,
}

impl From<&CubieCube> for CoordCube {
    fn from(cc: &CubieCube) -> Self {
        Self {
            twist: cc.twist(),
            flip: cc.flip(),
            slice: cc.slice(),
            corners: cc.corners(),
            ud_edges: cc.ud_edges(),
            slice_perm: cc.slice_perm(),
        }
    }
}

impl fmt::Display for CoordCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(twist: {}, flip: {}, slice: {}, corners: {}, ud_edges: {}, slice_perm: {})",
            self.twist, self.flip, self.slice, self.corners, self.ud_edges, self.slice_perm
        )
    }
}

impl CoordCube {
    /// Update the phase 1 coordinates when move `m` is applied.
    pub fn phase1_move(&mut self, mt: &MoveTables, m: Move) {
        self.twist = mt.apply(Coord::Twist, self.twist, m);
        self.flip = mt.apply(Coord::Flip, self.flip, m);
        self.slice = mt.apply(Coord::Slice, self.slice, m);
    }

    /// Update the phase 2 coordinates when move `m` is applied. `m` must be a phase 2 move.
    pub fn phase2_move(&mut self, mt: &MoveTables, m: Move) {
        self.corners = mt.apply(Coord::Corners, self.corners, m);
        self.ud_edges = mt.apply(Coord::UdEdges, self.ud_edges, m);
        self.slice_perm = mt.apply(Coord::SlicePerm, self.slice_perm, m);
    }

    /// The cube is in the subgroup <U, D, R2, F2, L2, B2>.
    pub fn is_phase1_solved(&self) -> bool {
        self.twist == SOLVED && self.flip == SOLVED && self.slice == SOLVED
    }

    pub fn is_solved(&self) -> bool {
        self.is_phase1_solved()
            && self.corners == SOLVED
            && self.ud_edges == SOLVED
            && self.slice_perm == SOLVED
    }
}

#[cfg(test)]
mod test {
    use crate::coord::*;
    use crate::facelet::FaceCube;
    use crate::moves::Move::*;

    #[test]
    fn test_coord_sizes() {
        let sizes: Vec<usize> = Coord::ALL.iter().map(|c| c.size()).collect();
        assert_eq!(sizes, vec![2187, 2048, 495, 40320, 40320, 24]);
    }

    #[test]
    fn test_decode_encode() {
        for coord in Coord::ALL {
            for v in (0..coord.size()).step_by(11) {
                assert_eq!(coord.encode(&coord.decode(v as u16)), v as u16, "{coord}");
            }
        }
    }

    #[test]
    fn test_coord_cube_from_cubie() {
        let fc =
            FaceCube::try_from("LUULURUBLUDRRRFLLRLUFUFBFFDRDFDDFRBDDBBULLULDBFBRBRBDF").unwrap();
        let cc = CubieCube::try_from(&fc).unwrap();
        let co = CoordCube::from(&cc);
        assert_eq!(
            co,
            CoordCube {
                twist: 824,
                flip: 1801,
                slice: 100,
                corners: 4590,
                ud_edges: 11803,
                slice_perm: 11,
            }
        );
        assert!(!co.is_phase1_solved());
        assert!(CoordCube::from(&CubieCube::default()).is_solved());
    }

    #[test]
    fn test_coord_moves_follow_cubie_moves() {
        let mt = MoveTables::new();
        let mut cc = CubieCube::default();
        let mut co = CoordCube::default();
        for m in [R, F2, U3, B, L, D2] {
            cc.multiply_move(m);
            co.phase1_move(&mt, m);
        }
        let expected = CoordCube::from(&cc);
        assert_eq!(
            (co.twist, co.flip, co.slice),
            (expected.twist, expected.flip, expected.slice)
        );

        let mut cc = CubieCube::default();
        let mut co = CoordCube::default();
        for m in [U, R2, D3, F2, L2, B2, U2] {
            cc.multiply_move(m);
            co.phase1_move(&mt, m);
            co.phase2_move(&mt, m);
        }
        assert!(co.is_phase1_solved());
        assert_eq!(co, CoordCube::from(&cc));
    }
}
