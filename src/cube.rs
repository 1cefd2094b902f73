use std::{fmt, str::FromStr};

use crate::error::Error;
use crate::facelet::{Color, FaceCube, Facelet, Facelet::*, ALL_COLORS};
use crate::moves::Move;
use crate::scramble::gen_scramble;

/// Sticker colors of a physical cube.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Sticker {
    White,
    Blue,
    Red,
    Green,
    Yellow,
    Orange,
}

pub const ALL_STICKERS: [Sticker; 6] = [
    Sticker::White,
    Sticker::Blue,
    Sticker::Red,
    Sticker::Green,
    Sticker::Yellow,
    Sticker::Orange,
];

impl Sticker {
    pub fn symbol(self) -> char {
        match self {
            Sticker::White => 'W',
            Sticker::Blue => 'B',
            Sticker::Red => 'R',
            Sticker::Green => 'G',
            Sticker::Yellow => 'Y',
            Sticker::Orange => 'O',
        }
    }
}

impl TryFrom<char> for Sticker {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let upper = c.to_ascii_uppercase();
        ALL_STICKERS
            .into_iter()
            .find(|s| s.symbol() == upper)
            .ok_or(Error::InvalidColor(c))
    }
}

impl fmt::Display for Sticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Sticker colors of the solved cube, indexed by face U, R, F, D, L, B.
pub const DEFAULT_SCHEME: [Sticker; 6] = [
    Sticker::Red,
    Sticker::Green,
    Sticker::White,
    Sticker::Orange,
    Sticker::Blue,
    Sticker::Yellow,
];

/// Order of the face blocks in a sticker string, Up, Left, Front, Right, Back, Down.
pub const STRING_FACES: [Color; 6] = [Color::U, Color::L, Color::F, Color::R, Color::B, Color::D];

/// Facelet cycles of the clockwise quarter turn of each face U, R, F, D, L, B.
///
/// The sticker on the first facelet of a cycle moves to the second, the second to the third and so on.
#[rustfmt::skip]
const FACE_CYCLES: [[[Facelet; 4]; 5]; 6] = [
    [[U1, U3, U9, U7], [U2, U6, U8, U4], [R1, F1, L1, B1], [R2, F2, L2, B2], [R3, F3, L3, B3]],
    [[U3, B7, D3, F3], [U6, B4, D6, F6], [U9, B1, D9, F9], [R1, R3, R9, R7], [R2, R6, R8, R4]],
    [[U7, R1, D3, L9], [U8, R4, D2, L6], [U9, R7, D1, L3], [F1, F3, F9, F7], [F2, F6, F8, F4]],
    [[R7, B7, L7, F7], [R8, B8, L8, F8], [R9, B9, L9, F9], [D1, D3, D9, D7], [D2, D6, D8, D4]],
    [[U1, F1, D1, B9], [U4, F4, D4, B6], [U7, F7, D7, B3], [L1, L3, L9, L7], [L2, L6, L8, L4]],
    [[U1, L7, D9, R3], [U2, L4, D8, R6], [U3, L1, D7, R9], [B1, B3, B9, B7], [B2, B6, B8, B4]],
];

/// A cube that can be turned and checked, used to verify solutions.
pub trait TurnableCube {
    fn apply_move(&mut self, m: Move);

    fn is_solved(&self) -> bool;

    fn apply_moves(&mut self, moves: &[Move]) {
        for &m in moves {
            self.apply_move(m);
        }
    }
}

/// A physical cube described by its 54 stickers.
///
/// The stickers are kept in facelet order (U1..U9, R1..R9, F1..F9, D1..D9, L1..L9, B1..B9). The string form
/// lists the faces Up, Left, Front, Right, Back, Down, each row by row, using the symbols W, B, R, G, Y, O.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Cube {
    stickers: [Sticker; 54],
}

impl Default for Cube {
    fn default() -> Self {
        let mut stickers = [Sticker::White; 54];
        for (i, s) in stickers.iter_mut().enumerate() {
            *s = DEFAULT_SCHEME[i / 9];
        }
        Self { stickers }
    }
}

impl FromStr for Cube {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 54 {
            return Err(Error::InvalidLength(chars.len()));
        }
        let mut parsed = [Sticker::White; 54];
        for (i, &c) in chars.iter().enumerate() {
            parsed[i] = Sticker::try_from(c)?;
        }
        for sticker in ALL_STICKERS {
            let n = parsed.iter().filter(|&&p| p == sticker).count();
            if n != 9 {
                return Err(Error::InvalidColorCount(sticker.symbol(), n));
            }
        }

        let mut stickers = [Sticker::White; 54];
        for (block, face) in STRING_FACES.iter().enumerate() {
            let start = 9 * *face as usize;
            stickers[start..start + 9].copy_from_slice(&parsed[9 * block..9 * block + 9]);
        }
        let cube = Self { stickers };
        let centers = cube.centers();
        for i in 0..6 {
            if centers[i + 1..].contains(&centers[i]) {
                return Err(Error::InvalidCenters);
            }
        }
        Ok(cube)
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in STRING_FACES {
            for s in self.face(face) {
                write!(f, "{}", s)?;
            }
        }
        Ok(())
    }
}

impl Cube {
    /// The 9 stickers of a face, row by row.
    pub fn face(&self, face: Color) -> &[Sticker] {
        let start = 9 * face as usize;
        &self.stickers[start..start + 9]
    }

    /// Center stickers indexed by face U, R, F, D, L, B.
    pub fn centers(&self) -> [Sticker; 6] {
        let mut centers = [Sticker::White; 6];
        for (i, c) in centers.iter_mut().enumerate() {
            *c = self.stickers[9 * i + 4];
        }
        centers
    }

    pub fn apply_move(&mut self, m: Move) {
        let cycles = &FACE_CYCLES[m.face() as usize];
        for _ in 0..m.power() {
            for cycle in cycles {
                let last = self.stickers[cycle[3] as usize];
                for k in (0..3).rev() {
                    self.stickers[cycle[k + 1] as usize] = self.stickers[cycle[k] as usize];
                }
                self.stickers[cycle[0] as usize] = last;
            }
        }
    }

    /// Apply a move given as a token like `R`, `F2` or `U'`.
    pub fn apply_token(&mut self, token: &str) -> Result<(), Error> {
        let m = Move::from_str(token)?;
        self.apply_move(m);
        Ok(())
    }

    pub fn apply_moves(&mut self, moves: &[Move]) {
        for &m in moves {
            self.apply_move(m);
        }
    }

    /// Every face shows a single color.
    pub fn is_solved(&self) -> bool {
        ALL_COLORS.iter().all(|&face| {
            let center = self.stickers[9 * face as usize + 4];
            self.face(face).iter().all(|&s| s == center)
        })
    }

    /// Scramble the cube with `n` random moves and return them.
    pub fn randomize(&mut self, n: usize) -> Vec<Move> {
        let moves = gen_scramble(n);
        self.apply_moves(&moves);
        moves
    }

    /// The facelet representation, each sticker named by the face whose center has its color.
    pub fn to_face_cube(&self) -> Result<FaceCube, Error> {
        let centers = self.centers();
        let mut fc = FaceCube::default();
        for (i, s) in self.stickers.iter().enumerate() {
            let face = centers
                .iter()
                .position(|c| c == s)
                .ok_or(Error::InvalidCenters)?;
            fc.f[i] = ALL_COLORS[face];
        }
        Ok(fc)
    }

    /// A sticker cube in the default color scheme.
    pub fn from_face_cube(fc: &FaceCube) -> Self {
        let mut stickers = [Sticker::White; 54];
        for (s, color) in stickers.iter_mut().zip(fc.f) {
            *s = DEFAULT_SCHEME[color as usize];
        }
        Self { stickers }
    }
}

impl TurnableCube for Cube {
    fn apply_move(&mut self, m: Move) {
        Cube::apply_move(self, m);
    }

    fn is_solved(&self) -> bool {
        Cube::is_solved(self)
    }
}

#[cfg(test)]
mod test {
    use crate::cube::*;
    use crate::cubie::CubieCube;
    use crate::moves::Move::U;
    use crate::scramble::scramble_from_str;

    const SOLVED: &str = "RRRRRRRRRBBBBBBBBBWWWWWWWWWGGGGGGGGGYYYYYYYYYOOOOOOOOO";
    const EXAMPLE: &str = "OBBOBRBYOGYYBOOBOGOBWBWYWWGBGRRRWOORYWYRYRYGWRGWGGWRYG";

    #[test]
    fn test_default_cube() {
        let cube = Cube::default();
        assert!(cube.is_solved());
        assert_eq!(cube.to_string(), SOLVED);
        assert_eq!(SOLVED.parse::<Cube>().unwrap(), cube);
        assert_eq!(cube.to_face_cube().unwrap(), FaceCube::default());
    }

    #[test]
    fn test_parse_lowercase() {
        let cube: Cube = EXAMPLE.to_lowercase().parse().unwrap();
        assert_eq!(cube.to_string(), EXAMPLE);
        assert!(!cube.is_solved());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            SOLVED[1..].parse::<Cube>(),
            Err(Error::InvalidLength(53))
        ));
        let bad_symbol = SOLVED.replacen('R', "X", 1);
        assert!(matches!(
            bad_symbol.parse::<Cube>(),
            Err(Error::InvalidColor('X'))
        ));
        // counts are checked in the order W, B, R, G, Y, O
        let bad_count = SOLVED.replacen('R', "B", 1);
        assert!(matches!(
            bad_count.parse::<Cube>(),
            Err(Error::InvalidColorCount('B', 10))
        ));
        let bad_count = SOLVED.replacen('O', "G", 1);
        assert!(matches!(
            bad_count.parse::<Cube>(),
            Err(Error::InvalidColorCount('G', 10))
        ));
        // swap a center with an edge of another face so that two centers share a color
        let mut chars: Vec<char> = SOLVED.chars().collect();
        chars.swap(4, 10);
        let same_centers: String = chars.into_iter().collect();
        assert!(matches!(
            same_centers.parse::<Cube>(),
            Err(Error::InvalidCenters)
        ));
    }

    #[test]
    fn test_example_to_face_cube() {
        let cube: Cube = EXAMPLE.parse().unwrap();
        assert_eq!(
            cube.to_face_cube().unwrap().to_string(),
            "LUULURUBLUDRRRFLLRLUFUFBFFDRDFDDFRBDDBBULLULDBFBRBRBDF"
        );
    }

    #[test]
    fn test_sticker_moves() {
        let mut cube = Cube::default();
        cube.apply_move(U);
        assert_eq!(
            cube.to_face_cube().unwrap().to_string(),
            "UUUUUUUUUBBBRRRRRRRRRFFFFFFDDDDDDDDDFFFLLLLLLLLLBBBBBB"
        );

        let moves = scramble_from_str("U2 R2 L D2 L F2 B2 U' D' F U R' L2 U2 D L F' B2 D R2")
            .unwrap();
        let mut cube = Cube::default();
        cube.apply_moves(&moves);
        assert_eq!(
            cube.to_face_cube().unwrap().to_string(),
            "FLLLULFRFRUURRRBBBLDDFFUBRUDFRDDUFLDUFUFLDLBRBDRBBULBD"
        );
    }

    #[test]
    fn test_sticker_moves_agree_with_cubie_moves() {
        let moves = scramble_from_str("R U2 F' D L2 B R' D2 F U' L B2").unwrap();
        let mut cube = Cube::default();
        cube.apply_moves(&moves);
        let cc = CubieCube::from(&moves);
        assert_eq!(cube.to_face_cube().unwrap(), FaceCube::from(&cc));
        assert_eq!(Cube::from_face_cube(&FaceCube::from(&cc)), cube);
    }

    #[test]
    fn test_apply_token() {
        let mut cube = Cube::default();
        cube.apply_token("F").unwrap();
        cube.apply_token("F'").unwrap();
        assert!(cube.is_solved());
        assert!(matches!(cube.apply_token("Q"), Err(Error::InvalidMove(_))));
    }

    #[test]
    fn test_randomize() {
        let mut cube = Cube::default();
        let moves = cube.randomize(20);
        assert_eq!(moves.len(), 20);
        assert!(moves.windows(2).all(|w| !w[1].is_redundant_after(w[0])));
        let undo: Vec<Move> = moves.iter().rev().map(|m| m.inverse()).collect();
        TurnableCube::apply_moves(&mut cube, &undo);
        assert!(TurnableCube::is_solved(&cube));
    }
}
