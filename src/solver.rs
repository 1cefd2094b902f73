use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::coord::CoordCube;
use crate::cube::{Cube, TurnableCube};
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::facelet::FaceCube;
use crate::moves::{Move, MoveTables};
use crate::pruning::PruningTables;
use crate::scramble::scramble_to_str;

/// All data tables.
///
/// * `mv`: [MoveTables]
/// * `pr`: [PruningTables]
///
/// The tables never change after construction and can be shared by any number of solvers.
pub struct SolverTables {
    pub mv: MoveTables,
    pub pr: PruningTables,
}

impl Default for SolverTables {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverTables {
    pub fn new() -> Self {
        let start = Instant::now();
        let mv = MoveTables::new();
        let pr = PruningTables::new(&mv);
        debug!("created solver tables in {:?}", start.elapsed());
        Self { mv, pr }
    }

    /// Process wide tables, created on first use.
    pub fn shared() -> &'static SolverTables {
        lazy_static! {
            static ref SOLVERTABLES: SolverTables = SolverTables::new();
        }
        &SOLVERTABLES
    }

    /// Load the tables stored in `dir`, creating and writing the ones that are missing.
    pub fn load_or_create<P: AsRef<Path>>(dir: P) -> Result<Self, Error> {
        let dir = dir.as_ref();
        let mv = MoveTables::load_or_create(dir)?;
        let pr = PruningTables::load_or_create(dir, &mv)?;
        Ok(Self { mv, pr })
    }
}

/// Solution result:
/// * solution: a Move vector.
/// * solve_time: time to get the solution, not including the creation of the tables.
/// * state: the sticker cube after applying the solution.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SolveResult {
    pub solution: Vec<Move>,
    pub solve_time: Duration,
    pub state: String,
}

impl fmt::Display for SolveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} moves, {:?})",
            scramble_to_str(&self.solution),
            self.solution.len(),
            self.solve_time
        )
    }
}

/// Something that finds a move sequence solving a cube.
pub trait Solver {
    fn solve(&self, cube: &Cube) -> Result<SolveResult, Error>;
}

/// Kociemba's two phase algorithm.
///
/// The returned solution is the first one found with iterative deepening over the total length,
/// not necessarily the shortest one.
///
/// # Examples
/// ```rust,no_run
/// use rubik::solver::{Solver, SolverTables, TwoPhaseSolver};
///
/// let tables = SolverTables::new();
/// let solver = TwoPhaseSolver::new(&tables).with_max_length(25);
/// let cube = "OBBOBRBYOGYYBOOBOGOBWBWYWWGBGRRRWOORYWYRYRYGWRGWGGWRYG".parse().unwrap();
/// let result = solver.solve(&cube).unwrap();
/// println!("{}", result);
/// ```
#[derive(Clone, Copy)]
pub struct TwoPhaseSolver<'a> {
    tables: &'a SolverTables,
    max_length: usize,
    timeout: Option<Duration>,
}

impl<'a> TwoPhaseSolver<'a> {
    pub fn new(tables: &'a SolverTables) -> Self {
        Self {
            tables,
            max_length: MAX_LENGTH,
            timeout: None,
        }
    }

    /// Give up with [Error::SearchExhausted] if no solution of at most `max_length` moves exists.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Give up with [Error::Timeout] once `timeout` has elapsed. The time is checked before each
    /// new search depth.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Find a move sequence bringing the cubie cube to the solved state.
    pub fn solve_cubie(&self, cc: &CubieCube) -> Result<Vec<Move>, Error> {
        cc.validate()?;
        let deadline = self.timeout.map(|t| Instant::now() + t);
        Search::new(self.tables, *cc, self.max_length).run(deadline)
    }

    /// Solve a cube given as facelet string in the order U, R, F, D, L, B.
    pub fn solve_facelets(&self, facelets: &str) -> Result<SolveResult, Error> {
        let fc = FaceCube::try_from(facelets)?;
        self.solve(&Cube::from_face_cube(&fc))
    }
}

impl Solver for TwoPhaseSolver<'_> {
    fn solve(&self, cube: &Cube) -> Result<SolveResult, Error> {
        let start_time = Instant::now();
        let fc = cube.to_face_cube()?;
        let cc = CubieCube::try_from(&fc)?;
        let solution = self.solve_cubie(&cc)?;
        let solved = verify(cube, &solution)?;
        let solve_time = start_time.elapsed();
        info!(
            "solved {} in {} moves ({:?})",
            cube,
            solution.len(),
            solve_time
        );
        Ok(SolveResult {
            solution,
            solve_time,
            state: solved.to_string(),
        })
    }
}

/// Replay the solution on a copy of the cube, failing if it does not end solved.
fn verify<C: TurnableCube + Clone>(cube: &C, solution: &[Move]) -> Result<C, Error> {
    let mut check = cube.clone();
    check.apply_moves(solution);
    if !check.is_solved() {
        return Err(Error::VerificationFailed(scramble_to_str(solution)));
    }
    Ok(check)
}

/// Solve a cube given as sticker string (faces Up, Left, Front, Right, Back, Down) with the shared tables.
///
/// # Examples
/// ```rust,no_run
/// use rubik::solver::solve;
///
/// let result = solve("OBBOBRBYOGYYBOOBOGOBWBWYWWGBGRRRWOORYWYRYRYGWRGWGGWRYG").unwrap();
/// println!("{:?}, ({}), ({:?})", result.solution, result.solution.len(), result.solve_time);
/// ```
pub fn solve(cubestring: &str) -> Result<SolveResult, Error> {
    let cube: Cube = cubestring.parse()?;
    solve_cube(&cube)
}

/// Solve a sticker cube with the shared tables.
pub fn solve_cube(cube: &Cube) -> Result<SolveResult, Error> {
    TwoPhaseSolver::new(SolverTables::shared()).solve(cube)
}

/// State of one two phase search.
///
/// * `cb_cube`: The cube to be solved in CubieCube representation
/// * `sofar_phase1`, `sofar_phase2`: the moves of the current search path
/// * `max_length`: upper bound of the total solution length
struct Search<'a> {
    tables: &'a SolverTables,
    cb_cube: CubieCube,
    sofar_phase1: Vec<Move>,
    sofar_phase2: Vec<Move>,
    max_length: usize,
    nodes: u64,
}

impl<'a> Search<'a> {
    fn new(tables: &'a SolverTables, cb_cube: CubieCube, max_length: usize) -> Self {
        Self {
            tables,
            cb_cube,
            sofar_phase1: Vec::with_capacity(max_length),
            sofar_phase2: Vec::with_capacity(max_length),
            max_length,
            nodes: 0,
        }
    }

    fn run(mut self, deadline: Option<Instant>) -> Result<Vec<Move>, Error> {
        let co = CoordCube::from(&self.cb_cube);
        for depth in 0..=self.max_length {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                return Err(Error::Timeout);
            }
            trace!("phase 1 depth {} ({} nodes so far)", depth, self.nodes);
            if self.search_phase1(co, depth) {
                let mut solution = self.sofar_phase1;
                solution.append(&mut self.sofar_phase2);
                debug!("found {} move solution after {} nodes", solution.len(), self.nodes);
                return Ok(solution);
            }
        }
        Err(Error::SearchExhausted(self.max_length))
    }

    /// Move `m` may follow the last move of the current path.
    fn allowed(&self, m: Move) -> bool {
        match self.sofar_phase2.last().or(self.sofar_phase1.last()) {
            Some(&prev) => !m.is_redundant_after(prev),
            None => true,
        }
    }

    fn search_phase1(&mut self, co: CoordCube, togo: usize) -> bool {
        self.nodes += 1;
        let tables = self.tables;
        let dist = tables.pr.phase1_depth_of(&co) as usize;
        if dist == 0 {
            // in the subgroup, try to finish with phase 2 from here
            return self.start_phase2();
        }
        if dist > togo {
            return false;
        }
        let mv = &tables.mv;
        for m in ALL_MOVES {
            if !self.allowed(m) {
                continue;
            }
            let mut co1 = co;
            co1.phase1_move(mv, m);
            self.sofar_phase1.push(m);
            if self.search_phase1(co1, togo - 1) {
                return true;
            }
            self.sofar_phase1.pop();
        }
        false
    }

    /// Compute the phase 2 coordinates by replaying the phase 1 moves and run iterative deepening
    /// with the moves left.
    fn start_phase2(&mut self) -> bool {
        let cc = self.cb_cube.apply_moves(&self.sofar_phase1);
        let co = CoordCube::from(&cc);
        let togo_max = self.max_length.saturating_sub(self.sofar_phase1.len());
        for togo in 0..=togo_max {
            if self.search_phase2(co, togo) {
                return true;
            }
        }
        false
    }

    fn search_phase2(&mut self, co: CoordCube, togo: usize) -> bool {
        self.nodes += 1;
        let tables = self.tables;
        let dist = tables.pr.phase2_depth_of(&co) as usize;
        if dist == 0 {
            return true;
        }
        if dist > togo {
            return false;
        }
        let mv = &tables.mv;
        for m in PHASE2_MOVES {
            if !self.allowed(m) {
                continue;
            }
            let mut co1 = co;
            co1.phase2_move(mv, m);
            self.sofar_phase2.push(m);
            if self.search_phase2(co1, togo - 1) {
                return true;
            }
            self.sofar_phase2.pop();
        }
        false
    }
}

#[cfg(test)]
mod test {
    use crate::moves::Move::*;
    use crate::scramble::{gen_scramble, scramble_from_str};
    use crate::solver::*;

    const EXAMPLE: &str = "OBBOBRBYOGYYBOOBOGOBWBWYWWGBGRRRWOORYWYRYRYGWRGWGGWRYG";

    fn no_redundant_pairs(solution: &[Move]) -> bool {
        solution
            .windows(2)
            .all(|w| !w[0].is_same_face(w[1]) && !w[0].is_opposite_face(w[1]))
    }

    #[test_log::test]
    fn test_solved_cube() {
        let solved = Cube::default().to_string();
        let result = solve(&solved).unwrap();
        assert!(result.solution.is_empty());
        assert_eq!(result.state, solved);
    }

    #[test_log::test]
    fn test_example_cube() {
        let result = solve(EXAMPLE).unwrap();
        assert!(result.solution.len() <= MAX_LENGTH);
        assert!(no_redundant_pairs(&result.solution));
        let mut cube: Cube = EXAMPLE.parse().unwrap();
        cube.apply_moves(&result.solution);
        assert!(cube.is_solved());
        assert_eq!(result.state, cube.to_string());
    }

    #[test_log::test]
    fn test_short_scrambles() {
        let tables = SolverTables::shared();
        let solver = TwoPhaseSolver::new(tables);
        let cc = CubieCube::from(&vec![U]);
        assert_eq!(solver.solve_cubie(&cc).unwrap(), vec![U3]);

        for scramble in ["U D", "F2 B2", "R L'", "R U R' U'"] {
            let moves = scramble_from_str(scramble).unwrap();
            let cc = CubieCube::from(&moves);
            let solution = solver.solve_cubie(&cc).unwrap();
            assert!(no_redundant_pairs(&solution), "{scramble}");
            assert!(cc.apply_moves(&solution).is_solved(), "{scramble}");
        }
    }

    #[test_log::test]
    fn test_random_scrambles() {
        let solver = TwoPhaseSolver::new(SolverTables::shared());
        for _ in 0..5 {
            let mut cube = Cube::default();
            cube.randomize(25);
            let result = solver.solve(&cube).unwrap();
            assert!(result.solution.len() <= MAX_LENGTH);
            assert!(no_redundant_pairs(&result.solution));
            cube.apply_moves(&result.solution);
            assert!(cube.is_solved());
        }
    }

    #[test_log::test]
    fn test_random_cubie_cubes() {
        let solver = TwoPhaseSolver::new(SolverTables::shared());
        for _ in 0..3 {
            let mut cc = CubieCube::default();
            cc.randomize();
            let solution = solver.solve_cubie(&cc).unwrap();
            assert!(cc.apply_moves(&solution).is_solved());
        }
    }

    #[test_log::test]
    fn test_solve_facelets() {
        let solver = TwoPhaseSolver::new(SolverTables::shared());
        let result = solver
            .solve_facelets("RLLBUFUUUBDURRBBUBRLRRFDFDDLLLUDFLRRDDFRLFDBUBFFLBBDUF")
            .unwrap();
        assert!(result.solution.len() <= MAX_LENGTH);
        assert_eq!(result.state, Cube::default().to_string());
    }

    #[test_log::test]
    fn test_invalid_input() {
        assert!(matches!(solve(&EXAMPLE[..53]), Err(Error::InvalidLength(53))));
        let bad_symbol = EXAMPLE.replacen('O', "P", 1);
        assert!(matches!(solve(&bad_symbol), Err(Error::InvalidColor('P'))));
        let bad_count = EXAMPLE.replacen('O', "W", 1);
        let err = solve(&bad_count).unwrap_err();
        assert!(matches!(err, Error::InvalidColorCount('W', 10)));
        assert!(err.is_input_error());
    }

    #[test_log::test]
    fn test_unsolvable_cubes() {
        let solver = TwoPhaseSolver::new(SolverTables::shared());

        let mut cc = CubieCube::default();
        cc.co[0] = 1;
        cc.co[1] = 1;
        assert!(matches!(solver.solve_cubie(&cc), Err(Error::CornerTwist)));

        let mut cc = CubieCube::default();
        cc.eo[0] = 1;
        assert!(matches!(solver.solve_cubie(&cc), Err(Error::EdgeFlip)));

        // a single swapped edge pair, through the sticker interface
        let mut cc = CubieCube::default();
        cc.ep.swap(0, 1);
        let cube = Cube::from_face_cube(&FaceCube::from(&cc));
        let err = solver.solve(&cube).unwrap_err();
        assert!(matches!(err, Error::Parity));
        assert!(err.is_input_error());
    }

    #[test_log::test]
    fn test_limits() {
        let solver = TwoPhaseSolver::new(SolverTables::shared());
        let cc = CubieCube::from(&gen_scramble(20));
        if !cc.is_solved() {
            assert!(matches!(
                solver.with_timeout(Duration::ZERO).solve_cubie(&cc),
                Err(Error::Timeout)
            ));
        }

        let cc = CubieCube::from(&scramble_from_str("R U").unwrap());
        let err = solver.with_max_length(1).solve_cubie(&cc).unwrap_err();
        assert!(matches!(err, Error::SearchExhausted(1)));
        assert!(!err.is_input_error());
        assert_eq!(solver.with_max_length(2).solve_cubie(&cc).unwrap(), vec![U3, R3]);
    }

    #[test]
    fn test_verify() {
        let mut cube = Cube::default();
        cube.apply_move(R);
        assert!(verify(&cube, &[R3]).is_ok());
        assert!(matches!(
            verify(&cube, &[R]),
            Err(Error::VerificationFailed(s)) if s == "R"
        ));
    }

    #[test]
    fn test_solve_result_json() {
        let result = SolveResult {
            solution: vec![R, U3],
            solve_time: Duration::from_millis(5),
            state: Cube::default().to_string(),
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: SolveResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
        assert!(result.to_string().starts_with("R U' (2 moves"));
    }
}
