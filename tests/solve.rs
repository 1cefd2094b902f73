use std::time::Duration;

use rubik::cube::Cube;
use rubik::cubie::CubieCube;
use rubik::error::Error;
use rubik::facelet::FaceCube;
use rubik::scramble::{gen_scramble, inverse_scramble, scramble_from_str, scramble_to_str};
use rubik::solver::{solve, solve_cube, Solver, SolverTables, TwoPhaseSolver};

#[test_log::test]
fn solves_example_cube() {
    let input = "OBBOBRBYOGYYBOOBOGOBWBWYWWGBGRRRWOORYWYRYRYGWRGWGGWRYG";
    let result = solve(input).unwrap();
    assert!(!result.solution.is_empty());
    assert!(result.solution.len() <= 29);

    let mut cube: Cube = input.parse().unwrap();
    for token in scramble_to_str(&result.solution).split_whitespace() {
        cube.apply_token(token).unwrap();
    }
    assert!(cube.is_solved());
    assert_eq!(result.state, cube.to_string());
}

#[test_log::test]
fn solves_scrambles_of_every_length() {
    let solver = TwoPhaseSolver::new(SolverTables::shared());
    for k in 0..=20 {
        let mut cube = Cube::default();
        let scramble = cube.randomize(k);
        let result = solver.solve(&cube).unwrap();
        if k == 0 {
            assert!(result.solution.is_empty());
        }
        assert!(
            result.solution.windows(2).all(|w| !w[1].is_redundant_after(w[0])),
            "{}",
            scramble_to_str(&scramble)
        );
        cube.apply_moves(&result.solution);
        assert!(cube.is_solved(), "{}", scramble_to_str(&scramble));
    }
}

#[test_log::test]
fn superflip_is_solved() {
    let superflip =
        scramble_from_str("U R2 F B R B2 R U2 L B2 R U' D' R2 F R' L B2 U2 F2").unwrap();
    let cc = CubieCube::from(&superflip);
    assert_eq!(cc.eo, [1; 12]);
    let cube = Cube::from_face_cube(&FaceCube::from(&cc));
    let result = solve_cube(&cube).unwrap();
    assert!(result.solution.len() <= 29);
    assert!(cc.apply_moves(&result.solution).is_solved());
}

#[test_log::test]
fn inverse_of_solution_recreates_cube() {
    let moves = gen_scramble(15);
    let cc = CubieCube::from(&moves);
    let solution = TwoPhaseSolver::new(SolverTables::shared())
        .solve_cubie(&cc)
        .unwrap();
    assert_eq!(CubieCube::from(&inverse_scramble(&solution)), cc);
}

#[test_log::test]
fn rejects_bad_input_before_searching() {
    let solved = Cube::default().to_string();
    let errors = [
        solve(&solved[..53]).unwrap_err(),
        solve(&solved.replacen('W', "X", 1)).unwrap_err(),
        solve(&solved.replacen('W', "R", 1)).unwrap_err(),
    ];
    assert!(matches!(errors[0], Error::InvalidLength(53)));
    assert!(matches!(errors[1], Error::InvalidColor('X')));
    assert!(matches!(errors[2], Error::InvalidColorCount(..)));
    assert!(errors.iter().all(Error::is_input_error));
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert_ne!(messages[0], messages[1]);
    assert_ne!(messages[1], messages[2]);
}

#[test_log::test]
fn twisted_corner_is_rejected() {
    let mut cc = CubieCube::default();
    cc.co[0] = 2;
    let cube = Cube::from_face_cube(&FaceCube::from(&cc));
    let err = solve_cube(&cube).unwrap_err();
    assert!(matches!(err, Error::CornerTwist));
    assert_eq!(err.to_string(), "one corner must be twisted");
}

#[test_log::test]
fn tables_are_persisted() {
    let dir = std::env::temp_dir().join(format!("rubik-tables-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);

    let created = SolverTables::load_or_create(&dir).unwrap();
    assert!(dir.join("move_twist").exists());
    assert!(dir.join("prun_slice_perm_ud_edges").exists());

    let loaded = SolverTables::load_or_create(&dir).unwrap();
    assert_eq!(loaded.mv.corners_move, created.mv.corners_move);
    assert_eq!(loaded.pr.slice_twist_prun, created.pr.slice_twist_prun);

    let cube: Cube = "OBBOBRBYOGYYBOOBOGOBWBWYWWGBGRRRWOORYWYRYRYGWRGWGGWRYG"
        .parse()
        .unwrap();
    let a = TwoPhaseSolver::new(&created).solve(&cube).unwrap();
    let b = TwoPhaseSolver::new(&loaded)
        .with_timeout(Duration::from_secs(60))
        .solve(&cube)
        .unwrap();
    assert_eq!(a.solution, b.solution);
    std::fs::remove_dir_all(&dir).unwrap();
}
