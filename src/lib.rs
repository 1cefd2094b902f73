//! A crate for manipulating and solving the 3x3 Rubik's cube with [Kociemba's two phase algorithm](http://kociemba.org/cube.htm).
//!
//! ```rust,no_run
//! use rubik::solver::solve;
//!
//! let result = solve("OBBOBRBYOGYYBOOBOGOBWBWYWWGBGRRRWOORYWYRYRYGWRGWGGWRYG").unwrap();
//! println!("{}", result);
//! ```

#[macro_use]
extern crate lazy_static;

/// Module containing 3x3 cube constants.
pub mod constants;
pub mod coord;
pub mod cube;
pub mod cubie;
pub mod error;
pub mod facelet;
pub mod moves;
pub mod pruning;
/// Module containing functions for scrambling the cube.
pub mod scramble;
pub mod solver;

use std::{fs, io, path::Path};

use bincode::{
    config::{self, Configuration},
    decode_from_slice, encode_to_vec,
    error::DecodeError,
    Decode, Encode,
};
use log::debug;

use crate::error::Error;

pub use crate::cube::Cube;
pub use crate::moves::Move;
pub use crate::solver::{solve, SolveResult, Solver, SolverTables, TwoPhaseSolver};

const CONFIG: Configuration = config::standard();

pub fn write_table<P, T: Encode>(path: P, table: &T) -> Result<(), Error>
where
    P: AsRef<Path>,
{
    let encoded = encode_to_vec(table, CONFIG)?;
    fs::write(path, encoded)?;
    Ok(())
}

pub fn decode_table<T: Decode>(bytes: &[u8]) -> Result<T, Error> {
    let (decoded, read) = decode_from_slice(bytes, CONFIG)?;
    if read != bytes.len() {
        return Err(DecodeError::Other("trailing bytes after table").into());
    }
    Ok(decoded)
}

/// Read the table `name` from `dir`, or build it and write it there if the file does not exist.
pub(crate) fn load_or_build<T, F>(
    dir: &Path,
    name: &str,
    len: usize,
    build: F,
) -> Result<Vec<T>, Error>
where
    T: Encode + Decode + 'static,
    F: FnOnce() -> Vec<T>,
{
    let path = dir.join(name);
    match fs::read(&path) {
        Ok(bytes) => {
            let table: Vec<T> = decode_table(&bytes)?;
            if table.len() != len {
                return Err(DecodeError::Other("table has the wrong length").into());
            }
            debug!("loaded {} table from {}", name, path.display());
            Ok(table)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("creating {} table...", name);
            let table = build();
            fs::create_dir_all(dir)?;
            write_table(&path, &table)?;
            Ok(table)
        }
        Err(e) => Err(e.into()),
    }
}
