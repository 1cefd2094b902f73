use bincode::error::{DecodeError, EncodeError};
use thiserror::Error;

/// Errors reported by the solver and the cube representations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("the cube string must be 54 characters long, got {0}")]
    InvalidLength(usize),
    #[error("invalid color '{0}', expected one of W, B, R, G, Y, O")]
    InvalidColor(char),
    #[error("not all colors appear exactly 9 times ('{0}' appears {1} times)")]
    InvalidColorCount(char, usize),
    #[error("the six center facelets must have different colors")]
    InvalidCenters,
    #[error("invalid facelet string")]
    InvalidFaceletString,
    #[error("no corner matches the facelets at corner position {0}")]
    InvalidCorner(usize),
    #[error("no edge matches the facelets at edge position {0}")]
    InvalidEdge(usize),
    #[error("invalid move '{0}'")]
    InvalidMove(String),

    #[error("not all edges exist exactly once")]
    DuplicateEdge,
    #[error("one edge must be flipped")]
    EdgeFlip,
    #[error("not all corners exist exactly once")]
    DuplicateCorner,
    #[error("one corner must be twisted")]
    CornerTwist,
    #[error("two corners or edges must be swapped")]
    Parity,

    #[error("no solution found with at most {0} moves")]
    SearchExhausted(usize),
    #[error("search timed out")]
    Timeout,
    #[error("solution {0} does not solve the cube")]
    VerificationFailed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl Error {
    /// Errors caused by the caller's cube, as opposed to search or table failures.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidLength(_)
                | Error::InvalidColor(_)
                | Error::InvalidColorCount(..)
                | Error::InvalidCenters
                | Error::InvalidFaceletString
                | Error::InvalidCorner(_)
                | Error::InvalidEdge(_)
                | Error::InvalidMove(_)
                | Error::DuplicateEdge
                | Error::EdgeFlip
                | Error::DuplicateCorner
                | Error::CornerTwist
                | Error::Parity
        )
    }
}
