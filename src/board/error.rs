//! Error types for board operations.
//!
//! Illegal *moves* are not errors: the move paths reject them locally with
//! boolean or `Option` returns and leave the position untouched. The only
//! fallible construction is building a square from raw coordinates.

use std::fmt;

/// Error type for square construction from raw coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
        }
    }
}

impl std::error::Error for SquareError {}
