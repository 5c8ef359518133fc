//! Error types for building and parsing payoff matrices

use std::fmt;
use std::io;

use minimax_engine::MatrixError;

/// Failure to read a payoff matrix from text.
#[derive(Debug)]
pub enum ParseError {
    /// Token on 1-based `line` is not a number.
    Number { line: usize, token: String },
    /// The numbers parsed but do not form a valid matrix.
    Matrix(MatrixError),
    Io(io::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { line, token } => {
                write!(f, "line {}: '{}' is not a number", line, token)
            }
            Self::Matrix(e) => write!(f, "{}", e),
            Self::Io(e) => write!(f, "could not read matrix: {}", e),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Number { .. } => None,
            Self::Matrix(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<MatrixError> for ParseError {
    fn from(e: MatrixError) -> Self {
        ParseError::Matrix(e)
    }
}

impl From<io::Error> for ParseError {
    fn from(e: io::Error) -> Self {
        ParseError::Io(e)
    }
}

/// Invalid catalog lookup or generator parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    UnknownGame(String),
    /// Parameter `name` must be at least `min`.
    ParameterTooSmall { name: &'static str, value: usize, min: usize },
    /// The game would have `strategies` pure strategies per player, more than `limit`.
    TooLarge { strategies: usize, limit: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownGame(name) => write!(f, "unknown game '{}'", name),
            Self::ParameterTooSmall { name, value, min } => {
                write!(f, "{} must be at least {}, got {}", name, min, value)
            }
            Self::TooLarge { strategies, limit } => write!(
                f,
                "game has {} pure strategies per player, limit is {}",
                strategies, limit
            ),
        }
    }
}

impl std::error::Error for GameError {}
