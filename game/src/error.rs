//! Errors returned by functions related to this crate.

use std::{error, fmt};

/// Error type returned by crate's functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board size specified in variant argument can't hold the initial snake
    /// and leave room around it.
    BoardTooSmall(usize),

    /// Tick interval is zero, so the driver would never stop ticking.
    ZeroTickInterval,

    /// Input queue bound is zero, so no direction change could ever be
    /// accepted.
    ZeroQueueBound,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BoardTooSmall(size) => write!(f,
                "board size {} is too small, it should be at least {}", size, crate::Settings::MIN_SIZE),
            Self::ZeroTickInterval => write!(f, "tick interval should be greater than zero"),
            Self::ZeroQueueBound => write!(f, "input queue bound should be greater than zero"),
        }
    }
}

impl error::Error for GameError {}

/// Error returned if can't parse [`Direction`](crate::aux::Direction) from a
/// string.
#[derive(Debug, Clone)]
pub struct ParseDirectionError;

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
"can't parse Direction because parsed string is not \"up\", \"down\", \"left\" or \"right\"")
    }
}

impl error::Error for ParseDirectionError {}

/// Error returned if can't parse [`Difficulty`](crate::Difficulty) from a
/// string.
#[derive(Debug, Clone)]
pub struct ParseDifficultyError;

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
"can't parse Difficulty because parsed string is not \"easy\", \"medium\" or \"hard\"")
    }
}

impl error::Error for ParseDifficultyError {}
