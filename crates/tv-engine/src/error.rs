//! Error types for the game engine.
//!
//! Not having enough people or tasks for a game is not an error: it is an
//! [`Outcome`](crate::Outcome) with `ok == false`.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur inside the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Tried to pick from an empty sequence.
    #[error("cannot pick from an empty sequence")]
    EmptyInput,

    /// A game identifier did not match any known game.
    #[error("unknown game: {0}")]
    UnknownGame(String),

    /// A custom catalog could not be read or is unusable.
    #[error("invalid catalog: {0}")]
    Catalog(String),
}
