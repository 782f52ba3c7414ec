//! Centralized error types.
//!
//! Runtime robustness cases (missing entity ids, unknown map characters,
//! out-of-bounds tile queries) are deliberately *not* errors; they degrade
//! to no-ops. Errors here cover construction-time misconfiguration only.

/// Main error type for game construction and setup.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map error: {0}")]
    Map(#[from] MapError),
}

/// Errors related to the built-in level definition.
#[derive(thiserror::Error, Debug)]
pub enum MapError {
    #[error("Level text produced an empty tile grid")]
    EmptyGrid,

    #[error("Level rows are ragged: expected {expected} tiles per row, row {row} has {found}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("Spawn tile ({x}, {y}) is outside the {width}x{height} grid")]
    SpawnOutOfBounds { x: i32, y: i32, width: i32, height: i32 },
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
