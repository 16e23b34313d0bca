//! Construction-time errors.
//!
//! The turn loop itself has no error path: illegal in-game actions are
//! wasted turns, not failures. The only fatal condition is a malformed
//! world description handed to [`crate::Board::parse`].

use thiserror::Error;

/// Errors raised while building a world from a description
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("malformed world description: missing {field}")]
    MissingToken { field: &'static str },

    #[error("malformed world description: expected integer for {field}, got '{token}'")]
    InvalidToken { field: &'static str, token: String },

    #[error("world dimensions must be at least 1x1, got {cols}x{rows}")]
    BadDimensions { cols: i32, rows: i32 },
}
