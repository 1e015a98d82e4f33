//! Error types for TextBuddy
//!
//! Centralized error handling using thiserror. The display text of every
//! variant is the exact feedback shown to the user, so the command engine
//! can report any failure with `to_string()`.

use thiserror::Error;

/// All error types that can occur in TextBuddy
#[derive(Debug, Error)]
pub enum TextBuddyError {
    /// Operation needs at least one stored line
    #[error("failed to sort lines in file {file}, file is empty")]
    EmptyFile { file: String },

    /// Line number outside `1..=len`
    #[error("failed to delete from {file}, line {line} cannot be found")]
    NotFound { file: String, line: i64 },

    /// Command word matches no known verb
    #[error("command \"{0}\" is not recognized, please enter a valid command")]
    UnrecognizedCommand(String),

    /// Required parameter missing or malformed
    #[error("invalid parameter for command \"{command}\": {reason}")]
    InvalidParameter { command: String, reason: String },

    /// IO error
    #[error("exception encountered: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for TextBuddy operations
pub type Result<T> = std::result::Result<T, TextBuddyError>;
