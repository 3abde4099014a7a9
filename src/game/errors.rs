use thiserror::Error;

/// Errors that can arise while driving a game session.
///
/// Everything here is recoverable at the command boundary except
/// [`GameError::GameOver`], which permanently closes the session, and
/// [`GameError::InvalidInputFormat`], which aborts world construction.
#[derive(Debug, Error)]
pub enum GameError {
    /// Returned when a direction is malformed or leads nowhere.
    #[error("direction '{0}' does not contain any location")]
    InvalidDirection(String),

    /// Returned by the seed loader on malformed or inconsistent records.
    #[error("{file}: invalid content or incorrect format: {reason}")]
    InvalidInputFormat { file: String, reason: String },

    /// Returned on a bad bench index, unknown item, absent opponent, or a
    /// command issued in the wrong session state.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// The active Pymon was defeated with an empty bench. Terminal.
    #[error("no Pymon left to carry on the journey")]
    GameOver,

    /// Wrapper around IO errors (seed file reads, config writes).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Build an [`GameError::InvalidInputFormat`] for a named seed file.
    pub fn bad_seed(file: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInputFormat {
            file: file.into(),
            reason: reason.into(),
        }
    }
}
