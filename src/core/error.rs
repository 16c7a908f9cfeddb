use thiserror::Error;

/// Errors raised by gameplay operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The word pool had nothing to choose from
    #[error("word pool is empty, no secret word can be chosen")]
    EmptyPool,

    /// A guess was not a single lowercase letter
    #[error("invalid guess {0:?}: expected a single lowercase letter")]
    InvalidInput(String),

    /// A secret word contained something other than ASCII letters
    #[error("invalid secret word {0:?}: expected ASCII letters only")]
    InvalidWord(String),

    /// A guess arrived after the game was already won or lost
    #[error("the game is already over")]
    GameOver,
}
