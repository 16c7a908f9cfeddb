use thiserror::Error;

/// Reasons a saved game is rejected on load
#[derive(Debug, Error)]
pub enum CorruptSave {
    #[error("save data is not a valid game record: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("secret word {0:?} is not a lowercase word")]
    InvalidSecret(String),

    #[error("{0:?} is not a lowercase letter")]
    InvalidLetter(char),

    #[error("guesses remaining {0} is outside 0..=6")]
    BudgetOutOfRange(i64),

    #[error("guesses remaining {remaining} does not match {incorrect} incorrect guesses")]
    BudgetMismatch { remaining: u8, incorrect: usize },

    #[error("pattern has {found} cells but the secret word has {expected} letters")]
    PatternLength { expected: usize, found: usize },

    #[error("pattern cell {index} does not agree with the secret word and correct guesses")]
    PatternMismatch { index: usize },

    #[error("correct guess {0:?} does not occur in the secret word")]
    CorrectNotInWord(char),

    #[error("correct guess {0:?} is listed more than once")]
    DuplicateCorrect(char),

    #[error("incorrect guess {0:?} occurs in the secret word")]
    IncorrectInWord(char),

    #[error("incorrect guess {0:?} is listed more than once")]
    DuplicateIncorrect(char),
}

/// Errors from a save or load request
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("saved game is corrupt: {0}")]
    Corrupt(#[from] CorruptSave),

    #[error("could not encode game: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("save storage failed: {0}")]
    Io(#[from] std::io::Error),
}
