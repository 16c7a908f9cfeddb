//! Persisted form of a game session

use super::CorruptSave;
use serde::{Deserialize, Serialize};

/// The minimal record needed to resume a game
///
/// Serializes to a JSON object with exactly the keys `secretWord`, `revealedPattern`,
/// `guessesRemaining`, `correctGuesses` and `incorrectGuesses`. Letters are stored as
/// one-character strings and hidden cells as `"_"`.
///
/// Deserializing only checks the shape; [`GameSession::restore`](crate::core::GameSession::restore)
/// checks that the fields agree with each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Snapshot {
    pub secret_word: String,
    pub revealed_pattern: Vec<char>,
    // Signed so that an out-of-range value is reported as such rather than as a type error
    pub guesses_remaining: i64,
    pub correct_guesses: Vec<char>,
    pub incorrect_guesses: Vec<char>,
}

impl Snapshot {
    /// Serialize as pretty-printed JSON
    ///
    /// # Errors
    /// Returns the serde_json error if the record cannot be encoded.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a snapshot from JSON
    ///
    /// # Errors
    /// Returns `CorruptSave::Malformed` for invalid JSON, missing or unknown keys, and
    /// values of the wrong type.
    pub fn from_json(json: &str) -> Result<Self, CorruptSave> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snapshot {
        Snapshot {
            secret_word: "hello".to_string(),
            revealed_pattern: vec!['_', '_', 'l', 'l', '_'],
            guesses_remaining: 5,
            correct_guesses: vec!['l'],
            incorrect_guesses: vec!['z'],
        }
    }

    #[test]
    fn snapshot_uses_camel_case_keys() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "correctGuesses",
                "guessesRemaining",
                "incorrectGuesses",
                "revealedPattern",
                "secretWord"
            ]
        );
        assert_eq!(value["revealedPattern"][0], "_");
        assert_eq!(value["revealedPattern"][2], "l");
        assert_eq!(value["guessesRemaining"], 5);
    }

    #[test]
    fn snapshot_parses_hand_written_json() {
        let json = r#"{
            "secretWord": "hello",
            "revealedPattern": ["_", "_", "l", "l", "_"],
            "guessesRemaining": 5,
            "correctGuesses": ["l"],
            "incorrectGuesses": ["z"]
        }"#;
        assert_eq!(Snapshot::from_json(json).unwrap(), sample());
    }

    #[test]
    fn snapshot_rejects_missing_field() {
        let json = r#"{
            "secretWord": "hello",
            "revealedPattern": ["_", "_", "_", "_", "_"],
            "correctGuesses": [],
            "incorrectGuesses": []
        }"#;
        assert!(matches!(
            Snapshot::from_json(json),
            Err(CorruptSave::Malformed(_))
        ));
    }

    #[test]
    fn snapshot_rejects_unknown_field() {
        let json = r#"{
            "secretWord": "hello",
            "revealedPattern": ["_", "_", "_", "_", "_"],
            "guessesRemaining": 6,
            "correctGuesses": [],
            "incorrectGuesses": [],
            "dictionary": ["hello"]
        }"#;
        assert!(Snapshot::from_json(json).is_err());
    }

    #[test]
    fn snapshot_rejects_multi_character_cells() {
        let json = r#"{
            "secretWord": "hello",
            "revealedPattern": ["__", "_", "_", "_", "_"],
            "guessesRemaining": 6,
            "correctGuesses": [],
            "incorrectGuesses": []
        }"#;
        assert!(Snapshot::from_json(json).is_err());
    }

    #[test]
    fn snapshot_rejects_garbage() {
        assert!(Snapshot::from_json("not json at all").is_err());
        assert!(Snapshot::from_json("").is_err());
    }
}
