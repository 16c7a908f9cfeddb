//! Hangman game session state machine
//!
//! A session starts `InProgress` and ends either `Won` (every cell revealed) or `Lost`
//! (guess budget exhausted). The only mutation is [`GameSession::make_guess`].

use super::{Board, GameError, Letter, MAX_GUESSES, PLACEHOLDER, SecretWord};
use crate::persistence::{CorruptSave, Snapshot};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// What a single guess did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// New correct letter, revealed in `revealed` cells
    Hit { revealed: usize },
    /// Letter was already guessed correctly; nothing changed
    RepeatedHit,
    /// New wrong letter, one guess used up
    Miss,
    /// Letter was already guessed wrong; nothing changed
    RepeatedMiss,
}

/// A single game of hangman
///
/// Invariants held after every operation:
/// - a cell is revealed iff its letter is in the correct set
/// - the correct and incorrect sets are disjoint
/// - `guesses_remaining == MAX_GUESSES - incorrect.len()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    secret: SecretWord,
    revealed: Vec<Option<Letter>>,
    guesses_remaining: u8,
    correct: BTreeSet<Letter>,
    incorrect: Vec<Letter>,
}

impl GameSession {
    /// Start a new game with a word chosen uniformly at random from `word_pool`
    ///
    /// The pool is expected to be filtered already (see [`crate::wordlists`]).
    ///
    /// # Errors
    /// Returns `GameError::EmptyPool` if the pool is empty and `GameError::InvalidWord` if
    /// the chosen word is not made of ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::GameSession;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let pool = ["planet", "rocket", "island"];
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let game = GameSession::new(&pool, &mut rng).unwrap();
    ///
    /// assert_eq!(game.guesses_remaining(), 6);
    /// assert!(pool.contains(&game.secret_word()));
    ///
    /// let empty: [&str; 0] = [];
    /// assert!(GameSession::new(&empty, &mut rng).is_err());
    /// ```
    pub fn new<S, R>(word_pool: &[S], rng: &mut R) -> Result<Self, GameError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let word = word_pool.choose(rng).ok_or(GameError::EmptyPool)?;
        let session = Self::with_secret(word.as_ref())?;

        info!(
            pool = word_pool.len(),
            length = session.secret.len(),
            "new game started"
        );
        Ok(session)
    }

    /// Start a new game with a known secret word
    ///
    /// # Errors
    /// Returns `GameError::InvalidWord` if the word is empty or not made of ASCII letters.
    pub fn with_secret(word: &str) -> Result<Self, GameError> {
        let secret = SecretWord::new(word)?;
        let revealed = vec![None; secret.len()];

        Ok(Self {
            secret,
            revealed,
            guesses_remaining: MAX_GUESSES,
            correct: BTreeSet::new(),
            incorrect: Vec::new(),
        })
    }

    /// Apply a guess
    ///
    /// A correct letter is revealed at every position it occurs. A wrong letter costs one
    /// guess the first time only; repeating any earlier guess leaves the session unchanged.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` once the game is won or lost.
    pub fn make_guess(&mut self, letter: Letter) -> Result<GuessOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let positions = self.secret.positions_of(letter);
        let outcome = if positions.is_empty() {
            if self.incorrect.contains(&letter) {
                GuessOutcome::RepeatedMiss
            } else {
                self.incorrect.push(letter);
                self.guesses_remaining = self.guesses_remaining.saturating_sub(1);
                GuessOutcome::Miss
            }
        } else if self.correct.insert(letter) {
            for &i in positions {
                self.revealed[i] = Some(letter);
            }
            GuessOutcome::Hit {
                revealed: positions.len(),
            }
        } else {
            GuessOutcome::RepeatedHit
        };

        debug_assert_eq!(
            usize::from(self.guesses_remaining) + self.incorrect.len(),
            usize::from(MAX_GUESSES)
        );
        debug!(
            %letter,
            ?outcome,
            remaining = self.guesses_remaining,
            status = ?self.status(),
            "guess applied"
        );
        Ok(outcome)
    }

    /// Validate a raw character and apply it as a guess
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` for anything but `a..=z`, otherwise as
    /// [`make_guess`](Self::make_guess).
    pub fn make_guess_char(&mut self, ch: char) -> Result<GuessOutcome, GameError> {
        self.make_guess(Letter::new(ch)?)
    }

    /// True once the word is revealed or the guesses are used up
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.guesses_remaining == 0 || self.has_won()
    }

    /// True once every cell is revealed
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.revealed.iter().all(Option::is_some)
    }

    /// Current state; a complete word counts as a win even with no guesses left
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.has_won() {
            GameStatus::Won
        } else if self.guesses_remaining == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// The player-visible view of the game
    #[must_use]
    pub fn render(&self) -> Board {
        Board {
            cells: self.revealed.clone(),
            incorrect: self.incorrect.clone(),
            guesses_remaining: self.guesses_remaining,
        }
    }

    #[must_use]
    pub const fn guesses_remaining(&self) -> u8 {
        self.guesses_remaining
    }

    #[must_use]
    pub const fn correct_guesses(&self) -> &BTreeSet<Letter> {
        &self.correct
    }

    #[must_use]
    pub fn incorrect_guesses(&self) -> &[Letter] {
        &self.incorrect
    }

    #[must_use]
    pub fn revealed(&self) -> &[Option<Letter>] {
        &self.revealed
    }

    /// Length of the secret word; safe to show while the game is running
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    /// The secret word, for the end-of-game message
    #[must_use]
    pub fn secret_word(&self) -> &str {
        self.secret.text()
    }

    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    /// Capture the session for saving
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            secret_word: self.secret.text().to_string(),
            revealed_pattern: self
                .revealed
                .iter()
                .map(|cell| cell.map_or(PLACEHOLDER, Letter::as_char))
                .collect(),
            guesses_remaining: i64::from(self.guesses_remaining),
            correct_guesses: self.correct.iter().map(|l| l.as_char()).collect(),
            incorrect_guesses: self.incorrect.iter().map(|l| l.as_char()).collect(),
        }
    }

    /// Rebuild a session from a saved snapshot
    ///
    /// Every field is checked against the others; nothing in the snapshot is trusted.
    ///
    /// # Errors
    /// Returns the first `CorruptSave` reason found.
    pub fn restore(snapshot: &Snapshot) -> Result<Self, CorruptSave> {
        let secret = SecretWord::new(snapshot.secret_word.as_str())
            .ok()
            .filter(|secret| secret.text() == snapshot.secret_word)
            .ok_or_else(|| CorruptSave::InvalidSecret(snapshot.secret_word.clone()))?;

        let remaining = u8::try_from(snapshot.guesses_remaining)
            .ok()
            .filter(|&remaining| remaining <= MAX_GUESSES)
            .ok_or(CorruptSave::BudgetOutOfRange(snapshot.guesses_remaining))?;

        let mut incorrect = Vec::with_capacity(snapshot.incorrect_guesses.len());
        for &ch in &snapshot.incorrect_guesses {
            let letter = Letter::new(ch).map_err(|_| CorruptSave::InvalidLetter(ch))?;
            if secret.has_letter(letter) {
                return Err(CorruptSave::IncorrectInWord(ch));
            }
            if incorrect.contains(&letter) {
                return Err(CorruptSave::DuplicateIncorrect(ch));
            }
            incorrect.push(letter);
        }

        if usize::from(remaining) + incorrect.len() != usize::from(MAX_GUESSES) {
            return Err(CorruptSave::BudgetMismatch {
                remaining,
                incorrect: incorrect.len(),
            });
        }

        let mut correct = BTreeSet::new();
        for &ch in &snapshot.correct_guesses {
            let letter = Letter::new(ch).map_err(|_| CorruptSave::InvalidLetter(ch))?;
            if !secret.has_letter(letter) {
                return Err(CorruptSave::CorrectNotInWord(ch));
            }
            if !correct.insert(letter) {
                return Err(CorruptSave::DuplicateCorrect(ch));
            }
        }

        if snapshot.revealed_pattern.len() != secret.len() {
            return Err(CorruptSave::PatternLength {
                expected: secret.len(),
                found: snapshot.revealed_pattern.len(),
            });
        }

        let mut revealed = Vec::with_capacity(secret.len());
        for (index, &cell) in snapshot.revealed_pattern.iter().enumerate() {
            let expected = secret.letter_at(index);
            let guessed = correct.contains(&expected);
            let cell = match cell {
                PLACEHOLDER if !guessed => None,
                ch if guessed && ch == expected.as_char() => Some(expected),
                _ => return Err(CorruptSave::PatternMismatch { index }),
            };
            revealed.push(cell);
        }

        Ok(Self {
            secret,
            revealed,
            guesses_remaining: remaining,
            correct,
            incorrect,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn guess_all(game: &mut GameSession, letters: &str) {
        for ch in letters.chars() {
            game.make_guess_char(ch).unwrap();
        }
    }

    fn assert_invariants(game: &GameSession) {
        assert_eq!(
            usize::from(game.guesses_remaining()),
            usize::from(MAX_GUESSES) - game.incorrect_guesses().len()
        );
        for l in game.incorrect_guesses() {
            assert!(!game.correct_guesses().contains(l));
        }
        for (i, cell) in game.revealed().iter().enumerate() {
            let expected = game.secret().letter_at(i);
            assert_eq!(cell.is_some(), game.correct_guesses().contains(&expected));
        }
    }

    #[test]
    fn new_game_initial_state() {
        let game = GameSession::with_secret("hello").unwrap();
        assert_eq!(game.guesses_remaining(), 6);
        assert!(game.correct_guesses().is_empty());
        assert!(game.incorrect_guesses().is_empty());
        assert_eq!(game.render().pattern(), "_ _ _ _ _");
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_over());
    }

    #[test]
    fn new_game_picks_from_pool() {
        let pool = vec!["planet".to_string(), "rocket".to_string()];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let game = GameSession::new(&pool, &mut rng).unwrap();
            assert!(pool.iter().any(|w| w == game.secret_word()));
        }
    }

    #[test]
    fn new_game_same_seed_same_word() {
        let pool = ["planet", "rocket", "island", "forest", "silver"];
        let a = GameSession::new(&pool, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = GameSession::new(&pool, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a.secret_word(), b.secret_word());
    }

    #[test]
    fn new_game_lowercases_word() {
        let pool = ["Planet"];
        let game = GameSession::new(&pool, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(game.secret_word(), "planet");
    }

    #[test]
    fn new_game_empty_pool() {
        let pool: Vec<String> = Vec::new();
        assert_eq!(
            GameSession::new(&pool, &mut StdRng::seed_from_u64(1)),
            Err(GameError::EmptyPool)
        );
    }

    #[test]
    fn new_game_invalid_word() {
        let pool = ["e-mail"];
        assert!(matches!(
            GameSession::new(&pool, &mut StdRng::seed_from_u64(1)),
            Err(GameError::InvalidWord(_))
        ));
    }

    #[test]
    fn hello_scenario() {
        let mut game = GameSession::with_secret("hello").unwrap();

        let outcome = game.make_guess(letter('l')).unwrap();
        assert_eq!(outcome, GuessOutcome::Hit { revealed: 2 });
        assert_eq!(game.render().pattern(), "_ _ l l _");
        assert_eq!(
            game.correct_guesses().iter().copied().collect::<Vec<_>>(),
            vec![letter('l')]
        );
        assert_eq!(game.guesses_remaining(), 6);

        assert_eq!(game.make_guess(letter('z')).unwrap(), GuessOutcome::Miss);
        assert_eq!(game.incorrect_guesses(), &[letter('z')]);
        assert_eq!(game.guesses_remaining(), 5);

        assert_eq!(
            game.make_guess(letter('z')).unwrap(),
            GuessOutcome::RepeatedMiss
        );
        assert_eq!(game.incorrect_guesses(), &[letter('z')]);
        assert_eq!(game.guesses_remaining(), 5);
        assert_invariants(&game);
    }

    #[test]
    fn repeated_correct_guess_is_noop() {
        let mut game = GameSession::with_secret("hello").unwrap();
        game.make_guess_char('l').unwrap();
        let before = game.clone();

        assert_eq!(game.make_guess_char('l').unwrap(), GuessOutcome::RepeatedHit);
        assert_eq!(game, before);
    }

    #[test]
    fn win_scenario() {
        let mut game = GameSession::with_secret("abc").unwrap();
        guess_all(&mut game, "abc");

        assert!(game.has_won());
        assert!(game.is_over());
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.guesses_remaining(), 6);
    }

    #[test]
    fn loss_scenario() {
        let mut game = GameSession::with_secret("abc").unwrap();
        guess_all(&mut game, "xyzqrs");

        assert_eq!(game.guesses_remaining(), 0);
        assert!(game.is_over());
        assert!(!game.has_won());
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.render().incorrect_list(), "x, y, z, q, r, s");
    }

    #[test]
    fn win_on_last_guess_with_one_left() {
        let mut game = GameSession::with_secret("abc").unwrap();
        guess_all(&mut game, "xyzqrab");
        assert_eq!(game.guesses_remaining(), 1);
        game.make_guess_char('c').unwrap();
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn full_pattern_wins_even_with_no_guesses_left() {
        let snapshot = Snapshot {
            secret_word: "abc".to_string(),
            revealed_pattern: vec!['a', 'b', 'c'],
            guesses_remaining: 0,
            correct_guesses: vec!['a', 'b', 'c'],
            incorrect_guesses: vec!['u', 'v', 'w', 'x', 'y', 'z'],
        };
        let game = GameSession::restore(&snapshot).unwrap();

        assert_eq!(game.guesses_remaining(), 0);
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.has_won());
        assert!(game.is_over());
    }

    #[test]
    fn guesses_after_game_over_are_rejected() {
        let mut game = GameSession::with_secret("abc").unwrap();
        guess_all(&mut game, "abc");
        let before = game.clone();

        assert_eq!(game.make_guess_char('d'), Err(GameError::GameOver));
        assert_eq!(game, before);

        let mut lost = GameSession::with_secret("abc").unwrap();
        guess_all(&mut lost, "xyzqrs");
        assert_eq!(lost.make_guess_char('a'), Err(GameError::GameOver));
        assert_eq!(lost.guesses_remaining(), 0);
    }

    #[test]
    fn invalid_character_is_rejected_without_change() {
        let mut game = GameSession::with_secret("hello").unwrap();
        let before = game.clone();

        assert!(matches!(
            game.make_guess_char('H'),
            Err(GameError::InvalidInput(_))
        ));
        assert!(game.make_guess_char('3').is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn invariants_hold_through_a_long_game() {
        let mut game = GameSession::with_secret("mississippi").unwrap();
        for ch in "sxsxipqqmzw".chars() {
            if game.is_over() {
                break;
            }
            game.make_guess_char(ch).unwrap();
            assert_invariants(&game);
        }
        assert!(game.has_won());
        assert_eq!(game.guesses_remaining(), 4);
    }

    #[test]
    fn snapshot_fields() {
        let mut game = GameSession::with_secret("hello").unwrap();
        guess_all(&mut game, "lzh");

        let snapshot = game.snapshot();
        assert_eq!(snapshot.secret_word, "hello");
        assert_eq!(snapshot.revealed_pattern, vec!['h', '_', 'l', 'l', '_']);
        assert_eq!(snapshot.guesses_remaining, 5);
        assert_eq!(snapshot.correct_guesses, vec!['h', 'l']);
        assert_eq!(snapshot.incorrect_guesses, vec!['z']);
    }

    #[test]
    fn snapshot_restore_round_trip() {
        let mut game = GameSession::with_secret("lighthouse").unwrap();
        guess_all(&mut game, "hqezt");

        let restored = GameSession::restore(&game.snapshot()).unwrap();
        assert_eq!(restored, game);
        assert_eq!(restored.render(), game.render());
        assert_eq!(restored.status(), game.status());
    }

    #[test]
    fn restored_game_keeps_playing() {
        let mut game = GameSession::with_secret("abc").unwrap();
        guess_all(&mut game, "ax");

        let mut restored = GameSession::restore(&game.snapshot()).unwrap();
        assert_eq!(
            restored.make_guess_char('x').unwrap(),
            GuessOutcome::RepeatedMiss
        );
        guess_all(&mut restored, "bc");
        assert!(restored.has_won());
        assert_eq!(restored.guesses_remaining(), 5);
    }

    fn valid_snapshot() -> Snapshot {
        Snapshot {
            secret_word: "hello".to_string(),
            revealed_pattern: vec!['_', '_', 'l', 'l', '_'],
            guesses_remaining: 5,
            correct_guesses: vec!['l'],
            incorrect_guesses: vec!['z'],
        }
    }

    #[test]
    fn restore_accepts_valid_snapshot() {
        let game = GameSession::restore(&valid_snapshot()).unwrap();
        assert_eq!(game.render().pattern(), "_ _ l l _");
        assert_eq!(game.guesses_remaining(), 5);
    }

    #[test]
    fn restore_rejects_bad_secret() {
        let mut snapshot = valid_snapshot();
        snapshot.secret_word = "Hello".to_string();
        assert!(matches!(
            GameSession::restore(&snapshot),
            Err(CorruptSave::InvalidSecret(_))
        ));

        snapshot.secret_word = String::new();
        assert!(matches!(
            GameSession::restore(&snapshot),
            Err(CorruptSave::InvalidSecret(_))
        ));
    }

    #[test]
    fn restore_rejects_budget_out_of_range() {
        let mut snapshot = valid_snapshot();
        snapshot.guesses_remaining = 7;
        assert!(matches!(
            GameSession::restore(&snapshot),
            Err(CorruptSave::BudgetOutOfRange(7))
        ));

        snapshot.guesses_remaining = -1;
        assert!(matches!(
            GameSession::restore(&snapshot),
            Err(CorruptSave::BudgetOutOfRange(-1))
        ));
    }

    #[test]
    fn restore_rejects_budget_mismatch() {
        let mut snapshot = valid_snapshot();
        snapshot.guesses_remaining = 6;
        assert!(matches!(
            GameSession::restore(&snapshot),
            Err(CorruptSave::BudgetMismatch {
                remaining: 6,
                incorrect: 1
            })
        ));
    }

    #[test]
    fn restore_rejects_pattern_length() {
        let mut snapshot = valid_snapshot();
        snapshot.revealed_pattern.pop();
        assert!(matches!(
            GameSession::restore(&snapshot),
            Err(CorruptSave::PatternLength {
                expected: 5,
                found: 4
            })
        ));
    }

    #[test]
    fn restore_rejects_pattern_mismatch() {
        // Wrong letter in a revealed cell
        let mut snapshot = valid_snapshot();
        snapshot.revealed_pattern[2] = 'e';
        assert!(matches!(
            GameSession::restore(&snapshot),
            Err(CorruptSave::PatternMismatch { index: 2 })
        ));

        // Correct letter left hidden
        let mut snapshot = valid_snapshot();
        snapshot.revealed_pattern[3] = '_';
        assert!(matches!(
            GameSession::restore(&snapshot),
            Err(CorruptSave::PatternMismatch { index: 3 })
        ));

        // Revealed letter never guessed
        let mut snapshot = valid_snapshot();
        snapshot.revealed_pattern[0] = 'h';
        assert!(matches!(
            GameSession::restore(&snapshot),
            Err(CorruptSave::PatternMismatch { index: 0 })
        ));
    }

    #[test]
    fn restore_rejects_inconsistent_guess_sets() {
        let mut snapshot = valid_snapshot();
        snapshot.correct_guesses.push('q');
        assert!(matches!(
            GameSession::restore(&snapshot),
            Err(CorruptSave::CorrectNotInWord('q'))
        ));

        let mut snapshot = valid_snapshot();
        snapshot.correct_guesses.push('l');
        assert!(matches!(
            GameSession::restore(&snapshot),
            Err(CorruptSave::DuplicateCorrect('l'))
        ));

        let mut snapshot = valid_snapshot();
        snapshot.incorrect_guesses = vec!['e'];
        assert!(matches!(
            GameSession::restore(&snapshot),
            Err(CorruptSave::IncorrectInWord('e'))
        ));

        let mut snapshot = valid_snapshot();
        snapshot.incorrect_guesses = vec!['z', 'z'];
        snapshot.guesses_remaining = 4;
        assert!(matches!(
            GameSession::restore(&snapshot),
            Err(CorruptSave::DuplicateIncorrect('z'))
        ));

        let mut snapshot = valid_snapshot();
        snapshot.incorrect_guesses = vec!['Z'];
        assert!(matches!(
            GameSession::restore(&snapshot),
            Err(CorruptSave::InvalidLetter('Z'))
        ));
    }
}
