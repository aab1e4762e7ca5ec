use crate::dictionary::is_lowercase_word;

/// One hangman session: the target word and the letters guessed so far,
/// kept in first-guess order.
pub struct Game {
    word: String,
    guessed: Vec<char>,
}

impl Game {
    pub fn new(word: &str) -> Game {
        Game {
            word: word.to_string(),
            guessed: Vec::new(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Records a guess. A guess is one or more lowercase letters, a whole
    /// word counts as guessing each of its letters. Anything else is
    /// ignored without comment.
    pub fn record_guess(&mut self, input: &str) {
        if !is_lowercase_word(input) {
            return;
        }
        for letter in input.chars() {
            if !self.guessed.contains(&letter) {
                self.guessed.push(letter);
            }
        }
    }

    /// Guessed letters that do not occur in the word, in guess order.
    pub fn bad_guesses(&self) -> Vec<char> {
        self.guessed
            .iter()
            .copied()
            .filter(|letter| !self.word.contains(*letter))
            .collect()
    }

    /// The word with unguessed letters blanked to spaces.
    pub fn revealed(&self) -> String {
        self.word
            .chars()
            .map(|letter| {
                if self.guessed.contains(&letter) {
                    letter
                } else {
                    ' '
                }
            })
            .collect()
    }

    pub fn is_won(&self) -> bool {
        self.word.chars().all(|letter| self.guessed.contains(&letter))
    }

    /// The final stage is the lost game, reaching it ends the session.
    pub fn is_lost(&self, stage_count: usize) -> bool {
        self.bad_guesses().len() >= stage_count - 1
    }
}
