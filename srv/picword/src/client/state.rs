use std::collections::BTreeSet;
use std::fmt::Write;
use std::time::{Duration, Instant};

use crate::models::NewGameResponse;

/// How long checking and hinting stay disabled after a correct answer
pub const COOL_DOWN: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("not every slot is filled")]
pub struct IncompleteGuess;

/// Local view of the round: what the server sent plus the player's placements.
///
/// A bank index is in `used_letters` exactly when its letter sits in one slot,
/// except for the value-match drift of [`ClientGame::remove_letter`].
#[derive(Debug, Clone)]
pub struct ClientGame {
    image_url: String,
    letter_bank: Vec<char>,
    /// One slot per letter, grouped by token as the server's word structure says
    user_input: Vec<Vec<Option<char>>>,
    used_letters: BTreeSet<usize>,
    locked_until: Option<Instant>,
}

impl From<NewGameResponse> for ClientGame {
    fn from(response: NewGameResponse) -> Self {
        let user_input = response
            .word_structure
            .iter()
            .map(|token| vec![None; token.length])
            .collect();

        ClientGame {
            image_url: response.image_url,
            letter_bank: response.letter_bank,
            user_input,
            used_letters: BTreeSet::new(),
            locked_until: None,
        }
    }
}

impl ClientGame {
    pub fn letter_bank(&self) -> &[char] {
        &self.letter_bank
    }

    pub fn is_used(&self, bank_index: usize) -> bool {
        self.used_letters.contains(&bank_index)
    }

    pub fn slot(&self, token: usize, position: usize) -> Option<char> {
        self.user_input.get(token)?.get(position).copied().flatten()
    }

    /// Put a bank letter into the first empty slot, scanning tokens in order.
    /// Returns false when nothing changed.
    pub fn place_letter(&mut self, bank_index: usize) -> bool {
        let Some(&letter) = self.letter_bank.get(bank_index) else {
            return false;
        };
        if self.used_letters.contains(&bank_index) {
            return false;
        }

        let empty = self
            .user_input
            .iter_mut()
            .flat_map(|token| token.iter_mut())
            .find(|slot| slot.is_none());

        match empty {
            Some(slot) => {
                *slot = Some(letter);
                self.used_letters.insert(bank_index);
                true
            }
            None => false,
        }
    }

    /// Clear a slot and release the lowest used bank index holding the same letter.
    /// Returns false when the slot was already empty.
    pub fn remove_letter(&mut self, token: usize, position: usize) -> bool {
        let Some(slot) = self.user_input.get_mut(token).and_then(|t| t.get_mut(position)) else {
            return false;
        };
        let Some(letter) = slot.take() else {
            return false;
        };

        let released = self
            .used_letters
            .iter()
            .copied()
            .find(|&i| self.letter_bank[i] == letter);
        if let Some(index) = released {
            self.used_letters.remove(&index);
        }
        true
    }

    /// Tokens joined by single spaces, or an error if any slot is empty
    pub fn assemble_guess(&self) -> Result<String, IncompleteGuess> {
        let mut words = Vec::with_capacity(self.user_input.len());
        for token in &self.user_input {
            let word: Option<String> = token.iter().copied().collect();
            words.push(word.ok_or(IncompleteGuess)?);
        }

        let guess = words.join(" ").trim().to_string();
        if guess.is_empty() {
            return Err(IncompleteGuess);
        }
        Ok(guess)
    }

    pub fn start_cool_down(&mut self, now: Instant) {
        self.locked_until = Some(now + COOL_DOWN);
    }

    /// Whether check and hint are enabled
    pub fn can_check(&self, now: Instant) -> bool {
        self.locked_until.map_or(true, |until| now >= until)
    }

    /// Full text projection of the board
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Image: {}", self.image_url);

        let words: Vec<String> = self
            .user_input
            .iter()
            .map(|token| token.iter().map(|slot| slot.unwrap_or('_')).collect())
            .collect();
        let _ = writeln!(out, "Word:  {}", words.join("   "));

        let bank: Vec<String> = self
            .letter_bank
            .iter()
            .enumerate()
            .map(|(i, letter)| {
                if self.is_used(i) {
                    format!("[{}: ·]", i + 1)
                } else {
                    format!("[{}: {}]", i + 1, letter)
                }
            })
            .collect();
        let _ = write!(out, "Bank:  {}", bank.join(" "));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TokenShape;

    fn game(bank: &str, lengths: &[usize]) -> ClientGame {
        ClientGame::from(NewGameResponse {
            image_url: "https://via.placeholder.com/512x512.png?text=x".to_string(),
            letter_bank: bank.chars().collect(),
            word_structure: lengths.iter().map(|&length| TokenShape { length }).collect(),
        })
    }

    fn place_all(game: &mut ClientGame, indexes: &[usize]) {
        for &i in indexes {
            assert!(game.place_letter(i));
        }
    }

    #[test]
    fn test_place_fills_first_empty_slot() {
        let mut g = game("ncmoèx", &[3, 3]);
        assert!(g.place_letter(1));
        assert!(g.place_letter(3));
        assert_eq!(g.slot(0, 0), Some('c'));
        assert_eq!(g.slot(0, 1), Some('o'));
        assert_eq!(g.slot(0, 2), None);
        assert!(g.is_used(1) && g.is_used(3));
    }

    #[test]
    fn test_place_crosses_token_boundary() {
        let mut g = game("abcd", &[1, 2]);
        place_all(&mut g, &[0, 1]);
        assert_eq!(g.slot(0, 0), Some('a'));
        assert_eq!(g.slot(1, 0), Some('b'));
    }

    #[test]
    fn test_place_when_full_is_noop() {
        let mut g = game("abc", &[2]);
        place_all(&mut g, &[0, 1]);
        assert!(!g.place_letter(2));
        assert!(!g.is_used(2));
    }

    #[test]
    fn test_place_rejects_used_or_unknown_index() {
        let mut g = game("abc", &[3]);
        assert!(g.place_letter(0));
        assert!(!g.place_letter(0));
        assert!(!g.place_letter(9));
        assert_eq!(g.slot(0, 1), None);
    }

    #[test]
    fn test_remove_releases_bank_index() {
        let mut g = game("abc", &[3]);
        place_all(&mut g, &[2, 0]);
        assert!(g.remove_letter(0, 0));
        assert_eq!(g.slot(0, 0), None);
        assert!(!g.is_used(2));
        assert!(g.is_used(0));

        // the freed slot is the first empty one again
        assert!(g.place_letter(1));
        assert_eq!(g.slot(0, 0), Some('b'));
    }

    #[test]
    fn test_remove_empty_slot_is_noop() {
        let mut g = game("abc", &[2]);
        assert!(!g.remove_letter(0, 1));
        assert!(!g.remove_letter(4, 0));
    }

    #[test]
    fn test_remove_releases_by_value() {
        // Two identical letters: removing either frees the lowest used index
        let mut g = game("oxo", &[2]);
        place_all(&mut g, &[2, 0]);
        assert!(g.remove_letter(0, 0));
        assert!(!g.is_used(0));
        assert!(g.is_used(2));
    }

    #[test]
    fn test_assemble_guess() {
        let mut g = game("nocmèo", &[3, 3]);
        assert_eq!(g.assemble_guess(), Err(IncompleteGuess));

        place_all(&mut g, &[2, 1, 0, 3, 4, 5]);
        assert_eq!(g.assemble_guess().unwrap(), "con mèo");

        g.remove_letter(1, 2);
        assert_eq!(g.assemble_guess(), Err(IncompleteGuess));
    }

    #[test]
    fn test_cool_down() {
        let mut g = game("ab", &[1]);
        let now = Instant::now();
        assert!(g.can_check(now));

        g.start_cool_down(now);
        assert!(!g.can_check(now));
        assert!(!g.can_check(now + Duration::from_millis(2999)));
        assert!(g.can_check(now + COOL_DOWN));
    }

    #[test]
    fn test_render() {
        let mut g = game("ab", &[1, 1]);
        g.place_letter(1);
        let board = g.render();
        assert!(board.contains("Word:  b   _"));
        assert!(board.contains("[1: a] [2: ·]"));
    }
}
