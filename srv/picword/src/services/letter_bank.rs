use rand::seq::SliceRandom;
use rand::Rng;

use crate::utils::{distinct_letters, phrase_letters};

/// Filler alphabet (Vietnamese letters without tone marks)
pub const FILLER_ALPHABET: &str = "aăâbcdđeêghiklmnoôơpqrstuưvxy";

pub const MIN_FILLERS: usize = 5;
pub const MAX_FILLERS: usize = 8;

/// Build the shuffled letter bank for a phrase.
///
/// The bank holds each letter of the phrase as often as the phrase uses it, plus
/// 5 to 8 distinct filler letters from [`FILLER_ALPHABET`] that do not occur in it.
pub fn build_letter_bank<R: Rng + ?Sized>(phrase: &str, rng: &mut R) -> Vec<char> {
    let used = distinct_letters(phrase);
    let mut bank = phrase_letters(phrase);

    let candidates: Vec<char> = FILLER_ALPHABET
        .chars()
        .filter(|c| !used.contains(c))
        .collect();
    let filler_count = rng.gen_range(MIN_FILLERS..=MAX_FILLERS);
    bank.extend(candidates.choose_multiple(rng, filler_count).copied());

    bank.shuffle(rng);
    bank
}
