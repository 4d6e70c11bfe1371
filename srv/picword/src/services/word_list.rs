use std::fs::File;
use std::io::{self, BufRead};

use log::info;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::utils::normalize_phrase;

/// Built-in Vietnamese phrases
pub const DEFAULT_WORDS: &[&str] = &[
    "con mèo",
    "con chó",
    "bông hoa",
    "ngôi nhà",
    "cây cối",
    "mặt trời",
    "mặt trăng",
    "ô tô",
    "xe đạp",
    "máy bay",
    "con voi",
    "con cá",
    "núi non",
    "biển cả",
    "cầu vồng",
    "người đàn ông",
    "người phụ nữ",
    "trẻ em",
    "quả táo",
    "quả cam",
];

/// Ordered, non-empty list of candidate phrases
#[derive(Debug, Clone)]
pub struct WordList {
    phrases: Vec<String>,
}

impl WordList {
    /// Build a list from raw phrases; `None` if nothing usable remains
    pub fn new<I, S>(phrases: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<String> = phrases
            .into_iter()
            .map(|p| normalize_phrase(p.as_ref()))
            .filter(|p| !p.is_empty())
            .collect();

        if phrases.is_empty() {
            None
        } else {
            Some(WordList { phrases })
        }
    }

    pub fn builtin() -> Self {
        WordList {
            phrases: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    /// Pick one phrase uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Never empty, see `new`
        self.phrases
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(self.phrases[0].as_str())
    }
}

/// Load phrases from a plain text file (one phrase per line, `#` starts a comment line)
pub fn load_word_list(file_path: &str) -> io::Result<WordList> {
    let file = File::open(file_path)?;
    let reader = io::BufReader::new(file);

    let mut phrases = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let phrase = line.trim();
        if !phrase.is_empty() && !phrase.starts_with('#') {
            phrases.push(phrase.to_string());
        }
    }

    let words = WordList::new(phrases).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("No phrases found in {}", file_path),
        )
    })?;

    info!("Loaded {} phrases from {}.", words.len(), file_path);
    Ok(words)
}
