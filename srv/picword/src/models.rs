use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::image::ImageProvider;
use crate::services::store::GameStore;
use crate::services::word_list::WordList;

/// Application state shared across all handlers
pub struct AppState {
    pub words: WordList,
    pub images: Box<dyn ImageProvider>,
    pub store: GameStore,
}

/// One space-separated token of the answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordToken {
    pub length: usize,
    pub text: String,
}

/// The server-held round, answer included
#[derive(Debug, Clone)]
pub struct CurrentGame {
    pub word: String,
    pub image_url: String,
    pub letter_bank: Vec<char>,
    pub word_structure: Vec<WordToken>,
    pub created_at: DateTime<Utc>,
    /// Assigned by the store on install
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenShape {
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameResponse {
    pub image_url: String,
    pub letter_bank: Vec<char>,
    pub word_structure: Vec<TokenShape>,
}

impl From<&CurrentGame> for NewGameResponse {
    fn from(game: &CurrentGame) -> Self {
        NewGameResponse {
            image_url: game.image_url.clone(),
            letter_bank: game.letter_bank.clone(),
            word_structure: game
                .word_structure
                .iter()
                .map(|token| TokenShape { length: token.length })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckAnswerRequest {
    pub guess: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckAnswerResponse {
    pub correct: bool,
    pub answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HintResponse {
    pub hints: Vec<char>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
