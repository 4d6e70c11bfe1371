use actix_web::web;
use chrono::Utc;
use log::{error, info};
use rand::Rng;

use crate::error::GameError;
use crate::models::{AppState, CheckAnswerResponse, CurrentGame, HintResponse, NewGameResponse, WordToken};
use crate::services::image::{image_for, ImageProvider};
use crate::services::letter_bank::build_letter_bank;
use crate::services::store::SessionId;
use crate::services::word_list::WordList;
use crate::utils::first_letters;

/// One entry per space-separated token, lengths counted in characters
pub fn build_word_structure(word: &str) -> Vec<WordToken> {
    word.split(' ')
        .map(|token| WordToken {
            length: token.chars().count(),
            text: token.to_lowercase(),
        })
        .collect()
}

/// Assemble a complete round. Nothing is installed here.
pub fn build_game<R: Rng + ?Sized>(
    words: &WordList,
    images: &dyn ImageProvider,
    rng: &mut R,
) -> CurrentGame {
    let word = words.choose(rng).to_lowercase();
    let image_url = image_for(images, &word);
    let letter_bank = build_letter_bank(&word, rng);
    let word_structure = build_word_structure(&word);

    CurrentGame {
        word,
        image_url,
        letter_bank,
        word_structure,
        created_at: Utc::now(),
        generation: 0,
    }
}

/// Build a new round off the async workers and make it the shared current game
pub async fn start_new_game(data: &web::Data<AppState>) -> Result<NewGameResponse, GameError> {
    let state = data.clone();
    let game = web::block(move || {
        build_game(&state.words, &*state.images, &mut rand::thread_rng())
    })
    .await
    .map_err(|e| {
        error!("Error creating new game: {}", e);
        GameError::Internal("Failed to create new game")
    })?;

    let game = data.store.install(&SessionId::shared(), game).await;
    info!(
        "Started game {} ({} tokens, {} letters in bank) at {}",
        game.generation,
        game.word_structure.len(),
        game.letter_bank.len(),
        game.created_at.to_rfc3339()
    );
    Ok(NewGameResponse::from(&game))
}

/// Case- and surrounding-whitespace-insensitive, otherwise exact
pub fn check_answer(game: &CurrentGame, guess: &str) -> CheckAnswerResponse {
    let clean_guess = guess.to_lowercase();
    let correct = clean_guess.trim() == game.word;

    CheckAnswerResponse {
        correct,
        answer: correct.then(|| game.word.clone()),
    }
}

pub fn hints(game: &CurrentGame) -> HintResponse {
    HintResponse {
        hints: first_letters(&game.word),
    }
}
