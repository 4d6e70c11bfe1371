use std::time::Instant;

use log::error;

use crate::client::api::GameApi;
use crate::client::state::ClientGame;

pub const LOAD_FAILED: &str = "Không thể tải trò chơi. Vui lòng thử lại!";
pub const INCOMPLETE_GUESS: &str = "Vui lòng điền đầy đủ các chữ cái!";
pub const WRONG_GUESS: &str = "❌ Sai rồi! Thử lại nhé!";
pub const CHECK_FAILED: &str = "Lỗi khi kiểm tra đáp án!";
pub const HINT_FAILED: &str = "Không thể lấy gợi ý!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub tone: Tone,
    pub text: String,
}

impl Message {
    fn new(tone: Tone, text: impl Into<String>) -> Self {
        Message {
            tone,
            text: text.into(),
        }
    }
}

pub fn correct_message(answer: &str) -> String {
    format!("🎉 Chính xác! Đáp án là: \"{}\"", answer)
}

pub fn hint_message(hints: &[char]) -> String {
    let parts: Vec<String> = hints
        .iter()
        .enumerate()
        .map(|(i, h)| format!("Từ {}: Bắt đầu bằng \"{}\"", i + 1, h))
        .collect();
    format!("💡 Gợi ý: {}", parts.join(", "))
}

/// Drives one player's round against the server
pub struct Player {
    api: GameApi,
    game: Option<ClientGame>,
    message: Option<Message>,
}

impl Player {
    pub fn new(api: GameApi) -> Self {
        Player {
            api,
            game: None,
            message: None,
        }
    }

    pub fn game(&self) -> Option<&ClientGame> {
        self.game.as_ref()
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub async fn start_new_game(&mut self) {
        self.message = None;
        match self.api.new_game().await {
            Ok(response) => self.game = Some(ClientGame::from(response)),
            Err(e) => {
                error!("Error starting new game: {}", e);
                self.message = Some(Message::new(Tone::Error, LOAD_FAILED));
            }
        }
    }

    pub fn place_letter(&mut self, bank_index: usize) -> bool {
        self.game
            .as_mut()
            .map_or(false, |game| game.place_letter(bank_index))
    }

    pub fn remove_letter(&mut self, token: usize, position: usize) -> bool {
        self.game
            .as_mut()
            .map_or(false, |game| game.remove_letter(token, position))
    }

    /// Submit the assembled guess. Does nothing while cooling down.
    pub async fn check_answer(&mut self, now: Instant) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        if !game.can_check(now) {
            return;
        }

        let guess = match game.assemble_guess() {
            Ok(guess) => guess,
            Err(_) => {
                self.message = Some(Message::new(Tone::Error, INCOMPLETE_GUESS));
                return;
            }
        };

        self.message = Some(match self.api.check_answer(&guess).await {
            Ok(result) if result.correct => {
                game.start_cool_down(now);
                let answer = result.answer.unwrap_or(guess);
                Message::new(Tone::Success, correct_message(&answer))
            }
            Ok(_) => Message::new(Tone::Error, WRONG_GUESS),
            Err(e) => {
                error!("Error checking answer: {}", e);
                Message::new(Tone::Error, CHECK_FAILED)
            }
        });
    }

    /// Ask for the first letter of every word. Does nothing while cooling down.
    pub async fn request_hint(&mut self, now: Instant) {
        if let Some(game) = &self.game {
            if !game.can_check(now) {
                return;
            }
        }

        self.message = Some(match self.api.hint().await {
            Ok(response) => Message::new(Tone::Info, hint_message(&response.hints)),
            Err(e) => {
                error!("Error getting hint: {}", e);
                Message::new(Tone::Error, HINT_FAILED)
            }
        });
    }
}
