use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use log::info;
use tokio::sync::RwLock;

use crate::error::GameError;
use crate::models::CurrentGame;

/// Key into the game store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        SessionId(id.into())
    }

    /// The one session every HTTP client plays in
    pub fn shared() -> Self {
        SessionId::new("shared")
    }
}

/// In-memory games keyed by session. Last install wins.
#[derive(Default)]
pub struct GameStore {
    games: RwLock<HashMap<SessionId, CurrentGame>>,
    generations: AtomicU64,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a fully built game, replacing whatever the session held
    pub async fn install(&self, session: &SessionId, mut game: CurrentGame) -> CurrentGame {
        let mut games = self.games.write().await;
        // Numbered under the write lock so install order and generation order agree
        game.generation = self.generations.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(previous) = games.insert(session.clone(), game.clone()) {
            info!(
                "Game {} replaced game {} in session {:?}",
                game.generation, previous.generation, session.0
            );
        }
        game
    }

    pub async fn get(&self, session: &SessionId) -> Result<CurrentGame, GameError> {
        self.games
            .read()
            .await
            .get(session)
            .cloned()
            .ok_or(GameError::NoActiveGame)
    }
}
