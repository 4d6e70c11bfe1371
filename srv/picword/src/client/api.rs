use actix_web::http::StatusCode;
use awc::Client;

use crate::models::{CheckAnswerRequest, CheckAnswerResponse, HintResponse, NewGameResponse};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Send(String),
    #[error("server answered {0}")]
    Status(StatusCode),
    #[error("unreadable response: {0}")]
    Payload(String),
}

/// Thin HTTP wrapper around the three game endpoints
pub struct GameApi {
    client: Client,
    base_url: String,
}

impl GameApi {
    pub fn new(base_url: &str) -> Self {
        GameApi {
            client: Client::default(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn new_game(&self) -> Result<NewGameResponse, ApiError> {
        let mut response = self
            .client
            .post(self.url("/api/new-game"))
            .send()
            .await
            .map_err(|e| ApiError::Send(e.to_string()))?;
        ensure_success(response.status())?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Payload(e.to_string()))
    }

    pub async fn check_answer(&self, guess: &str) -> Result<CheckAnswerResponse, ApiError> {
        let body = CheckAnswerRequest {
            guess: guess.to_string(),
        };
        let mut response = self
            .client
            .post(self.url("/api/check-answer"))
            .send_json(&body)
            .await
            .map_err(|e| ApiError::Send(e.to_string()))?;
        ensure_success(response.status())?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Payload(e.to_string()))
    }

    pub async fn hint(&self) -> Result<HintResponse, ApiError> {
        let mut response = self
            .client
            .get(self.url("/api/hint"))
            .send()
            .await
            .map_err(|e| ApiError::Send(e.to_string()))?;
        ensure_success(response.status())?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Payload(e.to_string()))
    }
}

/// Error payloads are never inspected, only the status
fn ensure_success(status: StatusCode) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}
