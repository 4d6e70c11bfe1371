use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::models::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("No active game")]
    NoActiveGame,
    #[error("Invalid request body")]
    InvalidRequest,
    /// Unexpected fault; the message is what the caller sees
    #[error("{0}")]
    Internal(&'static str),
}

impl ResponseError for GameError {
    fn status_code(&self) -> StatusCode {
        match self {
            GameError::NoActiveGame | GameError::InvalidRequest => StatusCode::BAD_REQUEST,
            GameError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
