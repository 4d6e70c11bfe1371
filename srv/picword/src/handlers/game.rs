use actix_web::{error, get, post, web, HttpRequest, HttpResponse};
use log::{info, warn};

use crate::error::GameError;
use crate::models::{AppState, CheckAnswerRequest};
use crate::services::game::{check_answer as check_guess, hints, start_new_game};
use crate::services::store::SessionId;

#[post("/api/new-game")]
pub async fn new_game(data: web::Data<AppState>) -> Result<HttpResponse, GameError> {
    let response = start_new_game(&data).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/check-answer")]
pub async fn check_answer(
    data: web::Data<AppState>,
    body: Option<web::Json<CheckAnswerRequest>>,
) -> Result<HttpResponse, GameError> {
    // No active game wins over a bad body
    let game = data.store.get(&SessionId::shared()).await?;
    let body = body.ok_or(GameError::InvalidRequest)?;
    let result = check_guess(&game, &body.guess);

    info!("Guess for game {} was {}", game.generation, if result.correct { "correct" } else { "wrong" });
    Ok(HttpResponse::Ok().json(result))
}

#[get("/api/hint")]
pub async fn hint(data: web::Data<AppState>) -> Result<HttpResponse, GameError> {
    let game = data.store.get(&SessionId::shared()).await?;
    Ok(HttpResponse::Ok().json(hints(&game)))
}

/// Malformed JSON bodies get the same `{ "error": ... }` shape as everything else.
/// `check_answer` takes its body as an `Option`, so there this only logs.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, req: &HttpRequest| {
        warn!("Rejected body for {}: {}", req.path(), err);
        GameError::InvalidRequest.into()
    })
}
