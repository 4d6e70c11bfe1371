use actix_web::web;

pub mod game;
pub mod pages;

/// JSON game endpoints
pub fn api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(game::json_config())
        .service(game::new_game)
        .service(game::check_answer)
        .service(game::hint);
}
