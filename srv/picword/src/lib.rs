//! Picture word guessing game: an actix-web server holding the current round
//! and a terminal client that plays against it.

pub mod client;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;
