pub mod api;
pub mod player;
pub mod state;
pub mod terminal;
