pub mod game;
pub mod image;
pub mod letter_bank;
pub mod store;
pub mod word_list;
