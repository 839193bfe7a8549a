pub mod movie_card;
pub mod search_input;
pub mod theme;
