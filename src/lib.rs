pub mod app;
pub mod config;
pub mod movie;
pub mod omdb;
pub mod poster;
pub mod search;
pub mod ui;
