pub mod board;
pub mod config;
pub mod constants;
pub mod engine;
pub mod evaluate;
pub mod game;
pub mod move_gen;
pub mod r#move;
pub mod notation;
pub mod rules;
