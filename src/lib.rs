pub mod cli;
pub mod commands;
pub mod motif;
pub mod plot;
pub mod seq;
pub mod utils;
