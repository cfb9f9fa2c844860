pub mod app;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod interrupt;
pub mod listener;
pub mod prompt;
pub mod table;
pub mod utils;

#[cfg(test)]
mod testing;

pub use error::PasteError;
