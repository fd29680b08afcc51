pub mod config;
pub mod error;
pub mod flashcards;
pub mod llm;
pub mod logger;
pub mod pattern;
pub mod server;

pub use error::{Error, Result};
