//! Flashcard generation from uploaded study material.

pub mod prompt;
mod service;
mod types;
pub mod validation;

pub use service::FlashcardService;
pub use types::*;
