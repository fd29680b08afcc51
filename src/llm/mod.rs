mod client;
mod types;

pub use client::{OpenAiClient, StructuredGenerator};
pub use types::*;
