use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Shown to the user whenever flashcard generation fails for any reason
/// after the request passed validation.
pub const GENERATION_FAILED_MESSAGE: &str =
    "We couldn't create flashcards from these images. Please try again with clearer photos.";

/// Returned by the PDF endpoint until document import ships.
pub const PDF_IMPORT_PENDING_MESSAGE: &str =
    "PDF import is still in progress and not yet available. Please use images for now.";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("{}", GENERATION_FAILED_MESSAGE)]
    ExternalService,

    #[error("{}", PDF_IMPORT_PENDING_MESSAGE)]
    NotImplemented,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// A single rejected field, addressed by a JSON-ish path such as
/// `images[2].base64`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.push(path, message);
        err
    }

    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issues.push(FieldIssue {
            path: path.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns `Ok(())` when no issue was recorded.
    pub fn into_result(self) -> std::result::Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    pub fn has_issue_at(&self, path: &str) -> bool {
        self.issues.iter().any(|issue| issue.path == path)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .issues
            .iter()
            .map(|issue| format!("{}: {}", issue.path, issue.message))
            .collect();
        write!(f, "{}", rendered.join("; "))
    }
}

impl std::error::Error for ValidationError {}
