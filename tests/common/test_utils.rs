use super::mocks::MockGenerator;
use flashdeck_server::{
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    flashcards::{FlashcardService, GenerateFromImagesRequest, GenerateFromPdfsRequest, ImageInput, PdfInput},
    logger::Logger,
};
use serde_json::{Value, json};
use std::sync::Arc;

/// Long enough to pass the base64 length check
pub const SAMPLE_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk";

pub fn create_test_config() -> Config {
    Config {
        llm: LlmConfig {
            provider: "openai".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: "test-api-key".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: None,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
                dev_mode: true,
            },
        },
    }
}

pub fn create_service(generator: MockGenerator) -> FlashcardService {
    FlashcardService::new(Arc::new(generator), Logger::disabled())
}

pub fn sample_image(name: &str) -> ImageInput {
    ImageInput {
        base64: SAMPLE_BASE64.to_string(),
        mime_type: "image/png".to_string(),
        name: name.to_string(),
    }
}

pub fn image_request(count: usize) -> GenerateFromImagesRequest {
    GenerateFromImagesRequest {
        images: (0..count).map(|i| sample_image(&format!("page-{}.png", i))).collect(),
        deck_context: None,
        language: None,
    }
}

pub fn sample_pdf() -> PdfInput {
    PdfInput {
        base64: "JVBERi0xLjQKJcOkw7zDtsOfCjIgMCBvYmoK".to_string(),
        mime_type: "application/pdf".to_string(),
        name: "lecture.pdf".to_string(),
        size_bytes: 48_213,
    }
}

pub fn pdf_request(count: usize) -> GenerateFromPdfsRequest {
    GenerateFromPdfsRequest {
        files: vec![sample_pdf(); count],
        deck_context: None,
        language: None,
    }
}

pub fn minimal_flashcard_output() -> Value {
    json!({"flashcards": [{"question": "Q", "answer": "A"}]})
}

pub fn full_flashcard_output() -> Value {
    json!({
        "flashcards": [
            {
                "question": "What organelle produces ATP?",
                "answer": "The mitochondrion",
                "tags": ["cell biology", "energy"]
            },
            {
                "question": "What does the ribosome synthesize?",
                "answer": "Proteins"
            }
        ],
        "suggestedDeckName": "Cell Organelles",
        "summary": "Core functions of eukaryotic organelles."
    })
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  logs:
    level: "debug"
    dev_mode: true

llm:
  provider: "openai"
  base_url: "https://api.openai.com/v1"
  api_key: "test-api-key"
  model: "gpt-4o-mini"
  temperature: 0.2
"#;

/// Only the required fields
pub const MINIMAL_CONFIG_YAML: &str = r#"
llm:
  model: "gpt-4o-mini"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"

llm:
  provider: "openai"
"#;
