use super::types::GenerateFromImagesRequest;
use super::validation::{MAX_FLASHCARDS, MAX_TAGS, MIN_FLASHCARDS};
use crate::llm::{ChatMessage, ContentPart, OutputSchema};
use serde_json::json;

pub const DEFAULT_LANGUAGE: &str = "English";
pub const FLASHCARD_SCHEMA_NAME: &str = "flashcard_set";

const EXTRACTION_INSTRUCTION: &str = "You are a study assistant. Read the attached images of study \
material (notes, textbook pages, slides or whiteboards) and turn the key facts into flashcards. \
Write one self-contained question per card with a short, accurate answer. Skip decorative or \
unreadable content rather than guessing. Optionally add a few short topic tags per card, suggest \
a deck name, and summarize the material in one sentence.";

/// Trimmed language, falling back to English when absent or blank.
pub fn resolve_language(language: Option<&str>) -> &str {
    language
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .unwrap_or(DEFAULT_LANGUAGE)
}

pub fn build_instruction(deck_context: Option<&str>, language: Option<&str>) -> String {
    let mut instruction = format!(
        "{} Produce between {} and {} flashcards.",
        EXTRACTION_INSTRUCTION, MIN_FLASHCARDS, MAX_FLASHCARDS
    );

    if let Some(context) = deck_context.map(str::trim).filter(|c| !c.is_empty()) {
        instruction.push_str("\n\nDeck context: ");
        instruction.push_str(context);
    }

    instruction.push_str(&format!(
        "\n\nWrite every question, answer, tag, deck name and summary in {}.",
        resolve_language(language)
    ));
    instruction
}

/// One user message: the instruction followed by every image as a data URI.
pub fn build_image_messages(request: &GenerateFromImagesRequest) -> Vec<ChatMessage> {
    let mut parts = Vec::with_capacity(request.images.len() + 1);
    parts.push(ContentPart::text(build_instruction(
        request.deck_context.as_deref(),
        request.language.as_deref(),
    )));
    parts.extend(
        request
            .images
            .iter()
            .map(|image| ContentPart::image_url(image.data_uri())),
    );
    vec![ChatMessage::user(parts)]
}

/// Strict-mode JSON schema for a flashcard set. Optional fields are
/// nullable because strict mode requires every property to be listed.
pub fn flashcard_set_schema() -> OutputSchema {
    OutputSchema {
        name: FLASHCARD_SCHEMA_NAME.to_string(),
        description: Some("Flashcards extracted from study material".to_string()),
        schema: json!({
            "type": "object",
            "additionalProperties": false,
            "required": ["flashcards", "suggestedDeckName", "summary"],
            "properties": {
                "flashcards": {
                    "type": "array",
                    "minItems": MIN_FLASHCARDS,
                    "maxItems": MAX_FLASHCARDS,
                    "items": {
                        "type": "object",
                        "additionalProperties": false,
                        "required": ["question", "answer", "tags"],
                        "properties": {
                            "question": { "type": "string", "minLength": 1 },
                            "answer": { "type": "string", "minLength": 1 },
                            "tags": {
                                "type": ["array", "null"],
                                "maxItems": MAX_TAGS,
                                "items": { "type": "string" }
                            }
                        }
                    }
                },
                "suggestedDeckName": { "type": ["string", "null"] },
                "summary": { "type": ["string", "null"] }
            }
        }),
    }
}
