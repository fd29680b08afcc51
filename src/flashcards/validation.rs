//! Shape checks for flashcard requests and for the model's output.

use super::types::{
    FlashcardSet, GenerateFromImagesRequest, GenerateFromPdfsRequest, ImageInput, PdfInput,
};
use crate::error::ValidationError;

pub const MIN_IMAGES: usize = 1;
pub const MAX_IMAGES: usize = 6;
pub const MIN_IMAGE_BASE64_LEN: usize = 32;
pub const MIN_MIME_TYPE_LEN: usize = 3;

pub const MIN_PDFS: usize = 1;
pub const MAX_PDFS: usize = 3;
pub const PDF_MIME_TYPE: &str = "application/pdf";

pub const MIN_FLASHCARDS: usize = 1;
pub const MAX_FLASHCARDS: usize = 24;
pub const MAX_TAGS: usize = 8;

pub fn validate_image_request(request: &GenerateFromImagesRequest) -> Result<(), ValidationError> {
    let mut err = ValidationError::new();
    check_count(&mut err, "images", request.images.len(), MIN_IMAGES, MAX_IMAGES);
    for (i, image) in request.images.iter().enumerate() {
        check_image(&mut err, i, image);
    }
    err.into_result()
}

pub fn validate_pdf_request(request: &GenerateFromPdfsRequest) -> Result<(), ValidationError> {
    let mut err = ValidationError::new();
    check_count(&mut err, "files", request.files.len(), MIN_PDFS, MAX_PDFS);
    for (i, file) in request.files.iter().enumerate() {
        check_pdf(&mut err, i, file);
    }
    err.into_result()
}

/// Checks what the model returned against the output schema.
pub fn validate_flashcard_set(set: &FlashcardSet) -> Result<(), ValidationError> {
    let mut err = ValidationError::new();
    check_count(
        &mut err,
        "flashcards",
        set.flashcards.len(),
        MIN_FLASHCARDS,
        MAX_FLASHCARDS,
    );
    for (i, card) in set.flashcards.iter().enumerate() {
        if card.question.is_empty() {
            err.push(format!("flashcards[{}].question", i), "must not be empty");
        }
        if card.answer.is_empty() {
            err.push(format!("flashcards[{}].answer", i), "must not be empty");
        }
        if let Some(tags) = &card.tags {
            if tags.len() > MAX_TAGS {
                err.push(
                    format!("flashcards[{}].tags", i),
                    format!("must contain at most {} items", MAX_TAGS),
                );
            }
        }
    }
    err.into_result()
}

fn check_count(err: &mut ValidationError, path: &str, len: usize, min: usize, max: usize) {
    if len < min {
        err.push(path, format!("must contain at least {} item(s)", min));
    } else if len > max {
        err.push(path, format!("must contain at most {} items", max));
    }
}

fn check_image(err: &mut ValidationError, index: usize, image: &ImageInput) {
    if image.base64.chars().count() < MIN_IMAGE_BASE64_LEN {
        err.push(
            format!("images[{}].base64", index),
            format!("must be at least {} characters", MIN_IMAGE_BASE64_LEN),
        );
    }
    if image.mime_type.chars().count() < MIN_MIME_TYPE_LEN {
        err.push(
            format!("images[{}].mimeType", index),
            format!("must be at least {} characters", MIN_MIME_TYPE_LEN),
        );
    }
}

fn check_pdf(err: &mut ValidationError, index: usize, file: &PdfInput) {
    if file.mime_type != PDF_MIME_TYPE {
        err.push(
            format!("files[{}].mimeType", index),
            format!("must be \"{}\"", PDF_MIME_TYPE),
        );
    }
    if file.size_bytes < 1 {
        err.push(format!("files[{}].sizeBytes", index), "must be at least 1");
    }
}
