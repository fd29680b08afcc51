use super::prompt::{build_image_messages, flashcard_set_schema};
use super::types::{FlashcardSet, GenerateFromImagesRequest, GenerateFromPdfsRequest};
use super::validation::{validate_flashcard_set, validate_image_request, validate_pdf_request};
use crate::{
    Error, Result,
    llm::{StructuredGenerator, StructuredRequest},
    logger::Logger,
};
use std::sync::Arc;

pub struct FlashcardService {
    generator: Arc<dyn StructuredGenerator>,
    logger: Logger,
}

impl FlashcardService {
    pub fn new(generator: Arc<dyn StructuredGenerator>, logger: Logger) -> Self {
        Self { generator, logger }
    }

    /// Validates the request, asks the model for a flashcard set and returns
    /// it unchanged. Any failure past validation becomes
    /// [`Error::ExternalService`]; the cause is only logged.
    pub async fn generate_from_images(
        &self,
        request: GenerateFromImagesRequest,
    ) -> Result<FlashcardSet> {
        validate_image_request(&request)?;

        self.logger.debug(format_args!(
            "Generating flashcards from {} image(s)",
            request.images.len()
        ));

        let structured = StructuredRequest {
            messages: build_image_messages(&request),
            schema: flashcard_set_schema(),
            temperature: None,
        };

        match self.request_flashcards(structured).await {
            Ok(set) => {
                self.logger.info(format_args!(
                    "Generated {} flashcard(s)",
                    set.flashcards.len()
                ));
                Ok(set)
            }
            Err(e) => {
                self.logger
                    .error(format_args!("Flashcard generation failed: {}", e));
                Err(Error::ExternalService)
            }
        }
    }

    /// PDF import is not built yet: valid requests always get
    /// [`Error::NotImplemented`].
    pub async fn generate_from_pdfs(&self, request: GenerateFromPdfsRequest) -> Result<FlashcardSet> {
        validate_pdf_request(&request)?;

        self.logger.warn(format_args!(
            "Rejected PDF import of {} file(s): not available yet",
            request.files.len()
        ));
        Err(Error::NotImplemented)
    }

    async fn request_flashcards(&self, request: StructuredRequest) -> Result<FlashcardSet> {
        let value = self.generator.generate_structured(request).await?;
        let set: FlashcardSet = serde_json::from_value(value)?;
        validate_flashcard_set(&set)
            .map_err(|e| Error::llm(format!("Model output violates schema: {}", e)))?;
        Ok(set)
    }
}
