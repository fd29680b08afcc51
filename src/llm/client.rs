use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use tracing::debug;

/// Capability to obtain a JSON object conforming to a schema from a
/// generative model.
#[async_trait]
pub trait StructuredGenerator: Send + Sync {
    async fn generate_structured(&self, request: StructuredRequest) -> Result<serde_json::Value>;
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: Option<f32>,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            model: config.model,
            temperature: config.temperature,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl StructuredGenerator for OpenAiClient {
    async fn generate_structured(&self, request: StructuredRequest) -> Result<serde_json::Value> {
        debug!(
            "Requesting structured output '{}' with {} messages",
            request.schema.name,
            request.messages.len()
        );

        let mut messages = Vec::with_capacity(request.messages.len());
        for msg in &request.messages {
            messages.push(msg.to_openai_message()?);
        }

        let mut request_builder = openai_types::CreateChatCompletionRequestArgs::default();
        request_builder
            .model(&self.model)
            .messages(messages)
            .response_format(request.schema.to_response_format());

        if let Some(temperature) = request.temperature.or(self.temperature) {
            request_builder.temperature(temperature);
        }

        let openai_request = request_builder.build()?;

        let response = self.client.chat().create(openai_request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::llm("Model returned no choices"))?;

        if let Some(refusal) = choice.message.refusal {
            return Err(Error::llm(format!("Model refused the request: {}", refusal)));
        }

        let content = choice
            .message
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| Error::llm("Model returned empty content"))?;

        Ok(serde_json::from_str(&content)?)
    }
}
