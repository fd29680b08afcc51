use async_trait::async_trait;
use flashdeck_server::{
    Error, Result,
    llm::{StructuredGenerator, StructuredRequest},
};
use std::sync::{Arc, Mutex};

/// Mock generator that records requests and replays queued outputs
#[derive(Debug, Clone)]
pub struct MockGenerator {
    pub responses: Arc<Mutex<Vec<serde_json::Value>>>,
    pub requests: Arc<Mutex<Vec<StructuredRequest>>>,
    pub error: Option<String>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<serde_json::Value>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_requests(&self) -> Vec<StructuredRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl StructuredGenerator for MockGenerator {
    async fn generate_structured(&self, request: StructuredRequest) -> Result<serde_json::Value> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}
