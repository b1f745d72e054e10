use async_trait::async_trait;
use muse_api::{
    generator::Generator,
    models::{ModelContext, ModelHandle, ModelRegistry},
    Error, Result,
};
use serde_json::{Map, Value};
use std::sync::{Arc, Mutex};

/// One recorded call to the stub generator.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub model: String,
    pub input_data: String,
    pub input_type: String,
    pub params: Map<String, Value>,
}

/// Stub generation backend for testing
#[derive(Debug)]
pub struct StubGenerator {
    pub responses: Arc<Mutex<Vec<Value>>>,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
    pub error: Option<String>,
}

impl StubGenerator {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<Value>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Generator for StubGenerator {
    async fn generate(
        &self,
        model: &ModelHandle,
        input_data: &str,
        input_type: &str,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        self.requests.lock().unwrap().push(RecordedRequest {
            model: model.name().to_string(),
            input_data: input_data.to_string(),
            input_type: input_type.to_string(),
            params: params.clone(),
        });

        if let Some(ref error) = self.error {
            return Err(Error::generation(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::generation("No more stub responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for StubGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry containing only `test_model`, for tests that must not depend on
/// the production model set.
pub fn test_registry() -> ModelRegistry {
    let mut registry = ModelRegistry::new();
    registry.register("test_model", |context: &ModelContext| {
        Ok(ModelHandle::new(
            "test_model",
            context.checkpoint_dir.join("test_model.mag"),
        ))
    });
    registry
}
