use std::sync::Mutex;

use crate::error::GenAiError;

/// An external text-generation collaborator.
///
/// One blocking call per request: no streaming, no partial output, no retry.
/// Any failure — including a missing credential — is terminal for the
/// request that triggered it.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text from a fully-composed prompt.
    async fn generate(&self, prompt: &str) -> Result<String, GenAiError>;
}

/// A generator that returns a canned response and records every prompt it
/// was given. Used for testing the report pipeline without a live upstream.
pub struct FixedResponder {
    response: String,
    prompts: Mutex<Vec<String>>,
}

impl FixedResponder {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// All prompts this responder has seen, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TextGenerator for FixedResponder {
    async fn generate(&self, prompt: &str) -> Result<String, GenAiError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.response.clone())
    }
}

/// A generator that always fails, for exercising upstream-failure paths.
pub struct FailingGenerator;

#[async_trait::async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenAiError> {
        Err(GenAiError::Upstream("simulated upstream failure".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_responder_records_prompts() {
        let responder = FixedResponder::new("canned");
        let out = responder.generate("first prompt").await.unwrap();
        assert_eq!(out, "canned");
        responder.generate("second prompt").await.unwrap();
        assert_eq!(responder.prompts(), vec!["first prompt", "second prompt"]);
    }

    #[tokio::test]
    async fn failing_generator_errors() {
        let generator = FailingGenerator;
        assert!(generator.generate("anything").await.is_err());
    }
}
