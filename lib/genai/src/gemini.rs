use crate::error::GenAiError;
use crate::traits::TextGenerator;

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// TextGenerator backed by the Google Generative Language API.
pub struct GeminiClient {
    api_key: Option<String>,
    model: String,
    endpoint: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a client. The key may be absent — generation then fails with
    /// `MissingCredential` on first use instead of blocking startup.
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            api_key,
            model: model.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the API endpoint (used to point at a local stub).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenAiError> {
        let api_key = self.api_key.as_deref().ok_or(GenAiError::MissingCredential)?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, api_key,
        );

        let body = serde_json::json!({
            "contents": [{"parts": [{"text": prompt}]}],
        });

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "generation request");

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenAiError::Upstream(format!("request failed: {}", e)))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(GenAiError::Upstream(format!(
                "generation returned {}: {}",
                status, text
            )));
        }

        let json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| GenAiError::Parse(e.to_string()))?;

        json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| GenAiError::Parse("no candidate text in response".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_credential_fails_fast() {
        let client = GeminiClient::new(None, "gemini-1.5-pro");
        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, GenAiError::MissingCredential));
    }
}
