//! OpenAI chat-completions provider.
//!
//! Sends the labeled session with a system prompt instructing the model to
//! return an `InsightResult` as JSON, and parses the first choice.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use astra_core::models::insight::InsightResult;
use astra_core::models::language::Language;
use astra_core::models::session::Session;
use astra_locale::LanguagePack;

use crate::InsightProvider;
use crate::error::InsightError;
use crate::prompt;

const DEFAULT_MODEL: &str = "gpt-4-turbo";
const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const TEMPERATURE: f64 = 0.4;

#[derive(Debug)]
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAiProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: CHAT_COMPLETIONS_URL.to_string(),
        }
    }

    /// Provider configured from `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self, InsightError> {
        match std::env::var("OPENAI_API_KEY") {
            Ok(key) if !key.is_empty() => Ok(Self::new(key)),
            _ => Err(InsightError::MissingCredentials),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API endpoint. Test seam.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl InsightProvider for OpenAiProvider {
    async fn generate(
        &self,
        session: &Session,
        language: Language,
        pack: &LanguagePack,
    ) -> Result<InsightResult, InsightError> {
        let user_message = prompt::build_prompt(&session.responses, language, pack);

        info!(session_id = %session.id, model = %self.model, "requesting provider insight");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&ChatRequest {
                model: &self.model,
                temperature: TEMPERATURE,
                messages: vec![
                    ChatMessage {
                        role: "system",
                        content: prompt::SYSTEM_PROMPT,
                    },
                    ChatMessage {
                        role: "user",
                        content: &user_message,
                    },
                ],
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InsightError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(InsightError::EmptyResponse)?;

        let insight: InsightResult = serde_json::from_str(&content).map_err(|e| {
            InsightError::SchemaViolation(format!(
                "failed to parse InsightResult: {e}. Response: {content}"
            ))
        })?;

        info!(session_id = %session.id, "provider insight complete");

        Ok(insight)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f64,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
