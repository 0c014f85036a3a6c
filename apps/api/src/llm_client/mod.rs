/// LLM Client — the single point of entry for all model calls in the outreach service.
///
/// No other module talks to the inference provider directly. Callers depend on the
/// [`ChatModel`] trait and receive a client value explicitly; there is no global handle.
///
/// Model: llama-3.3-70b-versatile on Groq's OpenAI-compatible endpoint.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;
pub mod sanitize;

pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
/// The model used for every completion. Fixed so extraction output stays comparable.
pub const MODEL: &str = "llama-3.3-70b-versatile";
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// The model-inference capability: a rendered prompt in, a text completion out.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn invoke(&self, prompt: &str, temperature: f32) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the text of the first choice, if the provider returned any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Chat-completions client. Cheap to clone; holds no mutable state.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl LlmClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_API_BASE.to_string(),
        })
    }

    /// Points the client at another OpenAI-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes a single chat-completion call, returning the full response object.
    /// Non-2xx responses are surfaced as `LlmError::Api`; nothing is retried.
    pub async fn call(&self, prompt: &str, temperature: f32) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            temperature,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }
}

#[async_trait]
impl ChatModel for LlmClient {
    async fn invoke(&self, prompt: &str, temperature: f32) -> Result<String, LlmError> {
        let response = self.call(prompt, temperature).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::{ChatModel, LlmError};

    /// Replays canned completions in order and records every prompt it receives.
    #[derive(Default)]
    pub(crate) struct ScriptedModel {
        responses: Mutex<VecDeque<Result<String, LlmError>>>,
        pub(crate) calls: Mutex<Vec<(String, f32)>>,
    }

    impl ScriptedModel {
        pub(crate) fn replying(text: &str) -> Self {
            let model = Self::default();
            model.push(Ok(text.to_string()));
            model
        }

        pub(crate) fn failing(err: LlmError) -> Self {
            let model = Self::default();
            model.push(Err(err));
            model
        }

        pub(crate) fn push(&self, response: Result<String, LlmError>) {
            self.responses.lock().unwrap().push_back(response);
        }

        pub(crate) fn prompts(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(|(prompt, _)| prompt.clone())
                .collect()
        }
    }

    #[async_trait]
    impl ChatModel for ScriptedModel {
        async fn invoke(&self, prompt: &str, temperature: f32) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((prompt.to_string(), temperature));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(LlmError::EmptyContent))
        }
    }
}
