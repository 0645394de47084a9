/// LLM Client — the single point of entry for all chat-completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the LLM provider directly.
/// Services receive an `Arc<dyn LlmClient>` through `AppState` and go through
/// `call_text` / `call_json` below.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::normalize::unwrap_json;

pub mod prompts;

const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// One chat-completion call: an optional system message followed by a single user message.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub system: Option<&'a str>,
    pub prompt: &'a str,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl<'a> CompletionRequest<'a> {
    pub fn new(prompt: &'a str) -> Self {
        Self {
            system: None,
            prompt,
            temperature: 0.7,
            max_tokens: 1000,
        }
    }

    pub fn system(mut self, system: &'a str) -> Self {
        self.system = Some(system);
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Any chat-completion backend. Returns the raw completion text.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// OpenAI-compatible chat-completions backend with retry on 429 / 5xx.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(
        api_key: String,
        base_url: &str,
        model: String,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    /// Retries on transport errors, 429 and 5xx with exponential backoff.
    /// Other 4xx responses fail immediately.
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, LlmError> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = request.system {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: request.prompt,
        });

        let body = ChatRequest {
            model: &self.model,
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let text = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, text);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: text,
                });
                continue;
            }

            if !status.is_success() {
                let text = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiErrorEnvelope>(&text)
                    .map(|e| e.error.message)
                    .unwrap_or(text);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let chat: ChatResponse = response.json().await?;

            if let Some(usage) = &chat.usage {
                debug!(
                    "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                    usage.prompt_tokens, usage.completion_tokens
                );
            }

            return chat
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.message.content)
                .ok_or(LlmError::EmptyContent);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

/// Calls the LLM and returns the trimmed completion text.
/// Whitespace-only completions are reported as `LlmEmptyOutput`.
pub async fn call_text(
    llm: &dyn LlmClient,
    request: CompletionRequest<'_>,
) -> Result<String, AppError> {
    let text = llm.complete(request).await?;
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::LlmEmptyOutput);
    }
    Ok(text.to_string())
}

/// Calls the LLM with the JSON-only instruction appended to the system prompt
/// and decodes the (possibly fenced) reply.
pub async fn call_json(
    llm: &dyn LlmClient,
    request: CompletionRequest<'_>,
) -> Result<Value, AppError> {
    let system = match request.system {
        Some(system) => format!("{system}\n\n{}", prompts::JSON_ONLY_INSTRUCTION),
        None => prompts::JSON_ONLY_INSTRUCTION.to_string(),
    };
    let text = llm
        .complete(CompletionRequest {
            system: Some(system.as_str()),
            ..request
        })
        .await?;
    unwrap_json(&text)
}
