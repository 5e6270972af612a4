//! Reviser implementation backed by an OpenAI-compatible chat completions API.
//!
//! The reviser only rewords a deterministic draft reply; the facts in the
//! draft must survive unchanged. Callers are expected to wrap `revise` in a
//! timeout and fall back to the draft on any error.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use binfo_core::ports::{ReviserError, ReviserPort};

const SYSTEM_PROMPT: &str = "You are a public service assistant. \
    Rewrite responses to be clear and friendly, but DO NOT change any facts, \
    dates, or numbers. Do not add new information. Keep it short.";

/// Chat completions request body.
#[derive(Debug, Serialize)]
struct ChatRequest<'body> {
    model: &'body str,
    messages: Vec<ChatMessage<'body>>,
}

/// Single chat message in the request.
#[derive(Debug, Serialize)]
struct ChatMessage<'body> {
    role: &'body str,
    content: String,
}

/// Chat completions response, reduced to what we read.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Reviser that asks an OpenAI-compatible endpoint to reword a draft reply.
pub struct OpenAiReviser {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiReviser {
    /// Create a reviser bound to the given HTTP client and endpoint.
    ///
    /// `endpoint` is the full chat completions URL. `api_key` is `None` for
    /// keyless local backends.
    #[must_use]
    pub fn new(
        client: Client,
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            model: model.into(),
            api_key,
        }
    }
}

#[async_trait]
impl ReviserPort for OpenAiReviser {
    async fn revise(&self, user_text: &str, draft_reply: &str) -> Result<String, ReviserError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_owned(),
                },
                ChatMessage {
                    role: "user",
                    content: revision_prompt(user_text, draft_reply),
                },
            ],
        };

        debug!(model = %self.model, endpoint = %self.endpoint, "requesting revision");

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|error| ReviserError::Request(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            return Err(ReviserError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|error| ReviserError::Request(error.to_string()))?;

        first_completion_text(completion)
    }
}

/// Build the user message carrying the question and the draft to reword.
fn revision_prompt(user_text: &str, draft_reply: &str) -> String {
    format!(
        "User asked: {user_text}\n\n\
         Factual response (must not change facts):\n{draft_reply}\n\n\
         Rewrite this response."
    )
}

/// Pull the first choice's trimmed text out of a completion response.
fn first_completion_text(response: ChatResponse) -> Result<String, ReviserError> {
    let text = response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .unwrap_or_default();

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ReviserError::EmptyCompletion);
    }
    Ok(trimmed.to_owned())
}
