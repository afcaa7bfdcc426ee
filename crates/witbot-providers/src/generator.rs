//! HTTP response generator — the one component that talks to vendors.
//!
//! One outbound request per invocation, shaped per the target provider's
//! static spec: endpoint path, auth and identification headers, request
//! body dialect, and response parsing all come from `ProviderSpec`.
//! Ordinary failures are raised as [`GenerateError`]; there is no retry
//! and no canned-answer substitution at any tier.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, error};

use witbot_core::types::{
    ChatMessage, CompletionRequest, CompletionResponse, ResponsesRequest, ResponsesResponse,
};

use crate::registry::ResponseShape;
use crate::traits::{AnswerSource, GenOptions, ResolvedTarget};

/// Literal substituted when a success response carries no extractable
/// answer text. Degenerate, but valid — not an error.
pub const NO_ANSWER: &str = "No response generated.";

/// Caller identification sent to providers that require it (OpenRouter).
const APP_TITLE: &str = "Funny Formal AI";
const APP_REFERER: &str = "https://github.com/witbot/witbot";

// ─────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────

/// Failure of a single generate invocation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The provider was unreachable at the network level.
    #[error("error reaching {provider}: {source}")]
    Network {
        provider: String,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("{provider} returned {status}: {body}")]
    Upstream {
        provider: String,
        status: u16,
        body: String,
    },

    /// The provider answered 2xx but the body was not the expected JSON
    /// envelope at all.
    #[error("failed to decode {provider} response: {source}")]
    Decode {
        provider: String,
        #[source]
        source: reqwest::Error,
    },
}

// ─────────────────────────────────────────────
// HttpGenerator
// ─────────────────────────────────────────────

/// Generator backed by a shared, connection-pooled HTTP client.
///
/// Stateless across invocations; safe to share between concurrent
/// callers.
pub struct HttpGenerator {
    client: reqwest::Client,
}

impl HttpGenerator {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to build HTTP client");

        HttpGenerator { client }
    }

    /// Build the full endpoint URL for a base + dialect.
    fn endpoint_url(base: &str, shape: ResponseShape) -> String {
        let base = base.trim_end_matches('/');
        match shape {
            ResponseShape::ChatCompletions => format!("{base}/chat/completions"),
            ResponseShape::Responses => format!("{base}/responses"),
        }
    }
}

impl Default for HttpGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnswerSource for HttpGenerator {
    async fn generate(
        &self,
        target: &ResolvedTarget<'_>,
        question: &str,
        system_prompt: &str,
        options: &GenOptions,
    ) -> Result<String, GenerateError> {
        let spec = target.spec;
        let url = Self::endpoint_url(target.base_url(), spec.shape);

        debug!(
            provider = spec.display_name,
            model = target.model_id,
            url = %url,
            "calling provider"
        );

        let messages = vec![
            ChatMessage::system(system_prompt),
            ChatMessage::user(question),
        ];

        let mut request = self
            .client
            .post(&url)
            .bearer_auth(target.api_key);

        if spec.wants_referer {
            request = request
                .header("HTTP-Referer", APP_REFERER)
                .header("X-Title", APP_TITLE);
        }

        let request = match spec.shape {
            ResponseShape::ChatCompletions => request.json(&CompletionRequest {
                model: target.model_id.to_string(),
                messages,
                temperature: options.temperature,
                max_tokens: options.max_tokens,
            }),
            ResponseShape::Responses => request
                .header("Groq-Beta", "responses-v1")
                .json(&ResponsesRequest {
                    model: target.model_id.to_string(),
                    input: messages,
                    temperature: options.temperature,
                }),
        };

        let response = request.send().await.map_err(|e| {
            error!(provider = spec.display_name, error = %e, "HTTP request failed");
            GenerateError::Network {
                provider: spec.id.to_string(),
                source: e,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            error!(
                provider = spec.display_name,
                status = %status,
                body = %body,
                "API error"
            );
            return Err(GenerateError::Upstream {
                provider: spec.id.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let answer = match spec.shape {
            ResponseShape::ChatCompletions => response
                .json::<CompletionResponse>()
                .await
                .map_err(|e| GenerateError::Decode {
                    provider: spec.id.to_string(),
                    source: e,
                })?
                .answer_text(),
            ResponseShape::Responses => response
                .json::<ResponsesResponse>()
                .await
                .map_err(|e| GenerateError::Decode {
                    provider: spec.id.to_string(),
                    source: e,
                })?
                .answer_text(),
        };

        debug!(
            provider = spec.display_name,
            has_answer = answer.is_some(),
            "provider response received"
        );

        Ok(answer.unwrap_or_else(|| NO_ANSWER.to_string()))
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
