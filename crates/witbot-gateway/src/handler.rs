//! Request handler — the single entry point callers invoke.
//!
//! Each request walks a linear pipeline: validate the question and
//! composite model id, resolve a credential, generate, package. Any step
//! can short-circuit into the uniform failure envelope; nothing else
//! crosses the boundary. HTTP-style status codes classify failures:
//! 400 validation, 401 missing credential, 502 upstream.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use witbot_core::config::Config;
use witbot_providers::credentials::{self, KeySet, MissingKey};
use witbot_providers::generator::{GenerateError, HttpGenerator};
use witbot_providers::model_id::{self, ModelIdError};
use witbot_providers::registry;
use witbot_providers::traits::{AnswerSource, GenOptions, ResolvedTarget};

use crate::persona::PERSONA_PROMPT;

// ─────────────────────────────────────────────
// Boundary envelopes
// ─────────────────────────────────────────────

/// One question from the caller.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AskRequest {
    /// The user's question. Required, non-empty.
    pub question: String,
    /// Composite model id. Falls back to the configured default.
    pub model: Option<String>,
    /// Caller-supplied API keys — the highest-precedence credential tier.
    pub api_keys: Option<KeySet>,
}

/// Successful answer envelope.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AskOk {
    pub answer: String,
    /// Echo of the composite id the answer came from.
    pub model: String,
    pub model_name: String,
    /// Provider display name.
    pub provider: String,
    pub is_demo: bool,
    /// `"live"` | `"demo"`. The router never fabricates answers, so this
    /// is always `"live"` here; the field stays for the UI contract.
    pub status: &'static str,
}

/// Failure envelope body.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_config: Option<bool>,
}

/// A failed request: HTTP-style status code + envelope body.
#[derive(Clone, Debug, PartialEq)]
pub struct AskFailure {
    pub status: u16,
    pub body: ErrorBody,
}

// ─────────────────────────────────────────────
// Error taxonomy
// ─────────────────────────────────────────────

/// Everything that can cut the request pipeline short.
#[derive(Debug, Error)]
pub enum AskError {
    #[error("No question provided.")]
    EmptyQuestion,

    #[error(transparent)]
    MalformedModel(#[from] ModelIdError),

    #[error("unknown provider '{0}'")]
    UnknownProvider(String),

    #[error(transparent)]
    MissingCredential(#[from] MissingKey),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

impl AskError {
    /// HTTP-style status code for this failure class.
    pub fn status_code(&self) -> u16 {
        match self {
            AskError::EmptyQuestion
            | AskError::MalformedModel(_)
            | AskError::UnknownProvider(_) => 400,
            AskError::MissingCredential(_) => 401,
            AskError::Generate(_) => 502,
        }
    }

    /// Translate into the uniform failure envelope.
    pub fn into_failure(self) -> AskFailure {
        let status = self.status_code();
        let body = match self {
            AskError::EmptyQuestion => ErrorBody {
                error: "No question provided.".to_string(),
                details: None,
                provider: None,
                needs_config: None,
            },
            AskError::MalformedModel(err) => ErrorBody {
                error: "Invalid model identifier.".to_string(),
                details: Some(err.to_string()),
                provider: None,
                needs_config: None,
            },
            AskError::UnknownProvider(id) => ErrorBody {
                error: format!("Unknown provider '{id}'."),
                details: None,
                provider: Some(id),
                needs_config: None,
            },
            AskError::MissingCredential(err) => ErrorBody {
                error: format!("No API key configured for '{}'.", err.provider),
                details: None,
                provider: Some(err.provider),
                needs_config: Some(true),
            },
            AskError::Generate(err) => {
                let (provider, details) = match &err {
                    GenerateError::Upstream {
                        provider,
                        status,
                        body,
                    } => (provider.clone(), format!("{status}: {body}")),
                    GenerateError::Network { provider, source } => {
                        (provider.clone(), source.to_string())
                    }
                    GenerateError::Decode { provider, source } => {
                        (provider.clone(), source.to_string())
                    }
                };
                ErrorBody {
                    error: "Provider request failed.".to_string(),
                    details: Some(details),
                    provider: Some(provider),
                    needs_config: None,
                }
            }
        };
        AskFailure { status, body }
    }
}

// ─────────────────────────────────────────────
// Discovery
// ─────────────────────────────────────────────

/// The available-providers/models listing.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Discovery {
    pub providers: Vec<ProviderSummary>,
    pub available_models: Vec<AvailableModel>,
}

/// One provider row in the discovery listing.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub free: bool,
    pub website: &'static str,
    pub model_count: usize,
}

/// One selectable model row, addressed by composite id.
///
/// `provider` is the model's vendor attribution ("Meta", "xAI", …), not
/// the hosting provider — mirrors what the selector displays.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AvailableModel {
    pub id: String,
    pub name: &'static str,
    pub description: &'static str,
    pub provider: &'static str,
    pub free: bool,
    pub status: &'static str,
}

// ─────────────────────────────────────────────
// Gateway
// ─────────────────────────────────────────────

/// The boundary object: owns configuration, the fallback credential
/// tier, and the answer source. Stateless per request; concurrent `ask`
/// calls are independent.
pub struct Gateway {
    config: Config,
    fallback_keys: KeySet,
    source: Arc<dyn AnswerSource>,
}

impl Gateway {
    /// Gateway backed by the real HTTP generator.
    pub fn new(config: Config, fallback_keys: KeySet) -> Self {
        Self::with_source(config, fallback_keys, Arc::new(HttpGenerator::new()))
    }

    /// Gateway with a caller-chosen answer source.
    pub fn with_source(
        config: Config,
        fallback_keys: KeySet,
        source: Arc<dyn AnswerSource>,
    ) -> Self {
        Gateway {
            config,
            fallback_keys,
            source,
        }
    }

    /// Answer one question. Exactly one provider call on the success
    /// path; zero on validation or credential failure.
    pub async fn ask(&self, request: AskRequest) -> Result<AskOk, AskFailure> {
        self.ask_inner(request).await.map_err(AskError::into_failure)
    }

    async fn ask_inner(&self, request: AskRequest) -> Result<AskOk, AskError> {
        let question = request.question.trim();
        if question.is_empty() {
            return Err(AskError::EmptyQuestion);
        }

        let composite = request
            .model
            .unwrap_or_else(|| self.config.defaults.model.clone());
        let (provider_id, vendor_model_id) = model_id::split(&composite)?;
        let spec = registry::find(provider_id)
            .ok_or_else(|| AskError::UnknownProvider(provider_id.to_string()))?;

        let api_key = credentials::resolve(
            spec,
            request.api_keys.as_ref(),
            &self.config.providers,
            &self.fallback_keys,
        )?;

        let target = ResolvedTarget {
            spec,
            api_base: self.config.providers.base_override(spec.id),
            api_key: &api_key,
            model_id: vendor_model_id,
        };
        let options = GenOptions {
            max_tokens: self.config.defaults.max_tokens,
            temperature: self.config.defaults.temperature,
        };

        debug!(provider = spec.id, model = vendor_model_id, "dispatching question");
        let answer = self
            .source
            .generate(&target, question, PERSONA_PROMPT, &options)
            .await?;

        let model_name = spec
            .model(vendor_model_id)
            .map(|m| m.name.to_string())
            .unwrap_or_else(|| vendor_model_id.to_string());

        Ok(AskOk {
            answer,
            model: composite,
            model_name,
            provider: spec.display_name.to_string(),
            is_demo: false,
            status: "live",
        })
    }

    /// The discovery operation: providers + flattened model catalog.
    ///
    /// Deterministic — registry order, then per-provider model order.
    pub fn models(&self) -> Discovery {
        let providers = registry::all()
            .iter()
            .map(|spec| ProviderSummary {
                id: spec.id,
                name: spec.name,
                free: spec.free,
                website: spec.website,
                model_count: spec.models.len(),
            })
            .collect();

        let available_models = model_id::catalog()
            .into_iter()
            .map(|entry| AvailableModel {
                id: entry.composite_id,
                name: entry.model.name,
                description: entry.model.description,
                provider: entry.model.vendor,
                free: entry.model.free,
                status: if entry.model.supported {
                    "supported"
                } else {
                    "unavailable"
                },
            })
            .collect();

        Discovery {
            providers,
            available_models,
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
