//! Answer source trait — the seam between the boundary and the HTTP
//! generator.
//!
//! The [`crate::generator::HttpGenerator`] is the real implementation;
//! the boundary's state-machine tests substitute doubles here.

use async_trait::async_trait;

use crate::generator::GenerateError;
use crate::registry::ProviderSpec;

/// Sampling configuration passed to each generate call.
#[derive(Clone, Debug)]
pub struct GenOptions {
    /// Response-length ceiling.
    pub max_tokens: u32,
    /// Sampling temperature. Repeated calls with identical input are not
    /// expected to produce identical output.
    pub temperature: f64,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            max_tokens: 2000,
            temperature: 0.8,
        }
    }
}

/// A fully-resolved routing target for one generate call.
#[derive(Clone, Debug)]
pub struct ResolvedTarget<'a> {
    /// The provider's static spec.
    pub spec: &'a ProviderSpec,
    /// Base-URL override from stored settings, if any.
    pub api_base: Option<&'a str>,
    /// The effective API key (may be empty for key-optional providers).
    pub api_key: &'a str,
    /// Vendor-side model id (no provider prefix).
    pub model_id: &'a str,
}

impl ResolvedTarget<'_> {
    /// The base URL to call: override first, spec default otherwise.
    pub fn base_url(&self) -> &str {
        self.api_base.unwrap_or(self.spec.base_url)
    }
}

/// Anything that can turn a question into an answer via one provider
/// call.
///
/// Implementations perform exactly one outbound request per invocation:
/// no retries, no fan-out. Fan-out across models is the caller's
/// business, one invocation per model.
#[async_trait]
pub trait AnswerSource: Send + Sync {
    /// Generate an answer for `question` as styled by `system_prompt`.
    ///
    /// A success with no extractable text is resolved to a placeholder
    /// by the implementation, never reported as an error.
    async fn generate(
        &self,
        target: &ResolvedTarget<'_>,
        question: &str,
        system_prompt: &str,
        options: &GenOptions,
    ) -> Result<String, GenerateError>;
}
