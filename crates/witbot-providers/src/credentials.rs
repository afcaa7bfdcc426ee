//! Credential resolution — three-tier key lookup per provider.
//!
//! Precedence for provider P: caller-supplied key > stored key (config
//! file) > fallback key (environment, read once at process start).
//! Empty strings count as absent at every tier. Resolution is read-only;
//! whatever persists keys lives outside this crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use witbot_core::config::ProvidersConfig;

use crate::registry::{self, ProviderSpec};

/// No key reachable for a provider that requires one.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("no API key available for provider '{provider}'")]
pub struct MissingKey {
    pub provider: String,
}

// ─────────────────────────────────────────────
// KeySet
// ─────────────────────────────────────────────

/// A set of per-provider secrets.
///
/// Used both for caller-supplied keys (the request's `apiKeys` field)
/// and for the environment-sourced fallback tier.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct KeySet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groq: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openrouter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routeway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub megallm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agentrouter: Option<String>,
}

impl KeySet {
    /// The key for a provider, if set and non-empty.
    pub fn get(&self, provider_id: &str) -> Option<&str> {
        let value = match provider_id {
            "groq" => self.groq.as_deref(),
            "openrouter" => self.openrouter.as_deref(),
            "routeway" => self.routeway.as_deref(),
            "megallm" => self.megallm.as_deref(),
            "agentrouter" => self.agentrouter.as_deref(),
            _ => None,
        };
        value.filter(|key| !key.is_empty())
    }

    fn set(&mut self, provider_id: &str, value: String) {
        match provider_id {
            "groq" => self.groq = Some(value),
            "openrouter" => self.openrouter = Some(value),
            "routeway" => self.routeway = Some(value),
            "megallm" => self.megallm = Some(value),
            "agentrouter" => self.agentrouter = Some(value),
            _ => {}
        }
    }

    /// Build the fallback tier from the environment.
    ///
    /// Reads each registry provider's `env_key` once; call this at
    /// process start. Unset and empty variables stay absent, so the
    /// resolver's "empty means no key" rule holds end to end.
    pub fn from_env() -> Self {
        let mut keys = KeySet::default();
        for spec in registry::all() {
            if let Ok(value) = std::env::var(spec.env_key) {
                if !value.is_empty() {
                    keys.set(spec.id, value);
                }
            }
        }
        keys
    }
}

// ─────────────────────────────────────────────
// Resolution
// ─────────────────────────────────────────────

/// Resolve the effective API key for one provider.
///
/// Returns an empty string for key-optional providers with no key
/// anywhere; `MissingKey` only when the provider requires one.
pub fn resolve(
    spec: &ProviderSpec,
    caller: Option<&KeySet>,
    stored: &ProvidersConfig,
    fallback: &KeySet,
) -> Result<String, MissingKey> {
    if let Some(key) = caller.and_then(|keys| keys.get(spec.id)) {
        return Ok(key.to_string());
    }
    if let Some(key) = stored.stored_key(spec.id) {
        return Ok(key.to_string());
    }
    if let Some(key) = fallback.get(spec.id) {
        return Ok(key.to_string());
    }

    if spec.requires_api_key {
        Err(MissingKey {
            provider: spec.id.to_string(),
        })
    } else {
        Ok(String::new())
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
