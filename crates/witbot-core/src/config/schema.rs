//! Configuration schema.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.
//! We use `#[serde(rename_all = "camelCase")]` to handle the conversion.
//!
//! The per-provider `apiKey` entries are the persisted key store: the
//! credential resolver reads them, the settings surface (out of scope
//! here) writes them. `apiBase` overrides a provider's built-in endpoint,
//! which is also how the test suites point requests at a local server.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────

/// Root configuration — loaded from `~/.witbot/config.json`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub defaults: Defaults,
    pub providers: ProvidersConfig,
}

// ─────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────

/// Default generation settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Defaults {
    /// Default composite model identifier (`provider:model`).
    pub model: String,
    /// Maximum tokens to generate per response.
    pub max_tokens: u32,
    /// Sampling temperature. High on purpose — the persona wants jokes,
    /// not determinism.
    pub temperature: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            model: "groq:llama-3.1-8b-instant".to_string(),
            max_tokens: 2000,
            temperature: 0.8,
        }
    }
}

// ─────────────────────────────────────────────
// Providers
// ─────────────────────────────────────────────

/// Stored settings for a single provider (API key, base URL override).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderSettings {
    /// API key for authentication. Empty means unset.
    #[serde(default)]
    pub api_key: String,
    /// Custom API base URL (overrides the registry default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
}

impl ProviderSettings {
    /// Whether this provider has a stored API key.
    pub fn has_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Stored settings for every provider in the registry.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub groq: ProviderSettings,
    #[serde(default)]
    pub openrouter: ProviderSettings,
    #[serde(default)]
    pub routeway: ProviderSettings,
    #[serde(default)]
    pub megallm: ProviderSettings,
    #[serde(default)]
    pub agentrouter: ProviderSettings,
}

impl ProvidersConfig {
    /// Get the stored settings for a provider by id (e.g. `"groq"`).
    pub fn get_by_name(&self, name: &str) -> Option<&ProviderSettings> {
        match name {
            "groq" => Some(&self.groq),
            "openrouter" => Some(&self.openrouter),
            "routeway" => Some(&self.routeway),
            "megallm" => Some(&self.megallm),
            "agentrouter" => Some(&self.agentrouter),
            _ => None,
        }
    }

    /// The stored API key for a provider, if one is set and non-empty.
    pub fn stored_key(&self, name: &str) -> Option<&str> {
        self.get_by_name(name)
            .filter(|settings| settings.has_key())
            .map(|settings| settings.api_key.as_str())
    }

    /// The stored base-URL override for a provider, if any.
    pub fn base_override(&self, name: &str) -> Option<&str> {
        self.get_by_name(name)
            .and_then(|settings| settings.api_base.as_deref())
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.defaults.model, "groq:llama-3.1-8b-instant");
        assert_eq!(config.defaults.max_tokens, 2000);
        assert_eq!(config.defaults.temperature, 0.8);
        assert!(!config.providers.groq.has_key());
    }

    #[test]
    fn config_from_json_camel_case() {
        let json = serde_json::json!({
            "defaults": {
                "model": "openrouter:deepseek/deepseek-chat",
                "maxTokens": 1000,
                "temperature": 0.5
            },
            "providers": {
                "openrouter": { "apiKey": "sk-or-test" }
            }
        });

        let config: Config = serde_json::from_value(json).unwrap();
        assert_eq!(config.defaults.model, "openrouter:deepseek/deepseek-chat");
        assert_eq!(config.defaults.max_tokens, 1000);
        assert_eq!(config.defaults.temperature, 0.5);
        assert!(config.providers.openrouter.has_key());
        // Defaults preserved for missing fields
        assert!(!config.providers.groq.has_key());
    }

    #[test]
    fn config_json_uses_camel_case() {
        let config = Config::default();
        let json = serde_json::to_value(&config).unwrap();
        assert!(json["defaults"].get("maxTokens").is_some());
        assert!(json["defaults"].get("max_tokens").is_none());
    }

    #[test]
    fn stored_key_skips_empty() {
        let mut providers = ProvidersConfig::default();
        providers.groq.api_key = String::new();
        providers.megallm.api_key = "sk-mega-test".to_string();

        assert_eq!(providers.stored_key("groq"), None);
        assert_eq!(providers.stored_key("megallm"), Some("sk-mega-test"));
        assert_eq!(providers.stored_key("nonexistent"), None);
    }

    #[test]
    fn base_override_lookup() {
        let mut providers = ProvidersConfig::default();
        providers.routeway.api_base = Some("http://127.0.0.1:9000".to_string());

        assert_eq!(
            providers.base_override("routeway"),
            Some("http://127.0.0.1:9000")
        );
        assert_eq!(providers.base_override("groq"), None);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let json = serde_json::json!({
            "providers": {
                "agentrouter": { "apiKey": "sk-agent-test" }
            }
        });

        let config: Config = serde_json::from_value(json).unwrap();
        assert!(config.providers.agentrouter.has_key());
        assert_eq!(config.defaults.max_tokens, 2000);
    }

    #[test]
    fn empty_json_gives_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.defaults.model, "groq:llama-3.1-8b-instant");
        assert_eq!(config.defaults.temperature, 0.8);
    }
}
