//! Composite model identifier codec.
//!
//! The UI and API boundary address models as `"<providerId>:<modelId>"`.
//! Only the FIRST colon is significant: everything after it is the full
//! vendor model id, which may itself contain colons (e.g.
//! `"openrouter:google/gemini-2.0-flash-exp:free"`).

use thiserror::Error;

use crate::registry::{self, ModelSpec, ProviderSpec};

/// Failure to decode a composite model id.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ModelIdError {
    /// No colon present, so no provider namespace. Callers must reject
    /// the request rather than guess a default provider.
    #[error("model id '{0}' has no provider prefix")]
    MissingProvider(String),
}

/// Split a composite id into `(provider_id, vendor_model_id)`.
pub fn split(composite: &str) -> Result<(&str, &str), ModelIdError> {
    composite
        .split_once(':')
        .ok_or_else(|| ModelIdError::MissingProvider(composite.to_string()))
}

/// Join a provider id and vendor model id into a composite id.
///
/// Exact inverse of [`split`] for any registry provider id.
pub fn join(provider_id: &str, model_id: &str) -> String {
    format!("{provider_id}:{model_id}")
}

// ─────────────────────────────────────────────
// Catalog — the flattened available-models list
// ─────────────────────────────────────────────

/// One selectable model, addressed by its composite id.
#[derive(Clone, Debug)]
pub struct CatalogEntry {
    /// `"<providerId>:<modelId>"`.
    pub composite_id: String,
    /// The model's display metadata.
    pub model: &'static ModelSpec,
    /// The provider that serves it.
    pub provider: &'static ProviderSpec,
}

/// Flatten the registry into the canonical available-models list.
///
/// Order is registry order, then per-provider model order, and is stable
/// across calls.
pub fn catalog() -> Vec<CatalogEntry> {
    registry::all()
        .iter()
        .flat_map(|provider| {
            provider.models.iter().map(move |model| CatalogEntry {
                composite_id: join(provider.id, model.id),
                model,
                provider,
            })
        })
        .collect()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_basic() {
        assert_eq!(
            split("groq:llama-3.1-8b-instant").unwrap(),
            ("groq", "llama-3.1-8b-instant")
        );
    }

    #[test]
    fn split_keeps_later_colons_in_model_id() {
        // Vendor ids may be namespaced and carry their own colons.
        assert_eq!(
            split("openrouter:google/gemini-2.0-flash-exp:free").unwrap(),
            ("openrouter", "google/gemini-2.0-flash-exp:free")
        );
    }

    #[test]
    fn split_no_colon() {
        let err = split("llama-3.1-8b-instant").unwrap_err();
        assert_eq!(
            err,
            ModelIdError::MissingProvider("llama-3.1-8b-instant".to_string())
        );
    }

    #[test]
    fn split_empty() {
        assert!(split("").is_err());
    }

    #[test]
    fn split_empty_provider_part() {
        // Decodes fine; the registry lookup downstream rejects "".
        assert_eq!(split(":modelx").unwrap(), ("", "modelx"));
    }

    #[test]
    fn join_then_split_round_trips() {
        for (provider, model) in [
            ("groq", "llama-3.1-8b-instant"),
            ("openrouter", "meta-llama/llama-3.2-3b-instruct:free"),
            ("agentrouter", "glm-4-flash"),
        ] {
            assert_eq!(split(&join(provider, model)).unwrap(), (provider, model));
        }
    }

    #[test]
    fn catalog_covers_every_model() {
        let total: usize = registry::all().iter().map(|p| p.models.len()).sum();
        assert_eq!(catalog().len(), total);
    }

    #[test]
    fn catalog_order_is_registry_order() {
        let entries = catalog();
        assert_eq!(entries[0].composite_id, "groq:llama-3.1-8b-instant");
        assert_eq!(entries[0].provider.id, "groq");
        // First openrouter entry comes right after the groq block.
        let groq_models = registry::find("groq").unwrap().models.len();
        assert_eq!(entries[groq_models].provider.id, "openrouter");
    }

    #[test]
    fn catalog_is_stable_across_calls() {
        let first: Vec<String> = catalog().into_iter().map(|e| e.composite_id).collect();
        let second: Vec<String> = catalog().into_iter().map(|e| e.composite_id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn catalog_composite_ids_decode_back() {
        for entry in catalog() {
            let (provider_id, model_id) = split(&entry.composite_id).unwrap();
            assert_eq!(provider_id, entry.provider.id);
            assert_eq!(model_id, entry.model.id);
        }
    }
}
