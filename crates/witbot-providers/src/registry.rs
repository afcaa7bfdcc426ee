//! Provider registry — static specs for all 5 supported LLM providers.
//!
//! Each `ProviderSpec` describes how to connect to a provider: endpoint,
//! response dialect, credential requirements, and the model catalog the
//! selector surfaces. The table is fixed at compile time and immutable
//! for the life of the process.

// ─────────────────────────────────────────────
// ProviderSpec — static metadata for one provider
// ─────────────────────────────────────────────

/// Static specification describing one LLM provider.
#[derive(Clone, Debug)]
pub struct ProviderSpec {
    /// Internal id (e.g. `"groq"`) — the namespace prefix in composite
    /// model ids. Unique across the registry.
    pub id: &'static str,
    /// Short name (e.g. `"Groq"`).
    pub name: &'static str,
    /// Human-readable name for selectors and logs. E.g. `"Groq (Current)"`.
    pub display_name: &'static str,
    /// Console/signup URL, surfaced so a caller can prompt for a key.
    pub website: &'static str,
    /// API base URL (origin + path prefix, no trailing slash).
    pub base_url: &'static str,
    /// Whether a missing API key is a hard error for this provider.
    pub requires_api_key: bool,
    /// Whether the provider offers a free tier.
    pub free: bool,
    /// One-line description for selectors.
    pub description: &'static str,
    /// Environment variable consulted for the fallback API key.
    pub env_key: &'static str,
    /// Which response dialect the provider speaks.
    pub shape: ResponseShape,
    /// Whether the provider requires caller-identifying headers
    /// (`HTTP-Referer` + `X-Title`).
    pub wants_referer: bool,
    /// Selectable models, in default-selection order. Never empty.
    pub models: &'static [ModelSpec],
}

/// One selectable model within a provider.
#[derive(Clone, Debug)]
pub struct ModelSpec {
    /// Vendor-side model name. Opaque; may contain slashes or colons.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Display description.
    pub description: &'static str,
    /// Who trained the model (e.g. `"Meta"`), not who serves it.
    pub vendor: &'static str,
    /// Free-tier flag. Informational only.
    pub free: bool,
    /// Context window in tokens. Informational only, not enforced.
    pub context_window: u32,
    /// Whether the integration currently works against this model.
    pub supported: bool,
}

/// The closed set of response dialects the generator can parse.
///
/// Selected by static configuration, never by sniffing response bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseShape {
    /// OpenAI-style `/chat/completions`: answer at
    /// `choices[0].message.content`.
    ChatCompletions,
    /// `/responses`: answer inside `output[]` under a `"message"` item's
    /// `"output_text"` content entry.
    Responses,
}

const fn model(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    vendor: &'static str,
    free: bool,
    context_window: u32,
) -> ModelSpec {
    ModelSpec {
        id,
        name,
        description,
        vendor,
        free,
        context_window,
        supported: true,
    }
}

// ─────────────────────────────────────────────
// All 5 providers (registry order = selector order)
// ─────────────────────────────────────────────

/// Complete list of supported provider specifications.
pub static PROVIDERS: &[ProviderSpec] = &[
    // 1. Groq — the default provider
    ProviderSpec {
        id: "groq",
        name: "Groq",
        display_name: "Groq (Current)",
        website: "https://console.groq.com",
        base_url: "https://api.groq.com/openai/v1",
        requires_api_key: true,
        free: true,
        description: "Lightning-fast inference with free access to premium AI models",
        env_key: "GROQ_API_KEY",
        shape: ResponseShape::ChatCompletions,
        wants_referer: false,
        models: &[
            model("llama-3.1-8b-instant", "Llama 3.1 8B Instant", "Fast inference (30 RPM, 14.4K RPD)", "Meta", true, 8192),
            model("llama-3.3-70b-versatile", "Llama 3.3 70B Versatile", "High-quality reasoning (30 RPM, 1K RPD)", "Meta", true, 32768),
            model("meta-llama/llama-4-maverick-17b-128e-instruct", "Llama 4 Maverick 17B", "Advanced reasoning (30 RPM, 1K RPD)", "Meta", true, 128000),
            model("meta-llama/llama-4-scout-17b-16e-instruct", "Llama 4 Scout 17B", "Optimized for chat (30 RPM, 1K RPD)", "Meta", true, 16384),
        ],
    },
    // 2. OpenRouter — requires caller-identifying headers
    ProviderSpec {
        id: "openrouter",
        name: "OpenRouter",
        display_name: "OpenRouter",
        website: "https://openrouter.ai",
        base_url: "https://openrouter.ai/api/v1",
        requires_api_key: true,
        free: true,
        description: "Access to multiple AI models including free options",
        env_key: "OPENROUTER_API_KEY",
        shape: ResponseShape::ChatCompletions,
        wants_referer: true,
        models: &[
            model("x-ai/grok-beta", "Grok Beta", "xAI's conversational model", "xAI", true, 131072),
            model("deepseek/deepseek-chat", "DeepSeek Chat", "Powerful reasoning model", "DeepSeek", true, 64000),
            model("qwen/qwen-2.5-72b-instruct", "Qwen 2.5 72B", "Advanced multilingual model", "Qwen", true, 32768),
            model("google/gemini-2.0-flash-exp:free", "Gemini 2.0 Flash", "Fast Google model", "Google", true, 1000000),
            model("meta-llama/llama-3.2-3b-instruct:free", "Llama 3.2 3B", "Efficient small model", "Meta", true, 131072),
        ],
    },
    // 3. Routeway
    ProviderSpec {
        id: "routeway",
        name: "Routeway",
        display_name: "Routeway",
        website: "https://routeway.ai",
        base_url: "https://api.routeway.ai/v1",
        requires_api_key: true,
        free: true,
        description: "Free access to various AI models (check their docs for current models)",
        env_key: "ROUTEWAY_API_KEY",
        shape: ResponseShape::ChatCompletions,
        wants_referer: false,
        models: &[
            model("gpt-4o-mini", "GPT-4o Mini", "Efficient OpenAI model", "OpenAI", true, 128000),
            model("gpt-4o", "GPT-4o", "Advanced OpenAI model", "OpenAI", true, 128000),
            model("claude-3-5-sonnet-20241022", "Claude 3.5 Sonnet", "Latest Claude model", "Anthropic", true, 200000),
            model("deepseek-chat", "DeepSeek Chat", "Powerful reasoning", "DeepSeek", true, 64000),
            model("llama-3.1-70b-versatile", "Llama 3.1 70B", "High-quality responses", "Meta", true, 131072),
        ],
    },
    // 4. MegaLLM — paid tier
    ProviderSpec {
        id: "megallm",
        name: "MegaLLM",
        display_name: "MegaLLM",
        website: "https://megallm.io",
        base_url: "https://api.megallm.io/v1",
        requires_api_key: true,
        free: false,
        description: "Premium access to Llama, Qwen, and DeepSeek models",
        env_key: "MEGALLM_API_KEY",
        shape: ResponseShape::ChatCompletions,
        wants_referer: false,
        models: &[
            model("llama-3.3-70b-instruct", "Llama 3.3 70B", "Latest Llama model", "Meta", false, 131072),
            model("qwen-2.5-72b-instruct", "Qwen 2.5 72B", "Advanced multilingual", "Qwen", false, 32768),
            model("deepseek-v3", "DeepSeek V3", "Latest DeepSeek", "DeepSeek", false, 64000),
        ],
    },
    // 5. AgentRouter
    ProviderSpec {
        id: "agentrouter",
        name: "AgentRouter",
        display_name: "AgentRouter",
        website: "https://agentrouter.org",
        base_url: "https://api.agentrouter.org/v1",
        requires_api_key: true,
        free: true,
        description: "Access to GLM, DeepSeek, and Claude models",
        env_key: "AGENTROUTER_API_KEY",
        shape: ResponseShape::ChatCompletions,
        wants_referer: false,
        models: &[
            model("glm-4-flash", "GLM-4 Flash", "Fast reasoning model", "Zhipu", true, 128000),
            model("deepseek-chat", "DeepSeek Chat", "Powerful reasoning", "DeepSeek", true, 64000),
            model("claude-3-haiku", "Claude 3 Haiku", "Fast Claude model", "Anthropic", true, 200000),
            model("claude-3-sonnet", "Claude 3 Sonnet", "Balanced Claude model", "Anthropic", true, 200000),
        ],
    },
];

// ─────────────────────────────────────────────
// Lookup functions
// ─────────────────────────────────────────────

/// All provider specs, in registry order.
pub fn all() -> &'static [ProviderSpec] {
    PROVIDERS
}

/// Find a provider spec by id. `None` is a normal outcome, not a fault.
pub fn find(id: &str) -> Option<&'static ProviderSpec> {
    PROVIDERS.iter().find(|spec| spec.id == id)
}

impl ProviderSpec {
    /// Find a model in this provider's catalog by vendor id.
    ///
    /// Callers may name models outside the catalog (the vendor namespace
    /// is open-ended); `None` just means we have no display metadata.
    pub fn model(&self, id: &str) -> Option<&ModelSpec> {
        self.models.iter().find(|m| m.id == id)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
