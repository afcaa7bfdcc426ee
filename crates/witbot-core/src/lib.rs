//! Core types and configuration for Witbot.
//!
//! # Architecture
//!
//! - [`types`] — typed chat-completion request bodies and the two vendor
//!   response envelopes the generator knows how to read
//! - [`config`] — configuration schema (`~/.witbot/config.json`) + loader

pub mod config;
pub mod types;

// Re-export main types for convenience
pub use config::{load_config, Config};
pub use types::{ChatMessage, CompletionRequest};
