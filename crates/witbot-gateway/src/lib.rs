//! Request-handler boundary for Witbot.
//!
//! The UI (or any caller) talks to the router through two operations:
//!
//! - [`Gateway::ask`] — answer one question via one provider call
//! - [`Gateway::models`] — list providers and selectable models
//!
//! Both return uniform envelopes; no provider error or panic escapes.

pub mod handler;
pub mod persona;

// Re-export main types for convenience
pub use handler::{
    AskError, AskFailure, AskOk, AskRequest, AvailableModel, Discovery, ErrorBody, Gateway,
    ProviderSummary,
};
pub use persona::PERSONA_PROMPT;
