//! Provider layer for Witbot — routing, credentials, and generation.
//!
//! # Architecture
//!
//! - [`registry`] — static specs for all 5 supported providers + lookups
//! - [`model_id`] — the `"provider:model"` composite id codec + catalog
//! - [`credentials`] — three-tier API key resolution
//! - [`traits::AnswerSource`] — seam between the boundary and HTTP
//! - [`generator::HttpGenerator`] — the one component that calls vendors

pub mod credentials;
pub mod generator;
pub mod model_id;
pub mod registry;
pub mod traits;

// Re-export main types for convenience
pub use credentials::{KeySet, MissingKey};
pub use generator::{GenerateError, HttpGenerator, NO_ANSWER};
pub use model_id::{CatalogEntry, ModelIdError};
pub use registry::{ModelSpec, ProviderSpec, ResponseShape, PROVIDERS};
pub use traits::{AnswerSource, GenOptions, ResolvedTarget};
