//! Configuration system — schema and loading.
//!
//! # Usage
//! ```no_run
//! use witbot_core::config;
//!
//! let cfg = config::load_config(None);
//! println!("Model: {}", cfg.defaults.model);
//! ```

pub mod loader;
pub mod schema;

// Re-export key types
pub use loader::{get_config_path, get_data_path, load_config};
pub use schema::{Config, Defaults, ProviderSettings, ProvidersConfig};
