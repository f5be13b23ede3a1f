//! Shared utilities and common types for the FarmaDesk client
//!
//! This crate provides common functionality used across all client modules:
//! - Configuration types (environment, logging, HTTP client settings)
//! - Wire types shared with the backend (error body)
//! - Utility functions (CPF validation, field-level pre-validation)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{ClientConfig, Environment, LoggingConfig};
pub use types::ApiErrorBody;
pub use utils::{cpf, validation};
