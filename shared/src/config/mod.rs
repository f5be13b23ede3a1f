//! Configuration types for the FarmaDesk client

mod client;
mod environment;
mod logging;

pub use client::ClientConfig;
pub use environment::Environment;
pub use logging::{init_tracing, LogFormat, LoggingConfig};
