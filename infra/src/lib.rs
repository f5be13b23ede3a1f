//! # FarmaDesk Infra
//!
//! Infrastructure adapters for the FarmaDesk client. Currently this is the
//! HTTP transport: a `reqwest`-based client that injects the bearer token,
//! retries network-class failures within a bounded budget, and converts
//! every failed outcome into exactly one [`fd_core::RawFailure`] at the
//! boundary.

pub mod http;

pub use http::{ApiTransport, InfraError, TokenStore};
