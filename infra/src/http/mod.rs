//! HTTP transport and session token storage

mod token;
mod transport;

pub use token::TokenStore;
pub use transport::{ApiTransport, InfraError};
