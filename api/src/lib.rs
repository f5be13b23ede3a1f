//! # FarmaDesk API
//!
//! Domain-facing surface of the FarmaDesk back-office client: one endpoint
//! client per backend resource, the request/response DTOs with client-side
//! pre-validation, and the error-reporting and feedback layers that turn a
//! failed call into something a screen can render.

pub mod dto;
pub mod endpoints;
pub mod feedback;
pub mod reporter;

use std::sync::Arc;

use fd_infra::ApiTransport;

use endpoints::{
    AlertasApi, AuthApi, CategoriasApi, ClientesApi, EstoqueApi, LogsApi, MedicamentosApi,
    VendasApi,
};

pub use feedback::{field_error_for, FeedbackView};
pub use reporter::{ErrorReporter, ErrorState};

// Re-exported so embedding applications can configure a client without
// depending on the infra crate directly
pub use fd_infra::{InfraError, TokenStore};
pub use fd_shared::config::ClientConfig;

/// Aggregated client over every backend resource
///
/// All endpoint clients share one transport (and therefore one session
/// token), mirroring the single configured HTTP instance of the original
/// front office.
#[derive(Debug, Clone)]
pub struct FarmaDeskClient {
    pub auth: AuthApi,
    pub clientes: ClientesApi,
    pub medicamentos: MedicamentosApi,
    pub categorias: CategoriasApi,
    pub estoque: EstoqueApi,
    pub vendas: VendasApi,
    pub alertas: AlertasApi,
    pub logs: LogsApi,
}

impl FarmaDeskClient {
    /// Build a client from configuration with a fresh session
    pub fn new(config: &ClientConfig) -> Result<Self, InfraError> {
        Self::with_tokens(config, TokenStore::new())
    }

    /// Build a client sharing an existing token store
    pub fn with_tokens(config: &ClientConfig, tokens: TokenStore) -> Result<Self, InfraError> {
        let transport = Arc::new(ApiTransport::new(config, tokens.clone())?);
        Ok(Self {
            auth: AuthApi::new(Arc::clone(&transport), tokens),
            clientes: ClientesApi::new(Arc::clone(&transport)),
            medicamentos: MedicamentosApi::new(Arc::clone(&transport)),
            categorias: CategoriasApi::new(Arc::clone(&transport)),
            estoque: EstoqueApi::new(Arc::clone(&transport)),
            vendas: VendasApi::new(Arc::clone(&transport)),
            alertas: AlertasApi::new(Arc::clone(&transport)),
            logs: LogsApi::new(transport),
        })
    }
}
