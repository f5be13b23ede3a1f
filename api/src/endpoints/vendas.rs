//! Sales endpoints

use std::sync::Arc;

use fd_core::RawFailure;
use fd_infra::ApiTransport;

use crate::dto::{VendaRequest, VendaResponse};

#[derive(Debug, Clone)]
pub struct VendasApi {
    transport: Arc<ApiTransport>,
}

impl VendasApi {
    pub(crate) fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    pub async fn get_all(&self) -> Result<Vec<VendaResponse>, RawFailure> {
        self.transport.get("/api/vendas").await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<VendaResponse, RawFailure> {
        self.transport.get(&format!("/api/vendas/{}", id)).await
    }

    /// Create a sale; totals and stock deductions are computed server-side
    pub async fn create(&self, payload: &VendaRequest) -> Result<VendaResponse, RawFailure> {
        self.transport.post("/api/vendas", payload).await
    }

    pub async fn get_by_cliente(&self, cliente_id: i64) -> Result<Vec<VendaResponse>, RawFailure> {
        self.transport
            .get(&format!("/api/vendas/cliente/{}", cliente_id))
            .await
    }
}
