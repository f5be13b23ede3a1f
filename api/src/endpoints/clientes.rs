//! Customer endpoints

use std::sync::Arc;

use fd_core::RawFailure;
use fd_infra::ApiTransport;

use crate::dto::{ClienteRequest, ClienteResponse};

#[derive(Debug, Clone)]
pub struct ClientesApi {
    transport: Arc<ApiTransport>,
}

impl ClientesApi {
    pub(crate) fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    pub async fn get_all(&self) -> Result<Vec<ClienteResponse>, RawFailure> {
        self.transport.get("/clientes").await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ClienteResponse, RawFailure> {
        self.transport.get(&format!("/clientes/{}", id)).await
    }

    pub async fn create(&self, payload: &ClienteRequest) -> Result<ClienteResponse, RawFailure> {
        self.transport.post("/clientes", payload).await
    }

    pub async fn update(
        &self,
        id: i64,
        payload: &ClienteRequest,
    ) -> Result<ClienteResponse, RawFailure> {
        self.transport.put(&format!("/clientes/{}", id), payload).await
    }
}
