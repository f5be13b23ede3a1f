//! Medication endpoints

use std::sync::Arc;

use fd_core::RawFailure;
use fd_infra::ApiTransport;

use crate::dto::{MedicamentoRequest, MedicamentoResponse, MedicamentoUpdate};

#[derive(Debug, Clone)]
pub struct MedicamentosApi {
    transport: Arc<ApiTransport>,
}

impl MedicamentosApi {
    pub(crate) fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    pub async fn get_all(&self) -> Result<Vec<MedicamentoResponse>, RawFailure> {
        self.transport.get("/medicamentos").await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<MedicamentoResponse, RawFailure> {
        self.transport.get(&format!("/medicamentos/{}", id)).await
    }

    pub async fn create(
        &self,
        payload: &MedicamentoRequest,
    ) -> Result<MedicamentoResponse, RawFailure> {
        self.transport.post("/medicamentos", payload).await
    }

    pub async fn update(
        &self,
        id: i64,
        payload: &MedicamentoUpdate,
    ) -> Result<MedicamentoResponse, RawFailure> {
        self.transport
            .put(&format!("/medicamentos/{}", id), payload)
            .await
    }

    /// Activate or deactivate a medication. The backend expects a raw JSON
    /// boolean body on this route.
    pub async fn update_status(&self, id: i64, ativo: bool) -> Result<(), RawFailure> {
        self.transport
            .patch_unit(&format!("/medicamentos/{}/status", id), &ativo)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), RawFailure> {
        self.transport.delete(&format!("/medicamentos/{}", id)).await
    }
}
