//! Category endpoints

use std::sync::Arc;

use fd_core::RawFailure;
use fd_infra::ApiTransport;

use crate::dto::{CategoriaRequest, CategoriaResponse};

#[derive(Debug, Clone)]
pub struct CategoriasApi {
    transport: Arc<ApiTransport>,
}

impl CategoriasApi {
    pub(crate) fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    pub async fn get_all(&self) -> Result<Vec<CategoriaResponse>, RawFailure> {
        self.transport.get("/categorias").await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<CategoriaResponse, RawFailure> {
        self.transport.get(&format!("/categorias/{}", id)).await
    }

    pub async fn create(&self, payload: &CategoriaRequest) -> Result<CategoriaResponse, RawFailure> {
        self.transport.post("/categorias", payload).await
    }

    /// Deletion fails with `CATEGORIA_COM_MEDICAMENTOS` while medications
    /// are still linked to the category.
    pub async fn delete(&self, id: i64) -> Result<(), RawFailure> {
        self.transport.delete(&format!("/categorias/{}", id)).await
    }
}
