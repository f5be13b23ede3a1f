//! Inventory movement endpoints

use std::sync::Arc;

use fd_core::RawFailure;
use fd_infra::ApiTransport;

use crate::dto::{MovimentacaoRequest, MovimentacaoResponse};

#[derive(Debug, Clone)]
pub struct EstoqueApi {
    transport: Arc<ApiTransport>,
}

impl EstoqueApi {
    pub(crate) fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Register an inbound movement
    pub async fn entrada(&self, payload: &MovimentacaoRequest) -> Result<(), RawFailure> {
        self.transport.post_unit("/estoque/entrada", payload).await
    }

    /// Register an outbound movement; fails with `ESTOQUE_INSUFICIENTE`
    /// when the requested quantity exceeds what is available.
    pub async fn saida(&self, payload: &MovimentacaoRequest) -> Result<(), RawFailure> {
        self.transport.post_unit("/estoque/saida", payload).await
    }

    /// Movement history for one medication
    pub async fn get_history(
        &self,
        medicamento_id: i64,
    ) -> Result<Vec<MovimentacaoResponse>, RawFailure> {
        self.transport
            .get(&format!("/estoque/{}", medicamento_id))
            .await
    }
}
