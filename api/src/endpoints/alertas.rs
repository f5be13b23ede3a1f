//! Derived analytics alerts: expiring medications and low stock

use std::sync::Arc;

use fd_core::RawFailure;
use fd_infra::ApiTransport;

use crate::dto::MedicamentoResponse;

#[derive(Debug, Clone)]
pub struct AlertasApi {
    transport: Arc<ApiTransport>,
}

impl AlertasApi {
    pub(crate) fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Medications whose expiry date falls within the given window
    /// (backend default when `dias` is omitted)
    pub async fn get_validade_proxima(
        &self,
        dias: Option<u32>,
    ) -> Result<Vec<MedicamentoResponse>, RawFailure> {
        match dias {
            Some(dias) => {
                self.transport
                    .get_with_query("/alertas/validade-proxima", &[("dias", dias.to_string())])
                    .await
            }
            None => self.transport.get("/alertas/validade-proxima").await,
        }
    }

    /// Medications at or below the stock threshold
    /// (backend default when `limite` is omitted)
    pub async fn get_estoque_baixo(
        &self,
        limite: Option<u32>,
    ) -> Result<Vec<MedicamentoResponse>, RawFailure> {
        match limite {
            Some(limite) => {
                self.transport
                    .get_with_query("/alertas/estoque-baixo", &[("limite", limite.to_string())])
                    .await
            }
            None => self.transport.get("/alertas/estoque-baixo").await,
        }
    }
}
