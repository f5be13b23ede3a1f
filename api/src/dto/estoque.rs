use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Inventory movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TipoMovimentacao {
    Entrada,
    Saida,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MovimentacaoRequest {
    pub medicamento_id: i64,

    /// Stock sufficiency for outbound movements is checked server-side
    #[validate(range(min = 1))]
    pub quantidade: i64,

    #[validate(length(max = 300))]
    pub observacao: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovimentacaoResponse {
    pub id: i64,
    pub medicamento_nome: String,
    pub tipo: TipoMovimentacao,
    pub quantidade: i64,
    pub observacao: String,
    pub data_hora: DateTime<Utc>,
}
