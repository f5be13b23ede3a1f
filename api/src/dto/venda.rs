use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ItemVendaRequest {
    pub medicamento_id: i64,

    #[validate(range(min = 1))]
    pub quantidade: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VendaRequest {
    pub cliente_id: i64,

    /// A sale must carry at least one item; totals are computed server-side
    #[validate(length(min = 1))]
    pub itens: Vec<ItemVendaRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemVendaResponse {
    pub medicamento_id: i64,
    pub nome_medicamento: String,
    pub quantidade: i64,
    pub preco_unitario: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendaResponse {
    pub id: i64,
    pub data_venda: DateTime<Utc>,
    pub valor_total: f64,
    pub cliente_id: i64,
    pub nome_cliente: String,
    pub itens: Vec<ItemVendaResponse>,
}
