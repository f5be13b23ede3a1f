use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MedicamentoRequest {
    #[validate(length(min = 1, max = 120))]
    pub nome: String,

    #[validate(length(max = 500))]
    pub descricao: String,

    #[validate(range(min = 0.01))]
    pub preco: f64,

    #[validate(range(min = 0))]
    pub quantidade_estoque: i64,

    /// Expiry date; expired medications are rejected server-side
    pub data_validade: NaiveDate,

    pub ativo: bool,

    pub categoria_id: i64,
}

/// Update payload: stock quantity is only changed through inventory
/// movements, never by editing the medication.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MedicamentoUpdate {
    #[validate(length(min = 1, max = 120))]
    pub nome: String,

    #[validate(length(max = 500))]
    pub descricao: String,

    #[validate(range(min = 0.01))]
    pub preco: f64,

    pub data_validade: NaiveDate,

    pub ativo: bool,

    pub categoria_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicamentoResponse {
    pub id: i64,
    pub nome: String,
    pub descricao: String,
    pub preco: f64,
    pub quantidade_estoque: i64,
    pub data_validade: NaiveDate,
    pub ativo: bool,
    pub categoria_id: i64,
    pub categoria_nome: String,
}
