use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoriaRequest {
    #[validate(length(min = 1, max = 80))]
    pub nome: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriaResponse {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub descricao: Option<String>,
}
