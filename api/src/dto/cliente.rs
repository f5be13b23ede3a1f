use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_cpf;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClienteRequest {
    #[validate(length(min = 1, max = 120))]
    pub nome: String,

    /// Bare or formatted CPF; check digits are validated client-side
    #[validate(custom = "validate_cpf")]
    pub cpf: String,

    #[validate(email)]
    pub email: String,

    /// Birth date (YYYY-MM-DD); the minimum-age rule is enforced server-side
    pub data_nascimento: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteResponse {
    pub id: i64,
    pub nome: String,
    pub cpf: String,
    pub email: String,
    pub data_nascimento: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> ClienteRequest {
        ClienteRequest {
            nome: "Ana Souza".to_string(),
            cpf: "529.982.247-25".to_string(),
            email: "ana@farmadesk.com".to_string(),
            data_nascimento: NaiveDate::from_ymd_opt(1990, 4, 23).unwrap(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut request = valid_request();
        request.nome = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_bad_cpf_rejected() {
        let mut request = valid_request();
        request.cpf = "111.111.111-11".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = serde_json::to_value(valid_request()).unwrap();
        assert!(json.get("dataNascimento").is_some());
        assert_eq!(json["dataNascimento"], "1990-04-23");
    }
}
