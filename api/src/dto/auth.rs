use serde::{Deserialize, Serialize};
use validator::Validate;

/// User profile, controlling back-office permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Perfil {
    Admin,
    Atendente,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(length(min = 6, max = 100))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(length(min = 6, max = 100))]
    pub password: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub perfil: Option<Perfil>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsuarioResponse {
    pub id: i64,
    pub username: String,
    pub perfil: String,
    pub ativo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_password_rejected() {
        let request = LoginRequest {
            username: "ana".to_string(),
            password: "123".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_perfil_wire_format() {
        assert_eq!(
            serde_json::to_string(&Perfil::Atendente).unwrap(),
            "\"ATENDENTE\""
        );
    }
}
