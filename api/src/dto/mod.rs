//! Request and response DTOs for the backend API
//!
//! The wire format is camelCase JSON. Request DTOs carry declarative
//! pre-validation so forms can reject obviously bad input before a request
//! is issued; the backend remains the authority on every rule.

mod auth;
mod categoria;
mod cliente;
mod estoque;
mod log;
mod medicamento;
mod venda;

pub use auth::{LoginRequest, LoginResponse, Perfil, RegisterRequest, UsuarioResponse};
pub use categoria::{CategoriaRequest, CategoriaResponse};
pub use cliente::{ClienteRequest, ClienteResponse};
pub use estoque::{MovimentacaoRequest, MovimentacaoResponse, TipoMovimentacao};
pub use log::{LogEntry, LogLevel};
pub use medicamento::{MedicamentoRequest, MedicamentoResponse, MedicamentoUpdate};
pub use venda::{ItemVendaRequest, ItemVendaResponse, VendaRequest, VendaResponse};

use fd_shared::utils::validation::ValidationErrors;

/// Custom validator wiring CPF check digits into `validator` derives
pub(crate) fn validate_cpf(cpf: &str) -> Result<(), validator::ValidationError> {
    if fd_shared::utils::cpf::is_valid_cpf(cpf) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("cpf_invalido"))
    }
}

/// Run a DTO's declarative validation and flatten the result into the
/// field-level collection forms render from.
pub fn pre_validate<T: validator::Validate>(dto: &T) -> Result<(), ValidationErrors> {
    let Err(raw) = dto.validate() else {
        return Ok(());
    };

    let mut errors = ValidationErrors::new();
    for (field, field_errors) in raw.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("valor inválido para o campo {}", field));
            errors.add_error(field, message, error.code.to_uppercase());
        }
    }
    Err(errors)
}
