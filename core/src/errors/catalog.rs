//! Business error catalog
//!
//! Single source of truth translating backend error codes into UX guidance.
//! The backend owns the business rules; this catalog only maps its stable
//! machine codes (the `error` field of the error body) to user-facing
//! messages. Declaration order is significant: the partial-match fallback in
//! [`business_error`] scans entries in order and the first hit wins, so the
//! catalog is an ordered slice rather than a map.

use serde::{Deserialize, Serialize};

/// Error severity, affecting color, icon, and the logging gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// UX mapping for one backend error code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessErrorMapping {
    /// User-facing message
    pub message: &'static str,
    /// Severity of the error
    pub severity: Severity,
    /// Whether the error blocks the triggering action
    pub blocking: bool,
    /// Suggested remediation, if any
    pub action_hint: Option<&'static str>,
}

/// Sentinel codes produced by the processor itself
pub mod error_codes {
    /// Transport could not complete the request
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
    /// Non-HTTP library failure
    pub const RUNTIME_ERROR: &str = "RUNTIME_ERROR";
    /// Failure whose code could not be resolved
    pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";
}

/// Ordered catalog of backend error codes
///
/// Codes must match the `error` field of the backend error body. Keys are
/// uppercase alphanumeric+underscore.
pub const BUSINESS_ERRORS: &[(&str, BusinessErrorMapping)] = &[
    // Clientes
    (
        "CLIENTE_CPF_DUPLICADO",
        BusinessErrorMapping {
            message: "Este CPF já está cadastrado no sistema.",
            severity: Severity::Warning,
            blocking: true,
            action_hint: Some("Verifique se o cliente já existe ou utilize outro CPF."),
        },
    ),
    (
        "CLIENTE_EMAIL_DUPLICADO",
        BusinessErrorMapping {
            message: "Este e-mail já está cadastrado no sistema.",
            severity: Severity::Warning,
            blocking: true,
            action_hint: Some("Verifique se o cliente já existe ou utilize outro e-mail."),
        },
    ),
    (
        "CLIENTE_MENOR_IDADE",
        BusinessErrorMapping {
            message: "O cliente deve ter pelo menos 18 anos para ser cadastrado.",
            severity: Severity::Warning,
            blocking: true,
            action_hint: Some("Verifique a data de nascimento informada."),
        },
    ),
    (
        "CLIENTE_NAO_ENCONTRADO",
        BusinessErrorMapping {
            message: "Cliente não encontrado.",
            severity: Severity::Error,
            blocking: true,
            action_hint: Some("Verifique o ID informado ou tente novamente."),
        },
    ),
    // Medicamentos
    (
        "MEDICAMENTO_NOME_DUPLICADO",
        BusinessErrorMapping {
            message: "Já existe um medicamento com este nome.",
            severity: Severity::Warning,
            blocking: true,
            action_hint: Some("Utilize um nome diferente ou verifique o medicamento existente."),
        },
    ),
    (
        "MEDICAMENTO_CADASTRO_INATIVO",
        BusinessErrorMapping {
            message: "Não é permitido cadastrar um medicamento como inativo.",
            severity: Severity::Warning,
            blocking: true,
            action_hint: Some(
                "Cadastre o medicamento como ativo e altere o status posteriormente, se necessário.",
            ),
        },
    ),
    (
        "MEDICAMENTO_INATIVO",
        BusinessErrorMapping {
            message: "Este medicamento está indisponível para venda no momento.",
            severity: Severity::Warning,
            blocking: true,
            action_hint: Some("Ative o medicamento antes de realizar a operação."),
        },
    ),
    (
        "MEDICAMENTO_VENCIDO",
        BusinessErrorMapping {
            message: "Este medicamento está com a data de validade vencida.",
            severity: Severity::Error,
            blocking: true,
            action_hint: Some("Não é possível realizar operações com medicamentos vencidos."),
        },
    ),
    (
        "MEDICAMENTO_NAO_ENCONTRADO",
        BusinessErrorMapping {
            message: "Medicamento não encontrado.",
            severity: Severity::Error,
            blocking: true,
            action_hint: Some("Verifique o ID informado ou tente novamente."),
        },
    ),
    // Estoque
    (
        "ESTOQUE_INSUFICIENTE",
        BusinessErrorMapping {
            message: "Estoque insuficiente para concluir a operação.",
            severity: Severity::Error,
            blocking: true,
            action_hint: Some("Verifique a quantidade disponível e ajuste a solicitação."),
        },
    ),
    (
        "ESTOQUE_QUANTIDADE_INVALIDA",
        BusinessErrorMapping {
            message: "A quantidade deve ser maior que zero.",
            severity: Severity::Warning,
            blocking: true,
            action_hint: Some("Informe uma quantidade válida."),
        },
    ),
    (
        "ESTOQUE_MEDICAMENTO_INATIVO",
        BusinessErrorMapping {
            message: "Não é possível movimentar estoque de medicamento inativo.",
            severity: Severity::Warning,
            blocking: true,
            action_hint: Some("Ative o medicamento antes de realizar a movimentação."),
        },
    ),
    // Vendas
    (
        "VENDA_SEM_ITENS",
        BusinessErrorMapping {
            message: "A venda deve conter pelo menos um item.",
            severity: Severity::Warning,
            blocking: true,
            action_hint: Some("Adicione pelo menos um medicamento à venda."),
        },
    ),
    (
        "VENDA_NAO_ENCONTRADA",
        BusinessErrorMapping {
            message: "Venda não encontrada.",
            severity: Severity::Error,
            blocking: true,
            action_hint: Some("Verifique o ID informado ou tente novamente."),
        },
    ),
    (
        "VENDA_CLIENTE_INVALIDO",
        BusinessErrorMapping {
            message: "Cliente inválido ou não encontrado.",
            severity: Severity::Error,
            blocking: true,
            action_hint: Some("Selecione um cliente válido."),
        },
    ),
    // Categorias
    (
        "CATEGORIA_NOME_DUPLICADO",
        BusinessErrorMapping {
            message: "Já existe uma categoria com este nome.",
            severity: Severity::Warning,
            blocking: true,
            action_hint: Some("Utilize um nome diferente."),
        },
    ),
    (
        "CATEGORIA_COM_MEDICAMENTOS",
        BusinessErrorMapping {
            message: "Não é possível excluir uma categoria que possui medicamentos vinculados.",
            severity: Severity::Warning,
            blocking: true,
            action_hint: Some(
                "Remova ou altere a categoria dos medicamentos vinculados antes de excluir.",
            ),
        },
    ),
    (
        "CATEGORIA_NAO_ENCONTRADA",
        BusinessErrorMapping {
            message: "Categoria não encontrada.",
            severity: Severity::Error,
            blocking: true,
            action_hint: Some("Verifique o ID informado ou tente novamente."),
        },
    ),
    // Autenticação
    (
        "AUTH_CREDENCIAIS_INVALIDAS",
        BusinessErrorMapping {
            message: "Usuário ou senha incorretos.",
            severity: Severity::Error,
            blocking: true,
            action_hint: Some("Verifique suas credenciais e tente novamente."),
        },
    ),
    (
        "AUTH_USUARIO_DUPLICADO",
        BusinessErrorMapping {
            message: "Este nome de usuário já está em uso.",
            severity: Severity::Warning,
            blocking: true,
            action_hint: Some("Escolha outro nome de usuário."),
        },
    ),
    (
        "AUTH_USUARIO_INATIVO",
        BusinessErrorMapping {
            message: "Usuário inativo. Entre em contato com o administrador.",
            severity: Severity::Error,
            blocking: true,
            action_hint: Some("Sua conta pode ter sido desativada."),
        },
    ),
    (
        "AUTH_NAO_AUTORIZADO",
        BusinessErrorMapping {
            message: "Você não tem permissão para realizar esta ação.",
            severity: Severity::Error,
            blocking: true,
            action_hint: Some("Entre em contato com o administrador se precisar de acesso."),
        },
    ),
    // Validações genéricas
    (
        "VALIDACAO_CAMPO_OBRIGATORIO",
        BusinessErrorMapping {
            message: "Preencha todos os campos obrigatórios.",
            severity: Severity::Warning,
            blocking: true,
            action_hint: Some(
                "Verifique os campos marcados e preencha as informações necessárias.",
            ),
        },
    ),
    (
        "VALIDACAO_FORMATO_INVALIDO",
        BusinessErrorMapping {
            message: "O formato dos dados informados não é válido.",
            severity: Severity::Warning,
            blocking: true,
            action_hint: Some("Verifique o formato dos campos e tente novamente."),
        },
    ),
    (
        "VALIDACAO_CPF_INVALIDO",
        BusinessErrorMapping {
            message: "O CPF informado não é válido.",
            severity: Severity::Warning,
            blocking: true,
            action_hint: Some("Verifique se o CPF contém 11 dígitos numéricos."),
        },
    ),
    (
        "VALIDACAO_DATA_INVALIDA",
        BusinessErrorMapping {
            message: "A data informada não é válida.",
            severity: Severity::Warning,
            blocking: true,
            action_hint: Some("Verifique o formato da data e tente novamente."),
        },
    ),
    // Erros genéricos do sistema
    (
        "RECURSO_NAO_ENCONTRADO",
        BusinessErrorMapping {
            message: "O recurso solicitado não foi encontrado.",
            severity: Severity::Error,
            blocking: true,
            action_hint: Some("Verifique se o ID está correto ou tente novamente."),
        },
    ),
    (
        "VIOLACAO_REGRA_NEGOCIO",
        BusinessErrorMapping {
            message: "A operação não pode ser realizada devido a uma regra de negócio.",
            severity: Severity::Warning,
            blocking: true,
            action_hint: Some("Verifique os dados informados e tente novamente."),
        },
    ),
    (
        "ERRO_VALIDACAO",
        BusinessErrorMapping {
            message: "Os dados informados não são válidos.",
            severity: Severity::Warning,
            blocking: true,
            action_hint: Some("Verifique os campos e corrija os erros antes de continuar."),
        },
    ),
    (
        "ERRO_INTERNO",
        BusinessErrorMapping {
            message: "Ocorreu um erro interno no servidor.",
            severity: Severity::Error,
            blocking: true,
            action_hint: Some(
                "Tente novamente em alguns instantes. Se o problema persistir, entre em contato com o suporte.",
            ),
        },
    ),
    (
        "ERRO_REDE",
        BusinessErrorMapping {
            message: "Não foi possível conectar ao servidor.",
            severity: Severity::Error,
            blocking: true,
            action_hint: Some("Verifique sua conexão com a internet e tente novamente."),
        },
    ),
];

/// Look up the UX mapping for a backend error code.
///
/// Total and pure: an absent, empty, or unknown code falls back to the
/// generic internal-error entry. The code is normalized (uppercase, trimmed)
/// before matching; when no exact key matches, the first catalog entry whose
/// key contains the code (or is contained by it) wins.
pub fn business_error(code: Option<&str>) -> &'static BusinessErrorMapping {
    let code = match code {
        Some(c) if !c.trim().is_empty() => c,
        _ => return internal_error(),
    };

    let normalized = code.trim().to_uppercase();

    if let Some((_, mapping)) = BUSINESS_ERRORS.iter().find(|(key, _)| *key == normalized) {
        return mapping;
    }

    // Partial match, declaration order
    if let Some((_, mapping)) = BUSINESS_ERRORS
        .iter()
        .find(|(key, _)| normalized.contains(key) || key.contains(normalized.as_str()))
    {
        return mapping;
    }

    internal_error()
}

/// The generic internal-error entry (catalog fallback)
pub fn internal_error() -> &'static BusinessErrorMapping {
    lookup_exact("ERRO_INTERNO")
}

/// The network-error entry
pub fn network_error() -> &'static BusinessErrorMapping {
    lookup_exact("ERRO_REDE")
}

// Last resort if the catalog ever loses its fallback entries; tests pin
// their presence, so this is unreachable in practice.
const GENERIC_FALLBACK: BusinessErrorMapping = BusinessErrorMapping {
    message: "Ocorreu um erro inesperado.",
    severity: Severity::Error,
    blocking: true,
    action_hint: None,
};

fn lookup_exact(code: &str) -> &'static BusinessErrorMapping {
    BUSINESS_ERRORS
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, mapping)| mapping)
        .unwrap_or(&GENERIC_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let mapping = business_error(Some("ESTOQUE_INSUFICIENTE"));
        assert_eq!(mapping.severity, Severity::Error);
        assert!(mapping.blocking);
        assert!(mapping.message.to_lowercase().contains("insuficiente"));
    }

    #[test]
    fn test_case_and_whitespace_normalization() {
        let canonical = business_error(Some("ESTOQUE_INSUFICIENTE"));
        let normalized = business_error(Some(" estoque_insuficiente "));
        assert_eq!(normalized, canonical);
    }

    #[test]
    fn test_fallback_to_internal_error() {
        let mapping = business_error(Some("TOTALLY_UNKNOWN_CODE_XYZ"));
        assert_eq!(mapping, internal_error());
    }

    #[test]
    fn test_absent_code_falls_back() {
        assert_eq!(business_error(None), internal_error());
        assert_eq!(business_error(Some("")), internal_error());
        assert_eq!(business_error(Some("   ")), internal_error());
    }

    #[test]
    fn test_partial_match_code_contains_key() {
        // A decorated code still resolves to its catalog entry
        let mapping = business_error(Some("ERR_ESTOQUE_INSUFICIENTE_V2"));
        assert_eq!(mapping, business_error(Some("ESTOQUE_INSUFICIENTE")));
    }

    #[test]
    fn test_partial_match_key_contains_code() {
        let mapping = business_error(Some("CLIENTE_CPF"));
        assert_eq!(mapping, business_error(Some("CLIENTE_CPF_DUPLICADO")));
    }

    #[test]
    fn test_partial_match_declaration_order_wins() {
        // "CLIENTE" is a substring of every cliente-domain key; the first
        // declared entry must win deterministically.
        let mapping = business_error(Some("CLIENTE"));
        assert_eq!(mapping, business_error(Some("CLIENTE_CPF_DUPLICADO")));
    }

    #[test]
    fn test_catalog_keys_are_normalized() {
        for (key, _) in BUSINESS_ERRORS {
            assert_eq!(*key, key.trim().to_uppercase());
            assert!(key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_'));
        }
    }

    #[test]
    fn test_fallback_entries_present() {
        assert!(internal_error().message.contains("interno"));
        assert!(network_error().message.contains("conectar"));
    }
}
