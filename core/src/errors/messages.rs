//! Free-text to friendly-message mapping
//!
//! Translates raw backend messages into friendly Portuguese text with a
//! severity, for the cases where only free text is available (notably the
//! per-field sub-messages parsed by the field extractor). First matching
//! pattern wins; unmatched text is passed through unchanged.

use once_cell::sync::Lazy;
use regex::Regex;

use super::catalog::Severity;

/// A friendly-ized message with its severity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendlyMessage {
    pub message: String,
    pub severity: Severity,
}

struct MessageMapping {
    pattern: Regex,
    friendly: &'static str,
    severity: Severity,
}

fn mapping(pattern: &str, friendly: &'static str, severity: Severity) -> MessageMapping {
    MessageMapping {
        pattern: Regex::new(pattern).unwrap(),
        friendly,
        severity,
    }
}

static MESSAGE_MAPPINGS: Lazy<Vec<MessageMapping>> = Lazy::new(|| {
    use Severity::{Error, Warning};
    vec![
        // Cliente
        mapping(
            r"(?i)Já existe um cliente cadastrado com este CPF",
            "Este CPF já está cadastrado no sistema. Verifique se o cliente já existe.",
            Warning,
        ),
        mapping(
            r"(?i)Já existe um cliente cadastrado com este e-mail",
            "Este e-mail já está cadastrado. Tente usar outro e-mail ou verifique se o cliente já existe.",
            Warning,
        ),
        mapping(
            r"(?i)É necessário ter 18 anos ou mais",
            "O cliente deve ter pelo menos 18 anos para ser cadastrado no sistema.",
            Warning,
        ),
        mapping(
            r"(?i)Cliente não encontrado",
            "Cliente não encontrado. Verifique o ID informado.",
            Error,
        ),
        // Medicamento
        mapping(
            r"(?i)Já existe um medicamento com o nome",
            "Já existe um medicamento com este nome. Use um nome diferente ou verifique o medicamento existente.",
            Warning,
        ),
        mapping(
            r"(?i)Não é permitido cadastrar um medicamento já inativo",
            "Não é possível cadastrar um medicamento como inativo. Ative o medicamento após o cadastro.",
            Warning,
        ),
        mapping(
            r"(?i)medicamento está inativo e não pode ser vendido",
            "Este medicamento está inativo e não pode ser vendido. Ative o medicamento primeiro.",
            Warning,
        ),
        mapping(
            r"(?i)data de validade vencida",
            "Este medicamento está com a data de validade vencida. Não é possível realizar a operação.",
            Error,
        ),
        mapping(
            r"(?i)Medicamento não encontrado",
            "Medicamento não encontrado. Verifique o ID informado.",
            Error,
        ),
        // Estoque
        mapping(
            r"(?i)Estoque insuficiente",
            "Estoque insuficiente para realizar esta operação. Verifique a quantidade disponível.",
            Error,
        ),
        mapping(
            r"(?i)Quantidade deve ser maior que zero",
            "A quantidade deve ser maior que zero.",
            Warning,
        ),
        // Venda
        mapping(
            r"(?i)Venda deve conter ao menos um item",
            "Adicione pelo menos um item à venda antes de finalizar.",
            Warning,
        ),
        mapping(
            r"(?i)Venda não encontrada",
            "Venda não encontrada. Verifique o ID informado.",
            Error,
        ),
        // Categoria
        mapping(
            r"(?i)Já existe uma categoria com o nome",
            "Já existe uma categoria com este nome. Use um nome diferente.",
            Warning,
        ),
        mapping(
            r"(?i)Não é possível excluir uma categoria que possui medicamentos vinculados",
            "Não é possível excluir esta categoria pois existem medicamentos vinculados a ela. Remova os medicamentos primeiro.",
            Warning,
        ),
        mapping(
            r"(?i)Categoria não encontrada",
            "Categoria não encontrada. Verifique o ID informado.",
            Error,
        ),
        // Autenticação
        mapping(
            r"(?i)Nome de usuário já está em uso",
            "Este nome de usuário já está em uso. Escolha outro nome.",
            Warning,
        ),
        mapping(
            r"(?i)Authentication failed",
            "Usuário ou senha incorretos. Verifique suas credenciais.",
            Error,
        ),
        mapping(
            r"(?i)Credenciais inválidas",
            "Usuário ou senha incorretos. Tente novamente.",
            Error,
        ),
        // Validação
        mapping(
            r"(?i)não pode ser vazio",
            "Este campo é obrigatório. Preencha todos os campos necessários.",
            Warning,
        ),
        mapping(
            r"(?i)deve ser válido",
            "O valor informado não é válido. Verifique o formato e tente novamente.",
            Warning,
        ),
        mapping(
            r"(?i)deve conter \d+ dígitos",
            "O CPF deve conter exatamente 11 dígitos numéricos.",
            Warning,
        ),
        mapping(
            r"(?i)deve ser no passado",
            "A data de nascimento deve ser uma data no passado.",
            Warning,
        ),
        // Genéricos
        mapping(
            r"(?i)Recurso Não Encontrado",
            "O recurso solicitado não foi encontrado. Verifique se o ID está correto.",
            Error,
        ),
        mapping(
            r"(?i)Violação de Regra de Negócio",
            "A operação não pode ser realizada devido a uma regra de negócio.",
            Warning,
        ),
        mapping(
            r"(?i)Erro de Validação",
            "Os dados informados não são válidos. Verifique os campos e tente novamente.",
            Warning,
        ),
        mapping(
            r"(?i)Erro Interno",
            "Ocorreu um erro interno no servidor. Tente novamente em alguns instantes.",
            Error,
        ),
    ]
});

const UNMAPPED_FALLBACK: &str = "Ocorreu um erro inesperado. Tente novamente.";

/// Convert a raw backend message into a friendly message with severity.
///
/// First matching pattern wins; unmatched non-empty text is returned as-is
/// with severity error, and empty text yields the generic fallback.
pub fn friendly_message(raw: &str) -> FriendlyMessage {
    for mapping in MESSAGE_MAPPINGS.iter() {
        if mapping.pattern.is_match(raw) {
            return FriendlyMessage {
                message: mapping.friendly.to_string(),
                severity: mapping.severity,
            };
        }
    }

    FriendlyMessage {
        message: if raw.is_empty() {
            UNMAPPED_FALLBACK.to_string()
        } else {
            raw.to_string()
        },
        severity: Severity::Error,
    }
}
