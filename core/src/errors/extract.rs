//! Legacy error-code recovery from free-text messages
//!
//! Some backend endpoints predate the stable `error` code field and return
//! only a human-readable message. This module recovers a business code from
//! known message wordings so those responses still resolve through the
//! catalog. The pattern list is inherently coupled to backend phrasing;
//! it is kept in this one module so it can be deleted outright once every
//! endpoint sends machine codes.
//!
//! Ordering is part of the contract: patterns are tested top to bottom and
//! the first match wins, which disambiguates messages that would match more
//! than one pattern (e.g., "medicamento inativo" wordings).

use once_cell::sync::Lazy;
use regex::Regex;

// Message patterns, matched against the uppercased message
static MESSAGE_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"JÁ EXISTE.*CLIENTE.*CPF", "CLIENTE_CPF_DUPLICADO"),
        (r"JÁ EXISTE.*CLIENTE.*E-MAIL", "CLIENTE_EMAIL_DUPLICADO"),
        (r"18 ANOS", "CLIENTE_MENOR_IDADE"),
        (r"CLIENTE NÃO ENCONTRADO", "CLIENTE_NAO_ENCONTRADO"),
        (r"JÁ EXISTE.*MEDICAMENTO.*NOME", "MEDICAMENTO_NOME_DUPLICADO"),
        (r"NÃO É PERMITIDO CADASTRAR.*INATIVO", "MEDICAMENTO_CADASTRO_INATIVO"),
        (r"MEDICAMENTO.*INATIVO", "MEDICAMENTO_INATIVO"),
        (r"VALIDADE VENCIDA", "MEDICAMENTO_VENCIDO"),
        (r"MEDICAMENTO NÃO ENCONTRADO", "MEDICAMENTO_NAO_ENCONTRADO"),
        (r"ESTOQUE INSUFICIENTE", "ESTOQUE_INSUFICIENTE"),
        (r"QUANTIDADE.*MAIOR QUE ZERO", "ESTOQUE_QUANTIDADE_INVALIDA"),
        (r"VENDA.*AO MENOS UM ITEM", "VENDA_SEM_ITENS"),
        (r"VENDA NÃO ENCONTRADA", "VENDA_NAO_ENCONTRADA"),
        (r"JÁ EXISTE.*CATEGORIA", "CATEGORIA_NOME_DUPLICADO"),
        (
            r"NÃO É POSSÍVEL EXCLUIR.*CATEGORIA.*MEDICAMENTOS",
            "CATEGORIA_COM_MEDICAMENTOS",
        ),
        (r"CATEGORIA NÃO ENCONTRADA", "CATEGORIA_NAO_ENCONTRADA"),
        (r"NOME DE USUÁRIO.*EM USO", "AUTH_USUARIO_DUPLICADO"),
        (r"USUÁRIO INATIVO", "AUTH_USUARIO_INATIVO"),
    ]
    .into_iter()
    .map(|(pattern, code)| {
        let regex = Regex::new(pattern).unwrap();
        (regex, code)
    })
    .collect()
});

/// Recover a business code from a free-text backend message.
///
/// Returns the code of the first matching pattern, or `None` when no
/// pattern matches. Pure and total.
pub fn extract_error_code(message: &str) -> Option<&'static str> {
    if message.is_empty() {
        return None;
    }

    let upper = message.to_uppercase();
    MESSAGE_PATTERNS
        .iter()
        .find(|(regex, _)| regex.is_match(&upper))
        .map(|(_, code)| *code)
}
