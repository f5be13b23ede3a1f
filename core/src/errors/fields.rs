//! Per-field error extraction
//!
//! Validation failures may arrive as one composite message embedding
//! `[field]: detail` segments. This module decomposes such a message into
//! per-field friendly sub-messages for inline form display.

use once_cell::sync::Lazy;
use regex::Regex;

use super::messages::friendly_message;

// One segment: "[field]: text", text running until the next segment, a
// '|' separator, or end of input.
static FIELD_SEGMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]:\s*([^\[|]*)").unwrap());

/// Ordered collection of per-field error messages
///
/// Keys are unique (first occurrence wins) and iteration order is the
/// order of appearance in the source message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, String)>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up a field's message, tolerating case differences: the exact
    /// name is tried first, then its uppercase and lowercase variants.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.find(field)
            .or_else(|| self.find(&field.to_uppercase()))
            .or_else(|| self.find(&field.to_lowercase()))
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Iterate entries in order of appearance
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn find(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == field)
            .map(|(_, message)| message.as_str())
    }

    fn insert_first(&mut self, field: String, message: String) {
        if !self.entries.iter().any(|(key, _)| *key == field) {
            self.entries.push((field, message));
        }
    }
}

/// Extract per-field errors from a composite backend message.
///
/// Each `[field]: text` occurrence maps the trimmed field name to the
/// friendly-ized form of the trimmed text. A message without segments
/// yields an empty collection. Pure and total.
pub fn extract_field_errors(message: &str) -> FieldErrors {
    let mut field_errors = FieldErrors::default();

    for captures in FIELD_SEGMENT_REGEX.captures_iter(message) {
        let field = captures[1].trim();
        let text = captures[2].trim();
        if field.is_empty() {
            continue;
        }
        field_errors.insert_first(field.to_string(), friendly_message(text).message);
    }

    field_errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_segments() {
        let errors =
            extract_field_errors("[cpf]: CPF inválido [email]: Email já cadastrado");
        assert_eq!(errors.len(), 2);
        assert!(errors.contains("cpf"));
        assert!(errors.contains("email"));
        // Unmapped sub-texts pass through unchanged
        assert_eq!(errors.get("cpf"), Some("CPF inválido"));
        assert_eq!(errors.get("email"), Some("Email já cadastrado"));
    }

    #[test]
    fn test_segments_friendlyized() {
        let errors = extract_field_errors("[cpf]: CPF deve conter 11 dígitos");
        assert_eq!(
            errors.get("cpf"),
            Some("O CPF deve conter exatamente 11 dígitos numéricos.")
        );
    }

    #[test]
    fn test_pipe_separated_segments() {
        let errors = extract_field_errors(
            "[nome]: não pode ser vazio | [dataNascimento]: deve ser no passado",
        );
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get("nome"),
            Some("Este campo é obrigatório. Preencha todos os campos necessários.")
        );
        assert_eq!(
            errors.get("dataNascimento"),
            Some("A data de nascimento deve ser uma data no passado.")
        );
    }

    #[test]
    fn test_plain_message_yields_empty() {
        assert!(extract_field_errors("Erro interno no servidor").is_empty());
        assert!(extract_field_errors("").is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let errors = extract_field_errors("[b]: um [a]: dois [c]: três");
        let keys: Vec<&str> = errors.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_duplicate_field_keeps_first() {
        let errors = extract_field_errors("[cpf]: primeiro [cpf]: segundo");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("cpf"), Some("primeiro"));
    }

    #[test]
    fn test_case_tolerant_lookup() {
        let errors =
            extract_field_errors("[CPF]: CPF inválido [email]: inválido [dataNascimento]: x");
        assert_eq!(errors.get("cpf"), Some("CPF inválido"));
        assert_eq!(errors.get("EMAIL"), Some("inválido"));
        assert_eq!(errors.get("Email"), Some("inválido"));
        // Only exact/upper/lower variants are tried; other casings miss
        assert_eq!(errors.get("datanascimento"), None);
        assert_eq!(errors.get("dataNascimento"), Some("x"));
    }
}
