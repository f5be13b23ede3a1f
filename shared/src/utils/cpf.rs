//! CPF (Cadastro de Pessoas Físicas) utilities
//!
//! Pre-validation only: the backend remains the authority on CPF
//! uniqueness and acceptance.

use once_cell::sync::Lazy;
use regex::Regex;

// Formatted or bare CPF: 000.000.000-00 or 11 digits
static CPF_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{3}\.\d{3}\.\d{3}-\d{2}|\d{11})$").unwrap()
});

/// Normalize a CPF by removing formatting characters
pub fn normalize_cpf(cpf: &str) -> String {
    cpf.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Check if a CPF is structurally valid (shape + check digits)
pub fn is_valid_cpf(cpf: &str) -> bool {
    if !CPF_SHAPE_REGEX.is_match(cpf.trim()) {
        return false;
    }

    let digits: Vec<u32> = normalize_cpf(cpf)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();
    if digits.len() != 11 {
        return false;
    }

    // CPFs with all digits equal pass the modulus check but are invalid
    if digits.windows(2).all(|w| w[0] == w[1]) {
        return false;
    }

    digits[9] == check_digit(&digits[..9]) && digits[10] == check_digit(&digits[..10])
}

// Standard modulus-11 check digit over the given prefix
fn check_digit(prefix: &[u32]) -> u32 {
    let weight_start = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, d)| d * (weight_start - i as u32))
        .sum();
    let rem = (sum * 10) % 11;
    if rem == 10 {
        0
    } else {
        rem
    }
}

/// Format a CPF for display (000.000.000-00)
pub fn format_cpf(cpf: &str) -> Option<String> {
    let normalized = normalize_cpf(cpf);
    if normalized.len() != 11 {
        return None;
    }
    Some(format!(
        "{}.{}.{}-{}",
        &normalized[0..3],
        &normalized[3..6],
        &normalized[6..9],
        &normalized[9..11]
    ))
}

/// Mask a CPF for logs (e.g., ***.***.***-12)
pub fn mask_cpf(cpf: &str) -> String {
    let normalized = normalize_cpf(cpf);
    if normalized.len() == 11 {
        format!("***.***.***-{}", &normalized[9..11])
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_cpf() {
        assert_eq!(normalize_cpf("529.982.247-25"), "52998224725");
        assert_eq!(normalize_cpf("529 982 247 25"), "52998224725");
        assert_eq!(normalize_cpf("52998224725"), "52998224725");
    }

    #[test]
    fn test_is_valid_cpf() {
        assert!(is_valid_cpf("529.982.247-25"));
        assert!(is_valid_cpf("52998224725"));
        assert!(!is_valid_cpf("529.982.247-26")); // Wrong check digit
        assert!(!is_valid_cpf("111.111.111-11")); // Repeated digits
        assert!(!is_valid_cpf("5299822472"));     // Too short
        assert!(!is_valid_cpf("not-a-cpf"));
    }

    #[test]
    fn test_format_cpf() {
        assert_eq!(
            format_cpf("52998224725"),
            Some("529.982.247-25".to_string())
        );
        assert_eq!(format_cpf("12345"), None);
    }

    #[test]
    fn test_mask_cpf() {
        assert_eq!(mask_cpf("529.982.247-25"), "***.***.***-25");
        assert_eq!(mask_cpf("12345"), "***");
    }
}
