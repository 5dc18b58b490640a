//! Header canonicalization for vocabulary lookups.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonicalize a header for case and diacritic insensitive comparison.
///
/// Accented letters are decomposed (NFD) and their combining marks dropped,
/// then surrounding whitespace is trimmed and the result lowercased.
///
/// ```
/// use limpa::inference::normalize_header;
///
/// assert_eq!(normalize_header("  Teléfone "), "telefone");
/// ```
pub fn normalize_header(header: &str) -> String {
    let stripped: String = header.nfd().filter(|c| !is_combining_mark(*c)).collect();
    stripped.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_diacritic_insensitive() {
        let canonical = normalize_header("Telefone");
        assert_eq!(canonical, "telefone");
        assert_eq!(normalize_header("teléfone"), canonical);
        assert_eq!(normalize_header("TELEFONE"), canonical);
        assert_eq!(normalize_header("TÉLÉFONE"), canonical);
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(normalize_header("\t Nome \n"), "nome");
        assert_eq!(normalize_header("coluna 3"), "coluna 3");
    }

    #[test]
    fn test_portuguese_letters() {
        assert_eq!(normalize_header("Endereço"), "endereco");
        assert_eq!(normalize_header("AÇÃO"), "acao");
    }

    #[test]
    fn test_empty_header() {
        assert_eq!(normalize_header(""), "");
        assert_eq!(normalize_header("   "), "");
    }

    #[test]
    fn test_idempotent() {
        for header in ["Sobrenome", " CELULAR ", "Número", "lastName"] {
            let once = normalize_header(header);
            assert_eq!(normalize_header(&once), once);
        }
    }
}
