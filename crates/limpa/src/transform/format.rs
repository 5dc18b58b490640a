//! Value-level normalization of personal names and Brazilian phone numbers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Brazilian country calling code.
pub const COUNTRY_CODE: &str = "55";

// Runs of whitespace separate name tokens. Leading or trailing whitespace yields
// empty edge tokens, which keeps the operation idempotent.
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Capitalize every whitespace-separated token of a name.
///
/// The first character of each token is uppercased and the rest lowercased.
/// Hyphens and apostrophes do not start a new token.
///
/// ```
/// use limpa::transform::correct_name;
///
/// assert_eq!(correct_name("joão DA silva"), "João Da Silva");
/// assert_eq!(correct_name("ana-maria"), "Ana-maria");
/// ```
pub fn correct_name(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    WHITESPACE_RUN
        .split(value)
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Canonicalize a Brazilian phone number to `55` + DDD + local number.
///
/// Non-digits are dropped and a leading country code is removed. Numbers that
/// are then not 10 or 11 digits long are returned exactly as given. Otherwise
/// the mobile ninth digit is reconciled with the area code:
///
/// - DDD 11 to 29 with an 8-digit number gains a leading `9`;
/// - DDD 30 and above with a 9-digit number starting with `9` loses it.
///
/// ```
/// use limpa::transform::format_phone;
///
/// assert_eq!(format_phone("(11) 8765-4321"), "5511987654321");
/// assert_eq!(format_phone("31 98765-4321"), "553187654321");
/// assert_eq!(format_phone("123"), "123");
/// ```
pub fn format_phone(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let all_digits: String = value.chars().filter(char::is_ascii_digit).collect();
    let digits = all_digits.strip_prefix(COUNTRY_CODE).unwrap_or(&all_digits);

    if !(10..=11).contains(&digits.len()) {
        return value.to_string();
    }

    let (ddd, numero) = digits.split_at(2);
    // Two ASCII digits always parse.
    let area_code: u8 = ddd.parse().unwrap_or(0);

    let numero = match (area_code, numero.len()) {
        (11..=29, 8) => format!("9{}", numero),
        (30.., 9) if numero.starts_with('9') => numero[1..].to_string(),
        _ => numero.to_string(),
    };

    format!("{}{}{}", COUNTRY_CODE, ddd, numero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_name() {
        assert_eq!(correct_name("joão DA silva"), "João Da Silva");
        assert_eq!(correct_name("MARIA"), "Maria");
        assert_eq!(correct_name("élida"), "Élida");
    }

    #[test]
    fn test_correct_name_empty() {
        assert_eq!(correct_name(""), "");
    }

    #[test]
    fn test_correct_name_collapses_inner_whitespace() {
        assert_eq!(correct_name("ana \t  paula"), "Ana Paula");
    }

    #[test]
    fn test_correct_name_keeps_edge_whitespace_as_single_spaces() {
        assert_eq!(correct_name("  ana  "), " Ana ");
        assert_eq!(correct_name(" Ana "), " Ana ");
    }

    #[test]
    fn test_correct_name_hyphenated() {
        assert_eq!(correct_name("JEAN-PIERRE d'ÁVILA"), "Jean-pierre D'ávila");
    }

    #[test]
    fn test_format_phone_already_canonical() {
        assert_eq!(format_phone("5511987654321"), "5511987654321");
    }

    #[test]
    fn test_format_phone_inserts_ninth_digit() {
        assert_eq!(format_phone("1187654321"), "5511987654321");
        assert_eq!(format_phone("29 8765-4321"), "5529987654321");
    }

    #[test]
    fn test_format_phone_high_ddd_eight_digits_unchanged() {
        assert_eq!(format_phone("3198765432"), "553198765432");
    }

    #[test]
    fn test_format_phone_drops_ninth_digit() {
        assert_eq!(format_phone("31987654321"), "553187654321");
        assert_eq!(format_phone("+55 (30) 98765-4321"), "553087654321");
    }

    #[test]
    fn test_format_phone_high_ddd_nine_digits_without_leading_nine() {
        assert_eq!(format_phone("31887654321"), "5531887654321");
    }

    #[test]
    fn test_format_phone_low_ddd_nine_digits_unchanged() {
        assert_eq!(format_phone("11987654321"), "5511987654321");
        assert_eq!(format_phone("10 8765-4321"), "551087654321");
    }

    #[test]
    fn test_format_phone_boundaries() {
        assert_eq!(format_phone("1112345678"), "5511912345678");
        assert_eq!(format_phone("2912345678"), "5529912345678");
        assert_eq!(format_phone("3012345678"), "553012345678");
        assert_eq!(format_phone("30912345678"), "553012345678");
        assert_eq!(format_phone("29912345678"), "5529912345678");
    }

    #[test]
    fn test_format_phone_returns_original_for_bad_lengths() {
        assert_eq!(format_phone("319987654321"), "319987654321");
        assert_eq!(format_phone("ramal 123"), "ramal 123");
        assert_eq!(format_phone(" 9876-5432 "), " 9876-5432 ");
    }

    #[test]
    fn test_format_phone_empty() {
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn test_format_phone_strips_country_code_once() {
        // "55" then "55" DDD: 5555987654321 -> 55987654321 (11 digits, DDD 55)
        assert_eq!(format_phone("5555987654321"), "555587654321");
    }

    #[test]
    fn test_format_phone_idempotent_on_output() {
        for raw in ["1187654321", "3198765432", "31987654321", "(21) 3333-4444"] {
            let once = format_phone(raw);
            assert_eq!(format_phone(&once), once);
        }
    }
}
