use crate::core::csv_line::trim_field;
use regex::Regex;
use std::sync::LazyLock;

/// Lowest valid postal code for Hermosillo.
pub const MIN_POSTAL_CODE: u32 = 83000;
/// Highest valid postal code for Hermosillo.
pub const MAX_POSTAL_CODE: u32 = 83357;

// `\d` 在 regex crate 中會匹配 Unicode 數字，這裡只接受 ASCII
static FIVE_DIGITS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{5}$").expect("postal code pattern is a valid regex")
});

/// Returns true when `text`, once trimmed, is a five digit code inside
/// `MIN_POSTAL_CODE..=MAX_POSTAL_CODE`.
pub fn is_postal_code(text: &str) -> bool {
    let text = trim_field(text);
    if !FIVE_DIGITS.is_match(text) {
        return false;
    }

    text.parse::<u32>()
        .map(|number| (MIN_POSTAL_CODE..=MAX_POSTAL_CODE).contains(&number))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds() {
        assert!(is_postal_code("83000"));
        assert!(is_postal_code("83357"));
        assert!(is_postal_code("83100"));
        assert!(!is_postal_code("82999"));
        assert!(!is_postal_code("83358"));
        assert!(!is_postal_code("90000"));
        assert!(!is_postal_code("00000"));
    }

    #[test]
    fn test_every_five_digit_value_matches_range() {
        for n in 0..100_000u32 {
            let code = format!("{:05}", n);
            let expected = (83000..=83357).contains(&n);
            assert_eq!(is_postal_code(&code), expected, "code {}", code);
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert!(is_postal_code("  83100 "));
        assert!(is_postal_code("\t83200\t"));
    }

    #[test]
    fn test_only_ascii_whitespace_and_controls_are_trimmed() {
        assert!(is_postal_code("83100\u{1}"));
        assert!(is_postal_code("\u{7}83100"));
        assert!(!is_postal_code("83100\u{a0}"));
        assert!(!is_postal_code("\u{2003}83100"));
    }

    #[test]
    fn test_wrong_length_or_non_digits() {
        assert!(!is_postal_code(""));
        assert!(!is_postal_code("   "));
        assert!(!is_postal_code("8310"));
        assert!(!is_postal_code("831000"));
        assert!(!is_postal_code("83 10"));
        assert!(!is_postal_code("8310a"));
        assert!(!is_postal_code("+8310"));
        assert!(!is_postal_code("83.10"));
        assert!(!is_postal_code("Centro"));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // 全形數字與阿拉伯-印度數字
        assert!(!is_postal_code("８３１００"));
        assert!(!is_postal_code("٨٣١٠٠"));
    }
}
