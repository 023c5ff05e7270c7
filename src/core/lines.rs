/// Keywords that mark the first line of a file as a header.
pub const HEADER_KEYWORDS: [&str; 3] = ["asentamiento", "codigo", "postal"];

/// Case-insensitive substring match against `HEADER_KEYWORDS`.
pub fn is_header_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    HEADER_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Splits text on `\n`, `\r\n` or a lone `\r`.
///
/// A terminator at the very end does not produce a trailing empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            '\r' => {
                lines.push(&text[start..i]);
                start = i + 1;
                if let Some((_, '\n')) = chars.peek() {
                    chars.next();
                    start += 1;
                }
            }
            _ => {}
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Decodes raw file content into the lines to be processed.
///
/// Only the first line is checked for a header. Invalid UTF-8 is replaced
/// rather than rejected.
pub fn data_lines(bytes: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(bytes);
    let mut lines = split_lines(&text).into_iter();
    let mut data = Vec::new();

    if let Some(first) = lines.next() {
        if is_header_line(first) {
            tracing::debug!("Skipping header line: {}", first);
        } else {
            data.push(first.to_string());
        }
    }

    data.extend(lines.map(str::to_string));
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_keywords_case_insensitive() {
        assert!(is_header_line("Asentamiento,Codigo Postal"));
        assert!(is_header_line("d_asenta,d_CODIGO"));
        assert!(is_header_line("NOMBRE,POSTAL"));
        assert!(!is_header_line("83100,Centro"));
    }

    #[test]
    fn test_accented_codigo_alone_is_not_a_header() {
        // "código" 不含 "codigo"
        assert!(!is_header_line("código,colonia"));
        assert!(is_header_line("Código Postal,Colonia"));
    }

    #[test]
    fn test_header_removed_only_on_first_line() {
        let input = b"codigo_postal,asentamiento\n83100,Centro\nPostal,83200\n";
        let lines = data_lines(input);
        assert_eq!(lines, vec!["83100,Centro", "Postal,83200"]);
    }

    #[test]
    fn test_first_line_kept_when_not_header() {
        let lines = data_lines(b"83100,Centro\n83100,Ley");
        assert_eq!(lines, vec!["83100,Centro", "83100,Ley"]);
    }

    #[test]
    fn test_split_lines_terminators() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\r\n\r\n"), vec!["a", ""]);
        assert_eq!(split_lines("\r\ra"), vec!["", "", "a"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_lone_cr_line_endings() {
        let lines = data_lines(b"Codigo,Postal\r83100,Centro\r83100,Ley\r");
        assert_eq!(lines, vec!["83100,Centro", "83100,Ley"]);
    }

    #[test]
    fn test_header_dropped_even_when_it_parses_as_a_record() {
        assert!(crate::core::aggregator::parse_record("Postal Norte,83100").is_some());

        let lines = data_lines(b"Postal Norte,83100\n83200,Centro\n");
        assert_eq!(lines, vec!["83200,Centro"]);
    }

    #[test]
    fn test_crlf_and_empty_input() {
        assert_eq!(data_lines(b"83100,Centro\r\n83101,Ley\r\n"), vec!["83100,Centro", "83101,Ley"]);
        assert!(data_lines(b"").is_empty());
        assert!(data_lines(b"Codigo,Asentamiento\n").is_empty());
    }

    #[test]
    fn test_blank_first_line_consumes_header_check() {
        let lines = data_lines(b"\nCodigo,Asentamiento\n");
        assert_eq!(lines, vec!["", "Codigo,Asentamiento"]);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let lines = data_lines(b"83100,Sonora \xff\n");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("83100,Sonora "));
        assert!(lines[0].contains('\u{FFFD}'));
    }
}
