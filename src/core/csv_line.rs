/// Strips leading and trailing characters up to and including U+0020.
///
/// Control characters are removed, Unicode spaces such as U+00A0 are kept.
pub fn trim_field(field: &str) -> &str {
    field.trim_matches(|c: char| c <= ' ')
}

/// Splits one line into fields.
///
/// A `"` toggles quoting and is dropped from the output, a `,` only
/// separates fields outside quotes. Escaped quotes (`""`) and multi-line
/// fields are not supported. The last field is always emitted, so the
/// result is never empty.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut current = String::new();

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields
}
