use std::collections::BTreeMap;

/// Rewrites `model: 'EntityName'` reference literals inside the field map
/// against the entity -> table-identifier mapping. Mapped literals are
/// replaced with the canonical single-quoted lowercase form; capitalized
/// literals missing from the map are left byte-identical and reported as
/// unresolved. Everything outside the substituted spans is preserved
/// exactly.
pub fn rewrite_references(
    fields_block: &str,
    reference_map: &BTreeMap<String, String>,
) -> (String, Vec<String>) {
    let bytes = fields_block.as_bytes();
    let mut output = String::with_capacity(fields_block.len());
    let mut unresolved: Vec<String> = Vec::new();
    let mut pos = 0usize;

    while let Some(found) = fields_block[pos..].find("model") {
        let at = pos + found;
        let keyword_end = at + "model".len();

        let boundary_ok = at == 0 || !is_ident_byte(bytes[at - 1]);
        let literal = boundary_ok.then(|| quoted_value_after(fields_block, keyword_end)).flatten();

        let Some((literal_start, literal_end)) = literal else {
            output.push_str(&fields_block[pos..keyword_end]);
            pos = keyword_end;
            continue;
        };

        let value = &fields_block[literal_start..literal_end];
        if let Some(table) = reference_map.get(value) {
            output.push_str(&fields_block[pos..at]);
            output.push_str("model: '");
            output.push_str(table);
            output.push('\'');
        } else {
            if value.chars().next().map_or(false, |c| c.is_ascii_uppercase())
                && !unresolved.iter().any(|u| u == value)
            {
                unresolved.push(value.to_string());
            }
            output.push_str(&fields_block[pos..=literal_end]);
        }
        pos = literal_end + 1;
    }

    output.push_str(&fields_block[pos..]);
    (output, unresolved)
}

/// For a `model` keyword ending at `from`, returns the span of the quoted
/// value in `model: '<value>'`, or None when no such shape follows.
fn quoted_value_after(text: &str, from: usize) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut cursor = from;
    while cursor < bytes.len() && bytes[cursor].is_ascii_whitespace() {
        cursor += 1;
    }
    if bytes.get(cursor) != Some(&b':') {
        return None;
    }
    cursor += 1;
    while cursor < bytes.len() && bytes[cursor].is_ascii_whitespace() {
        cursor += 1;
    }
    let quote = match bytes.get(cursor) {
        Some(&q @ (b'\'' | b'"')) => q,
        _ => return None,
    };
    let literal_start = cursor + 1;
    let rel_end = text[literal_start..].find(quote as char)?;
    Some((literal_start, literal_start + rel_end))
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}
