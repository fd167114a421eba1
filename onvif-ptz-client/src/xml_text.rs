pub fn xml_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Shortest decimal that parses back to the same value; `-0` is written as `0`.
pub fn format_float(value: f32) -> String {
    let normalized = if value == 0.0 { 0.0 } else { value };
    format!("{}", normalized)
}
