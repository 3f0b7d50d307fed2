//! Utility functions and helpers

/// Format a number with thousands separators
pub fn format_number<T: ToString>(n: T) -> String {
    let s = n.to_string();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };

    let mut result = String::new();
    for (count, c) in digits.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    format!("{}{}", sign, result.chars().rev().collect::<String>())
}

/// Escape text for inclusion in HTML content or attribute values
pub fn escape_html(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape `text` and wrap each case-insensitive occurrence of `query` in `<mark>`
pub fn highlight(text: &str, query: &str) -> String {
    if query.is_empty() {
        return escape_html(text);
    }

    let matches = match_ranges(text, query);
    if matches.is_empty() {
        return escape_html(text);
    }

    let mut out = String::new();
    let mut last = 0;
    for (start, end) in matches {
        out.push_str(&escape_html(&text[last..start]));
        out.push_str("<mark>");
        out.push_str(&escape_html(&text[start..end]));
        out.push_str("</mark>");
        last = end;
    }
    out.push_str(&escape_html(&text[last..]));
    out
}

/// Byte ranges in `text` matching `query` ignoring case, non-overlapping
fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    let indices: Vec<(usize, char)> = text.char_indices().collect();

    let mut ranges = Vec::new();
    let mut i = 0;
    while i < indices.len() {
        match match_at(&indices, i, &needle) {
            Some(next) => {
                let end = indices.get(next).map(|(pos, _)| *pos).unwrap_or(text.len());
                ranges.push((indices[i].0, end));
                i = next;
            }
            None => i += 1,
        }
    }
    ranges
}

/// Index just past a match of `needle` starting at char `start`
fn match_at(indices: &[(usize, char)], start: usize, needle: &[char]) -> Option<usize> {
    let mut n = 0;
    let mut i = start;
    while n < needle.len() {
        let (_, c) = indices.get(i)?;
        for lower in c.to_lowercase() {
            if needle.get(n) != Some(&lower) {
                return None;
            }
            n += 1;
        }
        i += 1;
    }
    Some(i)
}
