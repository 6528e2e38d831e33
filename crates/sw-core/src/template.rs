//! Literal placeholder substitution
//!
//! Replacement values and join conditions use `#name#` placeholders. They are
//! replaced in one left-to-right pass: text produced by a substitution is
//! never scanned again, so a value that happens to contain a placeholder is
//! emitted as-is.

/// Replace every occurrence of each `(placeholder, value)` pair in `template`.
///
/// At each position the first matching placeholder in `pairs` wins; text that
/// matches none is copied through unchanged.
pub fn substitute(template: &str, pairs: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while !rest.is_empty() {
        for (placeholder, value) in pairs {
            if !placeholder.is_empty() && rest.starts_with(placeholder) {
                out.push_str(value);
                rest = &rest[placeholder.len()..];
                continue 'scan;
            }
        }
        let Some(ch) = rest.chars().next() else {
            break;
        };
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}
