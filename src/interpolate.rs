//! Expansion of `{variableName}` placeholders in block text.

use crate::sim::VariableStore;

/// Replaces every well-formed `{word}` token in `text` with the captured
/// value of that variable, or the empty string when nothing was captured.
///
/// A token is well-formed when the braces enclose one or more word
/// characters (ASCII alphanumerics or `_`) and nothing else. Anything less,
/// such as unclosed braces, empty braces, or tokens containing spaces or
/// accented letters, passes through verbatim. Text without tokens is
/// returned unchanged, so rendering is idempotent on already-rendered
/// output.
pub fn render(text: &str, variables: &VariableStore) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_brace = &rest[open + 1..];

        match parse_token(after_brace) {
            Some((name, consumed)) => {
                out.push_str(variables.get(name).unwrap_or(""));
                rest = &after_brace[consumed..];
            }
            None => {
                // Not a token; emit the brace and rescan from the next char.
                out.push('{');
                rest = after_brace;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Parses `word}` at the start of `s`; returns the name and how many bytes
/// were consumed (including the closing brace).
fn parse_token(s: &str) -> Option<(&str, usize)> {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_alphanumeric() && *c != '_')
        .map(|(i, _)| i)?;
    if end == 0 || !s[end..].starts_with('}') {
        return None;
    }
    Some((&s[..end], end + 1))
}
