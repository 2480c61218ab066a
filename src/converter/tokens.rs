//! Argument tokenization and quote normalization.

use regex::Regex;

/// Token alternation for snippet arguments: a single-quoted run, a
/// double-quoted run, or a maximal run of non-whitespace, in that priority,
/// left to right.
fn sentence_regex() -> &'static Regex {
    regex!(r#"'.*?'|".*?"|\S+"#)
}

/// Split one snippet call into argument tokens, quote-aware. Empty tokens
/// are dropped.
pub(super) fn tokenize(call: &str) -> impl Iterator<Item = &str> {
    sentence_regex().find_iter(call).map(|m| m.as_str()).filter(|t| !t.is_empty())
}

/// Normalize one argument token into its double-quoted canonical form.
///
/// - Single-quote-wrapped: both quotes are stripped and inner `"` escaped as
///   `\"`.
/// - Double-quote-wrapped: only the LEADING quote is stripped and every `"`
///   left in the token (including the trailing one) is rewritten to `'`.
///   This reproduces the upstream converter's length arithmetic exactly;
///   downstream output is pinned to it, so the asymmetry with the
///   single-quote branch is deliberate. See the regression test.
/// - Anything else is wrapped as-is.
pub(super) fn wrap_in_double_quotes(token: &str) -> String {
    let normalized = if token.len() >= 2 && token.starts_with('\'') && token.ends_with('\'') {
        token[1..token.len() - 1].replace('"', "\\\"")
    } else if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        token[1..].replace('"', "'")
    } else {
        token.to_string()
    };

    format!("\"{normalized}\"")
}
