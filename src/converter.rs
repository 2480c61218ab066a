//! Dialect classification and rewrite.
//!
//! This module is the operational core of the crate:
//!
//! - Classify one input line against a fixed priority list of dialect
//!   matchers (first match wins).
//! - Rewrite the matched line into one or more canonical scriptlet lines
//!   (see `scriptlet.rs` and `tokens.rs`).
//!
//! ## Classification order
//!
//! ```text
//! (1) comment        -> leading '!' sentinel, returned as-is
//! (2) ubo scriptlet  -> substring pre-filter + structural regex gate
//! (3) abp snippet    -> marker present, AdGuard CSS-injection shape absent
//! (4) abp rewrite    -> literal `rewrite=abp-resource:` option
//! (5) unrecognized   -> returned as-is
//! ```
//!
//! Every check is a pure function of the line text; the only process-wide
//! state is the lazily-compiled regex set. Classification must stay strict
//! enough to gate the rewrite paths: the scriptlet converters assume a call
//! shape (parentheses, marker position) that only a classified line has.

mod scriptlet;
mod tokens;


use regex::Regex;
use tracing::debug;

/// Comment sentinel: lines starting with this character are never rules.
const COMMENT_MARKER: char = '!';

// Substring pre-filters for uBlock scriptlet rules. These are cheap but too
// permissive on their own (they also match inside other constructs), so the
// structural regex below stays the authoritative gate.
const UBO_SCRIPTLET_MASK_1: &str = "##+js";
const UBO_SCRIPTLET_MASK_2: &str = "##script:inject";
const UBO_SCRIPTLET_EXCEPTION_MASK_1: &str = "#@#+js";
const UBO_SCRIPTLET_EXCEPTION_MASK_2: &str = "#@#script:inject";

/// AdBlock Plus snippet rule markers.
const ABP_SNIPPET_MASK: &str = "#$#";
const ABP_SNIPPET_EXCEPTION_MASK: &str = "#@$#";

/// AdBlock Plus resource-rewrite option and its canonical replacement.
const ABP_REWRITE_KEYWORD: &str = "rewrite=abp-resource:";
const REDIRECT_KEYWORD: &str = "redirect=";

/// Structural gate for uBlock scriptlet rules.
///
/// Note the asymmetry: `##script:inject` has no exception alternative here,
/// so `#@#script:inject` lines trip the pre-filter but fail this gate and
/// pass through unconverted.
fn ubo_scriptlet_regex() -> &'static Regex {
    regex!(r"##script:inject|#@?#\s*\+js")
}

/// AdGuard CSS-injection shape: `#$#` / `#@$#` followed by a brace-delimited
/// block ending the line. Textually overlaps the ABP snippet markers and must
/// not be treated as a snippet rule.
fn adg_css_regex() -> &'static Regex {
    regex!(r"#@?\$#.+?\s*\{.*\}\s*$")
}

/// Which external dialect a raw line belongs to. Exactly one variant applies
/// per line under the fixed priority order of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dialect {
    Comment,
    UboScriptlet,
    UboScriptletException,
    AbpSnippet,
    AbpSnippetException,
    AbpRedirect,
    Unrecognized,
}

/// Classify `rule` into its [`Dialect`]. Pure and stateless; first match in
/// the fixed priority order wins.
pub(crate) fn classify(rule: &str) -> Dialect {
    if rule.starts_with(COMMENT_MARKER) {
        return Dialect::Comment;
    }

    if is_ubo_scriptlet(rule) {
        // The gate regex just matched, so find() cannot miss.
        let marker = ubo_scriptlet_regex().find(rule).map(|m| m.as_str()).unwrap_or_default();
        return if marker.contains('@') {
            Dialect::UboScriptletException
        } else {
            Dialect::UboScriptlet
        };
    }

    if is_abp_snippet(rule) {
        return if rule.contains(ABP_SNIPPET_MASK) {
            Dialect::AbpSnippet
        } else {
            Dialect::AbpSnippetException
        };
    }

    if rule.contains(ABP_REWRITE_KEYWORD) {
        return Dialect::AbpRedirect;
    }

    Dialect::Unrecognized
}

/// Convert one raw line into canonical form. Always returns at least one
/// line; unrecognized input comes back unchanged.
pub(crate) fn convert(rule: &str) -> Vec<String> {
    let dialect = classify(rule);
    debug!(?dialect, "classified filter rule");

    match dialect {
        Dialect::Comment | Dialect::Unrecognized => vec![rule.to_string()],
        Dialect::UboScriptlet => vec![scriptlet::convert_ubo(rule, false)],
        Dialect::UboScriptletException => vec![scriptlet::convert_ubo(rule, true)],
        Dialect::AbpSnippet => scriptlet::convert_abp(rule, false),
        Dialect::AbpSnippetException => scriptlet::convert_abp(rule, true),
        Dialect::AbpRedirect => vec![convert_abp_redirect(rule)],
    }
}

fn is_ubo_scriptlet(rule: &str) -> bool {
    let prefiltered = rule.contains(UBO_SCRIPTLET_MASK_1)
        || rule.contains(UBO_SCRIPTLET_MASK_2)
        || rule.contains(UBO_SCRIPTLET_EXCEPTION_MASK_1)
        || rule.contains(UBO_SCRIPTLET_EXCEPTION_MASK_2);

    prefiltered && ubo_scriptlet_regex().is_match(rule)
}

fn is_abp_snippet(rule: &str) -> bool {
    (rule.contains(ABP_SNIPPET_MASK) || rule.contains(ABP_SNIPPET_EXCEPTION_MASK))
        && !adg_css_regex().is_match(rule)
}

/// Rewrite the ABP `rewrite=abp-resource:` option into `redirect=`.
///
/// A plain substring substitution of the first occurrence; the rest of the
/// line, including any trailing filter options, is left untouched.
///
/// ```text
/// ||example.org^$rewrite=abp-resource:blank-mp3
///      -> ||example.org^$redirect=blank-mp3
/// ```
fn convert_abp_redirect(rule: &str) -> String {
    rule.replacen(ABP_REWRITE_KEYWORD, REDIRECT_KEYWORD, 1)
}
