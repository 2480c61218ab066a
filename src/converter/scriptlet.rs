//! Rewrite of classified scriptlet rules into the canonical call syntax.
//!
//! Both paths share the same output shape: a verbatim domain-list prefix and
//! a quote-normalized argument list substituted into one of two templates.
//! They differ in how the argument list is extracted:
//!
//! - uBlock rules carry their arguments between parentheses and are split on
//!   a literal `", "`;
//! - ABP snippet rules carry everything after the marker and are tokenized
//!   quote-aware, one output line per `"; "`-separated call.

use super::tokens::{tokenize, wrap_in_double_quotes};

/// Canonical scriptlet-call templates, keyed by the exception flag.
const SCRIPTLET_TEMPLATE: &str = "${domains}#%#//scriptlet(${args})";
const SCRIPTLET_EXCEPTION_TEMPLATE: &str = "${domains}#@%#//scriptlet(${args})";

const DOMAINS_PLACEHOLDER: &str = "${domains}";
const ARGS_PLACEHOLDER: &str = "${args}";

/// Origin tags prepended to the scriptlet name so the downstream engine
/// knows which dialect's semantics to apply.
const UBO_PREFIX: &str = "ubo-";
const ABP_PREFIX: &str = "abp-";

fn template(exception: bool) -> &'static str {
    if exception { SCRIPTLET_EXCEPTION_TEMPLATE } else { SCRIPTLET_TEMPLATE }
}

/// Convert a uBlock scriptlet rule (`##+js`, `##script:inject`) into one
/// canonical line.
///
/// Precondition: `rule` was classified as a uBlock scriptlet, which
/// guarantees the structural marker is present and implies the call shape.
pub(super) fn convert_ubo(rule: &str, exception: bool) -> String {
    let marker = super::ubo_scriptlet_regex()
        .find(rule)
        .expect("ubo conversion requires a structurally classified rule");
    let domains = &rule[..marker.start()];

    // Naive comma-space split: separators inside quoted arguments are NOT
    // special-cased. Kept for byte-for-byte parity with the upstream
    // converter; the ABP path below has the quote-aware tokenizer.
    let mut args = Vec::new();
    for (i, arg) in parenthesized_args(rule).split(", ").enumerate() {
        let arg = if i == 0 { format!("{UBO_PREFIX}{arg}") } else { arg.to_string() };
        args.push(wrap_in_double_quotes(&arg));
    }

    fill_template(template(exception), domains, &args.join(", "))
}

/// Convert an ABP snippet rule (`#$#`, `#@$#`) into canonical lines.
///
/// A single source line may bundle several `"; "`-separated snippet calls;
/// each becomes one output line sharing the same domain-list prefix.
pub(super) fn convert_abp(rule: &str, exception: bool) -> Vec<String> {
    let mask = if exception { super::ABP_SNIPPET_EXCEPTION_MASK } else { super::ABP_SNIPPET_MASK };
    let mask_index = rule.find(mask).expect("abp conversion requires a classified snippet rule");
    let domains = &rule[..mask_index];
    let body = &rule[mask_index + mask.len()..];

    let mut result = Vec::new();
    for call in body.split("; ") {
        let mut args = Vec::new();
        for (i, token) in tokenize(call).enumerate() {
            let token = if i == 0 { format!("{ABP_PREFIX}{token}") } else { token.to_string() };
            args.push(wrap_in_double_quotes(&token));
        }
        result.push(fill_template(template(exception), domains, &args.join(", ")));
    }
    result
}

/// The substring strictly between the first `(` and the last `)`.
///
/// Contract check for the classification precondition: a scriptlet rule with
/// no argument list must never reach this point, and classification is
/// responsible for preventing it.
fn parenthesized_args(rule: &str) -> &str {
    let open = rule.find('(').expect("classified scriptlet rule carries an argument list");
    let close = rule.rfind(')').expect("classified scriptlet rule carries an argument list");
    &rule[open + 1..close]
}

/// Literal substitution of the two placeholder tokens. `domains` is copied
/// verbatim from the source line, never escaped.
fn fill_template(template: &str, domains: &str, args: &str) -> String {
    template.replace(DOMAINS_PLACEHOLDER, domains).replace(ARGS_PLACEHOLDER, args)
}
