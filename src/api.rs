use crate::converter;

/// Convert one raw filter-list line into canonical form.
///
/// Returns at least one line, in source order. Comment lines (leading `!`)
/// and lines matching no recognized dialect come back unchanged as a
/// single-element vector; an AdBlock Plus snippet line may expand into
/// several canonical lines, one per semicolon-separated call.
///
/// This function never fails: malformed or ambiguous input degrades to the
/// original line rather than an error.
///
/// # Example
/// ```
/// use filtercast::convert_rule;
///
/// let out = convert_rule("example.com##+js(set-constant, foo, bar)");
/// assert_eq!(out, vec![r#"example.com#%#//scriptlet("ubo-set-constant", "foo", "bar")"#]);
/// ```
pub fn convert_rule(rule: &str) -> Vec<String> {
    converter::convert(rule)
}

/// Convert a whole filter list, preserving line order.
///
/// Equivalent to flat-mapping [`convert_rule`] over `lines`. Conversion is
/// stateless across lines, so callers may instead partition the list across
/// threads and concatenate the per-line results in original order.
///
/// # Example
/// ```
/// use filtercast::convert_rules;
///
/// let out = convert_rules(["! heading", "example.com#@$#log hi"]);
/// assert_eq!(out, vec!["! heading", r#"example.com#@%#//scriptlet("abp-log", "hi")"#]);
/// ```
pub fn convert_rules<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().flat_map(converter::convert).collect()
}
