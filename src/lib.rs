//! Translates ad-blocking filter rules written in third-party dialects into
//! the single canonical scriptlet dialect understood by the downstream
//! content-blocker compiler.
//!
//! The crate is a pure text-to-text transformation stage: one input line goes
//! in, one or more canonical lines come out. Recognized dialects are
//!
//! - uBlock Origin scriptlet rules (`##+js(...)`, `##script:inject(...)`),
//! - AdBlock Plus snippet rules (`#$#` / `#@$#`),
//! - AdBlock Plus resource-rewrite options (`rewrite=abp-resource:`).
//!
//! Lines matching none of these pass through unchanged, so the converter can
//! be applied to a whole filter list without pre-filtering.

#[macro_use]
mod macros;
mod api;
mod converter;
pub mod safari;

pub use api::{convert_rule, convert_rules};
