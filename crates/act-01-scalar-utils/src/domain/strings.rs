//! String concatenation with a defaulted first operand

/// Substituted for the first operand when the caller omits it.
pub const DEFAULT_FIRST_OPERAND: &str = "d";

/// Concatenate `a` and `b`, using [`DEFAULT_FIRST_OPERAND`] when `a` is omitted.
pub fn concatenate_strings(a: Option<&str>, b: &str) -> String {
    concatenate_strings_with_default(a, b, DEFAULT_FIRST_OPERAND)
}

/// Concatenate `a` and `b`, using `default_for_a` when `a` is omitted.
///
/// The operands are joined verbatim: no trimming, normalization or
/// re-encoding.
pub fn concatenate_strings_with_default(a: Option<&str>, b: &str, default_for_a: &str) -> String {
    let a = a.unwrap_or(default_for_a);
    let mut joined = String::with_capacity(a.len() + b.len());
    joined.push_str(a);
    joined.push_str(b);
    joined
}
