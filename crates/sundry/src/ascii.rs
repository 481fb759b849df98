//! Prefix/suffix predicates over C-style byte strings.
//!
//! Both the subject and the pattern are treated the way C string routines
//! would treat them: logical content ends at the first zero byte, if any.
//! Callers with plain `&str` input just pass `.as_bytes()`.

use bstr::ByteSlice;

/// Logical content of a C-style byte string: everything before the first
/// zero byte.
fn c_content(bytes: &[u8]) -> &[u8] {
    match bytes.find_byte(0) {
        Some(nul) => &bytes[..nul],
        None => bytes,
    }
}

/// True if `s` begins with `prefix` (both read as C-style strings).
#[must_use]
pub fn starts_with(s: &[u8], prefix: &[u8]) -> bool {
    c_content(s).starts_with(c_content(prefix))
}

/// True if `s` ends with `suffix` (both read as C-style strings).
#[must_use]
pub fn ends_with(s: &[u8], suffix: &[u8]) -> bool {
    c_content(s).ends_with(c_content(suffix))
}
