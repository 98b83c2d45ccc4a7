// SPDX-License-Identifier: MIT

//! Per-field input validation.
//!
//! Validators return `Some(trimmed value)` only when the raw input has
//! the right type and passes the field's predicate. "Absent", "wrong
//! type" and "present but invalid" all collapse to `None`, so a rejected
//! field can never be confused with a legal value such as an empty
//! string or `false`.

/// Trimmed string that satisfies `is_valid`.
fn trimmed(raw: Option<&str>, is_valid: impl FnOnce(&str) -> bool) -> Option<String> {
    let value = raw?.trim();
    is_valid(value).then(|| value.to_string())
}

/// Non-empty string after trimming (names, passwords).
pub fn non_empty(raw: Option<&str>) -> Option<String> {
    trimmed(raw, |s| !s.is_empty())
}

/// Phone number: at least 10 characters after trimming.
pub fn phone(raw: Option<&str>) -> Option<String> {
    trimmed(raw, |s| s.len() >= 10)
}

/// Token id: exactly 20 characters after trimming.
pub fn token_id(raw: Option<&str>) -> Option<String> {
    trimmed(raw, |s| s.len() == 20)
}

/// Boolean flag that must be explicitly `true` (tosAgreement, extend).
/// An explicit `false` is rejected the same as an absent field.
pub fn is_true(raw: Option<bool>) -> bool {
    raw == Some(true)
}
