//! Overflow-safe arithmetic helpers for the vault's financial calculations.
//!
//! All functions use checked arithmetic and panic with a stable message on
//! overflow/underflow/div-by-zero, so an operation that would corrupt a
//! balance aborts instead.

/// Checked `i128` addition with a stable panic message.
#[inline]
#[must_use]
pub fn add_i128(a: i128, b: i128, msg: &'static str) -> i128 {
    a.checked_add(b).unwrap_or_else(|| panic!("{msg}"))
}

/// Checked `i128` subtraction with a stable panic message.
#[inline]
#[must_use]
pub fn sub_i128(a: i128, b: i128, msg: &'static str) -> i128 {
    a.checked_sub(b).unwrap_or_else(|| panic!("{msg}"))
}

/// Checked `i128` multiplication with a stable panic message.
#[inline]
#[must_use]
pub fn mul_i128(a: i128, b: i128, msg: &'static str) -> i128 {
    a.checked_mul(b).unwrap_or_else(|| panic!("{msg}"))
}

/// Checked `i128` division with a stable panic message.
#[inline]
#[must_use]
pub fn div_i128(a: i128, b: i128, msg: &'static str) -> i128 {
    a.checked_div(b).unwrap_or_else(|| panic!("{msg}"))
}

/// Checked `a * b / d` with floor division, for pro-rata splits.
#[inline]
#[must_use]
pub fn mul_div_i128(a: i128, b: i128, d: i128, msg: &'static str) -> i128 {
    div_i128(mul_i128(a, b, msg), d, msg)
}

/// Checked `num / den` rounded half-up. `num` and `den` must be non-negative.
#[inline]
#[must_use]
pub fn div_round_i128(num: i128, den: i128, msg: &'static str) -> i128 {
    let adjusted = add_i128(num, den / 2, msg);
    div_i128(adjusted, den, msg)
}
