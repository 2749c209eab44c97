//! Duration → rate pricing and interest accrual math.
//!
//! Everything here is pure integer arithmetic so that outcomes are exactly
//! reproducible across invocations and hosts.

use crate::errors::{ERR_ENTITLEMENT_OVERFLOW, ERR_RATE_OVERFLOW};
use crate::math::{add_i128, div_round_i128, mul_div_i128, mul_i128};
use crate::types::{CurveParams, DAYS_PER_YEAR, PARAM_SCALE, RATE_SCALE};

/// Annualized interest rate for a term of `duration_days`, in RATE_SCALE
/// units, rounded half-up.
///
/// The annualized percentage is a quadratic in the term measured in years
/// (`y = duration_days / 365`):
///
/// ```text
/// percent = shift * (1 + constant) + tilt * y + butterfly * y^2
/// ```
///
/// `shift` scales the flat base of the curve, `tilt` the linear term and
/// `butterfly` the quadratic one, so the curve is monotonically increasing
/// and convex in the term length for non-negative parameters. The division
/// by 365 is deferred: all three terms are brought over the common
/// denominator `365^2 * PARAM_SCALE` before a single rounded division.
pub fn annual_rate(duration_days: u32, params: &CurveParams) -> i128 {
    let d = duration_days as i128;
    let year = DAYS_PER_YEAR as i128;
    let year_sq = mul_i128(year, year, ERR_RATE_OVERFLOW);

    let base = mul_i128(
        params.shift as i128,
        add_i128(PARAM_SCALE, params.constant, ERR_RATE_OVERFLOW),
        ERR_RATE_OVERFLOW,
    );
    let base = mul_i128(base, year_sq, ERR_RATE_OVERFLOW);
    let linear = mul_i128(
        params.tilt,
        mul_i128(d, year, ERR_RATE_OVERFLOW),
        ERR_RATE_OVERFLOW,
    );
    let quadratic = mul_i128(
        params.butterfly,
        mul_i128(d, d, ERR_RATE_OVERFLOW),
        ERR_RATE_OVERFLOW,
    );

    // percent * PARAM_SCALE * 365^2, still exact.
    let numerator = add_i128(
        add_i128(base, linear, ERR_RATE_OVERFLOW),
        quadratic,
        ERR_RATE_OVERFLOW,
    );

    // percent -> rate costs a factor of 100; RATE_SCALE lands at five
    // decimal places: rate = numerator / (1000 * 365^2).
    let denominator = mul_i128(1_000, year_sq, ERR_RATE_OVERFLOW);
    div_round_i128(numerator, denominator, ERR_RATE_OVERFLOW)
}

/// Cumulative reward-asset entitlement of a position: the interest earned on
/// `principal` at `rate` over `elapsed_days` of a 365-day year, converted to
/// the reward asset at `price` (PARAM_SCALE fixed point). Floor division —
/// dust stays in the reserve.
///
/// Because `elapsed_days` is clamped to the position's term, the full-term
/// entitlement is a hard upper bound on everything this returns.
pub fn entitlement(principal: i128, rate: i128, elapsed_days: u32, price: i128) -> i128 {
    let accrued = mul_i128(
        mul_i128(principal, rate, ERR_ENTITLEMENT_OVERFLOW),
        elapsed_days as i128,
        ERR_ENTITLEMENT_OVERFLOW,
    );
    mul_div_i128(
        accrued,
        price,
        RATE_SCALE * DAYS_PER_YEAR as i128 * PARAM_SCALE,
        ERR_ENTITLEMENT_OVERFLOW,
    )
}
