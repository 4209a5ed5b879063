//! Statutory money rounding helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal` in USD, the statutory currency
//! of Timor-Leste. Filed figures are rounded half-up at 2 decimal places.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places for statutory currency figures.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds an amount to statutory cent precision (half-up).
#[must_use]
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns true if the amount is already exact at cent precision.
#[must_use]
pub fn is_cent_precise(amount: Decimal) -> bool {
    amount == amount.trunc_with_scale(CURRENCY_SCALE)
}

/// Converts an amount to a whole number of cents.
///
/// Returns `None` if the amount is not cent-precise or does not fit in i64.
#[must_use]
pub fn to_cents(amount: Decimal) -> Option<i64> {
    if !is_cent_precise(amount) {
        return None;
    }
    (amount * Decimal::ONE_HUNDRED).to_i64()
}
