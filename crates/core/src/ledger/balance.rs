//! Account balance arithmetic.
//!
//! Sign conventions for the general ledger and reports:
//! - Asset/Expense accounts are debit-normal: balance += debit - credit
//! - Liability/Equity/Revenue accounts are credit-normal: balance += credit - debit

use rust_decimal::Decimal;

use crate::coa::types::NormalSide;

/// Calculates the signed balance change of a line for an account.
#[must_use]
pub fn balance_change(normal_side: NormalSide, debit: Decimal, credit: Decimal) -> Decimal {
    match normal_side {
        NormalSide::DebitNormal => debit - credit,
        NormalSide::CreditNormal => credit - debit,
    }
}

/// Nets raw debit/credit totals into a single-sided balance.
///
/// The trial balance shows each account in exactly one column: the net of
/// total debits minus total credits lands in the debit column when
/// positive and the credit column when negative.
#[must_use]
pub fn net_to_sides(total_debit: Decimal, total_credit: Decimal) -> (Decimal, Decimal) {
    let net = total_debit - total_credit;
    if net >= Decimal::ZERO {
        (net, Decimal::ZERO)
    } else {
        (Decimal::ZERO, -net)
    }
}

/// Accumulates a running balance over a sequence of signed changes.
///
/// Returns the balance after each change, starting from `opening`.
#[must_use]
pub fn running_balances(opening: Decimal, changes: &[Decimal]) -> Vec<Decimal> {
    let mut balance = opening;
    changes
        .iter()
        .map(|change| {
            balance += change;
            balance
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_debit_normal_balance_change() {
        // Debit increases, credit decreases
        assert_eq!(
            balance_change(NormalSide::DebitNormal, dec!(100), dec!(0)),
            dec!(100)
        );
        assert_eq!(
            balance_change(NormalSide::DebitNormal, dec!(0), dec!(50)),
            dec!(-50)
        );
    }

    #[test]
    fn test_credit_normal_balance_change() {
        // Credit increases, debit decreases
        assert_eq!(
            balance_change(NormalSide::CreditNormal, dec!(0), dec!(100)),
            dec!(100)
        );
        assert_eq!(
            balance_change(NormalSide::CreditNormal, dec!(50), dec!(0)),
            dec!(-50)
        );
    }

    #[test]
    fn test_net_to_sides() {
        assert_eq!(net_to_sides(dec!(150), dec!(50)), (dec!(100), dec!(0)));
        assert_eq!(net_to_sides(dec!(50), dec!(150)), (dec!(0), dec!(100)));
        assert_eq!(net_to_sides(dec!(75), dec!(75)), (dec!(0), dec!(0)));
    }

    #[test]
    fn test_running_balances() {
        let balances = running_balances(dec!(100), &[dec!(50), dec!(-30), dec!(10)]);
        assert_eq!(balances, vec![dec!(150), dec!(120), dec!(130)]);
    }

    #[test]
    fn test_running_balances_empty() {
        assert!(running_balances(dec!(100), &[]).is_empty());
    }
}
