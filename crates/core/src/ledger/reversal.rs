//! Reversing entries for voided journal entries.
//!
//! Voiding never deletes: the original entry is flagged Void and a new
//! reversing entry with swapped debit/credit columns is posted into the
//! current open period, so historical period totals are never altered
//! retroactively.

use rust_decimal::Decimal;

use super::types::{JournalLine, JournalLineInput, Side};

/// Builds the reversing lines for a voided entry.
///
/// For each original line:
/// - Debits become credits and credits become debits
/// - Amounts and accounts are preserved
/// - The memo is prefixed with "Reversal: "
#[must_use]
pub fn reversing_lines(original: &[JournalLine]) -> Vec<JournalLineInput> {
    original
        .iter()
        .map(|line| {
            let (side, amount) = if line.debit > Decimal::ZERO {
                (Side::Credit, line.debit)
            } else {
                (Side::Debit, line.credit)
            };

            JournalLineInput {
                account_id: line.account_id,
                side,
                amount,
                memo: Some(format!(
                    "Reversal: {}",
                    line.memo.clone().unwrap_or_default()
                )),
            }
        })
        .collect()
}

/// Builds the description for a reversing entry.
#[must_use]
pub fn reversal_description(original_number: i64, fiscal_year: i32, reason: &str) -> String {
    format!("Reversal of JE-{fiscal_year}-{original_number:06}. Reason: {reason}")
}

/// Validates that the original lines are balanced.
///
/// This should always hold for posted entries; a false result indicates
/// corrupted data and the void must be aborted.
#[must_use]
pub fn is_reversible(original: &[JournalLine]) -> bool {
    let total_debit: Decimal = original.iter().map(|l| l.debit).sum();
    let total_credit: Decimal = original.iter().map(|l| l.credit).sum();

    total_debit == total_credit
}

#[cfg(test)]
mod tests {
    use super::*;
    use kontabil_shared::types::AccountId;
    use rust_decimal_macros::dec;

    fn make_line(line_number: i16, debit: Decimal, credit: Decimal, memo: &str) -> JournalLine {
        JournalLine {
            line_number,
            account_id: AccountId::new(),
            account_code: "1100".to_string(),
            account_name: "Cash on Hand".to_string(),
            debit,
            credit,
            memo: Some(memo.to_string()),
        }
    }

    fn balanced_lines() -> Vec<JournalLine> {
        vec![
            make_line(1, dec!(100.00), dec!(0), "Office supplies"),
            make_line(2, dec!(0), dec!(100.00), "Cash payment"),
        ]
    }

    #[test]
    fn test_reversing_lines_swap_sides() {
        let reversed = reversing_lines(&balanced_lines());

        assert_eq!(reversed.len(), 2);
        // First line was a debit, becomes a credit
        assert_eq!(reversed[0].side, Side::Credit);
        assert_eq!(reversed[0].amount, dec!(100.00));
        // Second line was a credit, becomes a debit
        assert_eq!(reversed[1].side, Side::Debit);
        assert_eq!(reversed[1].amount, dec!(100.00));
    }

    #[test]
    fn test_reversing_lines_preserve_accounts() {
        let original = balanced_lines();
        let reversed = reversing_lines(&original);

        assert_eq!(reversed[0].account_id, original[0].account_id);
        assert_eq!(reversed[1].account_id, original[1].account_id);
    }

    #[test]
    fn test_reversing_lines_prefix_memo() {
        let reversed = reversing_lines(&balanced_lines());
        assert_eq!(reversed[0].memo.as_deref(), Some("Reversal: Office supplies"));
    }

    #[test]
    fn test_reversal_description() {
        let description = reversal_description(42, 2026, "Duplicate entry");
        assert_eq!(
            description,
            "Reversal of JE-2026-000042. Reason: Duplicate entry"
        );
    }

    #[test]
    fn test_is_reversible_balanced() {
        assert!(is_reversible(&balanced_lines()));
    }

    #[test]
    fn test_is_reversible_unbalanced() {
        let lines = vec![
            make_line(1, dec!(100.00), dec!(0), ""),
            make_line(2, dec!(0), dec!(50.00), ""),
        ];
        assert!(!is_reversible(&lines));
    }

    #[test]
    fn test_original_plus_reversal_nets_to_zero() {
        let original = vec![
            make_line(1, dec!(2550.00), dec!(0), "Expense"),
            make_line(2, dec!(0), dec!(2550.00), "Accounts payable"),
        ];
        let reversed = reversing_lines(&original);

        // Per account: original debit + reversal credit cancel out
        for (orig, rev) in original.iter().zip(&reversed) {
            let (rev_debit, rev_credit) = match rev.side {
                Side::Debit => (rev.amount, Decimal::ZERO),
                Side::Credit => (Decimal::ZERO, rev.amount),
            };
            assert_eq!(orig.debit - orig.credit + rev_debit - rev_credit, Decimal::ZERO);
        }
    }

    #[test]
    fn test_multi_line_reversal() {
        let original = vec![
            make_line(1, dec!(50.00), dec!(0), "Entry 1"),
            make_line(2, dec!(30.00), dec!(0), "Entry 2"),
            make_line(3, dec!(0), dec!(80.00), "Entry 3"),
        ];

        assert!(is_reversible(&original));
        let reversed = reversing_lines(&original);

        assert_eq!(reversed.len(), 3);
        assert_eq!(reversed[0].side, Side::Credit);
        assert_eq!(reversed[1].side, Side::Credit);
        assert_eq!(reversed[2].side, Side::Debit);
    }
}
