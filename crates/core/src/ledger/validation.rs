//! Journal entry validation and line resolution.
//!
//! Pure business logic with no database dependencies: the account lookup
//! is injected as a closure so the persistence layer can supply it from
//! whatever source it has at hand.

use kontabil_shared::types::AccountId;
use kontabil_shared::types::money::is_cent_precise;
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{EntryTotals, JournalLine, JournalLineInput, Side};
use crate::coa::types::AccountType;

/// Snapshot of the account fields needed for line validation.
#[derive(Debug, Clone)]
pub struct AccountSnapshot {
    /// The account ID.
    pub id: AccountId,
    /// The account code.
    pub code: String,
    /// The account name.
    pub name: String,
    /// The account type.
    pub account_type: AccountType,
    /// Whether the account accepts new lines.
    pub is_active: bool,
}

/// Validates line inputs and resolves them into denormalized journal lines.
///
/// Validation steps:
/// 1. At least 2 lines
/// 2. Each amount positive, non-zero, cent-precise
/// 3. Each referenced account exists and is active
/// 4. Debits equal credits exactly
///
/// # Errors
///
/// Returns `LedgerError` if any validation step fails.
pub fn validate_and_resolve<A>(
    lines: &[JournalLineInput],
    account_lookup: A,
) -> Result<(Vec<JournalLine>, EntryTotals), LedgerError>
where
    A: Fn(AccountId) -> Result<AccountSnapshot, LedgerError>,
{
    if lines.len() < 2 {
        return Err(LedgerError::InsufficientLines);
    }

    let mut resolved = Vec::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        if line.amount == Decimal::ZERO {
            return Err(LedgerError::ZeroAmount);
        }
        if line.amount < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount);
        }
        if !is_cent_precise(line.amount) {
            return Err(LedgerError::ImpreciseAmount(line.amount));
        }

        let account = account_lookup(line.account_id)?;
        if !account.is_active {
            return Err(LedgerError::InactiveAccount(line.account_id));
        }

        let (debit, credit) = match line.side {
            Side::Debit => (line.amount, Decimal::ZERO),
            Side::Credit => (Decimal::ZERO, line.amount),
        };

        resolved.push(JournalLine {
            line_number: i16::try_from(index + 1).unwrap_or(i16::MAX),
            account_id: account.id,
            account_code: account.code,
            account_name: account.name,
            debit,
            credit,
            memo: line.memo.clone(),
        });
    }

    let totals = calculate_totals(&resolved);

    if !totals.is_balanced {
        return Err(LedgerError::UnbalancedEntry {
            debit: totals.total_debit,
            credit: totals.total_credit,
        });
    }

    Ok((resolved, totals))
}

/// Calculates entry totals from resolved lines.
#[must_use]
pub fn calculate_totals(lines: &[JournalLine]) -> EntryTotals {
    let total_debit: Decimal = lines.iter().map(|l| l.debit).sum();
    let total_credit: Decimal = lines.iter().map(|l| l.credit).sum();

    EntryTotals::new(total_debit, total_credit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn snapshot(id: AccountId) -> AccountSnapshot {
        AccountSnapshot {
            id,
            code: "1100".to_string(),
            name: "Cash on Hand".to_string(),
            account_type: AccountType::Asset,
            is_active: true,
        }
    }

    fn ok_lookup(id: AccountId) -> Result<AccountSnapshot, LedgerError> {
        Ok(snapshot(id))
    }

    fn make_line(side: Side, amount: Decimal) -> JournalLineInput {
        JournalLineInput {
            account_id: AccountId::new(),
            side,
            amount,
            memo: None,
        }
    }

    #[test]
    fn test_balanced_entry_resolves() {
        let lines = vec![
            make_line(Side::Debit, dec!(100.00)),
            make_line(Side::Credit, dec!(100.00)),
        ];

        let (resolved, totals) = validate_and_resolve(&lines, ok_lookup).unwrap();

        assert_eq!(resolved.len(), 2);
        assert!(totals.is_balanced);
        assert_eq!(totals.total_debit, dec!(100.00));
        assert_eq!(totals.total_credit, dec!(100.00));
        assert_eq!(resolved[0].line_number, 1);
        assert_eq!(resolved[1].line_number, 2);
        // Exactly one side is non-zero per line
        assert_eq!(resolved[0].debit, dec!(100.00));
        assert_eq!(resolved[0].credit, Decimal::ZERO);
        assert_eq!(resolved[1].debit, Decimal::ZERO);
        assert_eq!(resolved[1].credit, dec!(100.00));
    }

    #[test]
    fn test_denormalizes_account_fields() {
        let lines = vec![
            make_line(Side::Debit, dec!(50.00)),
            make_line(Side::Credit, dec!(50.00)),
        ];

        let (resolved, _) = validate_and_resolve(&lines, ok_lookup).unwrap();
        assert_eq!(resolved[0].account_code, "1100");
        assert_eq!(resolved[0].account_name, "Cash on Hand");
    }

    #[test]
    fn test_unbalanced_entry_rejected() {
        let lines = vec![
            make_line(Side::Debit, dec!(100.00)),
            make_line(Side::Credit, dec!(50.00)),
        ];

        let result = validate_and_resolve(&lines, ok_lookup);
        assert!(matches!(
            result,
            Err(LedgerError::UnbalancedEntry {
                debit,
                credit,
            }) if debit == dec!(100.00) && credit == dec!(50.00)
        ));
    }

    #[test]
    fn test_single_line_rejected() {
        let lines = vec![make_line(Side::Debit, dec!(100.00))];
        assert!(matches!(
            validate_and_resolve(&lines, ok_lookup),
            Err(LedgerError::InsufficientLines)
        ));
    }

    #[test]
    fn test_zero_amount_rejected() {
        let lines = vec![
            make_line(Side::Debit, dec!(0)),
            make_line(Side::Credit, dec!(100.00)),
        ];
        assert!(matches!(
            validate_and_resolve(&lines, ok_lookup),
            Err(LedgerError::ZeroAmount)
        ));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let lines = vec![
            make_line(Side::Debit, dec!(-100.00)),
            make_line(Side::Credit, dec!(100.00)),
        ];
        assert!(matches!(
            validate_and_resolve(&lines, ok_lookup),
            Err(LedgerError::NegativeAmount)
        ));
    }

    #[test]
    fn test_imprecise_amount_rejected() {
        let lines = vec![
            make_line(Side::Debit, dec!(100.005)),
            make_line(Side::Credit, dec!(100.005)),
        ];
        assert!(matches!(
            validate_and_resolve(&lines, ok_lookup),
            Err(LedgerError::ImpreciseAmount(_))
        ));
    }

    #[test]
    fn test_inactive_account_rejected() {
        let lines = vec![
            make_line(Side::Debit, dec!(100.00)),
            make_line(Side::Credit, dec!(100.00)),
        ];

        let inactive_lookup = |id: AccountId| -> Result<AccountSnapshot, LedgerError> {
            let mut snap = snapshot(id);
            snap.is_active = false;
            Ok(snap)
        };

        assert!(matches!(
            validate_and_resolve(&lines, inactive_lookup),
            Err(LedgerError::InactiveAccount(_))
        ));
    }

    #[test]
    fn test_missing_account_rejected() {
        let lines = vec![
            make_line(Side::Debit, dec!(100.00)),
            make_line(Side::Credit, dec!(100.00)),
        ];

        let missing_lookup =
            |id: AccountId| -> Result<AccountSnapshot, LedgerError> {
                Err(LedgerError::AccountNotFound(id))
            };

        assert!(matches!(
            validate_and_resolve(&lines, missing_lookup),
            Err(LedgerError::AccountNotFound(_))
        ));
    }

    #[test]
    fn test_multi_line_entry() {
        // Payroll-style entry: one debit split against three credits
        let lines = vec![
            make_line(Side::Debit, dec!(1000.00)),
            make_line(Side::Credit, dec!(850.00)),
            make_line(Side::Credit, dec!(50.00)),
            make_line(Side::Credit, dec!(100.00)),
        ];

        let (resolved, totals) = validate_and_resolve(&lines, ok_lookup).unwrap();
        assert_eq!(resolved.len(), 4);
        assert!(totals.is_balanced);
        assert_eq!(totals.total_debit, dec!(1000.00));
    }
}

#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for positive cent-precise amounts.
    fn amount_strategy() -> impl Strategy<Value = Decimal> {
        (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// For any resolved entry, the totals are the exact sums of the
        /// line columns and exactly one column is non-zero per line.
        #[test]
        fn prop_resolved_lines_balance(amounts in prop::collection::vec(amount_strategy(), 1..20)) {
            // Mirror every debit with an equal credit so the entry balances.
            let mut lines = Vec::new();
            for amount in &amounts {
                lines.push(JournalLineInput {
                    account_id: kontabil_shared::types::AccountId::new(),
                    side: Side::Debit,
                    amount: *amount,
                    memo: None,
                });
                lines.push(JournalLineInput {
                    account_id: kontabil_shared::types::AccountId::new(),
                    side: Side::Credit,
                    amount: *amount,
                    memo: None,
                });
            }

            let lookup = |id: kontabil_shared::types::AccountId| {
                Ok(AccountSnapshot {
                    id,
                    code: "1100".to_string(),
                    name: "Cash on Hand".to_string(),
                    account_type: AccountType::Asset,
                    is_active: true,
                })
            };

            let (resolved, totals) = validate_and_resolve(&lines, lookup).unwrap();

            let expected: Decimal = amounts.iter().copied().sum();
            prop_assert!(totals.is_balanced);
            prop_assert_eq!(totals.total_debit, expected);
            prop_assert_eq!(totals.total_credit, expected);

            for line in &resolved {
                let one_sided = (line.debit > Decimal::ZERO) ^ (line.credit > Decimal::ZERO);
                prop_assert!(one_sided, "exactly one side must be non-zero");
            }
        }

        /// Any single-cent imbalance is rejected.
        #[test]
        fn prop_imbalance_rejected(amount in amount_strategy()) {
            let lines = vec![
                JournalLineInput {
                    account_id: kontabil_shared::types::AccountId::new(),
                    side: Side::Debit,
                    amount: amount + Decimal::new(1, 2),
                    memo: None,
                },
                JournalLineInput {
                    account_id: kontabil_shared::types::AccountId::new(),
                    side: Side::Credit,
                    amount,
                    memo: None,
                },
            ];

            let lookup = |id: kontabil_shared::types::AccountId| {
                Ok(AccountSnapshot {
                    id,
                    code: "1100".to_string(),
                    name: "Cash on Hand".to_string(),
                    account_type: AccountType::Asset,
                    is_active: true,
                })
            };

            prop_assert!(
                matches!(
                    validate_and_resolve(&lines, lookup),
                    Err(LedgerError::UnbalancedEntry { .. })
                ),
                "expected UnbalancedEntry error"
            );
        }
    }
}
