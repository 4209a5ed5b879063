//! Social security (INSS) contribution computation.
//!
//! Contributions are a percentage of the contribution base: 4% withheld
//! from the employee, 6% charged to the employer.

use kontabil_shared::types::money::round_currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employee contribution rate (4%).
pub const INSS_EMPLOYEE_RATE: Decimal = Decimal::from_parts(4, 0, 0, false, 2);

/// Employer contribution rate (6%).
pub const INSS_EMPLOYER_RATE: Decimal = Decimal::from_parts(6, 0, 0, false, 2);

/// Employee and employer contributions for one base amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InssContributions {
    /// Amount withheld from the employee (4% of base).
    pub employee: Decimal,
    /// Amount charged to the employer (6% of base).
    pub employer: Decimal,
}

/// Computes both contributions from a contribution base.
#[must_use]
pub fn contributions(base: Decimal) -> InssContributions {
    InssContributions {
        employee: round_currency(base * INSS_EMPLOYEE_RATE),
        employer: round_currency(base * INSS_EMPLOYER_RATE),
    }
}

/// Reconstructs the contribution base from the employee-side withheld
/// amount.
///
/// Payroll records carry only the withheld figure, so the base is
/// recovered by dividing by the rate. The round-trip is lossy when the
/// stored amount was itself rounded; figures are reported as computed,
/// without drift correction.
#[must_use]
pub fn reconstruct_base(employee_withheld: Decimal) -> Decimal {
    round_currency(employee_withheld / INSS_EMPLOYEE_RATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_contributions_for_1000() {
        let c = contributions(dec!(1000));
        assert_eq!(c.employee, dec!(40.00));
        assert_eq!(c.employer, dec!(60.00));
    }

    #[test]
    fn test_contributions_zero_base() {
        let c = contributions(Decimal::ZERO);
        assert_eq!(c.employee, Decimal::ZERO);
        assert_eq!(c.employer, Decimal::ZERO);
    }

    #[test]
    fn test_contributions_round_to_cents() {
        // 4% of 333.33 = 13.3332 -> 13.33; 6% = 19.9998 -> 20.00
        let c = contributions(dec!(333.33));
        assert_eq!(c.employee, dec!(13.33));
        assert_eq!(c.employer, dec!(20.00));
    }

    #[test]
    fn test_reconstruct_base() {
        assert_eq!(reconstruct_base(dec!(40.00)), dec!(1000.00));
        assert_eq!(reconstruct_base(dec!(13.33)), dec!(333.25));
    }

    #[test]
    fn test_reconstruction_round_trip_is_lossy() {
        // base 333.33 -> withheld 13.33 -> reconstructed 333.25
        let withheld = contributions(dec!(333.33)).employee;
        let reconstructed = reconstruct_base(withheld);
        assert_ne!(reconstructed, dec!(333.33));
        assert_eq!(reconstructed, dec!(333.25));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn base_strategy() -> impl Strategy<Value = Decimal> {
            (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            /// Employer contribution is always 1.5x the employee's,
            /// up to rounding.
            #[test]
            fn prop_rate_ratio(base in base_strategy()) {
                let c = contributions(base);
                let ratio_bound = (c.employer * Decimal::TWO
                    - c.employee * Decimal::from(3)).abs();
                // Each side rounds independently by at most half a cent
                prop_assert!(ratio_bound <= Decimal::new(3, 2));
            }

            /// Reconstructing from an exact (unrounded) withholding
            /// recovers the base exactly.
            #[test]
            fn prop_exact_round_trip(base_cents in 0i64..1_000_000i64) {
                // Bases that are whole quarters survive the 4% round-trip
                let base = Decimal::new(base_cents * 25, 2);
                let withheld = contributions(base).employee;
                prop_assert_eq!(reconstruct_base(withheld), base);
            }
        }
    }
}
