//! Wage income tax computation.
//!
//! Timor-Leste WIT on employment income is a flat 10%. Resident
//! employees get a $500 monthly threshold ($6,000 annually); wages of
//! non-residents are taxed from the first dollar.

use kontabil_shared::types::money::round_currency;
use rust_decimal::Decimal;

/// Flat wage income tax rate (10%).
pub const WIT_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Monthly tax-free threshold for resident employees.
pub const RESIDENT_MONTHLY_THRESHOLD: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Annual tax-free threshold for resident employees.
pub const RESIDENT_ANNUAL_THRESHOLD: Decimal = Decimal::from_parts(6000, 0, 0, false, 0);

/// Taxable wages for one month.
#[must_use]
pub fn monthly_taxable_wages(gross_wages: Decimal, is_resident: bool) -> Decimal {
    let taxable = if is_resident {
        gross_wages - RESIDENT_MONTHLY_THRESHOLD
    } else {
        gross_wages
    };
    taxable.max(Decimal::ZERO)
}

/// Wage income tax on one month of gross wages.
#[must_use]
pub fn monthly_wit(gross_wages: Decimal, is_resident: bool) -> Decimal {
    round_currency(monthly_taxable_wages(gross_wages, is_resident) * WIT_RATE)
}

/// Wage income tax on a full year of gross wages.
#[must_use]
pub fn annual_wit(gross_wages: Decimal, is_resident: bool) -> Decimal {
    let taxable = if is_resident {
        gross_wages - RESIDENT_ANNUAL_THRESHOLD
    } else {
        gross_wages
    };
    round_currency(taxable.max(Decimal::ZERO) * WIT_RATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    // Resident at the threshold owes nothing
    #[case(dec!(500), true, dec!(0))]
    // Resident above the threshold pays 10% of the excess
    #[case(dec!(1000), true, dec!(50.00))]
    // Non-resident pays 10% with no threshold
    #[case(dec!(1000), false, dec!(100.00))]
    #[case(dec!(0), true, dec!(0))]
    #[case(dec!(0), false, dec!(0))]
    #[case(dec!(499.99), true, dec!(0))]
    #[case(dec!(500.10), true, dec!(0.01))]
    #[case(dec!(2350.55), true, dec!(185.06))]
    fn test_monthly_wit(
        #[case] gross: Decimal,
        #[case] is_resident: bool,
        #[case] expected: Decimal,
    ) {
        assert_eq!(monthly_wit(gross, is_resident), expected);
    }

    #[rstest]
    #[case(dec!(6000), true, dec!(0))]
    #[case(dec!(12000), true, dec!(600.00))]
    #[case(dec!(12000), false, dec!(1200.00))]
    fn test_annual_wit(
        #[case] gross: Decimal,
        #[case] is_resident: bool,
        #[case] expected: Decimal,
    ) {
        assert_eq!(annual_wit(gross, is_resident), expected);
    }

    #[test]
    fn test_taxable_wages_floor_at_zero() {
        assert_eq!(monthly_taxable_wages(dec!(300), true), Decimal::ZERO);
        assert_eq!(monthly_taxable_wages(dec!(300), false), dec!(300));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn gross_strategy() -> impl Strategy<Value = Decimal> {
            (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            /// WIT is never negative and never exceeds 10% of gross.
            #[test]
            fn prop_wit_bounds(gross in gross_strategy(), is_resident in any::<bool>()) {
                let wit = monthly_wit(gross, is_resident);
                prop_assert!(wit >= Decimal::ZERO);
                prop_assert!(wit <= round_currency(gross * WIT_RATE));
            }

            /// A resident never owes more than a non-resident on the
            /// same wages.
            #[test]
            fn prop_resident_threshold_helps(gross in gross_strategy()) {
                prop_assert!(monthly_wit(gross, true) <= monthly_wit(gross, false));
            }

            /// WIT is monotonic in gross wages.
            #[test]
            fn prop_wit_monotonic(
                gross in gross_strategy(),
                extra in 0i64..1_000_000i64,
                is_resident in any::<bool>(),
            ) {
                let higher = gross + Decimal::new(extra, 2);
                prop_assert!(monthly_wit(higher, is_resident) >= monthly_wit(gross, is_resident));
            }
        }
    }
}
