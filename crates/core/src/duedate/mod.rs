//! Holiday-aware statutory due-date adjustment.
//!
//! A statutory base date that falls on a weekend or holiday shifts
//! forward, one day at a time, to the next business day. The effective
//! holiday set is the national defaults plus tenant additions minus
//! tenant removals, assembled once per computation batch so repeated
//! adjustments share a single override fetch.

pub mod holidays;

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;

use crate::contracts::holiday::HolidayOverride;

/// The effective holiday calendar for one tenant and a span of years.
///
/// Cheap to query; build it once per batch of due-date computations.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    holidays: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Assembles the calendar from national defaults for the given years
    /// and the tenant's overrides.
    #[must_use]
    pub fn build(years: &[i32], overrides: &[HolidayOverride]) -> Self {
        let mut holidays: BTreeSet<NaiveDate> = years
            .iter()
            .flat_map(|&year| holidays::national_holidays(year))
            .collect();

        for o in overrides {
            if o.is_holiday {
                holidays.insert(o.date);
            } else {
                holidays.remove(&o.date);
            }
        }

        Self { holidays }
    }

    /// A calendar with national defaults only.
    #[must_use]
    pub fn national(years: &[i32]) -> Self {
        Self::build(years, &[])
    }

    /// Returns true if the date is in the holiday set.
    #[must_use]
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Returns true if the date is a working day: not a weekend, not a
    /// holiday.
    #[must_use]
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !is_weekend(date) && !self.is_holiday(date)
    }

    /// Advances a base date forward to the next business day.
    ///
    /// Dates already on a business day are returned unchanged.
    #[must_use]
    pub fn adjust_to_next_business_day(&self, date: NaiveDate) -> NaiveDate {
        let mut current = date;
        while !self.is_business_day(current) {
            current = current.succ_opt().unwrap_or(current);
        }
        current
    }
}

/// Returns true if the date falls on Saturday or Sunday.
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_business_day_unchanged() {
        let calendar = HolidayCalendar::national(&[2026]);
        // 2026-02-16 is a Monday and not a holiday
        assert_eq!(
            calendar.adjust_to_next_business_day(date(2026, 2, 16)),
            date(2026, 2, 16)
        );
    }

    #[test]
    fn test_saturday_shifts_to_monday() {
        let calendar = HolidayCalendar::national(&[2026]);
        // 2026-02-14 is a Saturday
        assert_eq!(
            calendar.adjust_to_next_business_day(date(2026, 2, 14)),
            date(2026, 2, 16)
        );
    }

    #[test]
    fn test_sunday_shifts_to_monday() {
        let calendar = HolidayCalendar::national(&[2026]);
        // 2026-02-15 is a Sunday, so the monthly due-date base for the
        // January period shifts to Monday the 16th
        assert_eq!(
            calendar.adjust_to_next_business_day(date(2026, 2, 15)),
            date(2026, 2, 16)
        );
    }

    #[test]
    fn test_holiday_shifts_forward() {
        let calendar = HolidayCalendar::national(&[2026]);
        // 2026-05-20 (Restoration of Independence) is a Wednesday
        assert_eq!(
            calendar.adjust_to_next_business_day(date(2026, 5, 20)),
            date(2026, 5, 21)
        );
    }

    #[test]
    fn test_consecutive_non_business_days() {
        let calendar = HolidayCalendar::national(&[2026]);
        // 2026-12-25 (Christmas, Friday) -> skips weekend to Monday 28th
        assert_eq!(
            calendar.adjust_to_next_business_day(date(2026, 12, 25)),
            date(2026, 12, 28)
        );
    }

    #[test]
    fn test_tenant_addition_shifts_date() {
        let overrides = vec![HolidayOverride {
            date: date(2026, 2, 16),
            is_holiday: true,
        }];
        let calendar = HolidayCalendar::build(&[2026], &overrides);
        // Monday 16th is now a tenant holiday; Sunday the 15th lands on Tuesday
        assert_eq!(
            calendar.adjust_to_next_business_day(date(2026, 2, 15)),
            date(2026, 2, 17)
        );
    }

    #[test]
    fn test_tenant_removal_restores_date() {
        let overrides = vec![HolidayOverride {
            date: date(2026, 5, 20),
            is_holiday: false,
        }];
        let calendar = HolidayCalendar::build(&[2026], &overrides);
        assert!(calendar.is_business_day(date(2026, 5, 20)));
        assert_eq!(
            calendar.adjust_to_next_business_day(date(2026, 5, 20)),
            date(2026, 5, 20)
        );
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(date(2026, 2, 14)));
        assert!(is_weekend(date(2026, 2, 15)));
        assert!(!is_weekend(date(2026, 2, 16)));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = NaiveDate> {
            (2024i32..=2030, 1u32..=12, 1u32..=28)
                .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            /// Adjustment always lands on a business day and never moves
            /// a date backwards.
            #[test]
            fn prop_adjusted_date_is_business_day(base in date_strategy()) {
                let years: Vec<i32> = vec![base.year(), base.year() + 1];
                let calendar = HolidayCalendar::national(&years);
                let adjusted = calendar.adjust_to_next_business_day(base);

                prop_assert!(adjusted >= base);
                prop_assert!(calendar.is_business_day(adjusted));
            }

            /// Adjustment is idempotent.
            #[test]
            fn prop_adjustment_idempotent(base in date_strategy()) {
                let years: Vec<i32> = vec![base.year(), base.year() + 1];
                let calendar = HolidayCalendar::national(&years);
                let once = calendar.adjust_to_next_business_day(base);
                let twice = calendar.adjust_to_next_business_day(once);
                prop_assert_eq!(once, twice);
            }

            /// Every date strictly between the base and its adjustment is
            /// a weekend or holiday.
            #[test]
            fn prop_no_business_day_skipped(base in date_strategy()) {
                let years: Vec<i32> = vec![base.year(), base.year() + 1];
                let calendar = HolidayCalendar::national(&years);
                let adjusted = calendar.adjust_to_next_business_day(base);

                let mut current = base;
                while current < adjusted {
                    prop_assert!(!calendar.is_business_day(current));
                    current = current.succ_opt().unwrap();
                }
            }
        }
    }
}
