//! National holiday table for Timor-Leste.
//!
//! Fixed-date public holidays only. Movable observances (Good Friday,
//! Corpus Christi, Idul Fitri, Idul Adha) shift every year and are
//! supplied per tenant through the holiday service overrides.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::collections::BTreeSet;

/// (month, day, name) of each fixed national holiday.
static FIXED_HOLIDAYS: Lazy<Vec<(u32, u32, &'static str)>> = Lazy::new(|| {
    vec![
        (1, 1, "New Year's Day"),
        (3, 3, "Veterans Day"),
        (5, 1, "Labour Day"),
        (5, 20, "Restoration of Independence Day"),
        (8, 30, "Popular Consultation Day"),
        (11, 1, "All Saints' Day"),
        (11, 2, "All Souls' Day"),
        (11, 12, "National Youth Day"),
        (11, 28, "Proclamation of Independence Day"),
        (12, 7, "Memorial Day"),
        (12, 8, "Day of Our Lady of Immaculate Conception"),
        (12, 25, "Christmas Day"),
    ]
});

/// Returns the fixed national holidays of a year.
#[must_use]
pub fn national_holidays(year: i32) -> BTreeSet<NaiveDate> {
    FIXED_HOLIDAYS
        .iter()
        .filter_map(|&(month, day, _)| NaiveDate::from_ymd_opt(year, month, day))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_national_holidays_count() {
        assert_eq!(national_holidays(2026).len(), 12);
    }

    #[test]
    fn test_known_holidays_present() {
        let holidays = national_holidays(2026);
        assert!(holidays.contains(&NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
        assert!(holidays.contains(&NaiveDate::from_ymd_opt(2026, 5, 20).unwrap()));
        assert!(holidays.contains(&NaiveDate::from_ymd_opt(2026, 11, 28).unwrap()));
        assert!(holidays.contains(&NaiveDate::from_ymd_opt(2026, 12, 25).unwrap()));
    }

    #[test]
    fn test_regular_day_not_holiday() {
        let holidays = national_holidays(2026);
        assert!(!holidays.contains(&NaiveDate::from_ymd_opt(2026, 2, 16).unwrap()));
    }
}
