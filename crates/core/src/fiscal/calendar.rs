//! Monthly period generation for a fiscal year.
//!
//! Fiscal years follow the calendar year: 12 contiguous, non-overlapping
//! monthly periods.

use chrono::NaiveDate;

/// Boundary dates of one generated period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodBounds {
    /// Period number within the year (1-12).
    pub period_number: i16,
    /// First day of the month.
    pub start_date: NaiveDate,
    /// Last day of the month.
    pub end_date: NaiveDate,
}

/// Generates the 12 monthly periods of a calendar fiscal year.
#[must_use]
pub fn monthly_periods(year: i32) -> Vec<PeriodBounds> {
    (1..=12u32)
        .map(|month| PeriodBounds {
            period_number: i16::try_from(month).unwrap_or(0),
            start_date: NaiveDate::from_ymd_opt(year, month, 1)
                .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default()),
            end_date: last_day_of_month(year, month),
        })
        .collect()
}

/// Returns the last day of a month.
#[must_use]
pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    next_month
        .and_then(|d| d.pred_opt())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap_or_default())
}

/// Returns the month name for period display.
#[must_use]
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_periods_full_year() {
        let periods = monthly_periods(2026);

        assert_eq!(periods.len(), 12);
        assert_eq!(periods[0].period_number, 1);
        assert_eq!(
            periods[0].start_date,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
        assert_eq!(
            periods[0].end_date,
            NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()
        );
        assert_eq!(periods[11].period_number, 12);
        assert_eq!(
            periods[11].end_date,
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_periods_are_contiguous() {
        let periods = monthly_periods(2026);

        for pair in periods.windows(2) {
            let gap = pair[1].start_date - pair[0].end_date;
            assert_eq!(gap, chrono::Duration::days(1));
        }
    }

    #[test]
    fn test_leap_year_february() {
        let periods = monthly_periods(2024);
        assert_eq!(
            periods[1].end_date,
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );

        let periods = monthly_periods(2026);
        assert_eq!(
            periods[1].end_date,
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(
            last_day_of_month(2026, 1),
            NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()
        );
        assert_eq!(
            last_day_of_month(2026, 4),
            NaiveDate::from_ymd_opt(2026, 4, 30).unwrap()
        );
        assert_eq!(
            last_day_of_month(2026, 12),
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
    }
}
