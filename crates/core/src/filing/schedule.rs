//! Statutory obligation schedule.
//!
//! Enumerates the filings a tenant owes across a window: monthly WIT,
//! the INSS statement and payment, and (in the first quarter) the
//! prior-year annual WIT return. Base dates:
//!
//! - monthly WIT: 15th of the following month
//! - INSS statement: 10th of the following month
//! - INSS payment: 20th of the following month
//! - annual WIT: 31 March of the following year
//!
//! All dates shift forward over weekends and holidays.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::period::FilingPeriod;
use super::types::FilingType;
use crate::duedate::HolidayCalendar;

/// A single statutory obligation within the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObligationKind {
    /// Monthly wage income tax return and payment.
    MonthlyWit,
    /// Monthly INSS contribution statement.
    InssStatement,
    /// Monthly INSS contribution payment.
    InssPayment,
    /// Annual wage income tax reconciliation.
    AnnualWit,
}

impl ObligationKind {
    /// The filing record type this obligation is tracked under.
    #[must_use]
    pub const fn filing_type(self) -> FilingType {
        match self {
            Self::MonthlyWit => FilingType::MonthlyWit,
            Self::InssStatement | Self::InssPayment => FilingType::InssMonthly,
            Self::AnnualWit => FilingType::AnnualWit,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MonthlyWit => "Monthly wage income tax return",
            Self::InssStatement => "INSS contribution statement",
            Self::InssPayment => "INSS contribution payment",
            Self::AnnualWit => "Annual wage income tax return",
        }
    }
}

/// An obligation with its computed due dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obligation {
    /// What is owed.
    pub kind: ObligationKind,
    /// The filing record type it is tracked under.
    pub filing_type: FilingType,
    /// The period it covers.
    pub period: FilingPeriod,
    /// Unadjusted statutory base date.
    pub base_due_date: NaiveDate,
    /// Holiday-adjusted due date.
    pub due_date: NaiveDate,
}

/// Returns the unadjusted statutory base date for an obligation.
///
/// Returns `None` for a period shape that does not match the kind
/// (e.g. an annual obligation over a month period).
#[must_use]
pub fn base_due_date(kind: ObligationKind, period: FilingPeriod) -> Option<NaiveDate> {
    match (kind, period) {
        (ObligationKind::MonthlyWit, FilingPeriod::Month { .. }) => {
            due_day_next_month(period, 15)
        }
        (ObligationKind::InssStatement, FilingPeriod::Month { .. }) => {
            due_day_next_month(period, 10)
        }
        (ObligationKind::InssPayment, FilingPeriod::Month { .. }) => {
            due_day_next_month(period, 20)
        }
        (ObligationKind::AnnualWit, FilingPeriod::Year(year)) => {
            NaiveDate::from_ymd_opt(year + 1, 3, 31)
        }
        _ => None,
    }
}

fn due_day_next_month(period: FilingPeriod, day: u32) -> Option<NaiveDate> {
    let next = period.next_month()?;
    match next {
        FilingPeriod::Month { year, month } => NaiveDate::from_ymd_opt(year, month, day),
        FilingPeriod::Year(_) => None,
    }
}

/// Enumerates the obligations due within the window
/// `[start of today's month, today + months_window months]`, with
/// holiday-adjusted due dates, sorted ascending.
#[must_use]
pub fn upcoming_obligations(
    today: NaiveDate,
    months_window: u32,
    calendar: &HolidayCalendar,
) -> Vec<Obligation> {
    let mut obligations = Vec::new();

    // Walk the months whose due dates fall inside the window. Month
    // periods are due the following month, so start one month back.
    for offset in 0..=months_window {
        let (year, month) = add_months(today.year(), today.month(), offset);
        let due_month_period = FilingPeriod::Month { year, month };

        // Monthly obligations for the period one month before the due month
        let covered = previous_month(due_month_period);

        for kind in [
            ObligationKind::InssStatement,
            ObligationKind::MonthlyWit,
            ObligationKind::InssPayment,
        ] {
            if let Some(base) = base_due_date(kind, covered) {
                obligations.push(Obligation {
                    kind,
                    filing_type: kind.filing_type(),
                    period: covered,
                    base_due_date: base,
                    due_date: calendar.adjust_to_next_business_day(base),
                });
            }
        }

        // The prior-year annual return surfaces in the first quarter
        if (1..=3).contains(&month) {
            let tax_year = FilingPeriod::Year(year - 1);
            if let Some(base) = base_due_date(ObligationKind::AnnualWit, tax_year) {
                let obligation = Obligation {
                    kind: ObligationKind::AnnualWit,
                    filing_type: FilingType::AnnualWit,
                    period: tax_year,
                    base_due_date: base,
                    due_date: calendar.adjust_to_next_business_day(base),
                };
                if !obligations
                    .iter()
                    .any(|o| o.kind == ObligationKind::AnnualWit && o.period == tax_year)
                {
                    obligations.push(obligation);
                }
            }
        }
    }

    let horizon = {
        let (year, month) = add_months(today.year(), today.month(), months_window);
        crate::fiscal::calendar::last_day_of_month(year, month)
    };
    let window_start = NaiveDate::from_ymd_opt(today.year(), today.month(), 1)
        .unwrap_or(today);

    obligations.retain(|o| o.due_date >= window_start && o.due_date <= horizon);
    obligations.sort_by_key(|o| o.due_date);
    obligations
}

fn previous_month(period: FilingPeriod) -> FilingPeriod {
    match period {
        FilingPeriod::Month { year, month } => {
            if month == 1 {
                FilingPeriod::Month {
                    year: year - 1,
                    month: 12,
                }
            } else {
                FilingPeriod::Month {
                    year,
                    month: month - 1,
                }
            }
        }
        FilingPeriod::Year(year) => FilingPeriod::Year(year),
    }
}

fn add_months(year: i32, month: u32, offset: u32) -> (i32, u32) {
    let zero_based = month - 1 + offset;
    (
        year + i32::try_from(zero_based / 12).unwrap_or(0),
        zero_based % 12 + 1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn january() -> FilingPeriod {
        FilingPeriod::Month {
            year: 2026,
            month: 1,
        }
    }

    #[test]
    fn test_monthly_wit_base_due_date() {
        // Period 2026-01 is due on 2026-02-15
        assert_eq!(
            base_due_date(ObligationKind::MonthlyWit, january()),
            Some(date(2026, 2, 15))
        );
    }

    #[test]
    fn test_inss_base_due_dates() {
        assert_eq!(
            base_due_date(ObligationKind::InssStatement, january()),
            Some(date(2026, 2, 10))
        );
        assert_eq!(
            base_due_date(ObligationKind::InssPayment, january()),
            Some(date(2026, 2, 20))
        );
    }

    #[test]
    fn test_annual_base_due_date() {
        assert_eq!(
            base_due_date(ObligationKind::AnnualWit, FilingPeriod::Year(2025)),
            Some(date(2026, 3, 31))
        );
    }

    #[test]
    fn test_december_period_rolls_into_next_year() {
        let december = FilingPeriod::Month {
            year: 2026,
            month: 12,
        };
        assert_eq!(
            base_due_date(ObligationKind::MonthlyWit, december),
            Some(date(2027, 1, 15))
        );
    }

    #[test]
    fn test_mismatched_period_shape() {
        assert_eq!(
            base_due_date(ObligationKind::MonthlyWit, FilingPeriod::Year(2026)),
            None
        );
        assert_eq!(
            base_due_date(ObligationKind::AnnualWit, january()),
            None
        );
    }

    #[test]
    fn test_upcoming_obligations_sorted_and_adjusted() {
        let calendar = HolidayCalendar::national(&[2026, 2027]);
        let obligations = upcoming_obligations(date(2026, 2, 1), 1, &calendar);

        assert!(!obligations.is_empty());
        // Sorted ascending by due date
        for pair in obligations.windows(2) {
            assert!(pair[0].due_date <= pair[1].due_date);
        }
        // Every due date is a business day at or after its base
        for o in &obligations {
            assert!(o.due_date >= o.base_due_date);
            assert!(calendar.is_business_day(o.due_date));
        }

        // The January WIT return is due Monday 2026-02-16 (the 15th is
        // a Sunday)
        let january_wit = obligations
            .iter()
            .find(|o| o.kind == ObligationKind::MonthlyWit && o.period == january())
            .unwrap();
        assert_eq!(january_wit.base_due_date, date(2026, 2, 15));
        assert_eq!(january_wit.due_date, date(2026, 2, 16));
    }

    #[test]
    fn test_annual_obligation_in_first_quarter() {
        let calendar = HolidayCalendar::national(&[2026, 2027]);

        let q1 = upcoming_obligations(date(2026, 1, 10), 2, &calendar);
        let annual: Vec<_> = q1
            .iter()
            .filter(|o| o.kind == ObligationKind::AnnualWit)
            .collect();
        assert_eq!(annual.len(), 1);
        assert_eq!(annual[0].period, FilingPeriod::Year(2025));
        assert_eq!(annual[0].base_due_date, date(2026, 3, 31));

        // Outside Q1 the annual return is absent
        let summer = upcoming_obligations(date(2026, 6, 10), 2, &calendar);
        assert!(
            summer
                .iter()
                .all(|o| o.kind != ObligationKind::AnnualWit)
        );
    }

    #[test]
    fn test_window_spans_three_monthly_obligations_per_month() {
        let calendar = HolidayCalendar::national(&[2026, 2027]);
        let obligations = upcoming_obligations(date(2026, 5, 1), 0, &calendar);

        // Within May: statement (10th), WIT (15th), payment (20th) for April
        let april = FilingPeriod::Month {
            year: 2026,
            month: 4,
        };
        assert_eq!(
            obligations
                .iter()
                .filter(|o| o.period == april)
                .count(),
            3
        );
    }

    #[test]
    fn test_add_months_year_rollover() {
        assert_eq!(add_months(2026, 11, 3), (2027, 2));
        assert_eq!(add_months(2026, 1, 0), (2026, 1));
        assert_eq!(add_months(2026, 12, 1), (2027, 1));
    }
}
