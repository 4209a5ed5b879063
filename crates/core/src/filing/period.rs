//! Filing period: a month (`YYYY-MM`) or a full year (`YYYY`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::fiscal::calendar::last_day_of_month;

/// The period a tax filing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FilingPeriod {
    /// A calendar month, e.g. `2026-01`.
    Month {
        /// Calendar year.
        year: i32,
        /// Month (1-12).
        month: u32,
    },
    /// A full calendar year, e.g. `2026`.
    Year(i32),
}

impl FilingPeriod {
    /// The first day covered by this period.
    #[must_use]
    pub fn start_date(self) -> NaiveDate {
        match self {
            Self::Month { year, month } => NaiveDate::from_ymd_opt(year, month, 1)
                .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default()),
            Self::Year(year) => {
                NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default()
            }
        }
    }

    /// The last day covered by this period.
    #[must_use]
    pub fn end_date(self) -> NaiveDate {
        match self {
            Self::Month { year, month } => last_day_of_month(year, month),
            Self::Year(year) => {
                NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or_default()
            }
        }
    }

    /// The calendar year this period falls in.
    #[must_use]
    pub const fn year(self) -> i32 {
        match self {
            Self::Month { year, .. } | Self::Year(year) => year,
        }
    }

    /// The month after this one (months only).
    #[must_use]
    pub fn next_month(self) -> Option<Self> {
        match self {
            Self::Month { year, month } => Some(if month == 12 {
                Self::Month {
                    year: year + 1,
                    month: 1,
                }
            } else {
                Self::Month {
                    year,
                    month: month + 1,
                }
            }),
            Self::Year(_) => None,
        }
    }
}

/// Error parsing a filing period string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid filing period: {0}")]
pub struct ParsePeriodError(pub String);

impl FromStr for FilingPeriod {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParsePeriodError(s.to_string());

        match s.split_once('-') {
            Some((year, month)) => {
                let year: i32 = year.parse().map_err(|_| invalid())?;
                let month: u32 = month.parse().map_err(|_| invalid())?;
                if !(1..=12).contains(&month) {
                    return Err(invalid());
                }
                Ok(Self::Month { year, month })
            }
            None => {
                let year: i32 = s.parse().map_err(|_| invalid())?;
                if !(1900..=9999).contains(&year) {
                    return Err(invalid());
                }
                Ok(Self::Year(year))
            }
        }
    }
}

impl fmt::Display for FilingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month { year, month } => write!(f, "{year}-{month:02}"),
            Self::Year(year) => write!(f, "{year}"),
        }
    }
}

impl TryFrom<String> for FilingPeriod {
    type Error = ParsePeriodError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<FilingPeriod> for String {
    fn from(period: FilingPeriod) -> Self {
        period.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        let period: FilingPeriod = "2026-01".parse().unwrap();
        assert_eq!(
            period,
            FilingPeriod::Month {
                year: 2026,
                month: 1
            }
        );
    }

    #[test]
    fn test_parse_year() {
        let period: FilingPeriod = "2026".parse().unwrap();
        assert_eq!(period, FilingPeriod::Year(2026));
    }

    #[test]
    fn test_parse_invalid() {
        assert!("2026-13".parse::<FilingPeriod>().is_err());
        assert!("2026-00".parse::<FilingPeriod>().is_err());
        assert!("abc".parse::<FilingPeriod>().is_err());
        assert!("26".parse::<FilingPeriod>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for s in ["2026-01", "2026-12", "2026"] {
            let period: FilingPeriod = s.parse().unwrap();
            assert_eq!(period.to_string(), s);
        }
    }

    #[test]
    fn test_date_window() {
        let period = FilingPeriod::Month {
            year: 2026,
            month: 2,
        };
        assert_eq!(
            period.start_date(),
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
        );
        assert_eq!(
            period.end_date(),
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
        );

        let year = FilingPeriod::Year(2026);
        assert_eq!(
            year.start_date(),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
        assert_eq!(
            year.end_date(),
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_next_month() {
        let january = FilingPeriod::Month {
            year: 2026,
            month: 1,
        };
        assert_eq!(
            january.next_month(),
            Some(FilingPeriod::Month {
                year: 2026,
                month: 2
            })
        );

        let december = FilingPeriod::Month {
            year: 2026,
            month: 12,
        };
        assert_eq!(
            december.next_month(),
            Some(FilingPeriod::Month {
                year: 2027,
                month: 1
            })
        );

        assert_eq!(FilingPeriod::Year(2026).next_month(), None);
    }
}
