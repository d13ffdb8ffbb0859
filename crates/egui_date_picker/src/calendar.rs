//! Calendar math behind the day grid and the month/year selectors.

use chrono::{Datelike as _, Month, NaiveDate};

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Column headers of the day grid. Weeks start on Sunday.
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// The oldest year offered by the year list unless configured otherwise.
pub const DEFAULT_FIRST_YEAR: i32 = 1900;

/// Returned by [`YearMonth::new`] for a year/month pair that is not a real calendar month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidYearMonth {
    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(u32),

    #[error("year {0} cannot be represented")]
    YearOutOfRange(i32),
}

/// A calendar month of a specific year, e.g. October 2026.
///
/// Internally this is the first day of that month, so it is always valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    /// `month` is 1-based.
    ///
    /// # Errors
    /// If `month` is not in `1..=12`, or `year` is outside what [`chrono`] can represent.
    pub fn new(year: i32, month: u32) -> Result<Self, InvalidYearMonth> {
        if !(1..=12).contains(&month) {
            return Err(InvalidYearMonth::MonthOutOfRange(month));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or(InvalidYearMonth::YearOutOfRange(year))
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        // Day 1 exists in every month chrono can represent.
        Self(date.with_day(1).unwrap_or(date))
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 1-based month number.
    #[inline]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.0.month0() as usize]
    }

    /// The first day of the month.
    #[inline]
    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// 28 to 31.
    pub fn days_in_month(&self) -> u32 {
        match self.month() {
            4 | 6 | 9 | 11 => 30,
            2 if NaiveDate::from_ymd_opt(self.year(), 2, 29).is_some() => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// Number of blank cells before day 1 in a Sunday-first week, i.e. the weekday of day 1.
    pub fn leading_blanks(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Same year, different month.
    pub fn with_month(self, month: Month) -> Option<Self> {
        self.0.with_month(month.number_from_month()).map(Self)
    }

    /// Same month, different year.
    pub fn with_year(self, year: i32) -> Option<Self> {
        self.0.with_year(year).map(Self)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year())
    }
}

/// One cell of the day grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayCell {
    /// Padding before the first day of the month.
    Blank,

    Day {
        date: NaiveDate,
        is_today: bool,
        is_selected: bool,
    },
}

impl DayCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Blank => None,
            Self::Day { date, .. } => Some(*date),
        }
    }
}

/// The cells of a Sunday-first calendar page for `visible`.
///
/// Yields [`YearMonth::leading_blanks`] blank cells followed by one cell per day of the month.
pub fn month_grid(
    visible: YearMonth,
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> impl Iterator<Item = DayCell> {
    let blanks = std::iter::repeat_n(DayCell::Blank, visible.leading_blanks() as usize);
    let days = visible
        .first_day()
        .iter_days()
        .take(visible.days_in_month() as usize)
        .map(move |date| DayCell::Day {
            date,
            is_today: date == today,
            is_selected: selected == Some(date),
        });
    blanks.chain(days)
}

/// The years offered by the year list: `current_year` down to `first_year`, both included.
pub fn year_range(first_year: i32, current_year: i32) -> impl DoubleEndedIterator<Item = i32> {
    (first_year..=current_year).rev()
}

/// The chrono month for a 0-based index into [`MONTH_NAMES`].
pub(crate) fn month_from_index(index: usize) -> Option<Month> {
    u8::try_from(index + 1)
        .ok()
        .and_then(|number| Month::try_from(number).ok())
}
