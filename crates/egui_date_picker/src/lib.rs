//! A popover date picker for [`egui`](https://github.com/emilk/egui).
//!
//! [`DatePicker`] shows a button with the picked date (or a placeholder).
//! Clicking it opens a calendar with month and year selectors.
//! Clicking a day picks it and closes the calendar, and so does clicking anywhere else
//! or pressing `Escape`.
//!
//! The calendar math is available on its own, see [`month_grid`] and [`year_range`].
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

#![forbid(unsafe_code)]

mod button;
pub mod calendar;
mod clock;
mod format;
mod popup;
mod state;

pub use crate::button::DatePicker;
pub use crate::calendar::{
    DEFAULT_FIRST_YEAR, DayCell, InvalidYearMonth, MONTH_NAMES, WEEKDAY_LABELS, YearMonth,
    month_grid, year_range,
};
pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::format::{LONG_DATE_FORMAT, format_long_date};
pub use crate::state::{DatePickerState, Overlay};
