//! The date picker's ui state and every transition it goes through.

use chrono::{Month, NaiveDate};

use crate::calendar::YearMonth;

/// Which overlay of the date picker is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    /// Only the trigger button.
    Closed,

    /// The popover with the day grid.
    Open,

    /// The popover with the month list expanded.
    MonthList,

    /// The popover with the year list expanded.
    YearList,
}

/// Everything a [`crate::DatePicker`] remembers between frames.
///
/// Kept in egui's temporary memory, keyed by the picker's id,
/// so it goes away when the [`egui::Context`] forgets it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DatePickerState {
    selected: Option<NaiveDate>,
    visible_month: YearMonth,
    popover_open: bool,
    month_list_open: bool,
    year_list_open: bool,
}

impl DatePickerState {
    /// Nothing selected, everything closed, showing the month of `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selected: None,
            visible_month: YearMonth::of(today),
            popover_open: false,
            month_list_open: false,
            year_list_open: false,
        }
    }

    /// Start out showing `visible_month` instead of the current month.
    #[inline]
    pub fn with_visible_month(mut self, visible_month: YearMonth) -> Self {
        self.visible_month = visible_month;
        self
    }

    /// Load the state of the picker with the given id, if it has been shown before.
    pub fn load(ctx: &egui::Context, id: egui::Id) -> Option<Self> {
        ctx.data_mut(|d| d.get_temp(id))
    }

    pub fn store(self, ctx: &egui::Context, id: egui::Id) {
        ctx.data_mut(|d| d.insert_temp(id, self));
    }

    #[inline]
    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    #[inline]
    pub fn visible_month(&self) -> YearMonth {
        self.visible_month
    }

    #[inline]
    pub fn is_popover_open(&self) -> bool {
        self.popover_open
    }

    #[inline]
    pub fn is_month_list_open(&self) -> bool {
        self.month_list_open
    }

    #[inline]
    pub fn is_year_list_open(&self) -> bool {
        self.year_list_open
    }

    /// Is the popover or either list showing?
    pub fn is_any_open(&self) -> bool {
        self.popover_open || self.month_list_open || self.year_list_open
    }

    pub fn overlay(&self) -> Overlay {
        if !self.popover_open {
            Overlay::Closed
        } else if self.month_list_open {
            Overlay::MonthList
        } else if self.year_list_open {
            Overlay::YearList
        } else {
            Overlay::Open
        }
    }

    /// The trigger button was clicked.
    pub fn toggle_popover(&mut self) {
        if self.popover_open {
            self.dismiss();
        } else {
            log::debug!("Opening date picker showing {}", self.visible_month);
            self.popover_open = true;
        }
    }

    /// The month toggle in the popover header was clicked. Closes the year list.
    pub fn toggle_month_list(&mut self) {
        self.month_list_open = !self.month_list_open;
        self.year_list_open = false;
    }

    /// The year toggle in the popover header was clicked. Closes the month list.
    pub fn toggle_year_list(&mut self) {
        self.year_list_open = !self.year_list_open;
        self.month_list_open = false;
    }

    /// A day in the grid was clicked.
    pub fn select_day(&mut self, date: NaiveDate) {
        log::debug!("Selected {date}");
        self.selected = Some(date);
        self.dismiss();
    }

    /// An entry of the month list was clicked. The selected date is left alone.
    pub fn select_month(&mut self, month: Month) {
        match self.visible_month.with_month(month) {
            Some(visible_month) => self.visible_month = visible_month,
            None => log::warn!("Cannot show {month:?} of {}", self.visible_month.year()),
        }
        self.month_list_open = false;
    }

    /// An entry of the year list was clicked. The selected date is left alone.
    pub fn select_year(&mut self, year: i32) {
        match self.visible_month.with_year(year) {
            Some(visible_month) => self.visible_month = visible_month,
            None => log::warn!("Cannot show year {year}"),
        }
        self.year_list_open = false;
    }

    /// Close the popover and both lists.
    pub fn dismiss(&mut self) {
        if self.is_any_open() {
            log::debug!("Closing date picker");
        }
        self.popover_open = false;
        self.month_list_open = false;
        self.year_list_open = false;
    }
}
