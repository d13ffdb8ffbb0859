use chrono::NaiveDate;

/// Where the date picker gets "today" from.
///
/// Used to highlight today's cell, to pick the initially visible month,
/// and as the newest entry of the year list.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local wall clock of the machine running the ui.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Always reports the same day. Useful for tests and screenshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<F: Fn() -> NaiveDate> Clock for F {
    fn today(&self) -> NaiveDate {
        self()
    }
}
