use chrono::{Days, Local, Months, NaiveDate};

/// Calendar offset of a trailing window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowOffset {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl WindowOffset {
    pub const SIX_MONTHS: WindowOffset = WindowOffset {
        years: 0,
        months: 6,
        days: 0,
    };

    pub fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }
}

/// A trailing date range ending today, in local calendar dates.
///
/// Git reads the zone-less `--after`/`--before` strings in local time, so the
/// window is anchored to the local date as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub present: NaiveDate,
    pub past: NaiveDate,
}

impl DateWindow {
    /// Window ending at today's local date.
    pub fn compute(offset: WindowOffset) -> Self {
        Self::ending_at(Local::now().date_naive(), offset)
    }

    /// Years and months are applied together first (clamping to the last day
    /// of a shorter month), then days.
    pub fn ending_at(present: NaiveDate, offset: WindowOffset) -> Self {
        let months = offset.years.saturating_mul(12).saturating_add(offset.months);
        let past = present
            .checked_sub_months(Months::new(months))
            .and_then(|d| d.checked_sub_days(Days::new(u64::from(offset.days))))
            .unwrap_or(NaiveDate::MIN);
        Self { present, past }
    }

    /// Lower bound for `git log --after`, start of the first day.
    pub fn after_arg(&self) -> String {
        format!("--after={} 00:00", self.past.format("%Y-%m-%d"))
    }

    /// Upper bound for `git log --before`, end of the last day.
    pub fn before_arg(&self) -> String {
        format!("--before={} 23:59", self.present.format("%Y-%m-%d"))
    }

    pub fn since(&self) -> String {
        self.past.format("%Y-%m-%d").to_string()
    }

    pub fn until(&self) -> String {
        self.present.format("%Y-%m-%d").to_string()
    }
}
