use error_stack::{report, ResultExt};
use serde::{Deserialize, Serialize};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::Date;

use crate::KernelError;

static DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Half-open rental interval over calendar dates. `start < end` holds for
/// every constructed value, so the duration in whole days is always positive.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct RentalPeriod {
    start: Date,
    end: Date,
}

impl RentalPeriod {
    pub fn new(start: Date, end: Date) -> error_stack::Result<Self, KernelError> {
        if start >= end {
            return Err(report!(KernelError::InvalidDateRange));
        }
        Ok(Self { start, end })
    }

    /// Parses `YYYY-MM-DD` boundary strings. Format errors are reported
    /// before the range check.
    pub fn parse(start: &str, end: &str) -> error_stack::Result<Self, KernelError> {
        let start = Date::parse(start, DATE_FORMAT)
            .change_context(KernelError::InvalidDateFormat)
            .attach_printable_lazy(|| format!("start date: {start}"))?;
        let end = Date::parse(end, DATE_FORMAT)
            .change_context(KernelError::InvalidDateFormat)
            .attach_printable_lazy(|| format!("end date: {end}"))?;
        Self::new(start, end)
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Date {
        self.end
    }

    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).whole_days()
    }

    pub fn start_iso(&self) -> String {
        iso_date(self.start)
    }

    pub fn end_iso(&self) -> String {
        iso_date(self.end)
    }
}

fn iso_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
