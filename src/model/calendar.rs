use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Calendar fields of an instant as seen in one timezone.
///
/// Always derived on demand; the same timestamp decomposes differently once
/// the zone changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarPoint {
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// 1-31
    pub day: u32,
    /// 0-based
    pub day_of_year: u32,
    /// 0 = Sunday .. 6 = Saturday
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CalendarPoint {
    pub fn from_local(local: &NaiveDateTime) -> Self {
        Self {
            year: local.year(),
            month: local.month(),
            day: local.day(),
            day_of_year: local.ordinal0(),
            weekday: local.weekday().num_days_from_sunday(),
            hour: local.hour(),
            minute: local.minute(),
            second: local.second(),
        }
    }

    pub fn seconds_since_midnight(&self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }

    /// Calendar days from `self` to `other` (negative when `other` is earlier)
    pub fn days_until(&self, other: &CalendarPoint) -> i64 {
        match (self.date(), other.date()) {
            (Some(from), Some(to)) => (to - from).num_days(),
            _ => 0,
        }
    }

    fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}
