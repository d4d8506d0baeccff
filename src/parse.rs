//! Timestamp normalization.
//!
//! Accepts epoch integers as-is and turns free-form date strings into epoch
//! seconds. Understood text, besides integers:
//!
//! - Epoch literals: `@1386748080`
//! - Absolute dates: RFC 3339, RFC 2822, `2013-12-11 11:48[:00]` with an
//!   optional `+0400` offset or `UTC` suffix, `2013/12/11`, `11.12.2013 11:48`
//! - Month names: `11 December 2013`, `Dec 11, 2013 11:48`,
//!   `11 декабря 2013 г. в 11:48`
//! - Keywords: `now`, `today`, `midnight`, `noon`, `yesterday 14:00`, `tomorrow`
//! - Weekdays: `monday`, `next friday`, `last tue 09:30`
//! - Offsets: `+1 week 2 days`, `-3 hours`, `in 2 days`, `a week ago`,
//!   `5 minutes from now`, `next month`, `last year`
//!
//! Naive values are read in the host local zone.

use std::sync::OnceLock;

use chrono::{
    DateTime, Datelike, Duration, Local, LocalResult, Months, NaiveDate, NaiveDateTime, NaiveTime,
    TimeZone, Utc, Weekday,
};
use regex::{Captures, Regex};

use crate::error::{FormatError, FormatResult};
use crate::locale;
use crate::model::Unit;

/// A timestamp as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampInput {
    Epoch(i64),
    Text(String),
}

impl From<i64> for TimestampInput {
    fn from(ts: i64) -> Self {
        TimestampInput::Epoch(ts)
    }
}

impl From<i32> for TimestampInput {
    fn from(ts: i32) -> Self {
        TimestampInput::Epoch(ts.into())
    }
}

impl From<&str> for TimestampInput {
    fn from(text: &str) -> Self {
        TimestampInput::Text(text.to_string())
    }
}

impl From<String> for TimestampInput {
    fn from(text: String) -> Self {
        TimestampInput::Text(text)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimestampInput {
    fn from(dt: DateTime<Tz>) -> Self {
        TimestampInput::Epoch(dt.timestamp())
    }
}

impl TimestampInput {
    /// Epoch seconds for this input, relative expressions anchored at the current time
    pub fn to_epoch(&self) -> FormatResult<i64> {
        self.to_epoch_at(Local::now())
    }

    /// Epoch seconds for this input, relative expressions anchored at `now`
    pub fn to_epoch_at(&self, now: DateTime<Local>) -> FormatResult<i64> {
        match self {
            TimestampInput::Epoch(ts) => Ok(*ts),
            TimestampInput::Text(text) => parse_timestamp(text, now),
        }
    }
}

const NAIVE_DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
];

const NAIVE_DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

const OFFSET_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S %z",
    "%Y-%m-%d %H:%M %z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%d.%m.%Y %H:%M:%S %z",
    "%d.%m.%Y %H:%M %z",
];

static ENGLISH_MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Longer spellings first so unanchored matching never stops at a prefix
const UNITS: &str = "second|sec|minute|min|hour|day|week|month|year";
const WEEKDAYS: &str = "sunday|sun|monday|mon|tuesday|tues|tue|wednesday|wed|\
                        thursday|thurs|thur|thu|friday|fri|saturday|sat";
const AMOUNT: &str = r"\d+|an?|one";
/// Optional trailing clock time, three capture groups
const TIME: &str = r"(?:,?\s+(?:at\s+|в\s+)?(\d{1,2}):(\d{2})(?::(\d{2}))?)?";

/// Regex patterns for relative and month-name dates, matched against
/// lowercased input
fn patterns() -> &'static DatePatterns {
    static PATTERNS: OnceLock<DatePatterns> = OnceLock::new();
    PATTERNS.get_or_init(DatePatterns::new)
}

struct DatePatterns {
    // "+1 week 2 days", "in 2 days", "a week ago", "5 minutes from now"
    offset: Regex,
    // one "[+-]N unit" term of an offset
    offset_term: Regex,
    // "next week", "last month"
    period: Regex,
    // "today", "yesterday 14:00", "noon"
    day_keyword: Regex,
    // "monday", "next friday", "last tue 09:30"
    weekday: Regex,
    // "11 december 2013", "11 декабря 2013 г. в 11:48"
    day_month: Regex,
    // "december 11, 2013 11:48"
    month_day: Regex,
}

impl DatePatterns {
    fn new() -> Self {
        let months = month_alternatives();
        Self {
            offset: compile(&format!(
                r"^(in\s+)?((?:[+-]?\s*(?:{AMOUNT})\s*(?:{UNITS})s?\s*)+)(ago|from now|later)?$"
            )),
            offset_term: compile(&format!(r"([+-]?)\s*({AMOUNT})\s*({UNITS})s?")),
            period: compile(&format!(r"^(next|last|previous|this)\s+({UNITS})$")),
            day_keyword: compile(&format!(r"^(today|midnight|noon|yesterday|tomorrow){TIME}$")),
            weekday: compile(&format!(
                r"^(?:(next|last|previous|this)\s+)?({WEEKDAYS}){TIME}$"
            )),
            day_month: compile(&format!(
                r"^(\d{{1,2}})(?:st|nd|rd|th)?\s+({months})\.?,?(?:\s+(\d{{4}}))?(?:\s*г\.?)?{TIME}$"
            )),
            month_day: compile(&format!(
                r"^({months})\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?,?(?:\s+(\d{{4}}))?{TIME}$"
            )),
        }
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("hardcoded regex to compile")
}

/// English full names, their abbreviations, and Russian genitive names
fn month_alternatives() -> String {
    ENGLISH_MONTHS
        .iter()
        .copied()
        .chain(["sept"])
        .chain(ENGLISH_MONTHS.iter().map(|month| &month[..3]))
        .chain(locale::MONTHS.iter().copied())
        .collect::<Vec<_>>()
        .join("|")
}

/// Parse a textual timestamp into epoch seconds.
///
/// Integer text round-trips unchanged; anything else goes through the date
/// parsers in turn.
pub fn parse_timestamp(text: &str, now: DateTime<Local>) -> FormatResult<i64> {
    let trimmed = text.trim();
    if let Ok(ts) = trimmed.parse::<i64>() {
        return Ok(ts);
    }

    let lower = trimmed.to_lowercase();
    let parsed = parse_epoch_literal(trimmed)
        .or_else(|| parse_absolute(trimmed))
        .or_else(|| (lower == "now").then(|| now.timestamp()))
        .or_else(|| parse_offset(&lower, now))
        .or_else(|| parse_period(&lower, now))
        .or_else(|| parse_anchored(&lower, now));

    match parsed {
        Some(ts) => {
            tracing::trace!(input = %text, timestamp = ts, "parsed timestamp");
            Ok(ts)
        }
        None => Err(FormatError::InvalidTimestamp(text.to_string())),
    }
}

fn parse_epoch_literal(text: &str) -> Option<i64> {
    text.strip_prefix('@')?.trim().parse().ok()
}

fn parse_absolute(text: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.timestamp());
    }
    for layout in OFFSET_LAYOUTS {
        if let Ok(dt) = DateTime::parse_from_str(text, layout) {
            return Some(dt.timestamp());
        }
    }
    if let Some(naive) = strip_utc_suffix(text).and_then(parse_naive) {
        return Some(Utc.from_utc_datetime(&naive).timestamp());
    }
    local_epoch(&parse_naive(text)?)
}

/// "2013-12-11 07:48 UTC" -> "2013-12-11 07:48"
fn strip_utc_suffix(text: &str) -> Option<&str> {
    let split = text.len().checked_sub(4)?;
    let suffix = text.get(split..)?;
    (suffix.eq_ignore_ascii_case(" utc") || suffix.eq_ignore_ascii_case(" gmt"))
        .then(|| text[..split].trim_end())
}

fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    NAIVE_DATETIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())
        .or_else(|| {
            NAIVE_DATE_LAYOUTS
                .iter()
                .find_map(|layout| NaiveDate::parse_from_str(text, layout).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Sum of "[+-]N unit" terms, negated as a whole by a trailing "ago"
fn parse_offset(text: &str, now: DateTime<Local>) -> Option<i64> {
    let caps = patterns().offset.captures(text)?;
    let past = caps.get(3).is_some_and(|m| m.as_str() == "ago");
    if past && caps.get(1).is_some() {
        // "in 2 days ago"
        return None;
    }

    let mut months: i64 = 0;
    let mut seconds: i64 = 0;
    for term in patterns().offset_term.captures_iter(&caps[2]) {
        let mut amount = parse_amount(&term[2])?;
        if &term[1] == "-" {
            amount = -amount;
        }
        if past {
            amount = -amount;
        }
        accumulate(parse_unit(&term[3])?, amount, &mut months, &mut seconds)?;
    }
    Some(shift(now, months, seconds)?.timestamp())
}

/// "next week" is one week ahead, "this month" is now
fn parse_period(text: &str, now: DateTime<Local>) -> Option<i64> {
    let caps = patterns().period.captures(text)?;
    let amount = match &caps[1] {
        "next" => 1,
        "last" | "previous" => -1,
        _ => 0,
    };
    let (mut months, mut seconds) = (0, 0);
    accumulate(parse_unit(&caps[2])?, amount, &mut months, &mut seconds)?;
    Some(shift(now, months, seconds)?.timestamp())
}

/// A calendar day, optionally followed by a clock time (midnight otherwise)
fn parse_anchored(text: &str, now: DateTime<Local>) -> Option<i64> {
    let patterns = patterns();
    let today = now.date_naive();

    let (date, time) = if let Some(caps) = patterns.day_keyword.captures(text) {
        let (days, default) = match &caps[1] {
            "yesterday" => (-1, NaiveTime::MIN),
            "tomorrow" => (1, NaiveTime::MIN),
            "noon" => (0, NaiveTime::from_hms_opt(12, 0, 0)?),
            _ => (0, NaiveTime::MIN),
        };
        (
            today.checked_add_signed(Duration::days(days))?,
            captured_time(&caps, 2, default)?,
        )
    } else if let Some(caps) = patterns.weekday.captures(text) {
        let target = parse_weekday(&caps[2])?;
        let modifier = caps.get(1).map(|m| m.as_str());
        (
            weekday_date(today, target, modifier)?,
            captured_time(&caps, 3, NaiveTime::MIN)?,
        )
    } else if let Some(caps) = patterns.day_month.captures(text) {
        (
            calendar_date(today, caps.get(3).map(|m| m.as_str()), &caps[2], &caps[1])?,
            captured_time(&caps, 4, NaiveTime::MIN)?,
        )
    } else if let Some(caps) = patterns.month_day.captures(text) {
        (
            calendar_date(today, caps.get(3).map(|m| m.as_str()), &caps[1], &caps[2])?,
            captured_time(&caps, 4, NaiveTime::MIN)?,
        )
    } else {
        return None;
    };

    local_epoch(&date.and_time(time))
}

/// Clock time from three consecutive groups, `default` when absent
fn captured_time(caps: &Captures, first: usize, default: NaiveTime) -> Option<NaiveTime> {
    let Some(hour) = caps.get(first) else {
        return Some(default);
    };
    let minute = caps.get(first + 1)?.as_str().parse().ok()?;
    let second = match caps.get(first + 2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    NaiveTime::from_hms_opt(hour.as_str().parse().ok()?, minute, second)
}

/// Bare or "this" weekday includes today, "next" and "last" never do
fn weekday_date(today: NaiveDate, target: Weekday, modifier: Option<&str>) -> Option<NaiveDate> {
    let ahead = i64::from(
        (7 + target.num_days_from_monday() - today.weekday().num_days_from_monday()) % 7,
    );
    let days = match modifier {
        Some("next") if ahead == 0 => 7,
        Some("last") | Some("previous") if ahead == 0 => -7,
        Some("last") | Some("previous") => ahead - 7,
        _ => ahead,
    };
    today.checked_add_signed(Duration::days(days))
}

fn calendar_date(today: NaiveDate, year: Option<&str>, month: &str, day: &str) -> Option<NaiveDate> {
    let year = match year {
        Some(year) => year.parse().ok()?,
        None => today.year(),
    };
    NaiveDate::from_ymd_opt(year, month_number(month)?, day.parse().ok()?)
}

fn month_number(name: &str) -> Option<u32> {
    if let Some(month) = locale::month_from_genitive(name) {
        return Some(month);
    }
    if name == "sept" {
        return Some(9);
    }
    ENGLISH_MONTHS
        .iter()
        .position(|month| *month == name || month[..3] == *name)
        .map(|index| index as u32 + 1)
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    let weekday = match name {
        "sunday" | "sun" => Weekday::Sun,
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tues" | "tue" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thurs" | "thur" | "thu" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        _ => return None,
    };
    Some(weekday)
}

fn parse_amount(word: &str) -> Option<i64> {
    match word {
        "a" | "an" | "one" => Some(1),
        digits => digits.parse().ok(),
    }
}

fn parse_unit(word: &str) -> Option<Unit> {
    let unit = match word {
        "sec" | "second" => Unit::Second,
        "min" | "minute" => Unit::Minute,
        "hour" => Unit::Hour,
        "day" => Unit::Day,
        "week" => Unit::Week,
        "month" => Unit::Month,
        "year" => Unit::Year,
        _ => return None,
    };
    Some(unit)
}

/// Add `amount` of `unit` to the calendar-month or fixed-second total
fn accumulate(unit: Unit, amount: i64, months: &mut i64, seconds: &mut i64) -> Option<()> {
    match unit.seconds() {
        Some(secs) => *seconds = seconds.checked_add(amount.checked_mul(secs)?)?,
        None => {
            let per_unit = if unit == Unit::Year { 12 } else { 1 };
            *months = months.checked_add(amount.checked_mul(per_unit)?)?;
        }
    }
    Some(())
}

/// Months first (clamped to month end), then fixed seconds
fn shift(now: DateTime<Local>, months: i64, seconds: i64) -> Option<DateTime<Local>> {
    let delta = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    let moved = if months < 0 {
        now.checked_sub_months(delta)?
    } else {
        now.checked_add_months(delta)?
    };
    moved.checked_add_signed(Duration::try_seconds(seconds)?)
}

/// Epoch seconds of a wall-clock time in the host zone. Ambiguous times
/// (DST fall-back) take the earlier instant; skipped ones are rejected.
fn local_epoch(naive: &NaiveDateTime) -> Option<i64> {
    match Local.from_local_datetime(naive) {
        LocalResult::Single(dt) => Some(dt.timestamp()),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.timestamp()),
        LocalResult::None => None,
    }
}
