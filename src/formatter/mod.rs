//! The relative time formatter and its convenience constructors.

mod ago;
mod generate;

pub use ago::{humanize, measure};
pub use generate::{render, ClockFormat};

use chrono::Utc;

use crate::config::{normalize_timezone, FormatterConfig};
use crate::error::FormatResult;
use crate::parse::TimestampInput;
use crate::timezone::{decompose, host_timezone_name, Zone};

/// Renders one instant as a Russian relative date ("вчера в 11:48") or as a
/// time-ago phrase ("4 месяца назад").
///
/// The timezone is resolved every time something is rendered, so an unknown
/// zone set through [`set_timezone`](Self::set_timezone) only fails there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeTimeFormatter {
    config: FormatterConfig,
}

impl RelativeTimeFormatter {
    /// Create a formatter with clock time on and seconds off.
    ///
    /// Text that is not an integer is parsed as a date, failing with
    /// [`FormatError::InvalidTimestamp`](crate::FormatError::InvalidTimestamp).
    pub fn new(timestamp: impl Into<TimestampInput>) -> FormatResult<Self> {
        let timestamp = timestamp.into().to_epoch()?;
        Ok(Self::from_config(FormatterConfig::new(timestamp)))
    }

    pub fn from_config(config: FormatterConfig) -> Self {
        if config.needs_transcoding() {
            tracing::warn!(
                encoding = %config.encoding,
                "output encoding is not supported, text stays UTF-8"
            );
        }
        Self { config }
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.set_timezone(timezone);
        self
    }

    pub fn with_clock_time(mut self, include: bool) -> Self {
        self.config.include_clock_time = include;
        self
    }

    pub fn with_seconds(mut self, include: bool) -> Self {
        self.config.include_seconds = include;
        self
    }

    pub fn with_encoding(self, encoding: impl Into<String>) -> Self {
        Self::from_config(self.config.with_encoding(encoding))
    }

    /// Epoch seconds being formatted
    pub fn timestamp(&self) -> i64 {
        self.config.timestamp
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// The override zone, or the host default when none is set
    pub fn timezone(&self) -> String {
        self.config
            .timezone
            .clone()
            .unwrap_or_else(host_timezone_name)
    }

    /// Override the zone used for calendar math. An empty id restores the
    /// host default.
    pub fn set_timezone(&mut self, timezone: impl Into<String>) {
        self.config.timezone = normalize_timezone(Some(timezone.into()));
    }

    /// Relative date as of now, e.g. "позавчера в 08:05"
    pub fn generate(&self) -> FormatResult<String> {
        self.generate_at(Utc::now().timestamp())
    }

    /// Relative date as of `now` (epoch seconds)
    pub fn generate_at(&self, now: i64) -> FormatResult<String> {
        let zone = self.zone()?;
        let target = decompose(self.config.timestamp, &zone)?;
        let current = decompose(now, &zone)?;
        let gap = self.config.timestamp.abs_diff(now).min(i64::MAX as u64) as i64;
        let clock = ClockFormat {
            enabled: self.config.include_clock_time,
            seconds: self.config.include_seconds,
        };
        Ok(render(&target, &current, gap, clock))
    }

    /// Time-ago phrase relative to `reference` (epoch seconds, `0` for now).
    ///
    /// With `include_weeks` off, gaps of 7-27 days are measured in days.
    pub fn ago(&self, include_weeks: bool, reference: i64) -> FormatResult<String> {
        let reference = if reference == 0 {
            Utc::now().timestamp()
        } else {
            reference
        };
        humanize(self.config.timestamp, reference, include_weeks, &self.zone()?)
    }

    /// Same as [`generate`](Self::generate)
    pub fn to_display_string(&self) -> FormatResult<String> {
        self.generate()
    }

    fn zone(&self) -> FormatResult<Zone> {
        Zone::resolve(self.config.timezone.as_deref())
    }
}

/// Build a formatter in one call. `None` keeps the UTF-8 encoding and the
/// host zone.
pub fn format_date(
    timestamp: impl Into<TimestampInput>,
    encoding: Option<&str>,
    timezone: Option<&str>,
    include_clock_time: bool,
    include_seconds: bool,
) -> FormatResult<RelativeTimeFormatter> {
    let mut config = FormatterConfig::new(timestamp.into().to_epoch()?)
        .with_clock_time(include_clock_time)
        .with_seconds(include_seconds);
    if let Some(encoding) = encoding {
        config = config.with_encoding(encoding);
    }
    if let Some(timezone) = timezone {
        config = config.with_timezone(timezone);
    }
    Ok(RelativeTimeFormatter::from_config(config))
}

/// Time-ago phrase in one call
pub fn format_ago(
    timestamp: impl Into<TimestampInput>,
    encoding: Option<&str>,
    timezone: Option<&str>,
    include_weeks: bool,
    reference: i64,
) -> FormatResult<String> {
    format_date(timestamp, encoding, timezone, true, false)?.ago(include_weeks, reference)
}
