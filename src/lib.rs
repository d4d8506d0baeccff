//! reldate - Human-friendly Russian dates and time-ago phrases
//!
//! This library renders a point in time the way a person would say it:
//!
//! - Relative days: "сегодня в 11:48", "позавчера", "в пятницу"
//! - Full dates when far away: "11 ноября 2013 г. в 11:48"
//! - Time-ago phrases with noun agreement: "57 секунд назад", "через 2 недели",
//!   "4 месяца назад"
//!
//! Month and year gaps are calendar-aware: a year only counts once its
//! anniversary is reached, so 2020-01-15 to 2021-01-14 is "11 месяцев".
//!
//! # Architecture
//!
//! - [`formatter`]: the [`RelativeTimeFormatter`] and both renderers
//! - [`model`]: calendar fields and units with their plural forms
//! - [`timezone`]: zone resolution and pure calendar decomposition
//! - [`parse`]: turning free-form timestamps into epoch seconds
//! - [`config`]: serializable formatter options
//! - [`error`]: error types
//!
//! # Example
//!
//! ```rust,no_run
//! use reldate::RelativeTimeFormatter;
//!
//! fn main() -> reldate::FormatResult<()> {
//!     let formatter = RelativeTimeFormatter::new("2013-12-11 11:48")?
//!         .with_timezone("Europe/Moscow");
//!     println!("{}", formatter.generate()?);
//!     println!("{}", formatter.ago(true, 0)?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod formatter;
mod locale;
pub mod model;
pub mod parse;
pub mod timezone;

// Re-export commonly used types at the crate root
pub use config::FormatterConfig;
pub use error::{FormatError, FormatResult};
pub use formatter::{format_ago, format_date, RelativeTimeFormatter};
pub use model::{CalendarPoint, PluralCategory, Unit};
pub use parse::TimestampInput;
pub use timezone::{decompose, Zone};
