mod calendar;
mod unit;

pub use calendar::CalendarPoint;
pub use unit::{PluralCategory, Unit};
