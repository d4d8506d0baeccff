//! Signed gap between two instants as a single "magnitude + unit" phrase.

use crate::error::FormatResult;
use crate::locale;
use crate::model::{CalendarPoint, Unit};
use crate::timezone::{decompose, Zone};

const MINUTE: i64 = 60;
const HOUR: i64 = 3600;
const DAY: i64 = 86_400;
const WEEK: i64 = 604_800;
/// Gaps shorter than this may be expressed in weeks
const WEEKS_LIMIT: i64 = 28 * DAY;

/// Phrase for `target` as seen from `reference`, e.g. "5 минут назад" or
/// "через месяц".
pub fn humanize(
    target: i64,
    reference: i64,
    include_weeks: bool,
    zone: &Zone,
) -> FormatResult<String> {
    let (magnitude, unit) = measure(target, reference, include_weeks, zone)?;
    tracing::trace!(target, reference, magnitude, ?unit, "humanized gap");

    let phrase = phrase(magnitude, unit);
    Ok(if target < reference {
        locale::past(&phrase)
    } else {
        locale::future(&phrase)
    })
}

/// Pick the unit and magnitude for the gap between two instants
pub fn measure(
    target: i64,
    reference: i64,
    include_weeks: bool,
    zone: &Zone,
) -> FormatResult<(i64, Unit)> {
    let dt = target.abs_diff(reference).min(i64::MAX as u64) as i64;

    let fixed = match dt {
        dt if dt < MINUTE => Some((dt, Unit::Second)),
        dt if dt < HOUR => Some((dt / MINUTE, Unit::Minute)),
        dt if dt < DAY => Some((dt / HOUR, Unit::Hour)),
        dt if dt < WEEK => Some((dt / DAY, Unit::Day)),
        dt if dt < WEEKS_LIMIT && include_weeks => Some((dt / WEEK, Unit::Week)),
        _ => None,
    };
    if let Some(found) = fixed {
        return Ok(found);
    }

    let (earlier, later) = if target < reference {
        (target, reference)
    } else {
        (reference, target)
    };
    let min = decompose(earlier, zone)?;
    let max = decompose(later, zone)?;

    if let Some(years) = full_years(&min, &max) {
        return Ok((years, Unit::Year));
    }
    if let Some(months) = full_months(&min, &max) {
        return Ok((months, Unit::Month));
    }

    // Under one month by the anniversary rule: fall back to the raw gap
    Ok(if include_weeks {
        (dt / WEEK, Unit::Week)
    } else {
        (dt / DAY, Unit::Day)
    })
}

/// Whole years from `min` to `max`, if at least one anniversary has passed
fn full_years(min: &CalendarPoint, max: &CalendarPoint) -> Option<i64> {
    let diff = i64::from(max.year) - i64::from(min.year);
    let reached = diff > 1
        || (diff == 1
            && (max.day_of_year > min.day_of_year
                || (max.day_of_year == min.day_of_year
                    && max.seconds_since_midnight() >= min.seconds_since_midnight())));
    if !reached {
        return None;
    }
    Some(if max.day_of_year < min.day_of_year {
        diff - 1
    } else {
        diff
    })
}

/// Whole months from `min` to `max` (less than a year apart), if at least one
/// monthly anniversary has passed
fn full_months(min: &CalendarPoint, max: &CalendarPoint) -> Option<i64> {
    let mut diff = i64::from(max.month) - i64::from(min.month);
    if diff < 0 || (diff == 0 && max.year > min.year) {
        // Same month number a year later is just short of twelve months
        diff += 12;
    }
    let reached = diff > 1
        || (diff == 1
            && (max.day > min.day
                || (max.day == min.day
                    && max.seconds_since_midnight() >= min.seconds_since_midnight())));
    if !reached {
        return None;
    }
    let short_of_day = max.day < min.day
        || (diff == 12
            && max.day == min.day
            && max.seconds_since_midnight() < min.seconds_since_midnight());
    Some(if short_of_day { diff - 1 } else { diff })
}

/// "5 минут", "2 часа", or the bare noun for a magnitude of one
fn phrase(magnitude: i64, unit: Unit) -> String {
    let word = unit.word(magnitude);
    if magnitude > 1 {
        format!("{magnitude} {word}")
    } else {
        word.to_string()
    }
}
