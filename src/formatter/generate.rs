use crate::locale;
use crate::model::CalendarPoint;

/// Beyond this gap a date from another year is written out in full
const NEAR_GAP_SECONDS: i64 = 7 * 24 * 3600;

/// How far a weekday name is still unambiguous
const WEEKDAY_WINDOW_DAYS: i64 = 6;

/// Clock-time rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockFormat {
    pub enabled: bool,
    pub seconds: bool,
}

/// Render `target` relative to `now`.
///
/// `gap` is the absolute distance between the two instants in seconds.
pub fn render(
    target: &CalendarPoint,
    now: &CalendarPoint,
    gap: i64,
    clock: ClockFormat,
) -> String {
    let date = if target.year == now.year || gap <= NEAR_GAP_SECONDS {
        near_date(target, now)
    } else {
        format!(
            "{} {} {} {}",
            target.day,
            locale::month_name(target.month),
            target.year,
            locale::YEAR_SUFFIX
        )
    };

    match clock_time(target, clock) {
        Some(time) => format!("{date} {} {time}", locale::AT),
        None => date,
    }
}

fn near_date(target: &CalendarPoint, now: &CalendarPoint) -> String {
    // Calendar-day difference rather than day-of-year, so Dec 31 -> Jan 1 is
    // still "tomorrow".
    let delta = now.days_until(target);
    let word = match delta {
        0 => locale::TODAY,
        -1 => locale::YESTERDAY,
        -2 => locale::DAY_BEFORE_YESTERDAY,
        1 => locale::TOMORROW,
        2 => locale::DAY_AFTER_TOMORROW,
        d if d.abs() <= WEEKDAY_WINDOW_DAYS => locale::weekday_phrase(target.weekday),
        _ => return format!("{} {}", target.day, locale::month_name(target.month)),
    };
    word.to_string()
}

fn clock_time(target: &CalendarPoint, clock: ClockFormat) -> Option<String> {
    if !clock.enabled {
        return None;
    }
    let time = if clock.seconds {
        format!("{:02}:{:02}:{:02}", target.hour, target.minute, target.second)
    } else {
        format!("{:02}:{:02}", target.hour, target.minute)
    };
    Some(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const CLOCK: ClockFormat = ClockFormat {
        enabled: true,
        seconds: false,
    };
    const NO_CLOCK: ClockFormat = ClockFormat {
        enabled: false,
        seconds: false,
    };

    fn point(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> CalendarPoint {
        let local = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap();
        CalendarPoint::from_local(&local)
    }

    fn gap(a: &CalendarPoint, b: &CalendarPoint) -> i64 {
        a.days_until(b).abs() * 86_400
    }

    #[test]
    fn test_relative_days() {
        // Wednesday
        let now = point(2013, 12, 11, 12, 0, 0);
        let cases = [
            (point(2013, 12, 11, 11, 48, 0), "сегодня в 11:48"),
            (point(2013, 12, 10, 11, 48, 0), "вчера в 11:48"),
            (point(2013, 12, 9, 8, 5, 0), "позавчера в 08:05"),
            (point(2013, 12, 12, 23, 59, 0), "завтра в 23:59"),
            (point(2013, 12, 13, 0, 0, 0), "послезавтра в 00:00"),
        ];
        for (target, expected) in cases {
            assert_eq!(render(&target, &now, gap(&target, &now), CLOCK), expected);
        }
    }

    #[test]
    fn test_weekday_window() {
        let now = point(2013, 12, 11, 12, 0, 0);
        let last_thursday = point(2013, 12, 5, 9, 0, 0);
        assert_eq!(
            render(&last_thursday, &now, gap(&last_thursday, &now), NO_CLOCK),
            "в четверг"
        );
        let next_tuesday = point(2013, 12, 17, 9, 0, 0);
        assert_eq!(
            render(&next_tuesday, &now, gap(&next_tuesday, &now), NO_CLOCK),
            "во вторник"
        );
    }

    #[test]
    fn test_same_year_outside_week() {
        let now = point(2013, 12, 11, 12, 0, 0);
        let target = point(2013, 11, 11, 11, 48, 0);
        assert_eq!(
            render(&target, &now, gap(&target, &now), CLOCK),
            "11 ноября в 11:48"
        );
    }

    #[test]
    fn test_other_year_includes_year() {
        let now = point(2014, 2, 1, 12, 0, 0);
        let target = point(2013, 11, 11, 11, 48, 0);
        assert_eq!(
            render(&target, &now, gap(&target, &now), CLOCK),
            "11 ноября 2013 г. в 11:48"
        );
    }

    #[test]
    fn test_across_new_year() {
        let now = point(2013, 12, 31, 22, 0, 0);
        let target = point(2014, 1, 1, 1, 30, 0);
        assert_eq!(render(&target, &now, 3 * 3600, CLOCK), "завтра в 01:30");

        let target = point(2014, 1, 3, 10, 0, 0);
        assert_eq!(render(&target, &now, gap(&target, &now), NO_CLOCK), "в пятницу");
    }

    #[test]
    fn test_seconds() {
        let now = point(2013, 12, 11, 12, 0, 0);
        let target = point(2013, 12, 11, 7, 8, 9);
        let clock = ClockFormat {
            enabled: true,
            seconds: true,
        };
        assert_eq!(render(&target, &now, 0, clock), "сегодня в 07:08:09");
    }
}
