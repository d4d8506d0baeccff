//! Integration tests for reldate
//!
//! These go through the public API only, with a fixed "now" and named zones
//! so results don't depend on the host clock or timezone.

use chrono::{NaiveDate, TimeZone};
use chrono_tz::Europe::Moscow;

use reldate::{
    decompose, format_ago, format_date, FormatError, FormatterConfig, PluralCategory,
    RelativeTimeFormatter, Unit, Zone,
};

fn moscow_ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> i64 {
    let naive = NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap();
    Moscow.from_local_datetime(&naive).unwrap().timestamp()
}

fn formatter(ts: i64) -> RelativeTimeFormatter {
    RelativeTimeFormatter::new(ts)
        .unwrap()
        .with_timezone("Europe/Moscow")
}

#[test]
fn test_plural_forms_for_every_unit() {
    for unit in Unit::ALL {
        let [one, few, many] = *unit.forms();
        assert_eq!(unit.word(0), many, "{unit:?}");
        for n in [1, 21, 91, 1001] {
            assert_eq!(unit.word(n), one, "{unit:?} {n}");
        }
        for n in [2, 3, 4, 22, 23, 24] {
            assert_eq!(unit.word(n), few, "{unit:?} {n}");
        }
        for n in (5..=9).chain(11..=19) {
            assert_eq!(unit.word(n), many, "{unit:?} {n}");
        }
    }
    assert_eq!(PluralCategory::for_count(-21), PluralCategory::One);
}

#[test]
fn test_generate_relative_words() {
    // Wednesday 11 December 2013, 15:00 Moscow time
    let now = moscow_ts(2013, 12, 11, 15, 0);
    let cases = [
        (moscow_ts(2013, 12, 11, 11, 48), "сегодня в 11:48"),
        (moscow_ts(2013, 12, 10, 11, 48), "вчера в 11:48"),
        (moscow_ts(2013, 12, 9, 11, 48), "позавчера в 11:48"),
        (moscow_ts(2013, 12, 12, 9, 0), "завтра в 09:00"),
        (moscow_ts(2013, 12, 13, 9, 0), "послезавтра в 09:00"),
        (moscow_ts(2013, 12, 7, 20, 15), "в субботу в 20:15"),
        (moscow_ts(2013, 12, 17, 20, 15), "во вторник в 20:15"),
        (moscow_ts(2013, 11, 11, 11, 48), "11 ноября в 11:48"),
        (moscow_ts(2012, 5, 1, 10, 0), "1 мая 2012 г. в 10:00"),
    ];
    for (target, expected) in cases {
        assert_eq!(formatter(target).generate_at(now).unwrap(), expected);
    }
}

#[test]
fn test_generate_clock_options() {
    let target = moscow_ts(2013, 12, 11, 11, 48);
    let now = target + 60;
    assert_eq!(
        formatter(target).with_clock_time(false).generate_at(now).unwrap(),
        "сегодня"
    );
    assert_eq!(
        formatter(target).with_seconds(true).generate_at(now).unwrap(),
        "сегодня в 11:48:00"
    );
}

#[test]
fn test_generate_at_same_instant_is_today() {
    let now = moscow_ts(2013, 12, 11, 23, 59);
    let phrase = formatter(now).with_clock_time(false).generate_at(now).unwrap();
    assert_eq!(phrase, "сегодня");
    assert_eq!(formatter(now).generate_at(now).unwrap(), "сегодня в 23:59");
}

#[test]
fn test_display_string_matches_generate() {
    let target = chrono::Utc::now().timestamp() - 3600;
    let display = formatter(target).to_display_string().unwrap();
    let generated = formatter(target).generate().unwrap();
    assert_eq!(display, generated);
}

#[test]
fn test_ago_thresholds() {
    let r = 1_000_000_000;
    let cases = [
        (r - 59, "59 секунд назад"),
        (r - 60, "минуту назад"),
        (r - 3599, "59 минут назад"),
        (r - 3600, "час назад"),
        (r - 86_399, "23 часа назад"),
        (r - 86_400, "день назад"),
        (r - 604_799, "6 дней назад"),
        (r - 604_800, "неделю назад"),
        (r + 21 * 60, "через 21 минуту"),
        (r + 2 * 3600, "через 2 часа"),
    ];
    for (target, expected) in cases {
        assert_eq!(formatter(target).ago(true, r).unwrap(), expected);
    }
}

#[test]
fn test_ago_sign() {
    assert!(formatter(900).ago(true, 1000).unwrap().ends_with(" назад"));
    assert!(formatter(1100).ago(true, 1000).unwrap().starts_with("через "));
}

#[test]
fn test_ago_anniversaries() {
    let min = moscow_ts(2020, 1, 15, 12, 0);
    let before = moscow_ts(2021, 1, 14, 12, 0);
    let on = moscow_ts(2021, 1, 15, 12, 0);

    assert_eq!(formatter(min).ago(true, before).unwrap(), "11 месяцев назад");
    assert_eq!(formatter(min).ago(true, on).unwrap(), "год назад");
    assert_eq!(formatter(before).ago(true, min).unwrap(), "через 11 месяцев");
}

#[test]
fn test_ago_without_weeks() {
    let reference = moscow_ts(2021, 3, 25, 12, 0);
    let target = moscow_ts(2021, 3, 10, 12, 0);
    assert_eq!(formatter(target).ago(true, reference).unwrap(), "2 недели назад");
    assert_eq!(formatter(target).ago(false, reference).unwrap(), "15 дней назад");
}

#[test]
fn test_integer_timestamp_is_untouched() {
    for ts in [0_i64, 1, 1_386_748_080, -86_400] {
        assert_eq!(RelativeTimeFormatter::new(ts).unwrap().timestamp(), ts);
    }
    assert_eq!(
        RelativeTimeFormatter::new("1386748080").unwrap().timestamp(),
        1_386_748_080
    );
}

#[test]
fn test_invalid_timestamp() {
    assert_eq!(
        RelativeTimeFormatter::new("the day after never"),
        Err(FormatError::InvalidTimestamp("the day after never".to_string()))
    );
    assert!(format_ago("??", None, None, true, 0).is_err());
}

#[test]
fn test_override_leaves_host_zone_alone() {
    let tz_before = std::env::var("TZ").ok();
    let host_before = decompose(1_386_748_080, &Zone::Host).unwrap();

    let phrase = format_date(1_386_748_080, None, Some("Asia/Tokyo"), true, false)
        .unwrap()
        .generate_at(1_386_748_080)
        .unwrap();
    assert_eq!(phrase, "сегодня в 16:48");

    assert_eq!(std::env::var("TZ").ok(), tz_before);
    assert_eq!(decompose(1_386_748_080, &Zone::Host).unwrap(), host_before);
}

#[test]
fn test_shared_across_threads() {
    let formatter = std::sync::Arc::new(formatter(moscow_ts(2013, 12, 11, 11, 48)));
    let handles: Vec<_> = ["UTC", "Asia/Tokyo", "America/New_York"]
        .into_iter()
        .map(|tz| {
            let formatter = formatter.clone();
            std::thread::spawn(move || {
                let local = (*formatter).clone().with_timezone(tz);
                (
                    formatter.generate_at(formatter.timestamp()).unwrap(),
                    local.generate_at(local.timestamp()).unwrap(),
                )
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (moscow, _) in &results {
        assert_eq!(moscow, "сегодня в 11:48");
    }
    let locals: Vec<_> = results.into_iter().map(|(_, local)| local).collect();
    assert_eq!(
        locals,
        vec!["сегодня в 07:48", "сегодня в 16:48", "сегодня в 02:48"]
    );
}

#[test]
fn test_config_from_json() {
    let config: FormatterConfig = serde_json::from_str(
        r#"{"timestamp": 1386748080, "timezone": "Europe/Moscow", "include_clock_time": false}"#,
    )
    .unwrap();
    let formatter = RelativeTimeFormatter::from_config(config);
    assert_eq!(formatter.timezone(), "Europe/Moscow");
    assert_eq!(formatter.generate_at(1_386_748_080 + 86_400).unwrap(), "вчера");
}

#[test]
fn test_format_ago_helper() {
    let reference = moscow_ts(2021, 6, 1, 0, 0);
    assert_eq!(
        format_ago(
            moscow_ts(2021, 2, 1, 0, 0),
            Some("UTF-8"),
            Some("Europe/Moscow"),
            true,
            reference
        )
        .unwrap(),
        "4 месяца назад"
    );
}
