//! Russian word tables.
//!
//! Every table is indexed by an enum discriminant or a calendar field, never
//! by string keys.

/// Noun forms per [`Unit`](crate::Unit), in declaration order: one, few, many.
/// Accusative, as they appear after "через" and before "назад".
pub(crate) static UNIT_FORMS: [[&str; 3]; 7] = [
    ["секунду", "секунды", "секунд"],
    ["минуту", "минуты", "минут"],
    ["час", "часа", "часов"],
    ["день", "дня", "дней"],
    ["неделю", "недели", "недель"],
    ["месяц", "месяца", "месяцев"],
    ["год", "года", "лет"],
];

/// Genitive month names, January first
pub(crate) const MONTHS: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// "on <weekday>" phrases, Sunday first
const WEEKDAYS: [&str; 7] = [
    "в воскресенье",
    "в понедельник",
    "во вторник",
    "в среду",
    "в четверг",
    "в пятницу",
    "в субботу",
];

pub(crate) const TODAY: &str = "сегодня";
pub(crate) const YESTERDAY: &str = "вчера";
pub(crate) const DAY_BEFORE_YESTERDAY: &str = "позавчера";
pub(crate) const TOMORROW: &str = "завтра";
pub(crate) const DAY_AFTER_TOMORROW: &str = "послезавтра";

/// Joins a date phrase and its clock time
pub(crate) const AT: &str = "в";
/// Abbreviation following a full year
pub(crate) const YEAR_SUFFIX: &str = "г.";

/// Month name for a 1-based month number
pub(crate) fn month_name(month: u32) -> &'static str {
    MONTHS
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or_default()
}

/// 1-based month number for a genitive month name ("декабря" -> 12)
pub(crate) fn month_from_genitive(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|month| *month == name)
        .map(|index| index as u32 + 1)
}

/// Weekday phrase for a 0-based, Sunday-first index
pub(crate) fn weekday_phrase(weekday: u32) -> &'static str {
    WEEKDAYS.get(weekday as usize).copied().unwrap_or_default()
}

pub(crate) fn past(phrase: &str) -> String {
    format!("{phrase} назад")
}

pub(crate) fn future(phrase: &str) -> String {
    format!("через {phrase}")
}
