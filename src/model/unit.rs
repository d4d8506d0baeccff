use crate::locale;

/// Grammatical number selected by a count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralCategory {
    /// 1, 21, 31, ... (but not 11)
    One,
    /// 2-4, 22-24, ... (but not 12-14)
    Few,
    /// 0, 5-20, 25-30, ...
    Many,
}

impl PluralCategory {
    /// Pick the category for a count. Only the magnitude matters.
    pub fn for_count(count: i64) -> Self {
        let n = count.unsigned_abs();
        if n == 0 || (10..=20).contains(&(n % 100)) {
            return PluralCategory::Many;
        }
        match n % 10 {
            1 => PluralCategory::One,
            2..=4 => PluralCategory::Few,
            _ => PluralCategory::Many,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PluralCategory::One => 0,
            PluralCategory::Few => 1,
            PluralCategory::Many => 2,
        }
    }
}

/// Calendar unit a time gap is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    pub const ALL: [Unit; 7] = [
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Week,
        Unit::Month,
        Unit::Year,
    ];

    /// Fixed length in seconds. Months and years have none.
    pub fn seconds(self) -> Option<i64> {
        match self {
            Unit::Second => Some(1),
            Unit::Minute => Some(60),
            Unit::Hour => Some(3600),
            Unit::Day => Some(86_400),
            Unit::Week => Some(604_800),
            Unit::Month | Unit::Year => None,
        }
    }

    /// The three noun forms (one, few, many)
    pub fn forms(self) -> &'static [&'static str; 3] {
        &locale::UNIT_FORMS[self as usize]
    }

    /// Noun form agreeing with `count`
    pub fn word(self, count: i64) -> &'static str {
        self.forms()[PluralCategory::for_count(count).index()]
    }
}
