use serde::{Deserialize, Serialize};

/// Label of the only text encoding the formatter produces natively
pub const NATIVE_ENCODING: &str = "UTF-8";

/// Options shared by [`generate`](crate::RelativeTimeFormatter::generate) and
/// [`ago`](crate::RelativeTimeFormatter::ago).
///
/// `timezone: None` always means "host default"; an empty string is folded
/// into `None` by the setters and on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterConfig {
    pub timestamp: i64,
    #[serde(default = "default_true")]
    pub include_clock_time: bool,
    #[serde(default)]
    pub include_seconds: bool,
    #[serde(default, deserialize_with = "deserialize_timezone")]
    pub timezone: Option<String>,
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

fn default_true() -> bool {
    true
}

fn default_encoding() -> String {
    NATIVE_ENCODING.to_string()
}

fn deserialize_timezone<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(normalize_timezone(raw))
}

pub(crate) fn normalize_timezone(timezone: Option<String>) -> Option<String> {
    timezone.filter(|tz| !tz.trim().is_empty())
}

impl FormatterConfig {
    pub fn new(timestamp: i64) -> Self {
        Self {
            timestamp,
            include_clock_time: true,
            include_seconds: false,
            timezone: None,
            encoding: default_encoding(),
        }
    }

    pub fn with_clock_time(mut self, include: bool) -> Self {
        self.include_clock_time = include;
        self
    }

    pub fn with_seconds(mut self, include: bool) -> Self {
        self.include_seconds = include;
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = normalize_timezone(Some(timezone.into()));
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    /// Whether the configured output encoding differs from the native one
    pub fn needs_transcoding(&self) -> bool {
        !self.encoding.eq_ignore_ascii_case(NATIVE_ENCODING)
            && !self.encoding.eq_ignore_ascii_case("utf8")
    }
}
