//! Timezone resolution and calendar decomposition.
//!
//! Decomposition takes the zone as a value and never touches process-wide
//! state, so formatters can be shared across threads freely.

use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{FormatError, FormatResult};
use crate::model::CalendarPoint;

/// Host zone name when it has no tz-database id
const HOST_ZONE_NAME: &str = "Local";

/// The zone calendar fields are computed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Whatever the host reports as local time
    Host,
    /// An IANA zone from the tz database
    Named(Tz),
}

impl Zone {
    /// Resolve an optional override. `None`, an empty id or "Local" means the
    /// host zone.
    pub fn resolve(id: Option<&str>) -> FormatResult<Self> {
        match id.map(str::trim) {
            None | Some("") | Some(HOST_ZONE_NAME) => Ok(Zone::Host),
            Some(id) => {
                let tz = id
                    .parse::<Tz>()
                    .map_err(|_| FormatError::UnknownTimezone(id.to_string()))?;
                tracing::debug!(timezone = %tz.name(), "resolved timezone override");
                Ok(Zone::Named(tz))
            }
        }
    }
}

/// Name of the host default zone.
///
/// `$TZ` wins when it names a tz-database zone. Without `$TZ` the system
/// zone is asked for its IANA id. Anything else (a POSIX rule in `$TZ`, an
/// unnamed system zone) is reported as "Local". The result always resolves
/// back to the zone the host is using.
pub fn host_timezone_name() -> String {
    let from_env = std::env::var("TZ")
        .ok()
        .map(|tz| tz.trim().trim_start_matches(':').to_string())
        .filter(|tz| !tz.is_empty());

    let name = match from_env {
        Some(tz) => Some(tz),
        None => match iana_time_zone::get_timezone() {
            Ok(tz) => Some(tz),
            Err(err) => {
                tracing::debug!(error = %err, "host timezone has no IANA id");
                None
            }
        },
    };

    name.filter(|tz| tz.parse::<Tz>().is_ok())
        .unwrap_or_else(|| HOST_ZONE_NAME.to_string())
}

/// Calendar fields of `timestamp` (epoch seconds) in `zone`
pub fn decompose(timestamp: i64, zone: &Zone) -> FormatResult<CalendarPoint> {
    let utc = DateTime::<Utc>::from_timestamp(timestamp, 0)
        .ok_or_else(|| FormatError::InvalidTimestamp(timestamp.to_string()))?;
    let local = match zone {
        Zone::Host => Local.from_utc_datetime(&utc.naive_utc()).naive_local(),
        Zone::Named(tz) => tz.from_utc_datetime(&utc.naive_utc()).naive_local(),
    };
    Ok(CalendarPoint::from_local(&local))
}
