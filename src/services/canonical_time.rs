use chrono::{DateTime, NaiveDate, NaiveDateTime, SubsecRound, Utc};
use chrono_tz::Tz;

/// Civil time zone every stored timestamp is normalized to
pub const CANONICAL_TZ: Tz = chrono_tz::America::Chicago;

/// Display format for event timestamps in responses and exports
pub const DISPLAY_FORMAT: &str = "%m-%d-%Y %H:%M:%S";

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which end of a search range a bound belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    Start,
    End,
}

/// Parse a caller-supplied event instant
///
/// Accepts RFC 3339 with any offset. Offset-less values are taken as UTC.
pub fn parse_event_instant(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(with_offset.with_timezone(&Utc));
    }

    parse_naive(trimmed).map(|naive| naive.and_utc())
}

/// Convert an instant to naive canonical civil time at second precision
pub fn to_canonical(instant: DateTime<Utc>) -> NaiveDateTime {
    instant
        .with_timezone(&CANONICAL_TZ)
        .naive_local()
        .trunc_subsecs(0)
}

/// Parse and normalize an ingestion timestamp in one step
pub fn normalize_event_timestamp(raw: &str) -> Option<NaiveDateTime> {
    parse_event_instant(raw).map(to_canonical)
}

pub fn canonical_now() -> NaiveDateTime {
    to_canonical(Utc::now())
}

pub fn format_display(timestamp: &NaiveDateTime) -> String {
    timestamp.format(DISPLAY_FORMAT).to_string()
}

/// Parse a search range bound
///
/// Values with an offset are converted to canonical time; naive values are
/// already canonical. A bare date expands to the first or last second of the
/// day depending on `kind`.
pub fn parse_search_bound(raw: &str, kind: BoundKind) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(to_canonical(with_offset.with_timezone(&Utc)));
    }

    if let Some(naive) = parse_naive(trimmed) {
        return Some(naive.trunc_subsecs(0));
    }

    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()?;
    match kind {
        BoundKind::Start => date.and_hms_opt(0, 0, 0),
        BoundKind::End => date.and_hms_opt(23, 59, 59),
    }
}

fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}
