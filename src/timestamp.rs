//! Source time strings look like `2021-05-01 12:00:00 CEST+0200`.
//!
//! The zone abbreviation is checked for shape and then dropped; the numeric
//! offset alone decides the instant. Parsed values keep their offset so the
//! row time can be printed as the original wall-clock time.

use chrono::{DateTime, FixedOffset};

use crate::error::{ExportError, Result};

/// An instant with the offset it was read with.
///
/// Equality, ordering and hashing of `DateTime` look at the instant only, so
/// the same moment written with two different offsets is one key.
pub type Timestamp = DateTime<FixedOffset>;

/// Format of the date/time part followed by the numeric offset.
const SOURCE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Format of the time column in output rows.
pub const ROW_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATETIME_LEN: usize = "2006-01-02 15:04:05".len();
const OFFSET_LEN: usize = "+0700".len();

/// Parse a `YYYY-MM-DD HH:MM:SS <ZONE><±HHMM>` string.
pub fn parse_timestamp(input: &str) -> Result<Timestamp> {
    let (datetime, zone) = input
        .rsplit_once(' ')
        .ok_or_else(|| ExportError::invalid_timestamp(input, "missing zone"))?;

    if datetime.len() != DATETIME_LEN {
        return Err(ExportError::invalid_timestamp(
            input,
            "expected YYYY-MM-DD HH:MM:SS",
        ));
    }

    let letters = zone.bytes().take_while(u8::is_ascii_uppercase).count();
    if !(3..=5).contains(&letters) {
        return Err(ExportError::invalid_timestamp(
            input,
            "zone abbreviation must be 3 to 5 upper-case letters",
        ));
    }

    let offset = &zone[letters..];
    let well_formed = offset.len() == OFFSET_LEN
        && offset.starts_with(['+', '-'])
        && offset[1..].bytes().all(|b| b.is_ascii_digit());
    if !well_formed {
        return Err(ExportError::invalid_timestamp(
            input,
            "expected ±HHMM offset after zone abbreviation",
        ));
    }

    DateTime::parse_from_str(&format!("{datetime} {offset}"), SOURCE_TIME_FORMAT)
        .map_err(|e| ExportError::invalid_timestamp(input, e.to_string()))
}

/// Wall-clock time in the timestamp's own offset, without the zone.
pub fn format_row_time(t: &Timestamp) -> String {
    t.format(ROW_TIME_FORMAT).to_string()
}
