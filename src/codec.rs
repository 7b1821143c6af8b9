//! Line codec for collection files.
//!
//! Every entry is stored as a single line of the form
//! `KIND|2019-06-01T12:30:00.000Z|message`. The timestamp is always UTC with
//! millisecond precision.
use crate::error::ParseError;
use crate::types::{Entry, EntryKind};
use chrono::{DateTime, SecondsFormat, Utc};

pub const DELIMITER: char = '|';

const FIELD_COUNT: usize = 3;

/// Source of the current instant, so timestamps can be pinned in tests.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Formats a timestamp the way it is written to disk.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Encodes an entry stamped with the clock's current instant, including the
/// trailing newline.
pub fn encode(kind: EntryKind, message: &str, clock: &impl Clock) -> String {
    let timestamp = format_timestamp(&clock.now());
    format!("{}{d}{}{d}{}\n", kind.tag(), timestamp, message, d = DELIMITER)
}

/// Decodes a whole collection file into its entries, in file order.
///
/// Blank lines are skipped. Any other line must carry all three fields.
pub fn decode(blob: &str) -> Result<Vec<Entry>, ParseError> {
    blob.split('\n')
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| decode_line(index + 1, line.trim_end_matches('\r')))
        .collect()
}

fn decode_line(line_number: usize, line: &str) -> Result<Entry, ParseError> {
    let fields: Vec<&str> = line.splitn(FIELD_COUNT, DELIMITER).collect();
    if fields.len() < FIELD_COUNT {
        return Err(ParseError::MissingField {
            line: line_number,
            found: fields.len(),
        });
    }

    let kind = fields[0]
        .parse::<EntryKind>()
        .map_err(|kind| ParseError::UnknownKind {
            line: line_number,
            kind,
        })?;

    let timestamp = DateTime::parse_from_rfc3339(fields[1].trim())
        .map_err(|_| ParseError::InvalidTimestamp {
            line: line_number,
            value: fields[1].to_string(),
        })?
        .with_timezone(&Utc);

    Ok(Entry {
        kind,
        timestamp,
        message: fields[2].to_string(),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;

    /// A clock stuck at a single instant.
    pub(crate) struct FixedClock(pub DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    pub(crate) fn fixed_clock() -> FixedClock {
        FixedClock(
            Utc.with_ymd_and_hms(2019, 6, 1, 12, 30, 5).unwrap()
                + chrono::Duration::milliseconds(250),
        )
    }

    #[test]
    fn test_encode_format() {
        let line = encode(EntryKind::Signal, "deployed v2", &fixed_clock());
        assert_eq!(line, "SIGNAL|2019-06-01T12:30:05.250Z|deployed v2\n");
    }

    #[test]
    fn test_round_trip() {
        let clock = fixed_clock();
        for kind in EntryKind::ALL {
            let entries = decode(&encode(kind, "coffee #3", &clock)).unwrap();
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].kind, kind);
            assert_eq!(entries[0].kind.to_string(), kind.label().to_uppercase());
            assert_eq!(entries[0].message, "coffee #3");
            assert_eq!(entries[0].timestamp, clock.0);
        }
    }

    #[test]
    fn test_decode_is_idempotent() {
        let blob = "EVENT|2019-06-01T12:30:05.250Z|standup\nSIGNAL|2019-06-02T08:00:00.000Z|tired\n";
        assert_eq!(decode(blob).unwrap(), decode(blob).unwrap());
    }

    #[test]
    fn test_decode_empty_blob() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode("\n  \n\t\n").unwrap().is_empty());
    }

    #[test]
    fn test_decode_keeps_file_order() {
        let blob = "EVENT|2019-06-02T08:00:00.000Z|second day\r\n\nSIGNAL|2019-06-01T08:00:00.000Z|first day\n";
        let entries = decode(blob).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, EntryKind::Event);
        assert_eq!(entries[0].message, "second day");
        assert_eq!(entries[1].kind, EntryKind::Signal);
        assert_eq!(entries[1].message, "first day");
    }

    #[test]
    fn test_decode_rejects_short_line() {
        let blob = "SIGNAL|2019-06-01T08:00:00.000Z|ok\nSIGNAL|2019-06-01T08:00:00.000Z\n";
        assert_eq!(
            decode(blob),
            Err(ParseError::MissingField { line: 2, found: 2 })
        );
    }

    #[test]
    fn test_decode_rejects_bad_fields() {
        assert!(matches!(
            decode("NOTE|2019-06-01T08:00:00.000Z|x"),
            Err(ParseError::UnknownKind { line: 1, .. })
        ));
        assert!(matches!(
            decode("EVENT|yesterday|x"),
            Err(ParseError::InvalidTimestamp { line: 1, .. })
        ));
    }
}
