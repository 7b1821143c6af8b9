use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Classification of a logged data point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Signal,
    Event,
}

impl EntryKind {
    pub const ALL: [EntryKind; 2] = [EntryKind::Signal, EntryKind::Event];

    /// The label offered in prompts.
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Signal => "Signal",
            EntryKind::Event => "Event",
        }
    }

    /// The uppercase tag written to collection files.
    pub fn tag(self) -> &'static str {
        match self {
            EntryKind::Signal => "SIGNAL",
            EntryKind::Event => "EVENT",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntryKind::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| s.to_string())
    }
}

/// One line of a collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub kind: EntryKind,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

/// The answers gathered by the append flow before they are validated.
#[derive(Clone, Debug, Default)]
pub struct EntryResponse {
    pub collection: String,
    pub kind: String,
    pub message: String,
}
